use serde::{Deserialize, Deserializer, Serialize};
use weekly_meals_shared::Preference;

/// Parameters submitted by the meal plan form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlanRequest {
    #[serde(deserialize_with = "nights_from_number_or_text")]
    pub nights: u32,
    #[serde(default)]
    pub style: Preference,
    #[serde(default)]
    pub health: Preference,
    #[serde(default)]
    pub adults: Option<u32>,
    #[serde(default)]
    pub kids: Option<u32>,
}

impl MealPlanRequest {
    pub fn new(nights: u32) -> Self {
        Self {
            nights,
            ..Default::default()
        }
    }

    pub fn style(mut self, style: impl Into<Preference>) -> Self {
        self.style = style.into();
        self
    }

    pub fn health(mut self, health: impl Into<Preference>) -> Self {
        self.health = health.into();
        self
    }

    pub fn household(mut self, adults: u32, kids: u32) -> Self {
        self.adults = Some(adults);
        self.kids = Some(kids);
        self
    }

    /// People to cook for: one adult and no kids unless told otherwise,
    /// never fewer than one.
    pub fn persons(&self) -> u32 {
        let total = self
            .adults
            .unwrap_or(1)
            .saturating_add(self.kids.unwrap_or(0));
        total.max(1)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NightsInput {
    Number(u32),
    Text(String),
}

fn nights_from_number_or_text<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match NightsInput::deserialize(deserializer)? {
        NightsInput::Number(nights) => Ok(nights),
        NightsInput::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid nights value {text:?}"))),
    }
}
