/// Provider spellings mapped to product catalog keys.
///
/// Left-hand sides are already normalized (lower-case letters and single
/// spaces), so lookups happen after cleaning.
const SYNONYMS: &[(&str, &str)] = &[
    ("spaghetti", "pasta"),
    ("penne", "pasta"),
    ("linguine", "pasta"),
    ("fettuccine", "pasta"),
    ("pasta sauce", "sauce"),
    ("marinara sauce", "sauce"),
    ("tomato sauce", "sauce"),
    ("parmesan", "cheese"),
    ("parmesan cheese", "cheese"),
    ("mozzarella cheese", "cheese"),
    ("cheddar cheese", "cheese"),
    ("cheddar", "cheese"),
    ("mozzarella", "cheese"),
    ("feta", "cheese"),
    ("shredded cheese", "cheese"),
    ("grated parmesan", "cheese"),
    ("romaine lettuce", "lettuce"),
    ("iceberg lettuce", "lettuce"),
    ("tomatoes", "tomato"),
    ("cherry tomatoes", "tomato"),
    ("salad dressing", "dressing"),
    ("vinaigrette", "dressing"),
    ("tortilla", "tortillas"),
    ("flour tortillas", "tortillas"),
    ("corn tortillas", "tortillas"),
    ("ground beef", "beef"),
    ("beef mince", "beef"),
    ("tomato salsa", "salsa"),
    ("white rice", "rice"),
    ("long grain rice", "rice"),
    ("broccoli florets", "broccoli"),
    ("soya sauce", "soy sauce"),
    ("tamari", "soy sauce"),
];

/// Maps a free-form ingredient name to its catalog key.
///
/// Letters are lower-cased, every other character is dropped except
/// whitespace, which collapses to a single space. The cleaned name is then
/// passed through the synonym table; unknown names are returned as cleaned.
pub fn normalize_ingredient(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());

    for c in raw.chars() {
        if c.is_alphabetic() {
            cleaned.extend(c.to_lowercase());
        } else if c.is_whitespace() && !cleaned.is_empty() && !cleaned.ends_with(' ') {
            cleaned.push(' ');
        }
    }

    let cleaned = cleaned.trim_end();

    SYNONYMS
        .iter()
        .find(|(alias, _)| *alias == cleaned)
        .map(|(_, key)| (*key).to_owned())
        .unwrap_or_else(|| cleaned.to_owned())
}
