#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Not found in stock: {0}")]
    ProductNotFound(String),

    #[error("invalid ingredient: {0:?}")]
    InvalidIngredient(String),
}

pub type Result<T> = std::result::Result<T, Error>;
