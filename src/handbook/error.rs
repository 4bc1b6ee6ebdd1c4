use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandbookError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Category not found: {category} (page {page})")]
    CategoryNotFound { page: String, category: String },

    #[error("Entry not found: {entry} (category {category})")]
    EntryNotFound { category: String, entry: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, HandbookError>;
