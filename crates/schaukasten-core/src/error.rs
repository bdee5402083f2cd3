pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Dataset is not a JSON array of incident records")]
    DatasetShape,

    #[error("Dataset JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown language tag: {tag}")]
    UnknownLang { tag: String },
}
