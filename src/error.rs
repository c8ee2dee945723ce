use plotters::drawing::DrawingAreaErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum ShopstatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Routes any plotters drawing-area error into the `Chart` variant so chart
/// code can use `?` regardless of the backend error type.
impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ShopstatError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        ShopstatError::Chart(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShopstatError>;
