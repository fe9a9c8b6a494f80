#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A filter criteria named a facet dimension the record type does not
    /// expose. This is a caller programming error, surfaced immediately
    /// rather than silently matching nothing.
    #[error("unknown filter dimension: {0}")]
    UnknownDimension(String),
    #[error("invalid identifier: {0}")]
    Id(#[from] mediboard_types::IdError),
}

pub type DashboardResult<T> = std::result::Result<T, DashboardError>;
