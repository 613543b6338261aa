#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no vertex partition at level {level} (populated levels: {count})")]
    MissingVertexPartition { level: usize, count: usize },

    #[error("no edge partition at level {level} (populated levels: {count})")]
    MissingEdgePartition { level: usize, count: usize },

    #[error("logical path references a vertex without a grid position: {id}")]
    UnknownVertex { id: String },
}

impl Error {
    /// Whether this error reports a broken partition invariant rather than a bad lookup.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::MissingVertexPartition { .. } | Error::MissingEdgePartition { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
