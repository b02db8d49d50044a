use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("causal chain loops back to {class_name} after {depth} link(s)")]
    CyclicChain { class_name: String, depth: usize },

    #[error("causal chain is longer than the limit of {limit} links")]
    ChainTooDeep { limit: usize },

    #[error("failed to write to console: {0}")]
    Console(#[from] std::io::Error),
}
