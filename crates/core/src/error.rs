use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("k-gram width must be at least 1")]
    InvalidKGramWidth,
}

pub type Result<T> = std::result::Result<T, Error>;
