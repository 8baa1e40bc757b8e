use cspreports_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PruneError {
    #[error("Limit is not a valid date: '{0}'.")]
    InvalidDateArgument(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, PruneError>;
