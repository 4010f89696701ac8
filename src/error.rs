use std::num::ParseIntError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {

    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },

    // the provider's message is passed through untouched
    #[error("{0}")]
    Provider(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error)

}
