//! Pipeline trait.
use crate::error::Error;

/// A batch process that runs end-to-end once.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
