//! Error enum

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// malformed record in an annotated file (missing label, empty document).
    Format(String),
    /// alignment referenced a sentence that does not exist.
    IndexOutOfBounds { index: usize, len: usize },
    /// opaque failure of the external aligner (bad exit status, bad indices).
    Aligner(String),
    Serde(serde_json::Error),
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
