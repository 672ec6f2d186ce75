use std::error::Error;
use std::fmt;
use std::io;
use std::string::FromUtf8Error;

/// Common result type for outliner operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for outliner operations
#[derive(Debug)]
pub enum OutlinerError {
    /// IO error wrapper
    Io(io::Error),
    /// Document parsing error
    Parse(String),
    /// Tree serialization error
    Serialize(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for OutlinerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutlinerError::Io(err) => write!(f, "IO error: {}", err),
            OutlinerError::Parse(msg) => write!(f, "Parse error: {}", msg),
            OutlinerError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            OutlinerError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for OutlinerError {}

impl From<io::Error> for OutlinerError {
    fn from(err: io::Error) -> Self {
        OutlinerError::Io(err)
    }
}

impl From<FromUtf8Error> for OutlinerError {
    fn from(err: FromUtf8Error) -> Self {
        OutlinerError::Serialize(err.to_string())
    }
}

impl From<String> for OutlinerError {
    fn from(msg: String) -> Self {
        OutlinerError::Generic(msg)
    }
}

impl From<&str> for OutlinerError {
    fn from(msg: &str) -> Self {
        OutlinerError::Generic(msg.to_string())
    }
}
