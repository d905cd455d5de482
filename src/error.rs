/// [Result] alias for return types of the crate API
pub type Result<T> = std::result::Result<T, Error>;

/// Error enum type
#[derive(Debug)]
pub enum Error {
    /// A quaternion with zero (or non-finite) norm was used where an
    /// orientation is required. Such a quaternion carries no direction
    /// information and cannot be normalized.
    DegenerateQuaternion,
    /// A log record that could not be parsed. The String contains the line
    /// number, the field name and the cause.
    MalformedRecord(String),
    /// A sample inside a series failed analysis. Carries the zero-based
    /// sample index and the underlying error.
    InvalidSample(usize, Box<Error>),
    /// Analysis or statistics were requested over an empty series.
    EmptyLog,
    /// A flight command could not be executed. The String contains the reason.
    CommandFailed(String),
    /// I/O error while reading or writing a log file.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DegenerateQuaternion => {
                write!(f, "quaternion has zero or non-finite norm")
            }
            Error::MalformedRecord(reason) => write!(f, "malformed record: {}", reason),
            Error::InvalidSample(index, source) => write!(f, "sample {}: {}", index, source),
            Error::EmptyLog => write!(f, "log contains no samples"),
            Error::CommandFailed(reason) => write!(f, "flight command failed: {}", reason),
            Error::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidSample(_, source) => Some(source.as_ref()),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}
