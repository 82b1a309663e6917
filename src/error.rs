use std::convert::From;
use std::error;
use std::fmt;
use std::io;
use std::num::ParseIntError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    InvalidArgument,
    UnexpectedEof,
    ConfigParse,
    IOError(io::Error),
}

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error {
            kind,
            message: Some(msg.to_owned()),
        }
    }

    pub fn with_msg(mut self, message: &str) -> Self {
        self.message = Some(message.to_owned());
        self
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        Error::from(ErrorKind::IOError(io_error))
    }
}

impl From<ParseIntError> for Error {
    fn from(parse_error: ParseIntError) -> Error {
        Error::new(
            ErrorKind::InvalidArgument,
            &format!("Could not parse integer: {}", parse_error),
        )
    }
}

impl From<toml::de::Error> for Error {
    fn from(toml_error: toml::de::Error) -> Error {
        Error::new(ErrorKind::ConfigParse, &toml_error.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind.as_str(), msg),
            None => write!(f, "{}", self.kind.as_str()),
        }
    }
}

impl error::Error for Error {}

impl ErrorKind {
    pub fn as_str(&self) -> String {
        match self {
            ErrorKind::InvalidArgument => "invalid argument".to_owned(),
            ErrorKind::UnexpectedEof => "unexpected end of input".to_owned(),
            ErrorKind::ConfigParse => "invalid config file".to_owned(),
            ErrorKind::IOError(err) => err.to_string(),
        }
    }
}
