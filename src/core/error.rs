use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Decode,
    Io,
    Type,
    NullData,
}

/// The coercion target an [`ErrorKind::Type`] error was asking for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Target {
    Map,
    Array,
    Bool,
    String,
    Bytes,
    Float64,
    Int,
    Int64,
    StringArray,
    Int64Array,
    IntArray,
}

impl Target {
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Map => "map",
            Target::Array => "array",
            Target::Bool => "bool",
            Target::String => "string",
            Target::Bytes => "bytes",
            Target::Float64 => "float64",
            Target::Int => "int",
            Target::Int64 => "int64",
            Target::StringArray => "string array",
            Target::Int64Array => "int64 array",
            Target::IntArray => "int array",
        }
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    target: Option<Target>,
    message: Option<String>,
    path: Option<PathBuf>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            target: None,
            message: None,
            path: None,
            source: None,
        }
    }

    /// Shorthand for the coercion-failure case.
    pub fn type_mismatch(target: Target) -> Self {
        Self::new(ErrorKind::Type).with_target(target)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn target(&self) -> Option<Target> {
        self.target
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Decode => write!(f, "decode")?,
            ErrorKind::Io => write!(f, "io")?,
            ErrorKind::Type => write!(f, "type")?,
            ErrorKind::NullData => write!(f, "null data")?,
        }
        if let Some(target) = self.target {
            write!(f, ": cannot coerce to {}", target.as_str())?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind, Target};
    use std::error::Error as StdError;

    #[test]
    fn type_mismatch_names_the_target() {
        let err = Error::type_mismatch(Target::Float64);
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(err.target(), Some(Target::Float64));
        assert!(err.to_string().contains("cannot coerce to float64"));
    }

    #[test]
    fn io_error_carries_path_and_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::new(ErrorKind::Io)
            .with_path("/no/such/file.json")
            .with_source(inner);
        let text = err.to_string();
        assert!(text.contains("/no/such/file.json"));
        assert!(err.source().is_some());
    }

    #[test]
    fn display_is_stable_for_null_data() {
        let err = Error::new(ErrorKind::NullData).with_message("data is null");
        assert_eq!(err.to_string(), "null data: data is null");
    }
}
