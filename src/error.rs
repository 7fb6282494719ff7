use std::fmt;

/// Errors that can occur in the controller-middleware crate.
#[derive(Debug)]
pub enum Error {
    /// A controller's attribute table was declared incorrectly
    Declaration(DeclarationError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Declaration(e) => write!(f, "Invalid middleware declaration: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Declaration(e) => Some(e),
        }
    }
}

impl From<DeclarationError> for Error {
    fn from(e: DeclarationError) -> Self {
        Error::Declaration(e)
    }
}

/// A rejected controller declaration with details about what failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationError {
    /// The kind of mistake in the declaration
    pub kind: DeclarationErrorKind,
    /// Human-readable message explaining the mistake
    pub message: String,
}

impl DeclarationError {
    /// Creates a new declaration error.
    pub fn new(kind: DeclarationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for DeclarationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for DeclarationError {}

/// The kind of declaration mistake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationErrorKind {
    /// A middleware attribute has an empty name
    EmptyName,
    /// The same method was declared more than once
    DuplicateMethod {
        /// The repeated method name
        method: String,
    },
}

impl fmt::Display for DeclarationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationErrorKind::EmptyName => write!(f, "EmptyName"),
            DeclarationErrorKind::DuplicateMethod { method } => {
                write!(f, "DuplicateMethod '{}'", method)
            }
        }
    }
}
