//! Source code representation and error management.

use std::{cell::RefCell, fmt};
use thiserror::Error;

/// Represents source code.
pub struct Source<'a> {
    /// Original source code.
    pub content: &'a str,
    /// Accumulated errors.
    pub errors: ErrorReporter,
}

impl<'a> Source<'a> {
    /// Create a new `Source` with the specified `content`.
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            errors: ErrorReporter::new(),
        }
    }

    /// Returns `true` if `Source` has no accumulated errors. Returns `false` otherwise.
    pub fn has_no_errors(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(content: &'a str) -> Self {
        Source::new(content)
    }
}

/// Represents a syntax error (compile time error).
///
/// Token kinds are carried as their display names so that this crate stays independent of the
/// lexer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A mandatory token was missing.
    #[error("expected next token to be: {expected}, got: {got}")]
    UnexpectedToken { expected: String, got: String },
    /// No prefix rule can start an expression with this token kind.
    #[error("no prefix parse function for token kind {0}")]
    NoPrefixParseFn(String),
    /// An integer literal does not fit in an `i64`.
    #[error("could not parse {0:?} as integer")]
    InvalidInteger(String),
    /// Expressions are nested deeper than the parser allows.
    #[error("expression nested too deeply (limit {0})")]
    TooDeeplyNested(usize),
}

/// Manages all the errors.
pub struct ErrorReporter {
    errors: RefCell<Vec<SyntaxError>>,
}

impl ErrorReporter {
    /// Create an empty `ErrorReporter`.
    pub fn new() -> Self {
        Self {
            errors: RefCell::new(Vec::new()),
        }
    }

    /// Adds an error to the `ErrorReporter`.
    /// This method uses the interior mutability pattern. This does not require mutability for
    /// ergonomics.
    pub fn add_error(&self, error: SyntaxError) {
        // This should be the only place where self.errors is borrowed mutably.
        self.errors.borrow_mut().push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.borrow().len()
    }

    /// Renders every accumulated error to its message.
    pub fn messages(&self) -> Vec<String> {
        self.errors.borrow().iter().map(ToString::to_string).collect()
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.errors.borrow();
        for error in errors.iter() {
            writeln!(f, "ERROR: {}", error)?;
        }

        Ok(())
    }
}
