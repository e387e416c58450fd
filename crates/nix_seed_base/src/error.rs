use std::error::Error as StdError;
use std::fmt;

use tracing_error::{SpanTrace, SpanTraceStatus};

/* 📖 # Why a custom error type and not use anyhow/eyre/thiserror etc?

- Better control over error handling
- No dependencies to compile and integrate beyond tracing-error
- The Debug output can be shaped into a readable tree for the terminal
 */

/// Error variants that can occur in nix-seed operations.
/// Each variant represents a specific error category with its associated context.
#[derive(Debug)]
pub enum ErrorKind {
    /// Reading from or writing to a platform stream failed
    Io { source: std::io::Error },

    /// A message template could not be parsed
    Template {
        template: String,
        offset: usize,
        reason: String,
    },

    /// Catch-all for other errors with a message
    Message { message: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Io { source } => write!(f, "I/O error: {}", source),
            ErrorKind::Template {
                template,
                offset,
                reason,
            } => write!(
                f,
                "Invalid template '{}' at offset {}: {}",
                template, offset, reason
            ),
            ErrorKind::Message { message } => write!(f, "{}", message),
        }
    }
}

/* 📖 # Why separate ErrorKind and SeedError?

ErrorKind carries the structural information (which stream failed, where a template broke).
SeedError wraps it with the runtime bits that every error needs regardless of kind:
context strings attached during propagation, an optional cause and the span trace
captured at the point of creation.
*/

/// Error type wrapping ErrorKind with context, cause and span trace.
pub struct SeedError {
    kind: ErrorKind,
    context: Vec<String>,
    cause: Option<Box<SeedError>>,
    span_trace: SpanTrace,
}

impl SeedError {
    /// Creates a new error from an ErrorKind, capturing the current span trace.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            cause: None,
            span_trace: SpanTrace::capture(),
        }
    }

    /// Creates a message error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Creates an I/O error.
    pub fn io(source: std::io::Error) -> Self {
        Self::new(ErrorKind::Io { source })
    }

    /// Creates a template parsing error pointing at a byte offset in the template.
    pub fn template(template: impl Into<String>, offset: usize, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::Template {
            template: template.into(),
            offset,
            reason: reason.into(),
        })
    }

    /// Attaches context to an error.
    /// Context is displayed before the error message.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    /// Records the error that led to this one.
    pub fn caused_by(mut self, cause: SeedError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Returns a reference to the underlying ErrorKind.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the context strings in the order they were attached.
    pub fn get_context(&self) -> &[String] {
        &self.context
    }

    /// Returns the error recorded via [`SeedError::caused_by`], if any.
    pub fn cause(&self) -> Option<&SeedError> {
        self.cause.as_deref()
    }

    /// Returns the span trace captured when the error was created.
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// Returns the innermost error in the chain.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        writeln!(f, "{}", self.kind)?;
        let branches = self.context.len() + usize::from(self.cause().is_some());
        for (i, ctx) in self.context.iter().enumerate() {
            let branch = if i + 1 == branches { "└─" } else { "├─" };
            writeln!(f, "{}{} {}", indent, branch, ctx)?;
        }
        if let Some(cause) = self.cause() {
            write!(f, "{}└─ cause: ", indent)?;
            cause.fmt_tree(f, &format!("{}   ", indent))?;
        }
        Ok(())
    }
}

impl From<ErrorKind> for SeedError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<std::io::Error> for Box<SeedError> {
    fn from(source: std::io::Error) -> Self {
        Box::new(SeedError::io(source))
    }
}

impl StdError for SeedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            ErrorKind::Io { source } => Some(source),
            ErrorKind::Template { .. } | ErrorKind::Message { .. } => self
                .cause()
                .map(|cause| cause as &(dyn StdError + 'static)),
        }
    }
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ctx in &self.context {
            write!(f, "{}: ", ctx)?;
        }
        write!(f, "{}", self.kind)
    }
}

/* 📖 # Why a hand-written Debug impl?

`main` prints errors with `{:?}` and a derived Debug of nested boxes is unreadable.
The tree layout shows the message first, then each context line, then the cause chain,
followed by the span trace if a subscriber with an ErrorLayer recorded one.
*/
impl fmt::Debug for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, "")?;
        if self.span_trace.status() == SpanTraceStatus::CAPTURED {
            writeln!(f, "Trace: {}", self.span_trace)?;
        }
        Ok(())
    }
}

/// Standard result type for nix-seed operations.
///
/// The error is boxed to keep the `Ok` path small.
pub type SeedResult<T> = std::result::Result<T, Box<SeedError>>;

/// Extension trait for attaching context to Results.
pub trait ResultExt<T> {
    /// Attaches context to an error, consuming and re-wrapping it.
    fn context(self, context: impl Into<String>) -> SeedResult<T>;

    /// Attaches context using lazy evaluation.
    /// Context is only evaluated if the result is an error.
    fn with_context<F>(self, f: F) -> SeedResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for SeedResult<T> {
    fn context(self, context: impl Into<String>) -> SeedResult<T> {
        self.map_err(|err| Box::new(err.context(context)))
    }

    fn with_context<F>(self, f: F) -> SeedResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(err.with_context(f)))
    }
}

impl<T> ResultExt<T> for std::io::Result<T> {
    fn context(self, context: impl Into<String>) -> SeedResult<T> {
        self.map_err(|err| Box::new(SeedError::io(err).context(context)))
    }

    fn with_context<F>(self, f: F) -> SeedResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(SeedError::io(err).with_context(f)))
    }
}

/// Creates a boxed message error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        ::std::boxed::Box::new($crate::SeedError::message(::std::format!($($arg)*)))
    };
}

/// Returns early with a boxed message error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return ::std::result::Result::Err($crate::err!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let error = SeedError::io(io_err);

        match error.kind() {
            ErrorKind::Io { source } => {
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_display_with_multiple_contexts() {
        let error = SeedError::message("root error")
            .context("first")
            .context("second");
        assert_eq!(error.to_string(), "first: second: root error");
    }

    #[test]
    fn test_error_display_template() {
        let error = SeedError::template("Hello %x%", 6, "invalid placeholder index 'x'");
        assert_eq!(
            error.to_string(),
            "Invalid template 'Hello %x%' at offset 6: invalid placeholder index 'x'"
        );
    }

    #[test]
    fn test_io_result_context() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        let err = result.context("Failed to write").unwrap_err();
        assert_eq!(err.to_string(), "Failed to write: I/O error: pipe closed");
        assert_eq!(err.root_cause().to_string(), "pipe closed");
    }

    #[test]
    fn test_question_mark_converts_io_error() {
        fn fails() -> SeedResult<()> {
            Err::<(), _>(io::Error::other("boom"))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Io { .. }));
    }

    #[test]
    fn test_err_macro_formats_message() {
        let err: Box<SeedError> = crate::err!("expected {} arguments", 2);
        assert_eq!(err.to_string(), "expected 2 arguments");
    }

    #[test]
    fn test_bail_macro_returns_early() {
        fn check(value: usize) -> SeedResult<usize> {
            if value > 1 {
                crate::bail!("value {} too large", value);
            }
            Ok(value)
        }
        assert_eq!(check(1).unwrap(), 1);
        assert_eq!(check(3).unwrap_err().to_string(), "value 3 too large");
    }

    #[test]
    fn test_source_follows_cause() {
        let inner = SeedError::message("inner");
        let outer = SeedError::message("outer").caused_by(inner);
        assert_eq!(outer.source().unwrap().to_string(), "inner");
        assert_eq!(outer.root_cause().to_string(), "inner");
        assert!(outer.cause().is_some());
    }
}
