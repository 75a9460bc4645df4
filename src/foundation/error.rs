use std::path::PathBuf;

/// Convenience result type used across the crate.
pub type KeyframeResult<T> = Result<T, KeyframeError>;

/// Top-level error taxonomy used by every pipeline stage.
#[derive(thiserror::Error, Debug)]
pub enum KeyframeError {
    /// Invalid invocation or option values.
    #[error("usage error: {0}")]
    Usage(String),

    /// A script line that could not be turned into an instruction.
    #[error("parse error: line {line_no}: {message} (`{line}`)")]
    Parse {
        /// 1-based line number inside the script.
        line_no: usize,
        /// The offending line, trimmed.
        line: String,
        /// What was wrong with it.
        message: String,
    },

    /// The script has no positive wait time, so stages cannot be normalized.
    #[error("empty timeline: total wait duration is 0ms")]
    EmptyTimeline,

    /// The generated stylesheet could not be grafted into the document.
    #[error("injection error: {0}")]
    Injection(String),

    /// Reading an input or writing the output failed.
    #[error("file error: {}: {source}", path.display())]
    File {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KeyframeError {
    /// Build a [`KeyframeError::Usage`] value.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Build a [`KeyframeError::Parse`] value.
    pub fn parse(line_no: usize, line: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            line_no,
            line: line.into(),
            message: message.into(),
        }
    }

    /// Build a [`KeyframeError::Injection`] value.
    pub fn injection(msg: impl Into<String>) -> Self {
        Self::Injection(msg.into())
    }

    /// Build a [`KeyframeError::File`] value.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
