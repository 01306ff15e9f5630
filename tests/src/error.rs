//! Error types for the scenario framework.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestError {
    #[error("failed to read fixture {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scenario '{scenario}' has no input")]
    NoInput { scenario: String },

    #[error(transparent)]
    Format(#[from] conllulex_format::FormatError),

    #[error(transparent)]
    Session(#[from] conllulex_session::SessionError),

    #[error("scenario '{scenario}': {message}")]
    ExpectationFailed { scenario: String, message: String },
}

impl TestError {
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn no_input(scenario: impl Into<String>) -> Self {
        Self::NoInput {
            scenario: scenario.into(),
        }
    }

    pub fn expectation_failed(scenario: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExpectationFailed {
            scenario: scenario.into(),
            message: message.into(),
        }
    }
}

pub type TestResult<T> = Result<T, TestError>;
