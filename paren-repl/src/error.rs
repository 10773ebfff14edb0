use rustyline::error::ReadlineError;
use std::io;

/// Utility enum to package errors that can occur while tracing expressions.
#[derive(Debug)]
pub enum Error {
    /// The expression could not be parsed or simplified.
    Trace(paren_compute::Error),

    /// Input could not be read.
    Io(io::Error),

    /// The trace could not be serialized.
    Json(serde_json::Error),

    /// The line editor failed.
    Readline(ReadlineError),
}

impl Error {
    /// Report this error to stderr.
    ///
    /// Trace errors are reported with `ariadne`, pointing into the text that the error occurred in.
    pub fn report_to_stderr(&self) {
        match self {
            Self::Trace(err) => {
                if let Err(io_err) = err.report_to_stderr() {
                    eprintln!("error: {}", io_err);
                }
            },
            Self::Io(err) => eprintln!("error: {}", err),
            Self::Json(err) => eprintln!("error: could not serialize trace: {}", err),
            Self::Readline(err) => eprintln!("error: {}", err),
        }
    }
}

impl From<paren_compute::Error> for Error {
    fn from(err: paren_compute::Error) -> Self {
        Self::Trace(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<ReadlineError> for Error {
    fn from(err: ReadlineError) -> Self {
        Self::Readline(err)
    }
}
