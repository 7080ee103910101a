use std::backtrace::Backtrace;
use std::path::PathBuf;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("unknown constraint operator `{0}`")]
    UnknownOperator(char),

    #[error("constraint references undeclared variable `{0}`")]
    UnknownVariable(String),

    #[error("malformed variable line {line}: {reason}")]
    MalformedVariableLine { line: usize, reason: String },

    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SolverError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SolverError> for Error {
    fn from(inner: SolverError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
