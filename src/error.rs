use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The tracer ran but its diagnostics held no `'<path>'...` marker
    #[error("no DAG file path found in tracer diagnostics:\n{diagnostics}")]
    MissingDagPath { diagnostics: String },

    #[error("`{program}` exited with {status}")]
    Render { program: String, status: ExitStatus },

    #[error("DAG path {0:?} has no file name")]
    NoFileName(PathBuf),

    #[error("expected output file {0:?} does not exist")]
    MissingOutput(PathBuf),

    #[error("{context} {path:?}: {source}")]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn io(context: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            context,
            path: path.into(),
            source,
        }
    }
}
