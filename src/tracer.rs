use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use log::{debug, warn};

use crate::error::{Error, Result};

/// The trace-producing executable
pub struct Tracer {
    program: PathBuf,
}

pub struct TraceOutput {
    pub status: ExitStatus,
    pub diagnostics: String,
}

impl Tracer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Runs the tracer with `iterations` and `opt_level` passed through as-is.
    ///
    /// Stdout goes to the terminal; stderr is captured. The exit status is
    /// only reported, never treated as failure.
    pub fn run(&self, iterations: &str, opt_level: &str) -> Result<TraceOutput> {
        debug!("running {:?} {} {}", self.program, iterations, opt_level);
        let output = Command::new(&self.program)
            .args([iterations, opt_level])
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| Error::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            warn!("{:?} exited with {}", self.program, output.status);
        }
        Ok(TraceOutput {
            status: output.status,
            diagnostics: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
