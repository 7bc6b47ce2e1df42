use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, error};

use crate::error::{Error, Result};

/// Graphviz-style layout tool, driven as `<program> -T <format> -O <file>`
pub struct Renderer {
    program: PathBuf,
    format: String,
}

impl Renderer {
    pub fn new(program: impl Into<PathBuf>, format: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            format: format.into(),
        }
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// Where `-O` puts the output for `input`: the input path plus `.<format>`
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let mut out = OsString::from(input.as_os_str());
        out.push(".");
        out.push(&self.format);
        PathBuf::from(out)
    }

    /// Renders `input` and blocks until the tool finishes.
    pub fn render(&self, input: &Path) -> Result<PathBuf> {
        debug!("running {:?} -T {} -O {:?}", self.program, self.format, input);
        let output = Command::new(&self.program)
            .arg("-T")
            .arg(&self.format)
            .arg("-O")
            .arg(input)
            .output()
            .map_err(|source| Error::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            error!(
                "Graphviz error: {}",
                String::from_utf8_lossy(&output.stderr)
            );
            return Err(Error::Render {
                program: self.program.display().to_string(),
                status: output.status,
            });
        }
        Ok(self.output_path(input))
    }
}
