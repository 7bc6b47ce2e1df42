use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use log::{debug, warn};

#[cfg(target_os = "macos")]
pub const DEFAULT_VIEWER: &str = "open";
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_VIEWER: &str = "xdg-open";

/// System "open this file" command
pub struct Viewer {
    program: PathBuf,
}

impl Viewer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Launches the viewer on `path` without waiting for it.
    ///
    /// Returns the child on success; a launch failure is only logged.
    pub fn open(&self, path: &Path) -> Option<Child> {
        debug!("running {:?} {:?}", self.program, path);
        match Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::null())
            .spawn()
        {
            Ok(child) => Some(child),
            Err(e) => {
                warn!("could not launch viewer {:?}: {}", self.program, e);
                None
            }
        }
    }
}
