//! Picks the DAG file location out of the tracer's diagnostic stream.
//!
//! The tracer reports the file it wrote with a line shaped like
//! `Writing '/tmp/dag.ForLoopFnc-1a2b3c.dot'...  done.`; everything here is
//! plain slicing over that one format.

const PATH_START: &str = " '";
const PATH_END: &str = "'...";
const DAG_MARKER: &str = "dag.";

/// Returns the text between the first `" '"` and the following `"'..."`.
///
/// Yields an empty string when either delimiter is missing.
pub fn extract_dag_path(diagnostics: &str) -> &str {
    let Some(start) = diagnostics.find(PATH_START).map(|i| i + PATH_START.len()) else {
        return "";
    };
    match diagnostics[start..].find(PATH_END) {
        Some(len) => &diagnostics[start..start + len],
        None => "",
    }
}

/// Splits `path` at the first `dag.` into a directory prefix and file name.
///
/// Without a `dag.` marker the prefix is empty and the whole path is the name.
pub fn split_dag_path(path: &str) -> (&str, &str) {
    match path.find(DAG_MARKER) {
        Some(i) => path.split_at(i),
        None => ("", path),
    }
}

/// Strips the uniqueness identifier: everything from the first hyphen on.
pub fn display_name(file_name: &str) -> &str {
    match file_name.find('-') {
        Some(i) => &file_name[..i],
        None => file_name,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DagLocation {
    pub path: String,
    pub dir: String,
    pub file_name: String,
}

impl DagLocation {
    /// Returns `None` when no path could be extracted.
    pub fn from_diagnostics(diagnostics: &str) -> Option<Self> {
        let path = extract_dag_path(diagnostics);
        if path.is_empty() {
            return None;
        }
        let (dir, file_name) = split_dag_path(path);
        Some(DagLocation {
            path: path.to_string(),
            dir: dir.to_string(),
            file_name: file_name.to_string(),
        })
    }
}
