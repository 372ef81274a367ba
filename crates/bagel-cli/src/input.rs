//! Input path checks and the derived output path.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use bagel_error::{Error, Result};
use tracing::debug;

/// Suffix appended to the input path to name the DOT file.
pub const DOT_SUFFIX: &str = ".dot";

/// Check that `path` names an existing regular file.
pub fn resolve_input(path: &Path) -> Result<PathBuf> {
    let is_file = fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
    if !is_file {
        return Err(
            Error::file_not_found(path.display().to_string()).with_operation("cli::resolve_input"),
        );
    }
    debug!(path = %path.display(), "input resolved");
    Ok(path.to_path_buf())
}

/// `<input>.dot`, the suffix appended to the whole path (`net.yaml` -> `net.yaml.dot`).
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(DOT_SUFFIX);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use bagel_error::ErrorKind;

    use super::*;

    #[test]
    fn suffix_is_appended_not_substituted() {
        assert_eq!(
            default_output_path(Path::new("graphs/net.yaml")),
            PathBuf::from("graphs/net.yaml.dot")
        );
        assert_eq!(
            default_output_path(Path::new("net")),
            PathBuf::from("net.dot")
        );
    }

    #[test]
    fn directories_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = resolve_input(dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert!(err.message().starts_with("argument is not a correct file path"));
    }

    #[test]
    fn missing_paths_are_rejected() {
        let err = resolve_input(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.context_value("path"), Some("/definitely/not/here.yaml"));
    }
}
