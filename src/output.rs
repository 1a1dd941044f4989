//! Output location handling.
//!
//! Resolves the output directory, builds the `{prefix}-XXX-XXXX.txt` file name
//! and creates the file without ever overwriting an existing one.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::prefix::Prefix;

/// Directory name used under the user's home directory
pub const DEFAULT_DIR_NAME: &str = ".wordlist-generator";

/// Fallback directory when no home directory can be determined
pub const FALLBACK_DIR: &str = "./wordlists";

/// Errors that can occur while preparing the output file
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// The output directory could not be created
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The target file already exists and is left untouched
    #[error("file '{name}' already exists")]
    AlreadyExists {
        /// File name of the existing file
        name: String,
    },

    /// The output file could not be created
    #[error("failed to create file {}: {source}", path.display())]
    CreateFile {
        /// Path of the file that was being created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Default output directory: `~/.wordlist-generator`, or `./wordlists` when the
/// home directory is unknown.
pub fn default_output_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DIR))
}

/// File name for a wordlist generated from `prefix`
pub fn output_file_name(prefix: &Prefix) -> String {
    format!("{}-XXX-XXXX.txt", prefix)
}

/// Create `dir` (and its parents) and a fresh output file inside it.
///
/// Uses create-new semantics: if the file already exists this fails with
/// [`OutputError::AlreadyExists`] and the existing content is not modified.
pub fn create_output_file(dir: &Path, prefix: &Prefix) -> Result<(File, PathBuf), OutputError> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let name = output_file_name(prefix);
    let path = dir.join(&name);

    match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => Ok((file, path)),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            Err(OutputError::AlreadyExists { name })
        }
        Err(source) => Err(OutputError::CreateFile { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_output_file_name() {
        let prefix = Prefix::parse("053").unwrap();
        assert_eq!(output_file_name(&prefix), "053-XXX-XXXX.txt");
    }

    #[test]
    fn test_default_output_dir_name() {
        let dir = default_output_dir();
        assert!(
            dir.ends_with(DEFAULT_DIR_NAME) || dir == PathBuf::from(FALLBACK_DIR),
            "unexpected default dir: {}",
            dir.display()
        );
    }

    #[test]
    fn test_creates_nested_directory() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("a").join("b");
        let prefix = Prefix::parse("x").unwrap();

        let (_file, path) = create_output_file(&dir, &prefix).unwrap();
        assert!(dir.is_dir());
        assert_eq!(path, dir.join("x-XXX-XXXX.txt"));
        assert!(path.exists());
    }

    #[test]
    fn test_existing_file_is_not_overwritten() {
        let tmp = tempdir().unwrap();
        let prefix = Prefix::parse("dup").unwrap();
        let path = tmp.path().join(output_file_name(&prefix));
        {
            let mut f = File::create(&path).unwrap();
            f.write_all(b"keep me\n").unwrap();
        }

        let err = create_output_file(tmp.path(), &prefix).unwrap_err();
        assert!(matches!(err, OutputError::AlreadyExists { .. }));
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read(&path).unwrap(), b"keep me\n");
    }
}
