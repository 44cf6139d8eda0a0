use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use directories::BaseDirs;
use tracing::warn;

use super::{SessionBackend, SessionError};

/// Stores each session key as a file inside one directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<config dir>/cauhec`, or `./.cauhec` when no home directory exists.
    #[must_use]
    pub fn default_dir() -> PathBuf {
        BaseDirs::new().map_or_else(
            || PathBuf::from("./.cauhec"),
            |dirs| dirs.config_dir().join("cauhec"),
        )
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Default for FileBackend {
    fn default() -> Self {
        Self::new(Self::default_dir())
    }
}

impl SessionBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Some(contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!(key, error = %err, "unreadable session file");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let write_error = |err: io::Error| SessionError::Write {
            key: key.to_string(),
            reason: err.to_string(),
        };
        fs::create_dir_all(&self.dir).map_err(write_error)?;
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(self.path_for(key)).map_err(write_error)?;
        // `mode` only applies to new files; tighten an older one before writing.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(write_error)?;
        }
        file.write_all(value.as_bytes()).map_err(write_error)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionError::Write {
                key: key.to_string(),
                reason: err.to_string(),
            }),
        }
    }
}
