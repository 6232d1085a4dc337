//! Token persistence for the CLI: one file holding the bearer token.

#[cfg(test)]
#[path = "token_file_test.rs"]
mod token_file_test;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use console_core::TokenStore;
use tracing::warn;

/// `~/.chaos-console/token`, or a relative `.chaos-console/token` without `HOME`.
pub fn default_token_path() -> PathBuf {
    let base = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
    base.join(".chaos-console").join("token")
}

#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                (!token.is_empty()).then(|| token.to_owned())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "token file unreadable");
                None
            }
        }
    }

    fn save(&self, token: &str) {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if let Err(e) = std::fs::create_dir_all(dir) {
                warn!(path = %dir.display(), error = %e, "token directory not created");
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, token) {
            warn!(path = %self.path.display(), error = %e, "token not saved");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "token file not removed"),
        }
    }
}
