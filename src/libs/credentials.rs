//! Cached bearer token for the attendance service.
//!
//! Login itself happens elsewhere; this store only keeps the token it
//! produced so requests can carry it. A 401 from the service clears the
//! file, which forces the user to sign in again.

use super::data_storage::DataStorage;
use anyhow::Result;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const TOKEN_FILE: &str = ".auth_token";

#[derive(Debug, Clone)]
pub struct Credentials {
    token_file: PathBuf,
}

impl Credentials {
    pub fn new() -> Result<Self> {
        Ok(Self::at(DataStorage::new().get_path(TOKEN_FILE)?))
    }

    pub fn at(token_file: impl AsRef<Path>) -> Self {
        Self {
            token_file: token_file.as_ref().to_path_buf(),
        }
    }

    pub fn token(&self) -> Option<String> {
        fs::read_to_string(&self.token_file)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    pub fn store(&self, token: &str) -> Result<()> {
        let mut file = fs::OpenOptions::new().write(true).create(true).truncate(true).open(&self.token_file)?;
        file.write_all(token.trim().as_bytes())?;
        Ok(())
    }

    /// Removes the cached token; returns `false` when there was none.
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.token_file) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
