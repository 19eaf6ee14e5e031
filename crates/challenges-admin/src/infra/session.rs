use log::debug;
use secrecy::{ExposeSecret, SecretString};
use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    sync::RwLock,
};
use thiserror::Error;

/// File name the bearer token is persisted under
pub const TOKEN_KEY: &str = "challenges_admin_token";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("failed to persist session token: {0}")]
    Io(#[from] std::io::Error),
    #[error("session lock poisoned")]
    Poisoned,
}

/// Holds the admin bearer token. A missing token is not an error here,
/// the backend decides what an unauthenticated request may do.
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<SecretString>;
    fn set_token(&self, token: SecretString) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

/// Session persisted in `<data_folder>/challenges_admin_token`
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(data_folder: impl AsRef<Path>) -> Self {
        Self {
            path: data_folder.as_ref().join(TOKEN_KEY),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<SecretString> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(SecretString::from(token.to_string()))
                }
            }
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    debug!("unable to read session token {:?}: {}", self.path, e);
                }
                None
            }
        }
    }

    fn set_token(&self, token: SecretString) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            options.mode(0o600);
            // mode only applies on create, tighten a file left by an older login
            if self.path.exists() {
                fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
            }
        }
        let mut file = options.open(&self.path)?;
        file.write_all(token.expose_secret().as_bytes())?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process session, nothing is written to disk
#[derive(Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<SecretString> {
        self.token
            .read()
            .ok()
            .and_then(|guard| guard.clone().map(SecretString::from))
    }

    fn set_token(&self, token: SecretString) -> Result<(), SessionError> {
        let mut guard = self.token.write().map_err(|_| SessionError::Poisoned)?;
        *guard = Some(token.expose_secret().to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut guard = self.token.write().map_err(|_| SessionError::Poisoned)?;
        *guard = None;
        Ok(())
    }
}
