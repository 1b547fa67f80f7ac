use crate::auth::{Session, SessionStore};
use crate::errors::AppResult;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Session kept as a JSON file (one user record at a time).
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> AppResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Session>(&content) {
            Ok(s) => Ok(Some(s)),
            Err(e) => {
                // an unreadable session is the same as being logged out
                warn!(path = %self.path.display(), error = %e, "discarding corrupt session file");
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> AppResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(session)?)?;
        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-process store, mostly for tests.
#[derive(Default)]
pub struct MemorySessionStore {
    current: RefCell<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> AppResult<Option<Session>> {
        Ok(self.current.borrow().clone())
    }

    fn save(&self, session: &Session) -> AppResult<()> {
        *self.current.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        self.current.borrow_mut().take();
        Ok(())
    }
}
