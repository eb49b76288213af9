use std::sync::{Arc, Mutex};

use crate::repository::{NavigationError, Navigator};

/// Navigator that records the current path and logs every redirect.
#[derive(Debug, Clone, Default)]
pub struct LogNavigator {
    current: Arc<Mutex<Option<String>>>,
}

impl LogNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the most recent successful navigation.
    pub fn current_path(&self) -> Option<String> {
        self.current.lock().ok().and_then(|path| path.clone())
    }
}

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) -> Result<(), NavigationError> {
        let mut current = self.current.lock().map_err(|_| NavigationError::Failed {
            path: path.to_string(),
            reason: "navigator state poisoned".to_string(),
        })?;
        log::info!("Navigating to {path}");
        *current = Some(path.to_string());
        Ok(())
    }
}
