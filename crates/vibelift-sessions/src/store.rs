use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::types::WorkoutSession;

/// File name of the history blob, kept from the original storage key.
pub const HISTORY_FILE_NAME: &str = "vibelift_history_v1.json";

/// Loads and saves the whole workout history as one JSON document.
///
/// The store is the only writer. Every mutation builds a new list, writes it
/// out in full and hands the replacement back to the caller.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Create a HistoryStore at the default location
    /// (`<data dir>/vibelift/vibelift_history_v1.json`).
    pub fn new() -> Result<Self, StoreError> {
        let data_dir = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Self::with_path(data_dir.join("vibelift").join(HISTORY_FILE_NAME)))
    }

    /// Create a HistoryStore backed by a specific file (useful for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load history, newest first.
    ///
    /// A missing file is an empty history. So is a file that cannot be read
    /// or parsed: the problem is logged and never propagated.
    pub fn load(&self) -> Vec<WorkoutSession> {
        match self.read() {
            Ok(sessions) => sessions,
            Err(e) => {
                tracing::warn!("{}", e);
                Vec::new()
            }
        }
    }

    fn read(&self) -> Result<Vec<WorkoutSession>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.display().to_string(),
            source,
        })?;
        let mut sessions: Vec<WorkoutSession> =
            serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                path: self.path.display().to_string(),
                source,
            })?;

        // Stable, so equal dates keep their stored order.
        sessions.sort_by(|a, b| b.date.cmp(&a.date));
        tracing::debug!(count = sessions.len(), "Loaded history");

        Ok(sessions)
    }

    /// History to build a mutation on. An unparseable file is moved aside
    /// before it gets replaced; an unreadable one aborts the mutation.
    fn load_for_write(&self) -> Result<Vec<WorkoutSession>, StoreError> {
        match self.read() {
            Err(StoreError::Corrupt { source, .. }) => {
                let kept = self.set_aside()?;
                tracing::warn!(
                    "History {:?} could not be parsed ({}); moved to {:?}",
                    self.path,
                    source,
                    kept
                );
                Ok(Vec::new())
            }
            other => other,
        }
    }

    fn set_aside(&self) -> Result<PathBuf, StoreError> {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| HISTORY_FILE_NAME.to_string());
        let millis = chrono::Utc::now().timestamp_millis();
        let dest = self.path.with_file_name(format!("{}.corrupt-{}", name, millis));

        std::fs::rename(&self.path, &dest).map_err(|source| StoreError::Write {
            path: dest.display().to_string(),
            source,
        })?;
        Ok(dest)
    }

    /// Replace the stored history with `sessions`.
    ///
    /// Weights that are not finite serialize as `null` and would make the
    /// whole file unreadable, so they are refused.
    pub fn save(&self, sessions: &[WorkoutSession]) -> Result<(), StoreError> {
        for session in sessions {
            let bad = session
                .exercises
                .iter()
                .flat_map(|e| &e.sets)
                .any(|set| !set.weight.is_finite());
            if bad {
                return Err(StoreError::NonFiniteWeight {
                    id: session.id.clone(),
                });
            }
        }

        let json = serde_json::to_string_pretty(sessions)?;
        let write_err = |source| StoreError::Write {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(write_err)?;
        std::fs::rename(&tmp, &self.path).map_err(write_err)?;

        tracing::debug!(count = sessions.len(), path = ?self.path, "Saved history");
        Ok(())
    }

    /// Get a session by ID.
    pub fn get(&self, id: &str) -> Option<WorkoutSession> {
        self.load().into_iter().find(|s| s.id == id)
    }

    /// Record a finished session and return the new history.
    pub fn add(&self, session: WorkoutSession) -> Result<Vec<WorkoutSession>, StoreError> {
        let current = self.load_for_write()?;
        if current.iter().any(|s| s.id == session.id) {
            return Err(StoreError::DuplicateId(session.id));
        }

        let id = session.id.clone();
        let mut next = Vec::with_capacity(current.len() + 1);
        next.push(session);
        next.extend(current);
        next.sort_by(|a, b| b.date.cmp(&a.date));

        self.save(&next)?;
        tracing::info!(id = %id, "Session saved");
        Ok(next)
    }

    /// Permanently remove a session and return the new history.
    pub fn delete(&self, id: &str) -> Result<Vec<WorkoutSession>, StoreError> {
        let current = self.load_for_write()?;
        if !current.iter().any(|s| s.id == id) {
            return Err(StoreError::NotFound(id.to_string()));
        }

        let next: Vec<WorkoutSession> = current.into_iter().filter(|s| s.id != id).collect();
        self.save(&next)?;
        tracing::info!(id = %id, "Session deleted");
        Ok(next)
    }
}
