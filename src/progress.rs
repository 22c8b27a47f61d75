//! User progress: solved set, per-problem code snapshots, and a bounded
//! submission log, persisted as one JSON record through a pluggable backend.
//!
//! Persistence is write-through: every mutation re-serializes the whole
//! record. Both directions are non-fatal — an unreadable or corrupt record
//! loads as empty state, and a failed write leaves the in-memory state
//! authoritative for the rest of the session.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, error, instrument, warn};

/// Oldest submissions are evicted past this bound.
pub const MAX_SUBMISSIONS: usize = 100;

/// Where the progress record lives unless PROGRESS_PATH overrides it.
pub const DEFAULT_PROGRESS_PATH: &str = "./data/codemaster_progress.json";

/// The persisted record. Field names match the original browser-local
/// storage schema so an exported record can be imported as-is.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ProgressData {
    #[serde(default, rename = "solvedProblems")]
    pub solved_problems: Vec<String>,
    #[serde(default, rename = "codeSnapshots")]
    pub code_snapshots: HashMap<String, String>,
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

/// A recorded attempt. Immutable once created; newest first in the log.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub problem_id: String,
    pub code: String,
    /// Milliseconds since the Unix epoch, stamped by the store.
    pub timestamp: u64,
    pub passed: bool,
    pub test_results: SubmissionTally,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionTally {
    pub passed: u32,
    pub total: u32,
}

/// A submission as handed in by the caller; the store stamps the timestamp.
#[derive(Clone, Debug)]
pub struct SubmissionDraft {
    pub problem_id: String,
    pub code: String,
    pub passed: bool,
    pub test_results: SubmissionTally,
}

/// Storage seam for the progress record. `load` returns `None` for missing
/// or unreadable state; `store` reports I/O failure to be logged upstream.
pub trait ProgressBackend: Send + Sync {
    fn load(&self) -> Option<ProgressData>;
    fn store(&self, data: &ProgressData) -> io::Result<()>;
}

/// Single-file JSON backend.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path from PROGRESS_PATH or the default location.
    pub fn from_env() -> Self {
        let path = std::env::var("PROGRESS_PATH").unwrap_or_else(|_| DEFAULT_PROGRESS_PATH.into());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressBackend for FileBackend {
    fn load(&self) -> Option<ProgressData> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(target: "progress", path = %self.path.display(), "No progress record yet");
                return None;
            }
            Err(e) => {
                warn!(target: "progress", path = %self.path.display(), error = %e, "Failed to read progress record; starting empty");
                return None;
            }
        };
        match serde_json::from_str::<ProgressData>(&raw) {
            Ok(data) => Some(data),
            Err(e) => {
                warn!(target: "progress", path = %self.path.display(), error = %e, "Corrupt progress record; starting empty");
                None
            }
        }
    }

    fn store(&self, data: &ProgressData) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, json)
    }
}

/// In-memory backend for tests and for running without persistence.
#[derive(Default)]
pub struct MemoryBackend {
    cell: Mutex<Option<ProgressData>>,
}

impl ProgressBackend for MemoryBackend {
    fn load(&self) -> Option<ProgressData> {
        self.cell.lock().ok().and_then(|guard| guard.clone())
    }

    fn store(&self, data: &ProgressData) -> io::Result<()> {
        match self.cell.lock() {
            Ok(mut guard) => {
                *guard = Some(data.clone());
                Ok(())
            }
            Err(_) => Err(io::Error::new(io::ErrorKind::Other, "memory backend poisoned")),
        }
    }
}

/// Single source of truth for user progress within one server process.
pub struct ProgressStore {
    data: RwLock<ProgressData>,
    backend: Box<dyn ProgressBackend>,
}

impl ProgressStore {
    /// Restore from the backend; unreadable state becomes empty state.
    /// Snapshot keys and solved entries outside `known_ids` are dropped here,
    /// so a stale or imported record cannot reference problems the catalog
    /// does not have.
    pub fn new(backend: Box<dyn ProgressBackend>, known_ids: &HashSet<String>) -> Self {
        let mut data = backend.load().unwrap_or_default();
        let before = data.solved_problems.len() + data.code_snapshots.len();
        data.solved_problems.retain(|id| known_ids.contains(id));
        data.code_snapshots.retain(|id, _| known_ids.contains(id));
        let dropped = before - (data.solved_problems.len() + data.code_snapshots.len());
        if dropped > 0 {
            warn!(target: "progress", dropped, "Dropped progress entries for unknown problem ids");
        }
        Self { data: RwLock::new(data), backend }
    }

    /// Insert into the solved set; calling twice is the same as calling once.
    #[instrument(level = "debug", skip(self))]
    pub async fn mark_solved(&self, problem_id: &str) {
        let mut data = self.data.write().await;
        if data.solved_problems.iter().any(|id| id == problem_id) {
            return;
        }
        data.solved_problems.push(problem_id.to_string());
        self.persist(&data);
    }

    pub async fn is_solved(&self, problem_id: &str) -> bool {
        self.data.read().await.solved_problems.iter().any(|id| id == problem_id)
    }

    pub async fn solved_count(&self) -> usize {
        self.data.read().await.solved_problems.len()
    }

    pub async fn solved_ids(&self) -> Vec<String> {
        self.data.read().await.solved_problems.clone()
    }

    /// Unconditional upsert; called on every edit, so it must stay cheap.
    #[instrument(level = "debug", skip(self, code), fields(code_len = code.len()))]
    pub async fn save_code(&self, problem_id: &str, code: &str) {
        let mut data = self.data.write().await;
        data.code_snapshots.insert(problem_id.to_string(), code.to_string());
        self.persist(&data);
    }

    pub async fn code_for(&self, problem_id: &str) -> Option<String> {
        self.data.read().await.code_snapshots.get(problem_id).cloned()
    }

    /// Stamp the current time, prepend, and evict past the cap.
    #[instrument(level = "debug", skip(self, draft), fields(problem_id = %draft.problem_id, passed = draft.passed))]
    pub async fn add_submission(&self, draft: SubmissionDraft) -> Submission {
        let submission = Submission {
            problem_id: draft.problem_id,
            code: draft.code,
            timestamp: now_millis(),
            passed: draft.passed,
            test_results: draft.test_results,
        };
        let mut data = self.data.write().await;
        data.submissions.insert(0, submission.clone());
        data.submissions.truncate(MAX_SUBMISSIONS);
        self.persist(&data);
        submission
    }

    /// Newest first; the log is already in that order.
    pub async fn recent_submissions(&self, limit: usize) -> Vec<Submission> {
        let data = self.data.read().await;
        data.submissions.iter().take(limit).cloned().collect()
    }

    #[instrument(level = "info", skip(self))]
    pub async fn reset(&self) {
        let mut data = self.data.write().await;
        *data = ProgressData::default();
        self.persist(&data);
    }

    /// Copy of the full record, used by the progress summary and tests.
    pub async fn snapshot(&self) -> ProgressData {
        self.data.read().await.clone()
    }

    /// Write-through. Failure is logged and swallowed; in-memory state stays
    /// authoritative until the next successful write.
    fn persist(&self, data: &ProgressData) {
        if let Err(e) = self.backend.store(data) {
            error!(target: "progress", error = %e, "Failed to persist progress record");
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn memory_store() -> ProgressStore {
        ProgressStore::new(Box::<MemoryBackend>::default(), &HashSet::new())
    }

    fn draft(problem_id: &str, passed: bool) -> SubmissionDraft {
        SubmissionDraft {
            problem_id: problem_id.into(),
            code: "return 42;".into(),
            passed,
            test_results: SubmissionTally { passed: if passed { 2 } else { 1 }, total: 2 },
        }
    }

    #[tokio::test]
    async fn mark_solved_is_idempotent() {
        let store = memory_store();
        store.mark_solved("js-var-1").await;
        store.mark_solved("js-var-1").await;
        assert!(store.is_solved("js-var-1").await);
        assert_eq!(store.solved_count().await, 1);
    }

    #[tokio::test]
    async fn save_code_overwrites() {
        let store = memory_store();
        store.save_code("js-var-1", "a").await;
        store.save_code("js-var-1", "b").await;
        assert_eq!(store.code_for("js-var-1").await.as_deref(), Some("b"));
        assert_eq!(store.code_for("js-var-2").await, None);
    }

    #[tokio::test]
    async fn submission_log_is_capped_and_newest_first() {
        let store = memory_store();
        for i in 0..105 {
            store.add_submission(draft(&format!("p-{i}"), i % 2 == 0)).await;
        }
        let data = store.snapshot().await;
        assert_eq!(data.submissions.len(), MAX_SUBMISSIONS);
        assert_eq!(data.submissions[0].problem_id, "p-104");
        assert_eq!(data.submissions.last().map(|s| s.problem_id.as_str()), Some("p-5"));

        let recent = store.recent_submissions(10).await;
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].problem_id, "p-104");
    }

    #[tokio::test]
    async fn reset_clears_everything() {
        let store = memory_store();
        store.mark_solved("js-var-1").await;
        store.save_code("js-var-1", "x").await;
        store.add_submission(draft("js-var-1", true)).await;
        store.reset().await;
        assert_eq!(store.snapshot().await, ProgressData::default());
    }

    #[tokio::test]
    async fn file_backend_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("progress.json");

        {
            let store = ProgressStore::new(Box::new(FileBackend::new(&path)), &known(&["js-var-1"]));
            store.mark_solved("js-var-1").await;
            store.save_code("js-var-1", "console.log('Hello, World!');").await;
            store.add_submission(draft("js-var-1", true)).await;
        }

        let restored = ProgressStore::new(Box::new(FileBackend::new(&path)), &known(&["js-var-1"]));
        let data = restored.snapshot().await;
        assert_eq!(data.solved_problems, vec!["js-var-1".to_string()]);
        assert_eq!(
            data.code_snapshots.get("js-var-1").map(String::as_str),
            Some("console.log('Hello, World!');")
        );
        assert_eq!(data.submissions.len(), 1);
        assert!(data.submissions[0].passed);
    }

    #[tokio::test]
    async fn corrupt_record_loads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("progress.json");
        std::fs::write(&path, "{not json at all").expect("write");

        let store = ProgressStore::new(Box::new(FileBackend::new(&path)), &known(&["py-var-1"]));
        assert_eq!(store.snapshot().await, ProgressData::default());

        // The store must still be usable after the bad load.
        store.mark_solved("py-var-1").await;
        assert!(store.is_solved("py-var-1").await);
    }

    #[tokio::test]
    async fn load_drops_entries_for_unknown_problem_ids() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("progress.json");
        // A record carrying keys the catalog does not know, e.g. written
        // while a TOML-bank problem existed or imported from elsewhere.
        std::fs::write(
            &path,
            r#"{
                "solvedProblems": ["js-var-1", "ghost-problem"],
                "codeSnapshots": {"js-var-1": "a", "ghost-problem": "x"}
            }"#,
        )
        .expect("write");

        let store = ProgressStore::new(Box::new(FileBackend::new(&path)), &known(&["js-var-1"]));
        let data = store.snapshot().await;
        assert_eq!(data.solved_problems, vec!["js-var-1".to_string()]);
        assert_eq!(data.code_snapshots.len(), 1);
        assert!(data.code_snapshots.contains_key("js-var-1"));

        // The next write persists the filtered record, not the stale one.
        store.save_code("js-var-1", "b").await;
        let raw = std::fs::read_to_string(&path).expect("read");
        assert!(!raw.contains("ghost-problem"));
    }

    #[test]
    fn legacy_record_shape_deserializes() {
        // Minimal record as the original frontend wrote it.
        let raw = r#"{
            "solvedProblems": ["js-var-1"],
            "codeSnapshots": {"js-var-1": "function helloWorld() {}"},
            "submissions": [{
                "problemId": "js-var-1",
                "code": "function helloWorld() {}",
                "timestamp": 1735689600000,
                "passed": true,
                "testResults": {"passed": 1, "total": 1}
            }]
        }"#;
        let data: ProgressData = serde_json::from_str(raw).expect("parse");
        assert_eq!(data.solved_problems, vec!["js-var-1".to_string()]);
        assert_eq!(data.submissions[0].test_results, SubmissionTally { passed: 1, total: 1 });
    }
}
