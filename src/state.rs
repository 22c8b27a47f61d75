//! Application state: the immutable catalog, the progress store, and the
//! evaluator behind its seam.
//!
//! The catalog never changes after construction, so it is shared as a plain
//! `Arc`. The progress store locks internally. The evaluator is a trait
//! object so a real execution backend can replace the heuristic without
//! touching sessions or routes.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::catalog::Catalog;
use crate::config::load_playground_config_from_env;
use crate::evaluator::{Evaluator, HeuristicEvaluator};
use crate::progress::{FileBackend, ProgressBackend, ProgressStore};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub progress: Arc<ProgressStore>,
    pub evaluator: Arc<dyn Evaluator>,
}

impl AppState {
    /// Build state from env: optional TOML problem bank, file-backed
    /// progress, and the heuristic evaluator.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let extras = load_playground_config_from_env()
            .map(|cfg| cfg.into_problems())
            .unwrap_or_default();
        let catalog = if extras.is_empty() {
            Catalog::built_in()
        } else {
            info!(target: "codemaster_backend", extras = extras.len(), "Merging TOML problem bank");
            Catalog::with_extras(extras)
        };

        let backend = FileBackend::from_env();
        info!(target: "codemaster_backend", path = %backend.path().display(), "Progress store at file backend");

        Self::with_parts(catalog, Box::new(backend), Arc::new(HeuristicEvaluator))
    }

    /// Assemble from explicit parts; tests inject a memory backend here.
    /// The store is given the catalog's id set so persisted entries for
    /// problems this catalog does not have are dropped on load.
    pub fn with_parts(
        catalog: Catalog,
        backend: Box<dyn ProgressBackend>,
        evaluator: Arc<dyn Evaluator>,
    ) -> Self {
        let known_ids: HashSet<String> = catalog.all_problems().map(|p| p.id.clone()).collect();
        Self {
            catalog: Arc::new(catalog),
            progress: Arc::new(ProgressStore::new(backend, &known_ids)),
            evaluator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{MemoryBackend, ProgressData};

    #[tokio::test]
    async fn snapshot_keys_outside_the_catalog_are_dropped_on_startup() {
        let backend = MemoryBackend::default();
        let mut seeded = ProgressData::default();
        seeded.code_snapshots.insert("ghost-problem".into(), "x".into());
        seeded.code_snapshots.insert("js-var-1".into(), "kept".into());
        seeded.solved_problems.push("ghost-problem".into());
        backend.store(&seeded).expect("seed");

        let state = AppState::with_parts(
            Catalog::built_in(),
            Box::new(backend),
            Arc::new(HeuristicEvaluator),
        );
        assert_eq!(state.progress.code_for("js-var-1").await.as_deref(), Some("kept"));
        assert_eq!(state.progress.code_for("ghost-problem").await, None);
        assert!(!state.progress.is_solved("ghost-problem").await);
    }
}
