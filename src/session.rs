//! Per-connection playground session: one active problem, the in-memory
//! code buffer, and the Idle/Running phase around evaluation.
//!
//! A Run or Submit that arrives while another evaluation is in flight is
//! ignored and answered with an error; nothing is queued. The WebSocket loop
//! is sequential per connection, so the guard mostly protects against a
//! future caller driving the session concurrently.

use tracing::{debug, info, instrument};

use crate::domain::Problem;
use crate::evaluator::ExecutionResult;
use crate::playground::{self, SubmissionOutcome};
use crate::protocol::{to_out, ProblemOut};
use crate::state::AppState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
  Idle,
  Running,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionError {
  /// An evaluation is already in flight; the request was dropped.
  Busy,
  /// No problem is active (empty catalog, or no select yet).
  NoProblem,
}

impl SessionError {
  pub fn message(&self) -> &'static str {
    match self {
      SessionError::Busy => "An evaluation is already running; request ignored.",
      SessionError::NoProblem => "No problem selected.",
    }
  }
}

/// What a successful problem selection hands back to the transport layer.
pub struct SelectedProblem {
  pub problem: ProblemOut,
  pub code: String,
  pub solved: bool,
}

pub struct PlaygroundSession {
  problem_id: Option<String>,
  code: String,
  phase: Phase,
  last_result: Option<ExecutionResult>,
}

impl PlaygroundSession {
  pub fn new() -> Self {
    Self { problem_id: None, code: String::new(), phase: Phase::Idle, last_result: None }
  }

  fn active_problem<'a>(&self, state: &'a AppState) -> Option<&'a Problem> {
    let id = self.problem_id.as_deref()?;
    state.catalog.problem_by_id(id)
  }

  /// Activate a problem: persist the previous buffer, then restore the
  /// saved snapshot or fall back to starter code. An absent or unknown id
  /// selects the first problem of the catalog; `None` only when the catalog
  /// itself is empty.
  #[instrument(level = "info", skip(self, state), fields(requested = requested.unwrap_or("<first>")))]
  pub async fn select_problem(
    &mut self,
    state: &AppState,
    requested: Option<&str>,
  ) -> Option<SelectedProblem> {
    if let Some(previous) = self.problem_id.as_deref() {
      state.progress.save_code(previous, &self.code).await;
    }

    let problem = state.catalog.resolve(requested)?.clone();
    let code = state
      .progress
      .code_for(&problem.id)
      .await
      .unwrap_or_else(|| problem.starter_code.clone());
    let solved = state.progress.is_solved(&problem.id).await;

    info!(target: "playground", problem_id = %problem.id, restored_snapshot = code != problem.starter_code, "Problem selected");
    self.problem_id = Some(problem.id.clone());
    self.code = code.clone();
    self.last_result = None;
    self.phase = Phase::Idle;

    Some(SelectedProblem { problem: to_out(&problem), code, solved })
  }

  /// Update the buffer and write the snapshot through on every edit.
  pub async fn edit_code(&mut self, state: &AppState, code: String) -> Result<(), SessionError> {
    let id = self.problem_id.clone().ok_or(SessionError::NoProblem)?;
    debug!(target: "playground", problem_id = %id, code_len = code.len(), "Code edited");
    self.code = code;
    state.progress.save_code(&id, &self.code).await;
    Ok(())
  }

  /// Overwrite the buffer with starter code and persist it. The last result
  /// is kept; only the code changes.
  pub async fn reset_code(&mut self, state: &AppState) -> Result<String, SessionError> {
    let problem = self.active_problem(state).ok_or(SessionError::NoProblem)?;
    let starter = problem.starter_code.clone();
    let id = problem.id.clone();
    self.code = starter.clone();
    state.progress.save_code(&id, &starter).await;
    info!(target: "playground", problem_id = %id, "Code reset to starter template");
    Ok(starter)
  }

  pub async fn run(&mut self, state: &AppState) -> Result<ExecutionResult, SessionError> {
    let problem = self.guard_execution(state)?.clone();
    self.phase = Phase::Running;
    let result = playground::run(state, &problem, &self.code).await;
    self.last_result = Some(result.clone());
    self.phase = Phase::Idle;
    Ok(result)
  }

  pub async fn submit(
    &mut self,
    state: &AppState,
  ) -> Result<(ExecutionResult, SubmissionOutcome), SessionError> {
    let problem = self.guard_execution(state)?.clone();
    self.phase = Phase::Running;
    let (result, outcome) = playground::submit(state, &problem, &self.code).await;
    self.last_result = Some(result.clone());
    self.phase = Phase::Idle;
    Ok((result, outcome))
  }

  #[allow(dead_code)]
  pub fn last_result(&self) -> Option<&ExecutionResult> {
    self.last_result.as_ref()
  }

  #[allow(dead_code)]
  pub fn is_running(&self) -> bool {
    self.phase == Phase::Running
  }

  fn guard_execution<'a>(&self, state: &'a AppState) -> Result<&'a Problem, SessionError> {
    if self.phase == Phase::Running {
      info!(target: "playground", "Run/Submit ignored: evaluation already in flight");
      return Err(SessionError::Busy);
    }
    self.active_problem(state).ok_or(SessionError::NoProblem)
  }
}

impl Default for PlaygroundSession {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::catalog::Catalog;
  use crate::evaluator::HeuristicEvaluator;
  use crate::progress::MemoryBackend;

  fn test_state() -> AppState {
    AppState::with_parts(
      Catalog::built_in(),
      Box::<MemoryBackend>::default(),
      Arc::new(HeuristicEvaluator),
    )
  }

  #[tokio::test]
  async fn select_falls_back_to_first_problem() {
    let state = test_state();
    let mut session = PlaygroundSession::new();

    let selected = session.select_problem(&state, None).await.expect("catalog not empty");
    assert_eq!(selected.problem.id, "js-var-1");
    assert_eq!(selected.code, selected.problem.starter_code);
    assert!(!selected.solved);

    let unknown = session.select_problem(&state, Some("no-such-id")).await.expect("fallback");
    assert_eq!(unknown.problem.id, "js-var-1");
  }

  #[tokio::test]
  async fn select_restores_saved_snapshot_and_persists_previous_buffer() {
    let state = test_state();
    let mut session = PlaygroundSession::new();

    session.select_problem(&state, Some("js-var-1")).await.expect("select");
    session.edit_code(&state, "my hello attempt".into()).await.expect("edit");

    // Switching away persists the buffer; switching back restores it.
    session.select_problem(&state, Some("js-var-2")).await.expect("select");
    assert_eq!(
      state.progress.code_for("js-var-1").await.as_deref(),
      Some("my hello attempt")
    );
    let back = session.select_problem(&state, Some("js-var-1")).await.expect("select");
    assert_eq!(back.code, "my hello attempt");
  }

  #[tokio::test]
  async fn select_redacts_hidden_test_cases() {
    let state = test_state();
    let mut session = PlaygroundSession::new();
    let selected = session.select_problem(&state, Some("js-var-2")).await.expect("select");
    let hidden: Vec<_> = selected.problem.test_cases.iter().filter(|t| t.is_hidden).collect();
    assert!(!hidden.is_empty());
    for tc in hidden {
      assert!(tc.input.is_empty());
      assert!(tc.expected_output.is_empty());
    }
  }

  #[tokio::test(start_paused = true)]
  async fn run_requires_an_active_problem() {
    let state = test_state();
    let mut session = PlaygroundSession::new();
    assert_eq!(session.run(&state).await.unwrap_err(), SessionError::NoProblem);
  }

  #[tokio::test(start_paused = true)]
  async fn run_returns_to_idle_and_keeps_last_result() {
    let state = test_state();
    let mut session = PlaygroundSession::new();
    session.select_problem(&state, Some("js-var-1")).await.expect("select");
    session.edit_code(&state, "return \"Hello, World!\";".into()).await.expect("edit");

    let result = session.run(&state).await.expect("run");
    assert!(!session.is_running());
    assert_eq!(session.last_result(), Some(&result));
    assert!(result.test_results.is_none());
  }

  #[tokio::test(start_paused = true)]
  async fn second_request_while_running_is_ignored() {
    let state = test_state();
    let mut session = PlaygroundSession::new();
    session.select_problem(&state, Some("js-var-1")).await.expect("select");

    session.phase = Phase::Running;
    assert_eq!(session.run(&state).await.unwrap_err(), SessionError::Busy);
    assert_eq!(session.submit(&state).await.unwrap_err(), SessionError::Busy);
  }

  #[tokio::test(start_paused = true)]
  async fn submit_marks_solved_through_the_session() {
    let state = test_state();
    let mut session = PlaygroundSession::new();
    session.select_problem(&state, Some("js-var-1")).await.expect("select");
    session
      .edit_code(&state, "function helloWorld() {\n  return \"Hello, World!\";\n}".into())
      .await
      .expect("edit");

    let (result, outcome) = session.submit(&state).await.expect("submit");
    assert!(result.all_passed());
    assert!(outcome.passed && outcome.solved);
    assert!(state.progress.is_solved("js-var-1").await);

    // Selecting the problem again reports it solved and clears the result.
    let again = session.select_problem(&state, Some("js-var-1")).await.expect("select");
    assert!(again.solved);
    assert!(session.last_result().is_none());
  }
}
