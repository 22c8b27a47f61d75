//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Executing code against a problem (simulated latency + mock evaluator)
//!   - Submit bookkeeping (submission log, solved set)
//!   - Building the progress summary

use std::panic::AssertUnwindSafe;

use rand::Rng;
use tracing::{error, info, instrument};

use crate::domain::Problem;
use crate::evaluator::ExecutionResult;
use crate::progress::{SubmissionDraft, SubmissionTally};
use crate::protocol::{ChapterProgressOut, LanguageProgressOut, ProgressSummaryOut};
use crate::state::AppState;

/// How long a fake "execution" appears to take, in milliseconds.
const LATENCY_MS: std::ops::RangeInclusive<u64> = 800..=1300;

/// How many submissions feed the accuracy figure on the progress page.
const ACCURACY_WINDOW: usize = 10;

/// What the caller gets back from a submit besides the raw result.
#[derive(Clone, Copy, Debug)]
pub struct SubmissionOutcome {
  pub passed: bool,
  pub tally: SubmissionTally,
  pub solved: bool,
}

/// Evaluate `code` against `problem` after a simulated latency window.
/// A panicking evaluator is contained here and surfaced as a result with
/// `stderr` set and exit code 1; this function never fails.
#[instrument(level = "info", skip(state, problem, code), fields(problem_id = %problem.id, code_len = code.len(), run_all_tests = run_all_tests))]
pub async fn execute(
  state: &AppState,
  problem: &Problem,
  code: &str,
  run_all_tests: bool,
) -> ExecutionResult {
  let delay = rand::thread_rng().gen_range(LATENCY_MS);
  tokio::time::sleep(std::time::Duration::from_millis(delay)).await;

  let outcome = std::panic::catch_unwind(AssertUnwindSafe(|| {
    state.evaluator.evaluate(code, problem, run_all_tests)
  }));
  match outcome {
    Ok(result) => result,
    Err(panic) => {
      let message = panic_message(panic);
      error!(target: "playground", problem_id = %problem.id, %message, "Evaluator panicked");
      ExecutionResult::from_error(message)
    }
  }
}

/// Run mode: snapshot the code, evaluate without the per-test breakdown.
pub async fn run(state: &AppState, problem: &Problem, code: &str) -> ExecutionResult {
  state.progress.save_code(&problem.id, code).await;
  execute(state, problem, code, false).await
}

/// Submit mode: snapshot, evaluate all tests, record the submission, and
/// mark the problem solved when every test passed.
#[instrument(level = "info", skip(state, problem, code), fields(problem_id = %problem.id))]
pub async fn submit(
  state: &AppState,
  problem: &Problem,
  code: &str,
) -> (ExecutionResult, SubmissionOutcome) {
  state.progress.save_code(&problem.id, code).await;
  let result = execute(state, problem, code, true).await;

  let tally = match &result.test_results {
    Some(tests) => SubmissionTally {
      passed: tests.iter().filter(|t| t.passed).count() as u32,
      total: tests.len() as u32,
    },
    // Evaluation blew up before producing a breakdown.
    None => SubmissionTally { passed: 0, total: 0 },
  };
  let passed = result.all_passed();

  state
    .progress
    .add_submission(SubmissionDraft {
      problem_id: problem.id.clone(),
      code: code.to_string(),
      passed,
      test_results: tally,
    })
    .await;
  if passed {
    state.progress.mark_solved(&problem.id).await;
  }
  let solved = state.progress.is_solved(&problem.id).await;

  info!(
    target: "playground",
    problem_id = %problem.id,
    passed,
    tally_passed = tally.passed,
    tally_total = tally.total,
    "Submission recorded"
  );
  (result, SubmissionOutcome { passed, tally, solved })
}

/// Stats for the progress page: overall and per-language/per-chapter solved
/// counts plus recent-submission accuracy.
pub async fn progress_summary(state: &AppState) -> ProgressSummaryOut {
  let solved = state.progress.solved_ids().await;
  let recent = state.progress.recent_submissions(ACCURACY_WINDOW).await;
  let accuracy = if recent.is_empty() {
    0.0
  } else {
    recent.iter().filter(|s| s.passed).count() as f32 / recent.len() as f32 * 100.0
  };

  let languages = state
    .catalog
    .languages()
    .iter()
    .map(|lang| {
      let chapters: Vec<ChapterProgressOut> = lang
        .chapters
        .iter()
        .map(|c| ChapterProgressOut {
          id: c.id.clone(),
          title: c.title.clone(),
          solved: c.problems.iter().filter(|p| solved.contains(&p.id)).count(),
          total: c.problems.len(),
        })
        .collect();
      LanguageProgressOut {
        id: lang.id,
        name: lang.name.clone(),
        solved: chapters.iter().map(|c| c.solved).sum(),
        total: chapters.iter().map(|c| c.total).sum(),
        chapters,
      }
    })
    .collect();

  ProgressSummaryOut {
    solved_count: state.progress.solved_count().await,
    total_problems: state.catalog.total_problems(),
    accuracy,
    languages,
    recent_submissions: recent,
  }
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
  if let Some(s) = panic.downcast_ref::<&str>() {
    s.to_string()
  } else if let Some(s) = panic.downcast_ref::<String>() {
    s.clone()
  } else {
    "Unknown error".to_string()
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::catalog::Catalog;
  use crate::evaluator::{Evaluator, HeuristicEvaluator};
  use crate::progress::MemoryBackend;

  fn test_state() -> AppState {
    AppState::with_parts(
      Catalog::built_in(),
      Box::<MemoryBackend>::default(),
      Arc::new(HeuristicEvaluator),
    )
  }

  struct PanickingEvaluator;
  impl Evaluator for PanickingEvaluator {
    fn evaluate(&self, _: &str, _: &Problem, _: bool) -> ExecutionResult {
      panic!("evaluator exploded");
    }
  }

  #[tokio::test(start_paused = true)]
  async fn passing_submit_marks_solved_and_logs_one_submission() {
    let state = test_state();
    let problem = state.catalog.problem_by_id("js-var-1").expect("known").clone();
    let code = "function helloWorld() {\n  return \"Hello, World!\";\n}";

    let (result, outcome) = submit(&state, &problem, code).await;
    assert!(outcome.passed);
    assert!(outcome.solved);
    assert_eq!(outcome.tally.passed, outcome.tally.total);
    assert!(result.all_passed());

    let data = state.progress.snapshot().await;
    assert_eq!(data.solved_problems, vec!["js-var-1".to_string()]);
    assert_eq!(data.submissions.len(), 1);
    assert!(data.submissions[0].passed);
    assert_eq!(data.code_snapshots.get("js-var-1").map(String::as_str), Some(code));
  }

  #[tokio::test(start_paused = true)]
  async fn failing_submit_records_but_does_not_solve() {
    let state = test_state();
    let problem = state.catalog.problem_by_id("js-var-1").expect("known").clone();

    let (_, outcome) = submit(&state, &problem, "return 5;").await;
    assert!(!outcome.passed);
    assert!(!outcome.solved);
    assert_eq!(outcome.tally.passed, 0);
    assert_eq!(outcome.tally.total, 1);
    assert!(state.progress.snapshot().await.solved_problems.is_empty());
  }

  #[tokio::test(start_paused = true)]
  async fn run_keeps_progress_untouched_beyond_the_snapshot() {
    let state = test_state();
    let problem = state.catalog.problem_by_id("js-var-1").expect("known").clone();

    let result = run(&state, &problem, "console.log(\"Hello, World!\");").await;
    assert!(result.test_results.is_none());

    let data = state.progress.snapshot().await;
    assert!(data.submissions.is_empty());
    assert!(data.solved_problems.is_empty());
    assert!(data.code_snapshots.contains_key("js-var-1"));
  }

  #[tokio::test(start_paused = true)]
  async fn evaluator_panic_becomes_a_result() {
    let state = AppState::with_parts(
      Catalog::built_in(),
      Box::<MemoryBackend>::default(),
      Arc::new(PanickingEvaluator),
    );
    let problem = state.catalog.problem_by_id("js-var-1").expect("known").clone();

    let result = execute(&state, &problem, "anything", true).await;
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.stderr, "evaluator exploded");
    assert!(result.test_results.is_none());
  }

  #[tokio::test(start_paused = true)]
  async fn summary_counts_by_language_and_chapter() {
    let state = test_state();
    let hello = state.catalog.problem_by_id("js-var-1").expect("known").clone();
    submit(&state, &hello, "return \"Hello, World!\";").await;

    let summary = progress_summary(&state).await;
    assert_eq!(summary.solved_count, 1);
    assert_eq!(summary.total_problems, state.catalog.total_problems());
    assert_eq!(summary.accuracy, 100.0);

    let js = &summary.languages[0];
    assert_eq!(js.solved, 1);
    let vars = js.chapters.iter().find(|c| c.id == "variables").expect("chapter");
    assert_eq!(vars.solved, 1);
    assert_eq!(vars.total, 3);

    let py = &summary.languages[1];
    assert_eq!(py.solved, 0);
  }
}
