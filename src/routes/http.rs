//! HTTP endpoint handlers. These are thin wrappers that forward to core
//! behaviors; run/submit are stateless here (problem id + code per request),
//! while the WebSocket keeps a stateful session.

use axum::{
  extract::{Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument};

use crate::playground;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
  Json(HealthOut { ok: true })
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_languages(State(state): State<AppState>) -> impl IntoResponse {
  let solved = state.progress.solved_ids().await;
  Json(language_tree(state.catalog.languages(), &solved))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_problems(State(state): State<AppState>) -> impl IntoResponse {
  let solved = state.progress.solved_ids().await;
  let problems: Vec<ProblemSummaryOut> = state
    .catalog
    .all_problems()
    .map(|p| problem_summary(p, &solved))
    .collect();
  Json(problems)
}

/// Full problem by id; an absent or unknown id serves the first problem of
/// the catalog instead of failing.
#[instrument(level = "info", skip(state), fields(id = %q.id.clone().unwrap_or_else(|| "<first>".into())))]
pub async fn http_get_problem(
  State(state): State<AppState>,
  Query(q): Query<ProblemQuery>,
) -> Response {
  match state.catalog.resolve(q.id.as_deref()) {
    Some(p) => {
      info!(target: "playground", id = %p.id, "HTTP problem served");
      Json(to_out(p)).into_response()
    }
    None => not_found("Catalog is empty"),
  }
}

#[instrument(level = "info", skip(state, body), fields(%body.problem_id, code_len = body.code.len()))]
pub async fn http_post_run(
  State(state): State<AppState>,
  Json(body): Json<ExecuteIn>,
) -> Response {
  let Some(problem) = state.catalog.problem_by_id(&body.problem_id).map(Clone::clone) else {
    return not_found(&format!("Unknown problemId: {}", body.problem_id));
  };
  let result = playground::run(&state, &problem, &body.code).await;
  info!(target: "playground", id = %problem.id, exit_code = result.exit_code, "HTTP run evaluated");
  Json(result).into_response()
}

#[instrument(level = "info", skip(state, body), fields(%body.problem_id, code_len = body.code.len()))]
pub async fn http_post_submit(
  State(state): State<AppState>,
  Json(body): Json<ExecuteIn>,
) -> Response {
  let Some(problem) = state.catalog.problem_by_id(&body.problem_id).map(Clone::clone) else {
    return not_found(&format!("Unknown problemId: {}", body.problem_id));
  };
  let (result, outcome) = playground::submit(&state, &problem, &body.code).await;
  info!(target: "playground", id = %problem.id, passed = outcome.passed, "HTTP submit evaluated");
  Json(SubmitOut {
    result,
    passed: outcome.passed,
    test_results: outcome.tally,
    solved: outcome.solved,
  })
  .into_response()
}

/// Saved snapshot for a problem, falling back to its starter code.
#[instrument(level = "info", skip(state), fields(%q.problem_id))]
pub async fn http_get_code(
  State(state): State<AppState>,
  Query(q): Query<CodeQuery>,
) -> Response {
  let Some(problem) = state.catalog.problem_by_id(&q.problem_id) else {
    return not_found(&format!("Unknown problemId: {}", q.problem_id));
  };
  let code = state
    .progress
    .code_for(&problem.id)
    .await
    .unwrap_or_else(|| problem.starter_code.clone());
  let solved = state.progress.is_solved(&problem.id).await;
  Json(CodeOut { code, solved }).into_response()
}

/// Upsert a snapshot. Only known problem ids are accepted so the snapshot
/// map never grows keys outside the catalog.
#[instrument(level = "info", skip(state, body), fields(%body.problem_id, code_len = body.code.len()))]
pub async fn http_post_code(
  State(state): State<AppState>,
  Json(body): Json<CodeIn>,
) -> Response {
  if state.catalog.problem_by_id(&body.problem_id).is_none() {
    return not_found(&format!("Unknown problemId: {}", body.problem_id));
  }
  state.progress.save_code(&body.problem_id, &body.code).await;
  Json(AckOut { ok: true }).into_response()
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_progress(State(state): State<AppState>) -> impl IntoResponse {
  Json(playground::progress_summary(&state).await)
}

#[instrument(level = "info", skip(state))]
pub async fn http_post_progress_reset(State(state): State<AppState>) -> impl IntoResponse {
  state.progress.reset().await;
  info!(target: "progress", "Progress reset");
  Json(AckOut { ok: true })
}

fn not_found(message: &str) -> Response {
  (StatusCode::NOT_FOUND, Json(ErrorOut { message: message.to_string() })).into_response()
}
