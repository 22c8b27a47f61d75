//! WebSocket upgrade + message loop. Each connection owns one playground
//! session; each client message is parsed as JSON, applied to the session,
//! and answered with a single JSON message.

use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::playground;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::session::PlaygroundSession;
use crate::state::AppState;
use crate::util::trunc_for_log;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
  info!(target: "codemaster_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state), fields(session_id = %Uuid::new_v4()))]
async fn handle_ws(mut socket: WebSocket, state: AppState) {
  info!(target: "codemaster_backend", "WebSocket connected");
  let mut session = PlaygroundSession::new();

  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        // Parse, apply to the session, serialize response.
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "codemaster_backend", "WS received: {}", trunc_for_log(&txt, 200));
            handle_client_ws(incoming, &state, &mut session).await
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "codemaster_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "codemaster_backend", "WebSocket disconnected");
}

#[instrument(level = "debug", skip(state, session))]
async fn handle_client_ws(
  msg: ClientWsMessage,
  state: &AppState,
  session: &mut PlaygroundSession,
) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::SelectProblem { problem_id } => {
      match session.select_problem(state, problem_id.as_deref()).await {
        Some(selected) => {
          tracing::info!(target: "playground", id = %selected.problem.id, "WS problem selected");
          ServerWsMessage::Problem {
            problem: selected.problem,
            code: selected.code,
            solved: selected.solved,
          }
        }
        None => ServerWsMessage::Error { message: "Catalog is empty".into() },
      }
    }

    ClientWsMessage::EditCode { code } => match session.edit_code(state, code).await {
      Ok(()) => ServerWsMessage::CodeSaved,
      Err(e) => ServerWsMessage::Error { message: e.message().into() },
    },

    ClientWsMessage::ResetCode => match session.reset_code(state).await {
      Ok(code) => ServerWsMessage::CodeReset { code },
      Err(e) => ServerWsMessage::Error { message: e.message().into() },
    },

    ClientWsMessage::Run => match session.run(state).await {
      Ok(result) => {
        tracing::info!(target: "playground", exit_code = result.exit_code, "WS run evaluated");
        ServerWsMessage::RunResult { result }
      }
      Err(e) => ServerWsMessage::Error { message: e.message().into() },
    },

    ClientWsMessage::Submit => match session.submit(state).await {
      Ok((result, outcome)) => {
        tracing::info!(target: "playground", passed = outcome.passed, "WS submit evaluated");
        ServerWsMessage::SubmitResult {
          result,
          passed: outcome.passed,
          test_results: outcome.tally,
          solved: outcome.solved,
        }
      }
      Err(e) => ServerWsMessage::Error { message: e.message().into() },
    },

    ClientWsMessage::Progress => ServerWsMessage::Progress {
      summary: playground::progress_summary(state).await,
    },
  }
}
