//! WebSocket feed of the caller's skill selection.
//!
//! On connect the client gets a `selection_sync`; after every mutation of
//! its session it gets a `selection_changed` carrying both chip lists.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::HeaderMap,
    response::Response,
};
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::routes::AppState;
use crate::session::SessionManager;
use crate::skills::{Selection, SelectionView};

/// Messages pushed to WebSocket clients.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SkillsWsMessage {
    /// Full state, sent on connect and after the client lags.
    SelectionSync { view: SelectionView },
    /// State after a mutation.
    SelectionChanged { view: SelectionView },
}

pub(super) async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let (handle, (rx, view)) = state
        .session(&headers, |s| (s.skills.subscribe(), s.skills.view()))
        .await;
    info!(session_id = %handle.id, "Skills WebSocket client connecting");
    let session_id = handle.id;
    let sessions = Arc::clone(&state.sessions);
    let resp =
        ws.on_upgrade(move |socket| handle_socket(socket, sessions, session_id, rx, view));
    state.respond(handle, resp)
}

async fn send_json(socket: &mut WebSocket, msg: &SkillsWsMessage) -> bool {
    match serde_json::to_string(msg) {
        Ok(json) => socket.send(Message::Text(json.into())).await.is_ok(),
        Err(e) => {
            warn!(error = %e, "Failed to serialize skills message");
            true
        }
    }
}

/// Full state plus a fresh receiver for a client that missed updates, or
/// `None` once the session is gone. Both are taken under one lock so no
/// mutation falls between them.
async fn resync(
    sessions: &SessionManager,
    session_id: Uuid,
) -> Option<(SkillsWsMessage, broadcast::Receiver<Selection>)> {
    sessions
        .with_session(session_id, |s| {
            let sync = SkillsWsMessage::SelectionSync {
                view: s.skills.view(),
            };
            (sync, s.skills.subscribe())
        })
        .await
        .ok()
}

async fn handle_socket(
    mut socket: WebSocket,
    sessions: Arc<SessionManager>,
    session_id: Uuid,
    mut rx: broadcast::Receiver<Selection>,
    initial: SelectionView,
) {
    info!(session_id = %session_id, "Skills WebSocket client connected");

    if !send_json(&mut socket, &SkillsWsMessage::SelectionSync { view: initial }).await {
        warn!("Failed to send initial sync, client disconnected");
        return;
    }

    loop {
        tokio::select! {
            result = rx.recv() => {
                match result {
                    Ok(selection) => {
                        let msg = SkillsWsMessage::SelectionChanged { view: selection.view() };
                        if !send_json(&mut socket, &msg).await {
                            debug!("Client disconnected during send");
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!(missed = n, "Skills WS client lagged behind, re-syncing");
                        let Some((sync, fresh)) = resync(&sessions, session_id).await else {
                            debug!(session_id = %session_id, "Session gone during re-sync");
                            break;
                        };
                        // Stale queued snapshots are skipped
                        rx = fresh;
                        if !send_json(&mut socket, &sync).await {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        debug!(session_id = %session_id, "Session ended, closing skills feed");
                        break;
                    }
                }
            }

            result = socket.recv() => {
                if let Some(Ok(_)) = &result {
                    // Client traffic counts as session activity
                    if sessions.with_session(session_id, |_| ()).await.is_err() {
                        break;
                    }
                }
                match result {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        info!("Skills WebSocket client disconnected");
                        break;
                    }
                    Some(Err(e)) => {
                        warn!(error = %e, "WebSocket error");
                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    info!(session_id = %session_id, "Skills WebSocket connection closed");
}
