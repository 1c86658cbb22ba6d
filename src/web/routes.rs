//! HTTP routes for the intake → consent → interview flow.

use std::sync::Arc;

use axum::{
    Form, Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header::SET_COOKIE},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{cookie, render, ws};
use crate::consent::checkbox_checked;
use crate::intake::ContactForm;
use crate::pages::Page;
use crate::session::{Session, SessionManager};
use crate::skills::SkillAction;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionManager>,
    /// Name of the session cookie.
    pub cookie_name: Arc<str>,
}

impl AppState {
    pub fn new(sessions: Arc<SessionManager>, cookie_name: impl Into<Arc<str>>) -> Self {
        Self {
            sessions,
            cookie_name: cookie_name.into(),
        }
    }

    /// Run `f` against the caller's session, creating one if needed.
    pub(super) async fn session<R>(
        &self,
        headers: &HeaderMap,
        f: impl FnOnce(&mut Session) -> R,
    ) -> (SessionHandle, R) {
        let requested = cookie::session_id(headers, &self.cookie_name);
        let (id, created, out) = self.sessions.open(requested, f).await;
        (SessionHandle { id, created }, out)
    }

    /// Attach the session cookie to `resp` when the session is new.
    pub(super) fn respond(&self, handle: SessionHandle, resp: impl IntoResponse) -> Response {
        let mut resp = resp.into_response();
        if handle.created {
            match HeaderValue::from_str(&cookie::set_session(&self.cookie_name, handle.id)) {
                Ok(value) => {
                    resp.headers_mut().append(SET_COOKIE, value);
                }
                Err(e) => warn!(error = %e, "Invalid session cookie header"),
            }
        }
        resp
    }
}

/// The session a request resolved to.
#[derive(Debug, Clone, Copy)]
pub(super) struct SessionHandle {
    pub id: Uuid,
    pub created: bool,
}

/// Build the router with every page, form action, JSON and WebSocket route.
pub fn app_routes(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/skills", get(api_get_skills))
        .route("/api/skills/{action}", post(api_skill_action))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/", get(intake_page).post(submit_intake))
        .route("/skills/{action}", post(skill_action))
        .route("/interview_page", get(consent_page).post(submit_consent))
        .route("/interview_process", get(interview_process))
        .route("/session/reset", post(reset_session))
        .route("/ws/skills", get(ws::ws_handler))
        .route("/health", get(health))
        .merge(api)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "bhartee-interview"
    }))
}

// ── Pages ───────────────────────────────────────────────────────────────

async fn intake_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (handle, (view, flash)) = state
        .session(&headers, |s| (s.skills.view(), s.take_flash()))
        .await;
    state.respond(handle, Html(render::intake_page(&view, flash.as_deref())))
}

async fn submit_intake(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ContactForm>,
) -> Response {
    let (handle, next) = state
        .session(&headers, |s| {
            let submission = form.submit(s.skills.selection());
            s.set_flash(submission.echo);
            submission.next
        })
        .await;
    info!(session_id = %handle.id, next = %next, "Intake submitted");
    state.respond(handle, Redirect::to(next.path()))
}

async fn consent_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (handle, flash) = state.session(&headers, |s| s.take_flash()).await;
    state.respond(handle, Html(render::consent_page(flash.as_deref())))
}

#[derive(Debug, Deserialize)]
struct ConsentForm {
    checkbox: Option<String>,
}

async fn submit_consent(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ConsentForm>,
) -> Response {
    let checked = checkbox_checked(form.checkbox.as_deref());
    let (handle, decision) = state.session(&headers, |s| s.consent.submit(checked)).await;

    match decision {
        Ok(next) => state.respond(handle, Redirect::to(next.path())),
        Err(e) => {
            debug!(session_id = %handle.id, "Consent blocked");
            let page = render::consent_page(Some(&e.to_string()));
            state.respond(handle, (StatusCode::UNPROCESSABLE_ENTITY, Html(page)))
        }
    }
}

async fn interview_process() -> impl IntoResponse {
    Html(render::interview_process_page())
}

async fn reset_session(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(id) = cookie::session_id(&headers, &state.cookie_name) {
        state.sessions.end(id).await;
    }
    let mut resp = Redirect::to(Page::Intake.path()).into_response();
    if let Ok(value) = HeaderValue::from_str(&cookie::clear_session(&state.cookie_name)) {
        resp.headers_mut().append(SET_COOKIE, value);
    }
    resp
}

// ── Skill actions ───────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct SkillRequest {
    #[serde(default)]
    item: Option<String>,
}

fn not_found_action(action: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": format!("Unknown skill action: {action}")})),
    )
        .into_response()
}

async fn skill_action(
    State(state): State<AppState>,
    Path(action): Path<String>,
    headers: HeaderMap,
    Form(req): Form<SkillRequest>,
) -> Response {
    let Ok(parsed) = action.parse::<SkillAction>() else {
        return not_found_action(&action);
    };
    let (handle, ()) = state
        .session(&headers, |s| parsed.apply(&mut s.skills, req.item.as_deref()))
        .await;
    debug!(session_id = %handle.id, action = %parsed, "Skill action");
    state.respond(handle, Redirect::to(Page::Intake.path()))
}

async fn api_get_skills(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (handle, view) = state.session(&headers, |s| s.skills.view()).await;
    state.respond(handle, Json(view))
}

/// POST /api/skills/{action}
///
/// Body is optional JSON `{"item": "..."}`; returns the new selection view.
async fn api_skill_action(
    State(state): State<AppState>,
    Path(action): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Ok(parsed) = action.parse::<SkillAction>() else {
        return not_found_action(&action);
    };
    let req = if body.is_empty() {
        SkillRequest::default()
    } else {
        match serde_json::from_slice::<SkillRequest>(&body) {
            Ok(req) => req,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({"error": format!("Invalid request body: {e}")})),
                )
                    .into_response();
            }
        }
    };

    let (handle, view) = state
        .session(&headers, |s| {
            parsed.apply(&mut s.skills, req.item.as_deref());
            s.skills.view()
        })
        .await;
    debug!(session_id = %handle.id, action = %parsed, "Skill action via API");
    state.respond(handle, Json(view))
}
