//! Integration tests for the live skills WebSocket feed.
//!
//! Each test spins up an Axum server on a random port, connects via
//! tokio-tungstenite with a session cookie, and mutates the session through
//! the same router.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, SET_COOKIE};
use axum::http::Request;
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::time::timeout;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tower::ServiceExt;

use bhartee_interview::session::SessionManager;
use bhartee_interview::web::{AppState, app_routes};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Start the app on a random port, return (port, router, sessions).
async fn start_server() -> (u16, Router, Arc<SessionManager>) {
    let sessions = SessionManager::new(Duration::from_secs(3600));
    let app = app_routes(AppState::new(Arc::clone(&sessions), "bhartee_session"));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let served = app.clone();
    tokio::spawn(async move {
        axum::serve(listener, served).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    (port, app, sessions)
}

/// Open a session in-process and return its cookie pair.
async fn open_session(app: &Router) -> String {
    let resp = app
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    resp.headers()
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

async fn post_action(app: &Router, cookie: &str, action: &str, body: &str) {
    let req = Request::post(format!("/api/skills/{action}"))
        .header(CONTENT_TYPE, "application/json")
        .header("cookie", cookie)
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert!(resp.status().is_success());
}

async fn connect(
    port: u16,
    cookie: &str,
) -> tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>> {
    let mut req = format!("ws://127.0.0.1:{port}/ws/skills")
        .into_client_request()
        .unwrap();
    req.headers_mut()
        .insert("cookie", HeaderValue::from_str(cookie).unwrap());
    let (ws, _resp) = connect_async(req).await.expect("WS connect failed");
    ws
}

/// Parse a WS text frame into a serde_json::Value.
fn parse_ws_json(msg: &Message) -> Value {
    match msg {
        Message::Text(txt) => serde_json::from_str(txt).expect("invalid JSON from server"),
        other => panic!("expected Text frame, got {:?}", other),
    }
}

#[tokio::test]
async fn ws_connect_receives_current_selection() {
    timeout(TEST_TIMEOUT, async {
        let (port, app, _sessions) = start_server().await;
        let cookie = open_session(&app).await;
        post_action(&app, &cookie, "add", r#"{"item":"Robotics"}"#).await;

        let mut ws = connect(port, &cookie).await;

        let json = parse_ws_json(&ws.next().await.unwrap().unwrap());
        assert_eq!(json["type"], "selection_sync");
        assert_eq!(json["view"]["count"], 4);
        assert_eq!(json["view"]["selected"][3], "Robotics");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn ws_receives_change_after_mutation() {
    timeout(TEST_TIMEOUT, async {
        let (port, app, _sessions) = start_server().await;
        let cookie = open_session(&app).await;

        let mut ws = connect(port, &cookie).await;
        let _ = ws.next().await.unwrap().unwrap();

        post_action(&app, &cookie, "add", r#"{"item":"AI"}"#).await;
        let json = parse_ws_json(&ws.next().await.unwrap().unwrap());
        assert_eq!(json["type"], "selection_changed");
        assert_eq!(json["view"]["count"], 4);

        post_action(&app, &cookie, "remove", r#"{"item":"Networking"}"#).await;
        let json = parse_ws_json(&ws.next().await.unwrap().unwrap());
        assert_eq!(
            json["view"]["selected"],
            serde_json::json!(["Data Management", "Security", "AI"])
        );
        let unselected = json["view"]["unselected"].as_array().unwrap();
        assert!(unselected.contains(&Value::from("Networking")));
        assert!(!unselected.contains(&Value::from("AI")));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn ws_ignores_other_sessions() {
    timeout(TEST_TIMEOUT, async {
        let (port, app, _sessions) = start_server().await;
        let watched = open_session(&app).await;
        let other = open_session(&app).await;

        let mut ws = connect(port, &watched).await;
        let _ = ws.next().await.unwrap().unwrap();

        post_action(&app, &other, "clear", "").await;
        post_action(&app, &watched, "all", "").await;

        // The first change seen is the watched session's own
        let json = parse_ws_json(&ws.next().await.unwrap().unwrap());
        assert_eq!(json["view"]["count"], 10);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn ws_closes_when_session_ends() {
    timeout(TEST_TIMEOUT, async {
        let (port, app, sessions) = start_server().await;
        let cookie = open_session(&app).await;

        let mut ws = connect(port, &cookie).await;
        let _ = ws.next().await.unwrap().unwrap();

        let id = cookie.split_once('=').unwrap().1.parse().unwrap();
        assert!(sessions.end(id).await);

        // Server drops the feed; the stream ends with a close or EOF
        loop {
            match ws.next().await {
                None | Some(Err(_)) | Some(Ok(Message::Close(_))) => break,
                Some(Ok(other)) => panic!("unexpected frame: {other:?}"),
            }
        }
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn ws_answers_ping() {
    timeout(TEST_TIMEOUT, async {
        let (port, app, _sessions) = start_server().await;
        let cookie = open_session(&app).await;

        let mut ws = connect(port, &cookie).await;
        let _ = ws.next().await.unwrap().unwrap();

        ws.send(Message::Ping(vec![1, 2, 3].into())).await.unwrap();
        let msg = ws.next().await.unwrap().unwrap();
        assert!(matches!(msg, Message::Pong(_)));
    })
    .await
    .expect("test timed out");
}
