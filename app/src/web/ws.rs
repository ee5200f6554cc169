//! WebSocket handler — init handshake + periodic swing streaming.
//!
//! Protocol:
//!   1. Client sends:  `{ "type": "start", "name": "My Dashboard" }`
//!   2. Server sends:  `{ "type": "init", "club": "7I", "skill": "intermediate" }`
//!   3. Server streams one `SwingEnvelope` per configured interval
//!   4. Client may retune the feed at any time:
//!      `{ "cmd": "club", "club": "DR" }` / `{ "cmd": "skill", "skill": "expert" }`

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use chrono::Utc;
use futures_util::{SinkExt, StreamExt};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::WebState;
use swingforge::{Club, SkillTier, SwingEnvelope};

/// GET /api/ws — upgrade to WebSocket.
pub async fn ws_upgrade(
    State(state): State<Arc<WebState>>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

async fn handle_ws(socket: WebSocket, state: Arc<WebState>) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    // Phase 1: Wait for "start" message from client
    let client_name = loop {
        match ws_rx.next().await {
            Some(Ok(Message::Text(text))) => {
                if let Some(name) = parse_start_message(&text) {
                    break name;
                }
                // Not a start message — ignore and keep waiting
            }
            Some(Ok(Message::Close(_))) | None => return,
            _ => continue,
        }
    };

    state.ws_count.fetch_add(1, Ordering::Relaxed);
    tracing::info!("ws: client '{client_name}' connected");

    // Phase 2: Send "init" response with the feed's starting tuning
    let mut club = state.settings.generator.club.clone();
    let mut skill = state.settings.generator.skill;

    let init_msg = serde_json::json!({
        "type": "init",
        "club": club,
        "skill": skill,
    });
    if ws_tx
        .send(Message::text(init_msg.to_string()))
        .await
        .is_err()
    {
        state.ws_count.fetch_sub(1, Ordering::Relaxed);
        return;
    }

    // Phase 3: Stream swings + receive retune commands
    let mut rng = StdRng::from_entropy();
    let mut sequence: u64 = 0;
    let interval = Duration::from_secs(state.settings.server.stream_interval_secs.max(1));
    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                sequence += 1;
                match swingforge::generate(&club, skill, &mut rng) {
                    Ok(record) => {
                        let envelope = SwingEnvelope {
                            sequence,
                            timestamp: Utc::now(),
                            record,
                        };
                        match serde_json::to_string(&envelope) {
                            Ok(json) => {
                                if ws_tx.send(Message::text(json)).await.is_err() {
                                    break;
                                }
                            }
                            Err(e) => tracing::warn!("ws: serialize failed: {e}"),
                        }
                    }
                    Err(e) => tracing::warn!("ws: generation failed for '{club}': {e}"),
                }
            }
            msg = ws_rx.next() => match msg {
                Some(Ok(Message::Text(text))) => {
                    apply_ws_command(&text, &mut club, &mut skill);
                }
                Some(Ok(Message::Close(_))) | None => break,
                _ => {}
            }
        }
    }

    state.ws_count.fetch_sub(1, Ordering::Relaxed);
    tracing::info!("ws: client '{client_name}' disconnected");
}

/// Parse a "start" handshake message. Returns the client name if valid.
fn parse_start_message(text: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct StartMsg {
        #[serde(rename = "type")]
        msg_type: String,
        #[serde(default)]
        name: String,
    }
    let msg: StartMsg = serde_json::from_str(text).ok()?;
    if msg.msg_type == "start" {
        Some(if msg.name.is_empty() {
            "anonymous".to_string()
        } else {
            msg.name
        })
    } else {
        None
    }
}

/// Parse a client command and retune the feed. Unknown commands and
/// unknown club codes are ignored.
fn apply_ws_command(text: &str, club: &mut String, skill: &mut SkillTier) {
    #[derive(serde::Deserialize)]
    struct WsCmd {
        cmd: String,
        club: Option<String>,
        skill: Option<SkillTier>,
    }

    let Ok(msg) = serde_json::from_str::<WsCmd>(text) else {
        return;
    };

    match msg.cmd.as_str() {
        "club" => {
            if let Some(c) = msg.club.as_deref().and_then(Club::from_code) {
                tracing::info!("ws: club -> {c}");
                *club = c.to_string();
            }
        }
        "skill" => {
            if let Some(s) = msg.skill {
                tracing::info!("ws: skill -> {s}");
                *skill = s;
            }
        }
        _ => {}
    }
}
