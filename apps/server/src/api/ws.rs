//! WebSocket push of live transaction events.
//!
//! A socket is bound to one owner at upgrade time and only receives that
//! owner's events. Browsers cannot set headers on a WebSocket handshake, so
//! the token may also arrive as `?token=`.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{rejection::WebSocketUpgradeRejection, Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::broadcast;

use crate::{
    auth::{bearer_token, resolve_user, AuthError, AuthUser},
    events::ServerEvent,
    main_lib::AppState,
};

#[derive(Debug, Deserialize)]
struct WsParams {
    token: Option<String>,
}

async fn live_updates(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WsParams>,
    headers: HeaderMap,
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
) -> Response {
    let token = bearer_token(&headers).or(params.token.as_deref());
    let user = match token.map(|t| resolve_user(&state, t)) {
        Some(Ok(user)) => user,
        Some(Err(err)) => return err.into_response(),
        None => return AuthError::Unauthorized.into_response(),
    };
    let ws = match ws {
        Ok(ws) => ws,
        Err(rejection) => return rejection.into_response(),
    };

    let rx = state.event_bus.subscribe();
    ws.on_upgrade(move |socket| handle_socket(socket, user, rx))
}

async fn handle_socket(
    socket: WebSocket,
    user: AuthUser,
    mut rx: broadcast::Receiver<ServerEvent>,
) {
    tracing::debug!("Live update socket opened for user {}", user.id);
    let (mut ws_sender, mut ws_receiver) = socket.split();

    // Client frames are ignored; reading them notices the close.
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = ws_receiver.next().await {
            if let Message::Close(_) = msg {
                break;
            }
        }
    });

    let owner_id = user.id;
    let mut send_task = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) if event.owner_id == owner_id => {
                    let json = match serde_json::to_string(&event.to_frame()) {
                        Ok(j) => j,
                        Err(e) => {
                            tracing::error!("Failed to encode {} event: {}", event.name, e);
                            continue;
                        }
                    };
                    if ws_sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(
                        "Live update socket of user {} lagged by {} events",
                        owner_id,
                        n
                    );
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    }
    tracing::debug!("Live update socket closed for user {}", user.id);
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/ws", get(live_updates))
}
