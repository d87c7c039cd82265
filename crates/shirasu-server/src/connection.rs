//! Connection core
//!
//! ```text
//! Disconnected ─▶ Connecting ─▶ Listening ─┬─▶ Reconnecting ─▶ Connecting ...
//!                                          └─▶ Disconnected
//! ```
//!
//! One [`Connection::listen`] call is one session. Inbound events are
//! dispatched on tasks of a per-session [`JoinSet`]; when the session ends
//! the whole set is aborted, so nothing from an old session survives a
//! reconnect. [`Connection::listen_forever`] reruns sessions through the
//! fixed-delay retry loop until shutdown or a fatal error.

use std::sync::Arc;
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use serde_json::Value;
use shirasu_application::EventDispatcher;
use shirasu_domain::error::{Error, Result};
use shirasu_domain::ports::Client;
use shirasu_infrastructure::{ConnectionConfig, CorrelationTable, RetryPolicy, retry_with_policy};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::client::OneBotClient;
use crate::constants::OUTBOUND_QUEUE_CAPACITY;
use crate::transport::{ActionResponse, Frame, decode_message, map_ws_error};

/// Where the connection is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Listening,
    Reconnecting,
}

/// Owns the socket to the OneBot implementation
#[derive(Debug)]
pub struct Connection {
    config: ConnectionConfig,
    call_timeout: Duration,
    dispatcher: EventDispatcher,
    calls: Arc<CorrelationTable<ActionResponse>>,
    state: watch::Sender<ConnectionState>,
    shutdown: CancellationToken,
}

impl Connection {
    /// Create a disconnected connection
    ///
    /// The default call timeout comes from the dispatcher's bot settings.
    pub fn new(config: ConnectionConfig, dispatcher: EventDispatcher) -> Self {
        let call_timeout = dispatcher.config().call_timeout();
        let (state, _) = watch::channel(ConnectionState::Disconnected);
        Self {
            config,
            call_timeout,
            dispatcher,
            calls: Arc::new(CorrelationTable::new()),
            state,
            shutdown: CancellationToken::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    /// Watch state changes
    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }

    /// Token that stops the connection when cancelled
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Request shutdown
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    /// Pending call table shared by every session
    pub fn calls(&self) -> &Arc<CorrelationTable<ActionResponse>> {
        &self.calls
    }

    /// Run one session
    ///
    /// Returns `Ok(())` on shutdown. A dropped or refused connection is
    /// returned as `ConnectionClosed` / `ConnectionRefused`.
    pub async fn listen(&self) -> Result<()> {
        self.set_state(ConnectionState::Connecting);
        let outcome = self.session().await;
        let next = match &outcome {
            Err(error) if error.reconnect_reason().is_some() && !self.shutdown.is_cancelled() => {
                ConnectionState::Reconnecting
            }
            _ => ConnectionState::Disconnected,
        };
        self.set_state(next);
        outcome
    }

    /// Run sessions until shutdown or a fatal error
    pub async fn listen_forever(&self) -> Result<()> {
        let policy = RetryPolicy::from(&self.config);
        let outcome = retry_with_policy(&policy, &self.shutdown, || self.listen()).await;
        self.set_state(ConnectionState::Disconnected);
        outcome
    }

    async fn session(&self) -> Result<()> {
        let (socket, _) = connect_async(self.config.url.as_str())
            .await
            .map_err(map_ws_error)?;
        info!(url = %self.config.url, "Connected");
        self.set_state(ConnectionState::Listening);

        let (mut sink, mut stream) = socket.split();
        let (outbound, mut queued) = mpsc::channel::<String>(OUTBOUND_QUEUE_CAPACITY);
        let client: Arc<dyn Client> = Arc::new(OneBotClient::new(
            outbound,
            Arc::clone(&self.calls),
            self.call_timeout,
        ));
        let mut tasks = JoinSet::new();

        let outcome = loop {
            tokio::select! {
                () = self.shutdown.cancelled() => {
                    if let Err(e) = sink.send(WsMessage::Close(None)).await {
                        debug!(error = %e, "Close frame not delivered");
                    }
                    break Ok(());
                }
                Some(frame) = queued.recv() => {
                    if let Err(e) = sink.send(WsMessage::Text(frame)).await {
                        break Err(map_ws_error(e));
                    }
                }
                incoming = stream.next() => match incoming {
                    None => break Err(Error::ConnectionClosed),
                    Some(Err(e)) => break Err(map_ws_error(e)),
                    Some(Ok(message)) => match decode_message(message) {
                        Ok(Some(value)) => self.handle_frame(value, &client, &mut tasks),
                        Ok(None) => {}
                        Err(Error::ConnectionClosed) => break Err(Error::ConnectionClosed),
                        Err(e) => warn!(error = %e, "Skipping malformed frame"),
                    },
                },
                Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                    if let Err(e) = joined {
                        error!(error = %e, "Dispatch task aborted");
                    }
                }
            }
        };

        if !tasks.is_empty() {
            warn!(count = tasks.len(), "Canceling tasks left over from the session");
        }
        tasks.shutdown().await;
        let dropped = self.calls.clear();
        if dropped > 0 {
            debug!(count = dropped, "Dropped pending calls");
        }
        outcome
    }

    fn handle_frame(&self, value: Value, client: &Arc<dyn Client>, tasks: &mut JoinSet<()>) {
        match Frame::classify(value) {
            Ok(Frame::Response(response)) => match response.id() {
                Some(echo) => {
                    self.calls.set(echo, response);
                }
                None => warn!(echo = %response.echo, "Response with an unusable echo"),
            },
            Ok(Frame::Event(event)) => {
                let dispatcher = self.dispatcher.clone();
                let client = Arc::clone(client);
                tasks.spawn(async move {
                    if let Err(e) = dispatcher.dispatch(event, client).await {
                        error!(error = %e, "Dispatch failed");
                    }
                });
            }
            Err(e) => warn!(error = %e, "Skipping malformed frame"),
        }
    }

    fn set_state(&self, state: ConnectionState) {
        let previous = self.state.send_replace(state);
        if previous != state {
            debug!(from = ?previous, to = ?state, "Connection state changed");
        }
    }
}
