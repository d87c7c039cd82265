//! Socket-free client for addon tests
//!
//! [`MockClient`] dispatches events straight into an [`EventDispatcher`]
//! and records every message the addons send instead of putting it on the
//! wire.
//!
//! ```rust,no_run
//! # async fn demo() -> shirasu_domain::Result<()> {
//! use std::time::Duration;
//! use shirasu_application::AddonPool;
//! use shirasu_server::MockClient;
//!
//! let client = MockClient::new(AddonPool::from_modules(["echo"])?)?;
//! client.post_group_message("/echo hello").await?;
//! let reply = client.get_message(Duration::from_millis(100)).await;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value, json};
use shirasu_application::{AddonPool, DispatchReport, EventDispatcher, Injector};
use shirasu_domain::error::Result;
use shirasu_domain::ports::Client;
use shirasu_domain::{BotSettings, Event, Message, MessageTarget, MessageType};
use tokio::sync::{Mutex, mpsc};

/// Sender of mock message events
pub const MOCK_USER_ID: i64 = 10_001;

/// Account id of the mock bot
pub const MOCK_SELF_ID: i64 = 1;

/// Group of mock group messages
pub const MOCK_GROUP_ID: i64 = 1883;

/// Default wait of [`MockClient::next_message`]
pub const DEFAULT_MESSAGE_WAIT: Duration = Duration::from_millis(100);

/// A message an addon sent
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub target: MessageTarget,
    pub message: Message,
    pub is_rejected: bool,
}

/// Records outbound traffic
#[derive(Debug)]
struct Recorder {
    sent: mpsc::UnboundedSender<SentMessage>,
    actions: std::sync::Mutex<Vec<(String, Value)>>,
    next_message_id: AtomicI64,
}

#[async_trait]
impl Client for Recorder {
    async fn call_action(&self, action: &str, params: Value) -> Result<Value> {
        if let Ok(mut actions) = self.actions.lock() {
            actions.push((action.to_string(), params));
        }
        Ok(Value::Object(Map::new()))
    }

    async fn send_msg(
        &self,
        target: &MessageTarget,
        message: Message,
        is_rejected: bool,
    ) -> Result<i64> {
        // The receiver lives as long as the mock; a failed send only means
        // nobody is reading anymore.
        let _ = self.sent.send(SentMessage {
            target: *target,
            message,
            is_rejected,
        });
        Ok(self.next_message_id.fetch_add(1, Ordering::Relaxed))
    }
}

/// In-process client for exercising addons
#[derive(Debug, Clone)]
pub struct MockClient {
    dispatcher: EventDispatcher,
    recorder: Arc<Recorder>,
    received: Arc<Mutex<mpsc::UnboundedReceiver<SentMessage>>>,
}

impl MockClient {
    /// Mock over `pool` with default settings
    pub fn new(pool: AddonPool) -> Result<Self> {
        Self::with_settings(pool, BotSettings::default())
    }

    /// Mock over `pool` with explicit settings
    pub fn with_settings(pool: AddonPool, settings: BotSettings) -> Result<Self> {
        let dispatcher = EventDispatcher::new(
            Arc::new(Injector::new()),
            Arc::new(pool),
            Arc::new(settings),
        )?;
        let (sent, received) = mpsc::unbounded_channel();
        Ok(Self {
            dispatcher,
            recorder: Arc::new(Recorder {
                sent,
                actions: std::sync::Mutex::new(Vec::new()),
                next_message_id: AtomicI64::new(1),
            }),
            received: Arc::new(Mutex::new(received)),
        })
    }

    pub fn pool(&self) -> &Arc<AddonPool> {
        self.dispatcher.pool()
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    /// Dispatch a raw event frame and wait for every addon to finish
    pub async fn post_event(&self, raw: Value) -> Result<DispatchReport> {
        let event = Event::from_value(raw)?;
        let client: Arc<dyn Client> = Arc::clone(&self.recorder) as Arc<dyn Client>;
        self.dispatcher.dispatch(event, client).await
    }

    /// Post a private message from [`MOCK_USER_ID`]
    pub async fn post_message(&self, raw_message: &str) -> Result<DispatchReport> {
        self.post_event(mock_message_event(MessageType::Private, raw_message, MOCK_USER_ID))
            .await
    }

    /// Post a message from [`MOCK_USER_ID`] in [`MOCK_GROUP_ID`]
    pub async fn post_group_message(&self, raw_message: &str) -> Result<DispatchReport> {
        self.post_event(mock_message_event(MessageType::Group, raw_message, MOCK_USER_ID))
            .await
    }

    /// Next recorded message, or `None` if nothing arrives within `timeout`
    pub async fn get_message(&self, timeout: Duration) -> Option<SentMessage> {
        let mut received = self.received.lock().await;
        tokio::time::timeout(timeout, received.recv())
            .await
            .ok()
            .flatten()
    }

    /// [`get_message`](Self::get_message) with the default wait
    pub async fn next_message(&self) -> Option<SentMessage> {
        self.get_message(DEFAULT_MESSAGE_WAIT).await
    }

    /// Actions called through `call_action`, oldest first
    pub fn actions(&self) -> Vec<(String, Value)> {
        self.recorder
            .actions
            .lock()
            .map(|actions| actions.clone())
            .unwrap_or_default()
    }
}

/// A message event frame
///
/// Group messages are posted in [`MOCK_GROUP_ID`].
pub fn mock_message_event(message_type: MessageType, raw_message: &str, user_id: i64) -> Value {
    let mut frame = json!({
        "time": 0,
        "self_id": MOCK_SELF_ID,
        "post_type": "message",
        "message_type": message_type,
        "sub_type": "normal",
        "message_id": 0,
        "user_id": user_id,
        "message": raw_message,
        "raw_message": raw_message,
        "font": 0,
    });
    if message_type == MessageType::Group {
        frame["group_id"] = json!(MOCK_GROUP_ID);
    }
    frame
}

/// A meta event frame
pub fn mock_meta_event(meta_event_type: &str, sub_type: Option<&str>) -> Value {
    let mut frame = json!({
        "time": 0,
        "self_id": MOCK_SELF_ID,
        "post_type": "meta_event",
        "meta_event_type": meta_event_type,
    });
    if let Some(sub_type) = sub_type {
        frame["sub_type"] = json!(sub_type);
    }
    frame
}

/// A notice event frame
pub fn mock_notice_event(notice_type: &str, user_id: i64) -> Value {
    json!({
        "time": 0,
        "self_id": MOCK_SELF_ID,
        "post_type": "notice",
        "notice_type": notice_type,
        "user_id": user_id,
    })
}
