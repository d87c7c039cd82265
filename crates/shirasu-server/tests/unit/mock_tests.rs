//! Mock client tests

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use shirasu_application::addon::rules;
use shirasu_application::di::{Injectable, names};
use shirasu_application::{Addon, AddonPool, Context};
use shirasu_domain::{Client, Message, MessageTarget};
use shirasu_server::MockClient;
use shirasu_server::mock::{MOCK_GROUP_ID, MOCK_USER_ID, mock_meta_event, mock_notice_event};

const MESSAGE_TEXT: &str = "hello";

fn send_on_connected() -> Addon {
    Addon::new("send_on_connected", "", "").with_receiver(
        rules::lifecycle("connected"),
        Injectable::new([names::CLIENT], |deps| async move {
            let client: Arc<dyn Client> = deps.get(names::CLIENT)?;
            client
                .send_msg(
                    &MessageTarget::Private {
                        user_id: MOCK_USER_ID,
                    },
                    Message::from(MESSAGE_TEXT),
                    false,
                )
                .await?;
            Ok(())
        }),
    )
}

fn shout() -> Addon {
    Addon::new("shout", "/shout text", "").with_receiver(
        rules::command("shout"),
        Injectable::new([names::CTX], |deps| async move {
            let ctx: Context = deps.get(names::CTX)?;
            ctx.reject(ctx.arg().to_uppercase()).await?;
            Ok(())
        }),
    )
}

#[tokio::test]
async fn test_lifecycle_connected() {
    let mut pool = AddonPool::new();
    pool.load(send_on_connected()).unwrap();
    let client = MockClient::new(pool).unwrap();

    client
        .post_event(mock_meta_event("lifecycle", Some("connected")))
        .await
        .unwrap();
    let sent = client.next_message().await.unwrap();
    assert_eq!(sent.message.plain_text(), MESSAGE_TEXT);
    assert_eq!(
        sent.target,
        MessageTarget::Private {
            user_id: MOCK_USER_ID
        }
    );

    // Heartbeats never reach addons.
    client
        .post_event(mock_meta_event("heartbeat", None))
        .await
        .unwrap();
    assert!(client.next_message().await.is_none());
}

#[tokio::test]
async fn test_group_reply_keeps_rejection_flag() {
    let mut pool = AddonPool::new();
    pool.load(shout()).unwrap();
    let client = MockClient::new(pool).unwrap();

    client.post_group_message("/shout quiet").await.unwrap();
    let sent = client.get_message(Duration::from_millis(100)).await.unwrap();
    assert_eq!(sent.message.plain_text(), "QUIET");
    assert!(sent.is_rejected);
    assert_eq!(
        sent.target,
        MessageTarget::Group {
            group_id: MOCK_GROUP_ID
        }
    );
}

#[tokio::test]
async fn test_call_action_is_recorded() {
    let welcome = Addon::new("welcome", "", "").with_receiver(
        rules::notice("group_increase"),
        Injectable::new([names::CTX], |deps| async move {
            let ctx: Context = deps.get(names::CTX)?;
            let user_id = ctx.event().user_id().unwrap_or_default();
            ctx.call_action("set_group_card", json!({ "user_id": user_id, "card": "new" }))
                .await?;
            Ok(())
        }),
    );
    let mut pool = AddonPool::new();
    pool.load(welcome).unwrap();
    let client = MockClient::new(pool).unwrap();

    let report = client
        .post_event(mock_notice_event("group_increase", 77))
        .await
        .unwrap();
    assert_eq!(report.matched, ["welcome"]);
    assert_eq!(
        client.actions(),
        [(
            "set_group_card".to_string(),
            json!({ "user_id": 77, "card": "new" })
        )]
    );
    assert!(client.next_message().await.is_none());
}
