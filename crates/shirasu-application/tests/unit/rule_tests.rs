//! Tests for rules and rule factories

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde_json::json;
use shirasu_application::Rule;
use shirasu_application::addon::rules;
use shirasu_application::di::Injectable;
use shirasu_domain::{BotSettings, Event};
use tokio::sync::Notify;

use crate::support::{frame_scope, message_event};

fn counting(result: bool, calls: &Arc<AtomicUsize>) -> Rule {
    let calls = Arc::clone(calls);
    Rule::new(Injectable::sync(Vec::<String>::new(), move |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(result)
    }))
}

/// Left waits for a signal only the right operand sends
fn handshake(left_result: bool, right_result: bool) -> (Rule, Rule) {
    let notify = Arc::new(Notify::new());
    let waiter = Arc::clone(&notify);
    let left = Rule::new(Injectable::new(Vec::<String>::new(), move |_| {
        let waiter = Arc::clone(&waiter);
        async move {
            waiter.notified().await;
            Ok(left_result)
        }
    }));
    let right = Rule::new(Injectable::sync(Vec::<String>::new(), move |_| {
        notify.notify_one();
        Ok(right_result)
    }));
    (left, right)
}

async fn eval(rule: &Rule, event: Event) -> bool {
    let (scope, _) = frame_scope(event, BotSettings::default());
    rule.matches(&scope).await.unwrap()
}

#[tokio::test]
async fn test_or_evaluates_both_operands() {
    let left = Arc::new(AtomicUsize::new(0));
    let right = Arc::new(AtomicUsize::new(0));
    let rule = counting(true, &left) | counting(false, &right);

    assert!(eval(&rule, message_event(2, "x")).await);
    assert_eq!(left.load(Ordering::SeqCst), 1);
    assert_eq!(right.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_and_evaluates_both_operands() {
    let left = Arc::new(AtomicUsize::new(0));
    let right = Arc::new(AtomicUsize::new(0));
    let rule = counting(false, &left) & counting(true, &right);

    assert!(!eval(&rule, message_event(2, "x")).await);
    assert_eq!(left.load(Ordering::SeqCst), 1);
    assert_eq!(right.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_or_runs_operands_concurrently() {
    let (left, right) = handshake(false, true);
    let rule = left | right;
    let matched = tokio::time::timeout(
        Duration::from_secs(1),
        eval(&rule, message_event(2, "x")),
    )
    .await
    .expect("left operand never saw the right one run");
    assert!(matched);
}

#[tokio::test]
async fn test_and_runs_operands_concurrently() {
    let (left, right) = handshake(true, true);
    let rule = left & right;
    let matched = tokio::time::timeout(
        Duration::from_secs(1),
        eval(&rule, message_event(2, "x")),
    )
    .await
    .expect("left operand never saw the right one run");
    assert!(matched);
}

#[tokio::test]
async fn test_truth_tables() {
    let calls = Arc::new(AtomicUsize::new(0));
    for (l, r) in [(false, false), (false, true), (true, false), (true, true)] {
        let or = counting(l, &calls) | counting(r, &calls);
        let and = counting(l, &calls) & counting(r, &calls);
        assert_eq!(eval(&or, message_event(2, "x")).await, l || r);
        assert_eq!(eval(&and, message_event(2, "x")).await, l && r);
    }
}

#[tokio::test]
async fn test_command_captures_args() {
    let (scope, args) = frame_scope(message_event(2, "/echo  hello world "), BotSettings::default());
    assert!(rules::command("echo").matches(&scope).await.unwrap());
    assert_eq!(args.text(), "hello world");
    assert_eq!(args.split(), ["hello", "world"]);
}

#[tokio::test]
async fn test_command_requires_prefix_and_word_boundary() {
    let rule = rules::command("echo");
    assert!(!eval(&rule, message_event(2, "echo hello")).await);
    assert!(!eval(&rule, message_event(2, "/echoes")).await);
    assert!(eval(&rule, message_event(2, "/echo")).await);
}

#[tokio::test]
async fn test_command_uses_configured_prefixes() {
    let settings = BotSettings {
        command_start: vec!["!".to_string(), "#".to_string()],
        ..BotSettings::default()
    };
    let (scope, args) = frame_scope(message_event(2, "#square 3"), settings);
    assert!(rules::command("square").matches(&scope).await.unwrap());
    assert_eq!(args.text(), "3");
}

#[tokio::test]
async fn test_regex_anchored_at_start() {
    let rule = rules::regex_str("hel+o").unwrap();
    assert!(eval(&rule, message_event(2, "hello there")).await);
    assert!(!eval(&rule, message_event(2, "say hello")).await);
    assert!(rules::regex_str("(").is_err());
}

#[tokio::test]
async fn test_notice_request_lifecycle() {
    let notice = Event::from_value(json!({
        "post_type": "notice", "notice_type": "group_increase",
    }))
    .unwrap();
    let request = Event::from_value(json!({
        "post_type": "request", "request_type": "friend",
    }))
    .unwrap();
    let connected = Event::from_value(json!({
        "post_type": "meta_event", "meta_event_type": "lifecycle", "sub_type": "connect",
    }))
    .unwrap();

    assert!(eval(&rules::notice("group_increase"), notice.clone()).await);
    assert!(!eval(&rules::notice("group_decrease"), notice).await);
    assert!(eval(&rules::request("friend"), request.clone()).await);
    assert!(!eval(&rules::request("group"), request).await);
    assert!(eval(&rules::lifecycle("connect"), connected.clone()).await);
    assert!(!eval(&rules::lifecycle("enable"), connected).await);
    assert!(!eval(&rules::notice("group_increase"), message_event(2, "x")).await);
}

#[tokio::test]
async fn test_superuser() {
    let settings = BotSettings {
        superusers: vec![7],
        ..BotSettings::default()
    };
    let (scope, _) = frame_scope(message_event(7, "hi"), settings.clone());
    assert!(rules::superuser().matches(&scope).await.unwrap());

    let (scope, _) = frame_scope(message_event(8, "hi"), settings);
    assert!(!rules::superuser().matches(&scope).await.unwrap());
}

#[tokio::test]
async fn test_tome() {
    let group_at_bot = Event::from_value(json!({
        "self_id": 1, "post_type": "message", "message_type": "group",
        "user_id": 2, "group_id": 3, "raw_message": "[CQ:at,qq=1] hi",
    }))
    .unwrap();
    let group_plain = Event::from_value(json!({
        "self_id": 1, "post_type": "message", "message_type": "group",
        "user_id": 2, "group_id": 3, "raw_message": "hi",
    }))
    .unwrap();

    assert!(eval(&rules::tome(), message_event(2, "hi")).await);
    assert!(eval(&rules::tome(), group_at_bot).await);
    assert!(!eval(&rules::tome(), group_plain).await);
}

#[tokio::test]
async fn test_rule_with_unknown_dependency_fails() {
    let rule = Rule::new(Injectable::sync(["nope"], |_| Ok(true)));
    let (scope, _) = frame_scope(message_event(2, "x"), BotSettings::default());
    assert!(rule.matches(&scope).await.is_err());
}
