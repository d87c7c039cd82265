//! Built-in rule factories
//!
//! | Factory | Matches when |
//! |---------|--------------|
//! | [`command`] | plain text is `<prefix><cmd>` followed by whitespace or the end |
//! | [`regex`] / [`regex_str`] | the pattern matches at the start of the plain text |
//! | [`notice`] | a notice event has the given `notice_type` |
//! | [`request`] | a request event has the given `request_type` |
//! | [`lifecycle`] | a lifecycle meta event has the given `sub_type` |
//! | [`superuser`] | the sender is listed in `superusers` |
//! | [`tome`] | the message is private or mentions the bot |

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use regex::Regex;
use shirasu_domain::constants::META_EVENT_LIFECYCLE;
use shirasu_domain::error::{Error, Result};
use shirasu_domain::events::{Event, EventKind};
use shirasu_domain::value_objects::BotSettings;

use super::Rule;
use crate::di::{Dependencies, Injectable, names};

/// Argument text captured by a matching `command` rule
///
/// One slot exists per dispatched frame and is shared by every addon
/// evaluating that frame.
#[derive(Debug, Default)]
pub struct CommandArgs {
    text: ArcSwapOption<String>,
}

impl CommandArgs {
    /// Store the argument text
    pub fn set<S: Into<String>>(&self, text: S) {
        self.text.store(Some(Arc::new(text.into())));
    }

    /// Whether a command captured arguments for this frame
    pub fn is_set(&self) -> bool {
        self.text.load().is_some()
    }

    /// The argument text, empty when nothing was captured
    pub fn text(&self) -> String {
        self.text
            .load()
            .as_deref()
            .cloned()
            .unwrap_or_default()
    }

    /// The argument text split on whitespace
    pub fn split(&self) -> Vec<String> {
        self.text()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

fn event(deps: &Dependencies) -> Result<Arc<Event>> {
    deps.get::<Arc<Event>>(names::EVENT)
}

fn settings(deps: &Dependencies) -> Result<Arc<BotSettings>> {
    deps.get::<Arc<BotSettings>>(names::CONFIG)
}

fn event_rule<F>(check: F) -> Rule
where
    F: Fn(&Event) -> bool + Send + Sync + 'static,
{
    Rule::new(Injectable::sync([names::EVENT], move |deps| {
        let event = event(&deps)?;
        Ok(check(&event))
    }))
}

/// Match `<prefix><cmd>` for any configured prefix
///
/// The text after the command, trimmed, is stored in the frame's
/// [`CommandArgs`].
pub fn command<S: Into<String>>(cmd: S) -> Rule {
    let cmd = cmd.into();
    Rule::new(Injectable::sync(
        [names::EVENT, names::CONFIG, names::ARGS],
        move |deps| {
            let event = event(&deps)?;
            let Some(message) = event.as_message() else {
                return Ok(false);
            };
            let text = message.message.plain_text();

            for start in &settings(&deps)?.command_start {
                let Some(rest) = text
                    .strip_prefix(start.as_str())
                    .and_then(|t| t.strip_prefix(cmd.as_str()))
                else {
                    continue;
                };
                if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                    deps.get_ref::<Arc<CommandArgs>>(names::ARGS)?
                        .set(rest.trim());
                    return Ok(true);
                }
            }
            Ok(false)
        },
    ))
}

/// Match a compiled pattern at the start of the plain text
pub fn regex(pattern: Regex) -> Rule {
    event_rule(move |event| {
        event.as_message().is_some_and(|message| {
            pattern
                .find(&message.message.plain_text())
                .is_some_and(|m| m.start() == 0)
        })
    })
}

/// Compile `pattern` and match it like [`regex`]
pub fn regex_str(pattern: &str) -> Result<Rule> {
    let compiled = Regex::new(pattern)
        .map_err(|e| Error::invalid_argument(format!("invalid regex {pattern}: {e}")))?;
    Ok(regex(compiled))
}

/// Match notices of `notice_type`
pub fn notice<S: Into<String>>(notice_type: S) -> Rule {
    let notice_type = notice_type.into();
    event_rule(move |event| {
        matches!(&event.kind, EventKind::Notice(n) if n.notice_type == notice_type)
    })
}

/// Match requests of `request_type`
pub fn request<S: Into<String>>(request_type: S) -> Rule {
    let request_type = request_type.into();
    event_rule(move |event| {
        matches!(&event.kind, EventKind::Request(r) if r.request_type == request_type)
    })
}

/// Match lifecycle meta events with `sub_type`
pub fn lifecycle<S: Into<String>>(sub_type: S) -> Rule {
    let sub_type = sub_type.into();
    event_rule(move |event| {
        matches!(
            &event.kind,
            EventKind::MetaEvent(meta)
                if meta.meta_event_type == META_EVENT_LIFECYCLE
                    && meta.sub_type.as_deref() == Some(sub_type.as_str())
        )
    })
}

/// Match messages sent by a superuser
pub fn superuser() -> Rule {
    Rule::new(Injectable::sync(
        [names::EVENT, names::CONFIG],
        |deps| {
            let sender = event(&deps)?.as_message().map(|m| m.user_id);
            let settings = settings(&deps)?;
            Ok(sender.is_some_and(|id| settings.is_superuser(id)))
        },
    ))
}

/// Match messages addressed to the bot
pub fn tome() -> Rule {
    event_rule(Event::is_tome)
}
