//! User-facing notifications.
//!
//! A notification is a transient, severity-tagged message produced while
//! handling one request. Producers push notifications into a
//! [`NotificationSink`]; the presentation layer owns the sink for the
//! duration of the request and renders whatever was collected.

use serde::{Deserialize, Serialize};

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
    Fatal,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Error => write!(f, "error"),
            Severity::Fatal => write!(f, "fatal"),
        }
    }
}

/// Severity-tagged message with an optional summary and detail line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Notification {
    pub severity: Severity,
    pub summary: Option<String>,
    pub detail: Option<String>,
}

impl Notification {
    pub fn new(severity: Severity, summary: Option<String>, detail: Option<String>) -> Self {
        Self {
            severity,
            summary,
            detail,
        }
    }

    pub fn info(summary: Option<String>, detail: Option<String>) -> Self {
        Self::new(Severity::Info, summary, detail)
    }

    pub fn error(summary: Option<String>, detail: Option<String>) -> Self {
        Self::new(Severity::Error, summary, detail)
    }

    pub fn fatal(summary: Option<String>, detail: Option<String>) -> Self {
        Self::new(Severity::Fatal, summary, detail)
    }
}

/// Notification addressed to a UI element or channel (`None` = global)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TargetedNotification {
    pub target: Option<String>,
    #[serde(flatten)]
    pub notification: Notification,
}

/// Destination for notifications raised while handling a request.
pub trait NotificationSink {
    /// Add a notification for `target` (`None` = global)
    fn add(&mut self, target: Option<&str>, notification: Notification);

    /// Add a notification that is not tied to a UI element
    fn add_global(&mut self, notification: Notification) {
        self.add(None, notification);
    }
}

/// Request-scoped collection of notifications, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageContext {
    messages: Vec<TargetedNotification>,
}

impl MessageContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[TargetedNotification] {
        &self.messages
    }

    /// Notifications addressed to `target`
    pub fn for_target<'a>(
        &'a self,
        target: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Notification> + 'a {
        self.messages
            .iter()
            .filter(move |m| m.target.as_deref() == target)
            .map(|m| &m.notification)
    }

    pub fn into_messages(self) -> Vec<TargetedNotification> {
        self.messages
    }
}

impl NotificationSink for MessageContext {
    fn add(&mut self, target: Option<&str>, notification: Notification) {
        self.messages.push(TargetedNotification {
            target: target.map(str::to_string),
            notification,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_keeps_insertion_order() {
        let mut ctx = MessageContext::new();
        ctx.add_global(Notification::info(Some("first".into()), None));
        ctx.add(Some("form:username"), Notification::error(None, Some("second".into())));

        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.messages()[0].target, None);
        assert_eq!(ctx.messages()[1].target.as_deref(), Some("form:username"));
    }

    #[test]
    fn test_for_target_filters() {
        let mut ctx = MessageContext::new();
        ctx.add_global(Notification::info(Some("global".into()), None));
        ctx.add(Some("growlMessages"), Notification::info(Some("hello".into()), None));

        let growl: Vec<_> = ctx.for_target(Some("growlMessages")).collect();
        assert_eq!(growl.len(), 1);
        assert_eq!(growl[0].summary.as_deref(), Some("hello"));
        assert_eq!(ctx.for_target(None).count(), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let mut ctx = MessageContext::new();
        ctx.add(Some("field"), Notification::fatal(Some("boom".into()), None));

        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json[0]["target"], "field");
        assert_eq!(json[0]["severity"], "fatal");
        assert_eq!(json[0]["summary"], "boom");
        assert!(json[0]["detail"].is_null());
    }
}
