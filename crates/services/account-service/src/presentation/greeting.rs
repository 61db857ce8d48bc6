//! One-time welcome greeting per view instance.

use domain::{Notification, NotificationSink, GROWL_CHANNEL, MISSING_ATTRIBUTE};

/// A view render request carrying the welcome attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewLoad {
    /// True when the render was triggered by a form resubmission
    pub postback: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl ViewLoad {
    /// Initial render of a fresh view
    pub fn initial(first_name: Option<&str>, last_name: Option<&str>) -> Self {
        Self {
            postback: false,
            first_name: first_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
        }
    }

    /// Re-render after a form submission
    pub fn postback() -> Self {
        Self {
            postback: true,
            ..Self::default()
        }
    }

    fn welcome_text(&self) -> String {
        format!(
            "Welcome to your account {} {}",
            self.first_name.as_deref().unwrap_or(MISSING_ATTRIBUTE),
            self.last_name.as_deref().unwrap_or(MISSING_ATTRIBUTE)
        )
    }
}

/// Per-view state: greets at most once over the instance's lifetime.
#[derive(Debug, Default)]
pub struct ViewSession {
    greet_count: u32,
}

impl ViewSession {
    pub fn new() -> Self {
        Self { greet_count: 0 }
    }

    pub fn greet_count(&self) -> u32 {
        self.greet_count
    }

    /// Greet on the first non-postback render; later calls are no-ops.
    ///
    /// Returns whether a greeting was added to `messages`.
    pub fn on_view_load(&mut self, event: &ViewLoad, messages: &mut dyn NotificationSink) -> bool {
        if self.greet_count > 0 || event.postback {
            return false;
        }

        messages.add(
            Some(GROWL_CHANNEL),
            Notification::info(Some(event.welcome_text()), None),
        );
        self.greet_count += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{MessageContext, Severity};

    #[test]
    fn test_greets_once_per_instance() {
        let mut session = ViewSession::new();
        let mut messages = MessageContext::new();
        let event = ViewLoad::initial(Some("Ada"), Some("Lovelace"));

        assert!(session.on_view_load(&event, &mut messages));
        assert!(!session.on_view_load(&event, &mut messages));

        assert_eq!(session.greet_count(), 1);
        let greetings: Vec<_> = messages.for_target(Some(GROWL_CHANNEL)).collect();
        assert_eq!(greetings.len(), 1);
        assert_eq!(greetings[0].severity, Severity::Info);
        assert_eq!(
            greetings[0].summary.as_deref(),
            Some("Welcome to your account Ada Lovelace")
        );
    }

    #[test]
    fn test_postback_never_greets() {
        let mut session = ViewSession::new();
        let mut messages = MessageContext::new();

        assert!(!session.on_view_load(&ViewLoad::postback(), &mut messages));
        assert!(!session.on_view_load(&ViewLoad::postback(), &mut messages));

        assert!(messages.is_empty());
        assert_eq!(session.greet_count(), 0);
    }

    #[test]
    fn test_initial_render_after_postback_still_greets() {
        let mut session = ViewSession::new();
        let mut messages = MessageContext::new();

        session.on_view_load(&ViewLoad::postback(), &mut messages);
        assert!(session.on_view_load(&ViewLoad::initial(Some("Ada"), None), &mut messages));
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_missing_names_render_as_null() {
        let mut session = ViewSession::new();
        let mut messages = MessageContext::new();

        session.on_view_load(&ViewLoad::initial(None, None), &mut messages);

        assert_eq!(
            messages.messages()[0].notification.summary.as_deref(),
            Some("Welcome to your account null null")
        );
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = ViewSession::new();
        let mut second = ViewSession::new();
        let mut messages = MessageContext::new();
        let event = ViewLoad::initial(Some("Ada"), Some("Lovelace"));

        first.on_view_load(&event, &mut messages);
        second.on_view_load(&event, &mut messages);

        assert_eq!(messages.len(), 2);
    }
}
