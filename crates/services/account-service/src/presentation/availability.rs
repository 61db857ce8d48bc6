//! Interactive username availability check.

use common::AppResult;
use domain::{Notification, NotificationSink};

use crate::service::AccountService;

/// Value typed into a username field, with the field's client id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityCheck {
    pub client_id: String,
    pub value: String,
}

impl AvailabilityCheck {
    pub fn new(client_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            value: value.into(),
        }
    }
}

/// Run the availability query and report the outcome next to the field.
///
/// Adds one detail-only notification addressed to `event.client_id`:
/// error when the name is taken, info when it is free.
pub async fn check_availability_interactive(
    service: &dyn AccountService,
    event: &AvailabilityCheck,
    messages: &mut (dyn NotificationSink + Send),
) -> AppResult<bool> {
    let available = service.check_available(&event.value).await?;

    let notification = if available {
        Notification::info(None, Some(format!("User Name '{}' is available", event.value)))
    } else {
        Notification::error(
            None,
            Some(format!("User Name '{}' is not available", event.value)),
        )
    };
    messages.add(Some(&event.client_id), notification);

    Ok(available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::repository::InMemoryAccountStore;
    use crate::service::AccountManager;
    use domain::{MessageContext, NewAccount, Severity};

    fn service() -> AccountManager {
        AccountManager::new(Arc::new(InMemoryAccountStore::new()))
    }

    #[tokio::test]
    async fn test_available_name_reports_info() {
        let service = service();
        let mut messages = MessageContext::new();
        let event = AvailabilityCheck::new("register:username", "alice");

        let available = check_availability_interactive(&service, &event, &mut messages)
            .await
            .unwrap();

        assert!(available);
        let reported: Vec<_> = messages.for_target(Some("register:username")).collect();
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].severity, Severity::Info);
        assert!(reported[0].summary.is_none());
        assert_eq!(
            reported[0].detail.as_deref(),
            Some("User Name 'alice' is available")
        );
    }

    #[tokio::test]
    async fn test_taken_name_reports_error() {
        let service = service();
        let mut scratch = MessageContext::new();
        service
            .create_account(NewAccount::new("alice", "pw"), &mut scratch)
            .await
            .unwrap();

        let mut messages = MessageContext::new();
        let event = AvailabilityCheck::new("register:username", "alice");
        let available = check_availability_interactive(&service, &event, &mut messages)
            .await
            .unwrap();

        assert!(!available);
        assert_eq!(messages.len(), 1);
        let reported = &messages.messages()[0];
        assert_eq!(reported.target.as_deref(), Some("register:username"));
        assert_eq!(reported.notification.severity, Severity::Error);
        assert_eq!(
            reported.notification.detail.as_deref(),
            Some("User Name 'alice' is not available")
        );
    }
}
