//! Channel and destination resolution policies.
//!
//! These fallback chains are compatibility behavior carried over from the
//! original product and are kept as named functions so they can be swapped
//! without touching the dispatch algorithm.

use crate::domain::entities::account::Account;
use crate::domain::entities::task::{ReminderMethod, Task};
use tp_shared::utils::email::is_valid_email;

/// Channel used when neither the task nor the account states one
pub const DEFAULT_METHOD: ReminderMethod = ReminderMethod::Email;

/// Resolve the delivery method: task override, then account preference,
/// then the default.
pub fn resolve_method(task: &Task, account: Option<&Account>) -> ReminderMethod {
    task.reminder_method
        .or_else(|| account.and_then(|a| a.notification_preference.map(Into::into)))
        .unwrap_or(DEFAULT_METHOD)
}

/// Resolve the email destination: the account's email, or the subject
/// itself when no account record exists but the subject looks like an
/// email address.
pub fn resolve_email_destination(subject: &str, account: Option<&Account>) -> Option<String> {
    match account {
        Some(account) => Some(account.email.clone()),
        None if is_valid_email(subject) => Some(subject.to_string()),
        None => None,
    }
}

/// Resolve the SMS destination: the task's phone override, then the
/// account's stored phone.
pub fn resolve_phone_destination(task: &Task, account: Option<&Account>) -> Option<String> {
    task.reminder_phone
        .clone()
        .or_else(|| account.and_then(|a| a.phone.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::account::NotificationPreference;

    fn task() -> Task {
        Task::new("a@x.com".to_string(), "Write report".to_string())
    }

    fn account() -> Account {
        Account::new("a@x.com".to_string(), "$2b$hash".to_string())
    }

    #[test]
    fn test_method_task_override_wins() {
        let mut task = task();
        task.reminder_method = Some(ReminderMethod::Sms);
        let mut account = account();
        account.notification_preference = Some(NotificationPreference::Both);

        assert_eq!(resolve_method(&task, Some(&account)), ReminderMethod::Sms);
    }

    #[test]
    fn test_method_falls_back_to_account_preference() {
        let mut account = account();
        account.notification_preference = Some(NotificationPreference::Both);

        assert_eq!(resolve_method(&task(), Some(&account)), ReminderMethod::Both);
    }

    #[test]
    fn test_method_defaults_to_email() {
        assert_eq!(resolve_method(&task(), None), ReminderMethod::Email);
        assert_eq!(resolve_method(&task(), Some(&account())), ReminderMethod::Email);
    }

    #[test]
    fn test_email_destination_prefers_account() {
        let mut account = account();
        account.email = "primary@x.com".to_string();

        assert_eq!(
            resolve_email_destination("a@x.com", Some(&account)),
            Some("primary@x.com".to_string())
        );
    }

    #[test]
    fn test_email_destination_subject_fallback() {
        assert_eq!(
            resolve_email_destination("a@x.com", None),
            Some("a@x.com".to_string())
        );
        assert_eq!(resolve_email_destination("not-an-email", None), None);
    }

    #[test]
    fn test_phone_destination_chain() {
        let mut task = task();
        let mut account = account();
        account.phone = Some("+61400000000".to_string());

        assert_eq!(
            resolve_phone_destination(&task, Some(&account)),
            Some("+61400000000".to_string())
        );

        task.reminder_phone = Some("+61411111111".to_string());
        assert_eq!(
            resolve_phone_destination(&task, Some(&account)),
            Some("+61411111111".to_string())
        );
    }

    #[test]
    fn test_phone_destination_unresolvable() {
        assert_eq!(resolve_phone_destination(&task(), None), None);
        assert_eq!(resolve_phone_destination(&task(), Some(&account())), None);
    }
}
