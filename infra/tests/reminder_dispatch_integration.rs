//! Reminder dispatch over the in-memory stores and the mock senders.

use std::sync::Arc;

use chrono::{Duration, Utc};

use tp_core::domain::entities::account::{Account, NotificationPreference};
use tp_core::domain::entities::task::{ReminderMethod, Task};
use tp_core::repositories::account::AccountRepository;
use tp_core::repositories::task::{ReminderScope, TaskRepository};
use tp_core::services::reminder::ReminderService;
use tp_infra::email::MockEmailService;
use tp_infra::notify::ChannelGateway;
use tp_infra::sms::MockSmsService;
use tp_infra::store::{InMemoryAccountRepository, InMemoryTaskRepository};

struct Fixture {
    service: ReminderService<InMemoryTaskRepository, InMemoryAccountRepository, ChannelGateway>,
    tasks: Arc<InMemoryTaskRepository>,
    accounts: Arc<InMemoryAccountRepository>,
    email: Arc<MockEmailService>,
    sms: Arc<MockSmsService>,
}

fn build(sms: MockSmsService) -> Fixture {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let email = Arc::new(MockEmailService::new());
    let sms = Arc::new(sms);
    let gateway = Arc::new(ChannelGateway::new(email.clone(), sms.clone()));
    let service = ReminderService::new(tasks.clone(), accounts.clone(), gateway);
    Fixture {
        service,
        tasks,
        accounts,
        email,
        sms,
    }
}

fn due_task(owner: &str) -> Task {
    let mut task = Task::new(owner.to_string(), "Submit assignment".to_string());
    task.due_at = Some(Utc::now() + Duration::hours(2));
    task.set_reminder_at(Some(Utc::now() - Duration::minutes(10)));
    task
}

#[tokio::test]
async fn test_email_reminder_end_to_end() {
    let fx = build(MockSmsService::new());
    let task = due_task("john@test.com");
    let task_id = task.id;
    fx.tasks.create(task).await.unwrap();

    let summary = fx
        .service
        .dispatch_due(&ReminderScope::All, Utc::now())
        .await
        .unwrap();

    assert_eq!(summary.due_count, 1);
    assert_eq!(summary.sent_count, 1);
    assert_eq!(fx.email.message_count(), 1);
    assert!(fx.tasks.find_by_id(task_id).await.unwrap().unwrap().reminder_sent);

    // Second pass finds nothing due
    let summary = fx
        .service
        .dispatch_due(&ReminderScope::All, Utc::now())
        .await
        .unwrap();
    assert_eq!(summary.due_count, 0);
    assert_eq!(fx.email.message_count(), 1);
}

#[tokio::test]
async fn test_both_method_retries_until_both_channels_succeed() {
    // SMS provider down: `both` must not mark the task sent
    let fx = build(MockSmsService::failing());

    let mut account = Account::new("john@test.com".to_string(), "$2b$hash".to_string());
    account.phone = Some("+61400000000".to_string());
    account.notification_preference = Some(NotificationPreference::Both);
    fx.accounts.create(account).await.unwrap();

    let task = due_task("john@test.com");
    let task_id = task.id;
    fx.tasks.create(task).await.unwrap();

    let summary = fx
        .service
        .dispatch_due(&ReminderScope::All, Utc::now())
        .await
        .unwrap();

    assert_eq!(summary.sent_count, 0);
    assert_eq!(fx.email.message_count(), 1); // email half went out
    assert!(!fx.tasks.find_by_id(task_id).await.unwrap().unwrap().reminder_sent);

    // Provider recovers; the retry pass completes both channels
    let fx2 = Fixture {
        service: ReminderService::new(
            fx.tasks.clone(),
            fx.accounts.clone(),
            Arc::new(ChannelGateway::new(
                fx.email.clone(),
                Arc::new(MockSmsService::new()),
            )),
        ),
        tasks: fx.tasks.clone(),
        accounts: fx.accounts.clone(),
        email: fx.email.clone(),
        sms: fx.sms.clone(),
    };

    let summary = fx2
        .service
        .dispatch_due(&ReminderScope::All, Utc::now())
        .await
        .unwrap();

    assert_eq!(summary.sent_count, 1);
    assert!(fx2.tasks.find_by_id(task_id).await.unwrap().unwrap().reminder_sent);
}

#[tokio::test]
async fn test_sms_override_uses_task_phone() {
    let fx = build(MockSmsService::new());

    let mut task = due_task("john@test.com");
    task.reminder_method = Some(ReminderMethod::Sms);
    task.reminder_phone = Some("+61411111111".to_string());
    fx.tasks.create(task).await.unwrap();

    let summary = fx
        .service
        .dispatch_due(&ReminderScope::All, Utc::now())
        .await
        .unwrap();

    assert_eq!(summary.sent_count, 1);
    assert_eq!(fx.sms.message_count(), 1);
    assert_eq!(fx.email.message_count(), 0);
}
