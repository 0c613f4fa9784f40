//! Main reminder dispatch implementation

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::entities::task::{ReminderMethod, Task};
use crate::errors::DomainResult;
use crate::repositories::account::AccountRepository;
use crate::repositories::task::{ReminderScope, TaskRepository};
use crate::services::notification::NotificationGateway;
use tp_shared::utils::email::mask_email;

use super::policy;
use super::types::DispatchSummary;

/// Scans for due reminders and dispatches them through the gateway.
///
/// A task is marked sent only when every channel its resolved method
/// requires reported success in the same pass; anything less leaves the
/// flag untouched so the task stays due. Flag changes land in a single
/// `persist_batch` commit, skipped entirely when nothing was marked.
pub struct ReminderService<R: TaskRepository, A: AccountRepository, G: NotificationGateway> {
    /// Task storage
    tasks: Arc<R>,
    /// Account lookup for destinations and preferences
    accounts: Arc<A>,
    /// Outbound delivery
    gateway: Arc<G>,
    /// Tasks claimed by an in-progress pass. Overlapping passes skip each
    /// other's claims so a reminder cannot go out twice.
    in_flight: Mutex<HashSet<Uuid>>,
}

impl<R: TaskRepository, A: AccountRepository, G: NotificationGateway> ReminderService<R, A, G> {
    /// Create a new reminder service
    pub fn new(tasks: Arc<R>, accounts: Arc<A>, gateway: Arc<G>) -> Self {
        Self {
            tasks,
            accounts,
            gateway,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Run one dispatch pass over `scope` as of `now`.
    ///
    /// Channel failures are swallowed into "not sent" and logged; the pass
    /// itself only fails on repository errors. A pass during a provider
    /// outage still returns a normal summary with `sent_count: 0`.
    pub async fn dispatch_due(
        &self,
        scope: &ReminderScope,
        now: DateTime<Utc>,
    ) -> DomainResult<DispatchSummary> {
        let candidates = self.tasks.list_in_scope(scope).await?;
        let due: Vec<Task> = candidates
            .into_iter()
            .filter(|t| t.is_reminder_due(now))
            .collect();
        let due_count = due.len();

        // Claim before send: a task already claimed by a concurrent pass
        // is left to that pass.
        let claimed = {
            let mut in_flight = self.in_flight.lock().await;
            due.into_iter()
                .filter(|task| in_flight.insert(task.id))
                .collect::<Vec<_>>()
        };
        let claimed_ids: Vec<Uuid> = claimed.iter().map(|t| t.id).collect();

        let result = self.run_pass(claimed).await;

        {
            let mut in_flight = self.in_flight.lock().await;
            for id in &claimed_ids {
                in_flight.remove(id);
            }
        }

        let sent_count = result?;

        tracing::info!(
            event = "reminder_dispatch_complete",
            due_count,
            sent_count,
            "Reminder dispatch pass finished"
        );

        Ok(DispatchSummary {
            sent_count,
            due_count,
        })
    }

    /// Send for every claimed task, then commit the marked ones in one
    /// batch. Returns how many were marked sent.
    async fn run_pass(&self, claimed: Vec<Task>) -> DomainResult<usize> {
        let mut marked: Vec<Task> = Vec::new();

        for mut task in claimed {
            let account = self.accounts.find_by_email(&task.owner).await?;

            if self.deliver(&task, account.as_ref()).await {
                task.mark_reminder_sent();
                marked.push(task);
            }
        }

        if !marked.is_empty() {
            self.tasks.persist_batch(&marked).await?;
        }

        Ok(marked.len())
    }

    /// Send through every channel the resolved method requires. `both`
    /// needs both channels in this same pass; partial success is failure.
    async fn deliver(&self, task: &Task, account: Option<&Account>) -> bool {
        let method = policy::resolve_method(task, account);

        let need_email = matches!(method, ReminderMethod::Email | ReminderMethod::Both);
        let need_sms = matches!(method, ReminderMethod::Sms | ReminderMethod::Both);

        let mut email_ok = true;
        if need_email {
            email_ok = match policy::resolve_email_destination(&task.owner, account) {
                Some(dest) => {
                    self.gateway
                        .send_email(&dest, &email_subject(task), &email_body(task))
                        .await
                }
                None => {
                    // Inert-task condition: stays due until reconfigured
                    tracing::warn!(
                        task_id = %task.id,
                        owner = %mask_email(&task.owner),
                        event = "reminder_no_email_destination",
                        "No email destination resolvable for reminder"
                    );
                    false
                }
            };
        }

        let mut sms_ok = true;
        if need_sms {
            sms_ok = match policy::resolve_phone_destination(task, account) {
                Some(dest) => self.gateway.send_sms(&dest, &sms_body(task)).await,
                None => {
                    tracing::warn!(
                        task_id = %task.id,
                        owner = %mask_email(&task.owner),
                        event = "reminder_no_phone_destination",
                        "No phone destination resolvable for reminder"
                    );
                    false
                }
            };
        }

        let delivered = email_ok && sms_ok;
        if !delivered {
            tracing::warn!(
                task_id = %task.id,
                owner = %mask_email(&task.owner),
                ?method,
                email_ok,
                sms_ok,
                event = "reminder_not_sent",
                "Reminder not sent; task stays due for the next pass"
            );
        }
        delivered
    }
}

fn email_subject(task: &Task) -> String {
    format!("Task Reminder: {}", task.title)
}

fn email_body(task: &Task) -> String {
    match task.due_at {
        Some(due_at) => format!(
            "Your task \"{}\" is due at {}. This is your scheduled reminder from TaskPrioritize.",
            task.title,
            due_at.format("%Y-%m-%d %H:%M UTC")
        ),
        None => format!(
            "Your task \"{}\" is waiting. This is your scheduled reminder from TaskPrioritize.",
            task.title
        ),
    }
}

fn sms_body(task: &Task) -> String {
    format!("TaskPrioritize reminder: {}", task.title)
}
