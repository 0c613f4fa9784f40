//! Mock notification gateway for password reset tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::services::notification::NotificationGateway;

/// Gateway that records every send and can be told to fail
pub struct RecordingGateway {
    pub emails: Arc<Mutex<Vec<(String, String, String)>>>,
    pub sms: Arc<Mutex<Vec<(String, String)>>>,
    email_ok: AtomicBool,
    sms_ok: AtomicBool,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self {
            emails: Arc::new(Mutex::new(Vec::new())),
            sms: Arc::new(Mutex::new(Vec::new())),
            email_ok: AtomicBool::new(true),
            sms_ok: AtomicBool::new(true),
        }
    }

    pub fn fail_email(&self) {
        self.email_ok.store(false, Ordering::SeqCst);
    }

    pub fn email_count(&self) -> usize {
        self.emails.lock().unwrap().len()
    }

    pub fn last_email_body(&self) -> Option<String> {
        self.emails.lock().unwrap().last().map(|(_, _, b)| b.clone())
    }
}

#[async_trait]
impl NotificationGateway for RecordingGateway {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> bool {
        self.emails
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string(), body.to_string()));
        self.email_ok.load(Ordering::SeqCst)
    }

    async fn send_sms(&self, to: &str, body: &str) -> bool {
        self.sms
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));
        self.sms_ok.load(Ordering::SeqCst)
    }
}
