//! Per-subject serialization for token operations.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Async locks keyed by subject.
///
/// Every token operation holds its subject's lock for the whole
/// read-check-mutate-write cycle, so concurrent verifies cannot lose
/// attempt increments and a double finalize cannot both observe the
/// record. Locks for different subjects are independent; nothing here
/// serializes across subjects. An entry is created on first use and
/// reused for the subject's lifetime.
#[derive(Default)]
pub(crate) struct SubjectLocks {
    inner: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl SubjectLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for a subject, creating it on first use
    pub async fn acquire(&self, subject: &str) -> OwnedMutexGuard<()> {
        let entry = {
            let mut map = self.inner.lock().await;
            map.entry(subject.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        entry.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_same_subject_serializes() {
        let locks = Arc::new(SubjectLocks::new());
        let in_section = Arc::new(AtomicU32::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let locks = locks.clone();
            let in_section = in_section.clone();
            handles.push(tokio::spawn(async move {
                let _guard = locks.acquire("a@x.com").await;
                let concurrent = in_section.fetch_add(1, Ordering::SeqCst);
                assert_eq!(concurrent, 0);
                tokio::task::yield_now().await;
                in_section.fetch_sub(1, Ordering::SeqCst);
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_different_subjects_do_not_block() {
        let locks = SubjectLocks::new();
        let _a = locks.acquire("a@x.com").await;
        // Would deadlock if subjects shared a lock
        let _b = locks.acquire("b@x.com").await;
    }
}
