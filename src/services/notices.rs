//! One-shot notices carried between requests
//!
//! A notice is written once (e.g. by a delete handler) and consumed by the
//! next read for the same client session. Notices live in process memory
//! only; a restart drops them and no client ever sees another client's.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use uuid::Uuid;

#[derive(Clone, Default)]
pub struct NoticeService {
    slots: Arc<Mutex<HashMap<Uuid, String>>>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a notice for a session, replacing any unread one
    pub fn store(&self, session: Uuid, message: String) {
        let mut slots = self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        slots.insert(session, message);
    }

    /// Take the pending notice for a session, clearing it in the same step
    pub fn take(&self, session: Uuid) -> Option<String> {
        let mut slots = self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        slots.remove(&session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_read_exactly_once() {
        let notices = NoticeService::new();
        let session = Uuid::new_v4();

        notices.store(session, "Deleted author: Austen, Jane".to_string());
        assert_eq!(
            notices.take(session),
            Some("Deleted author: Austen, Jane".to_string())
        );
        assert_eq!(notices.take(session), None);
    }

    #[test]
    fn test_notices_are_per_session() {
        let notices = NoticeService::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        notices.store(a, "for a".to_string());
        assert_eq!(notices.take(b), None);
        assert_eq!(notices.take(a), Some("for a".to_string()));
    }

    #[test]
    fn test_store_replaces_unread_notice() {
        let notices = NoticeService::new();
        let session = Uuid::new_v4();

        notices.store(session, "first".to_string());
        notices.store(session, "second".to_string());
        assert_eq!(notices.take(session), Some("second".to_string()));
    }
}
