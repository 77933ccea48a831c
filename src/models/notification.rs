use std::collections::VecDeque;
use std::time::Duration;

use strum_macros::{Display, EnumIter};

use crate::config::{DF, NOTIFICATION_TTL};
use crate::utils::AppInstant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Success,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub level: AlertLevel,
    pub created_at: AppInstant,
}

/// Transient alerts, newest first.
///
/// Expiry is polled: whoever owns the clock calls `expire(now)` every frame.
/// Manual dismissal and expiry race harmlessly, whichever comes second is a no-op.
#[derive(Debug)]
pub struct NotificationCenter {
    notices: VecDeque<Notification>,
    next_id: u64,
    ttl: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(NOTIFICATION_TTL)
    }
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            notices: VecDeque::new(),
            next_id: 0,
            ttl,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, level: AlertLevel) -> NotificationId {
        self.notify_at(message, level, AppInstant::now())
    }

    pub fn notify_at(
        &mut self,
        message: impl Into<String>,
        level: AlertLevel,
        now: AppInstant,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        let message = message.into();

        if DF.log_notifications {
            log::info!("ALERT [{}] {}", level, message);
        }

        self.notices.push_front(Notification {
            id,
            message,
            level,
            created_at: now,
        });
        id
    }

    /// Removes a notice. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    /// Drops every notice older than the TTL. Returns how many were removed.
    pub fn expire(&mut self, now: AppInstant) -> usize {
        let ttl = self.ttl;
        let before = self.notices.len();
        self.notices
            .retain(|n| now.saturating_duration_since(n.created_at) < ttl);
        let removed = before - self.notices.len();

        if removed > 0 && DF.log_notifications {
            log::info!("ALERT: {} notice(s) expired", removed);
        }
        removed
    }

    /// Time until the oldest visible notice expires, for scheduling a repaint.
    pub fn next_expiry_in(&self, now: AppInstant) -> Option<Duration> {
        self.notices
            .iter()
            .map(|n| self.ttl.saturating_sub(now.saturating_duration_since(n.created_at)))
            .min()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.notices.iter()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_notice_is_at_the_head() {
        let mut center = NotificationCenter::default();
        center.notify("first", AlertLevel::Info);
        center.notify("second", AlertLevel::Success);
        let messages: Vec<&str> = center.visible().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut center = NotificationCenter::default();
        center.notify("same", AlertLevel::Danger);
        center.notify("same", AlertLevel::Danger);
        assert_eq!(center.len(), 2);
    }

    #[test]
    fn notices_expire_after_five_seconds() {
        let mut center = NotificationCenter::default();
        let t0 = AppInstant::now();
        center.notify_at("old", AlertLevel::Info, t0);
        center.notify_at("young", AlertLevel::Info, t0 + Duration::from_millis(3000));

        assert_eq!(center.expire(t0 + Duration::from_millis(4999)), 0);
        assert_eq!(center.expire(t0 + Duration::from_millis(5000)), 1);
        assert_eq!(center.visible().next().unwrap().message, "young");
        assert_eq!(center.expire(t0 + Duration::from_millis(8000)), 1);
        assert!(center.is_empty());
    }

    #[test]
    fn dismissal_before_or_after_expiry_is_harmless() {
        let mut center = NotificationCenter::default();
        let t0 = AppInstant::now();
        let a = center.notify_at("a", AlertLevel::Success, t0);
        let b = center.notify_at("b", AlertLevel::Success, t0);

        assert!(center.dismiss(a));
        assert!(!center.dismiss(a));
        // Expiry after manual dismissal only removes what is left
        assert_eq!(center.expire(t0 + Duration::from_secs(6)), 1);
        assert!(!center.dismiss(b));
    }

    #[test]
    fn next_expiry_tracks_oldest_notice() {
        let mut center = NotificationCenter::default();
        let t0 = AppInstant::now();
        assert_eq!(center.next_expiry_in(t0), None);
        center.notify_at("a", AlertLevel::Info, t0);
        center.notify_at("b", AlertLevel::Info, t0 + Duration::from_secs(2));
        assert_eq!(
            center.next_expiry_in(t0 + Duration::from_secs(3)),
            Some(Duration::from_secs(2))
        );
    }
}
