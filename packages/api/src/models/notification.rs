use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Notification {
    pub id: i64,
    pub message: String,
    pub read: bool,
    /// Rendered by the database; shown as-is.
    pub created_at: String,
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_count() {
        let notifications = vec![
            Notification { id: 1, read: true, ..Default::default() },
            Notification { id: 2, read: false, ..Default::default() },
            Notification { id: 3, read: false, ..Default::default() },
        ];
        assert_eq!(unread_count(&notifications), 2);
        assert_eq!(unread_count(&[]), 0);
    }
}
