//! Toast Notifications

use serde::{Deserialize, Serialize};

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
        }
    }

    /// Background colour of the toast.
    pub fn color(&self) -> &'static str {
        match self {
            NoticeKind::Success => "#4CAF50",
            NoticeKind::Error => "#f44336",
            NoticeKind::Info => "#2196F3",
        }
    }

    /// Unknown names fall back to `Info`.
    pub fn parse_or_info(name: &str) -> Self {
        match name {
            "success" => NoticeKind::Success,
            "error" => NoticeKind::Error,
            _ => NoticeKind::Info,
        }
    }
}

/// A notification currently queued for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Monotonic id; lets a dismissal timer tell whether its toast was replaced.
    pub id: u64,
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn new(id: u64, message: impl Into<String>, kind: NoticeKind) -> Self {
        Self { id, message: message.into(), kind }
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.kind.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_defaults_to_info() {
        assert_eq!(NoticeKind::parse_or_info("success"), NoticeKind::Success);
        assert_eq!(NoticeKind::parse_or_info("warning"), NoticeKind::Info);
        assert_eq!(NoticeKind::parse_or_info(""), NoticeKind::Info);
    }

    #[test]
    fn test_class_name() {
        let notice = Notice::new(1, "Item removed from cart!", NoticeKind::Info);
        assert_eq!(notice.class_name(), "notification notification-info");
    }
}
