//! Non-fatal diagnostics produced while decoding a drawing.
//!
//! Conditions that do not abort a read (a bulge value that does not parse,
//! entity keywords outside the supported subset) are collected here instead
//! of being dropped. After a read the caller inspects
//! [`Drawing::notifications`](crate::Drawing::notifications).

use std::fmt;

/// Severity level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// Entity kind outside the supported format subset, skipped.
    NotSupported,
    /// Input was accepted with a conservative interpretation.
    Warning,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotSupported => "NotSupported",
            Self::Warning => "Warning",
        };
        f.write_str(name)
    }
}

/// A single diagnostic, optionally tied to a position in the token stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub message: String,
    /// Token position inside the ENTITIES section, if the issue has one.
    pub position: Option<usize>,
}

impl Notification {
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
            position: None,
        }
    }

    /// Attach the offending stream position.
    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "[{}] {} (at {})", self.notification_type, self.message, pos),
            None => write!(f, "[{}] {}", self.notification_type, self.message),
        }
    }
}

/// Collects notifications during a read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    /// Record a notification without a position.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.push(Notification::new(notification_type, message));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// All notifications of one type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Append everything from another collection.
    pub fn extend(&mut self, other: NotificationCollection) {
        self.items.extend(other.items);
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_filters_by_type() {
        let mut c = NotificationCollection::new();
        assert!(c.is_empty());

        c.push(Notification::new(NotificationType::Warning, "bulge ignored").at(40));
        c.notify(NotificationType::NotSupported, "TEXT skipped");
        c.notify(NotificationType::Warning, "flags ignored");

        assert_eq!(c.len(), 3);
        assert_eq!(c.of_type(NotificationType::Warning).len(), 2);
        assert!(c.has_type(NotificationType::NotSupported));
        assert_eq!(c.of_type(NotificationType::NotSupported).len(), 1);
    }

    #[test]
    fn test_display_with_position() {
        let n = Notification::new(NotificationType::Warning, "bulge ignored").at(12);
        assert_eq!(n.to_string(), "[Warning] bulge ignored (at 12)");

        let n = Notification::new(NotificationType::NotSupported, "TEXT skipped");
        assert_eq!(n.to_string(), "[NotSupported] TEXT skipped");
    }
}
