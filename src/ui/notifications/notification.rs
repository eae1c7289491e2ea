// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A notification is a title message plus an optional description line, both
//! stored as i18n keys with their interpolation arguments so the text follows
//! the active language.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Informational message (blue, 3s duration).
    Info,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A translatable line: i18n key plus interpolation arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText {
    pub key: String,
    pub args: Vec<(String, String)>,
}

impl MessageText {
    fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            args: Vec::new(),
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    title: MessageText,
    description: Option<MessageText>,
    created_at: Instant,
    /// Custom auto-dismiss duration (overrides severity default).
    custom_dismiss_duration: Option<Duration>,
}

impl Notification {
    /// Creates a new notification with the given severity and title key.
    ///
    /// Keys are resolved at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            title: MessageText::new(message_key),
            description: None,
            created_at: Instant::now(),
            custom_dismiss_duration: None,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for title interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.title.args.push((key.into(), value.into()));
        self
    }

    /// Adds a second, smaller line below the title.
    #[must_use]
    pub fn with_description(mut self, message_key: impl Into<String>) -> Self {
        self.description = Some(MessageText::new(message_key));
        self
    }

    /// Adds an argument for description interpolation.
    ///
    /// Has no effect until [`Self::with_description`] was called.
    #[must_use]
    pub fn with_description_arg(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        if let Some(description) = self.description.as_mut() {
            description.args.push((key.into(), value.into()));
        }
        self
    }

    /// Sets a custom auto-dismiss duration, overriding the severity default.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_dismiss_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the i18n key of the title.
    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.title.key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.title.args
    }

    #[must_use]
    pub fn description(&self) -> Option<&MessageText> {
        self.description.as_ref()
    }

    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.custom_dismiss_duration
            .or_else(|| self.severity.auto_dismiss_duration())
            .is_some_and(|duration| self.age() >= duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
        assert!(!Notification::error("x").should_auto_dismiss());
    }

    #[test]
    fn custom_duration_overrides_severity() {
        let notification = Notification::error("x").auto_dismiss(Duration::ZERO);
        assert!(notification.should_auto_dismiss());
    }

    #[test]
    fn description_carries_its_own_arguments() {
        let notification = Notification::success("notification-search-success")
            .with_arg("count", "3")
            .with_description("notification-searched-for")
            .with_description_arg("query", "man with beard");

        assert_eq!(notification.message_args(), &[("count".into(), "3".into())]);
        let description = notification.description().expect("description set");
        assert_eq!(description.key, "notification-searched-for");
        assert_eq!(
            description.args,
            vec![("query".to_string(), "man with beard".to_string())]
        );
    }

    #[test]
    fn description_arg_without_description_is_ignored() {
        let notification = Notification::info("x").with_description_arg("a", "b");
        assert!(notification.description().is_none());
    }
}
