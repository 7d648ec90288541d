//! Date plus time-of-day field.

use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;

use super::Binding;
use super::FieldCore;
use super::parse::{format_datetime, format_time, parse_time};

/// Time text shown before anything is picked.
pub const DEFAULT_TIME_TEXT: &str = "09:00";

/// Read-only date-time text box with a calendar and an `HH:MM` time input.
#[derive(Debug)]
pub struct DateTimeField {
    core: FieldCore<NaiveDateTime>,
    time_text: String,
}

field_common!(DateTimeField, NaiveDateTime);

impl DateTimeField {
    pub fn new(binding: Binding<NaiveDateTime>) -> Self {
        let core = FieldCore::new(binding, "Select date & time", |dt: &NaiveDateTime| dt.date());
        let time_text = core
            .value()
            .map(|dt| format_time(dt.time()))
            .unwrap_or_else(|| DEFAULT_TIME_TEXT.to_string());
        Self { core, time_text }
    }

    pub fn value(&self) -> Option<NaiveDateTime> {
        self.core.value().copied()
    }

    /// `Jun 01, 2025 14:30`, empty when unset.
    pub fn text(&self) -> String {
        self.value().map(format_datetime).unwrap_or_default()
    }

    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    pub fn set_value(&mut self, value: Option<NaiveDateTime>) {
        self.core.replace(value);
        if let Some(dt) = value {
            self.time_text = format_time(dt.time());
            self.core.show_month(dt.date());
        }
    }

    /// Calendar click. Applies the current time text, or midnight when it
    /// does not parse. `None` clears.
    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        if self.core.disabled {
            return;
        }
        let Some(date) = date else {
            self.core.commit(None);
            return;
        };
        let time = parse_time(&self.time_text).unwrap_or(NaiveTime::MIN);
        self.core.show_month(date);
        self.commit(date.and_time(time));
    }

    /// Edit of the time input. The text is always kept; it commits only when
    /// it parses and a date is already set.
    pub fn on_time_input(&mut self, text: impl Into<String>) {
        if self.core.disabled {
            return;
        }
        self.time_text = text.into();
        if let (Ok(time), Some(current)) = (parse_time(&self.time_text), self.value()) {
            self.commit(current.date().and_time(time));
        }
    }

    /// Commits `value`; an uncontrolled field then shows its time as `HH:MM`.
    /// A controlled field resyncs through `set_value`.
    fn commit(&mut self, value: NaiveDateTime) {
        self.core.commit(Some(value));
        if !self.core.is_controlled() {
            self.time_text = format_time(value.time());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_select_uses_default_time() {
        let mut field = DateTimeField::new(Binding::default());
        assert_eq!(field.time_text(), "09:00");
        field.select_date(Some(date()));
        assert_eq!(field.text(), "Jun 01, 2025 09:00");
    }

    #[test]
    fn test_invalid_time_kept_but_not_committed() {
        let commits = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&commits);
        let mut field = DateTimeField::new(Binding::Uncontrolled {
            default: Some(date().and_hms_opt(14, 30, 0).unwrap()),
        })
        .on_change(move |_| *counter.lock().unwrap() += 1);
        assert_eq!(field.time_text(), "14:30");

        field.on_time_input("25:00");
        assert_eq!(field.time_text(), "25:00");
        assert_eq!(field.text(), "Jun 01, 2025 14:30");
        assert_eq!(*commits.lock().unwrap(), 0);

        field.on_time_input("7:05");
        assert_eq!(field.text(), "Jun 01, 2025 07:05");
        assert_eq!(field.time_text(), "07:05");
        assert_eq!(*commits.lock().unwrap(), 1);
    }

    #[test]
    fn test_select_with_invalid_time_uses_midnight() {
        let mut field = DateTimeField::new(Binding::default());
        field.on_time_input("nope");
        assert_eq!(field.value(), None);
        field.select_date(Some(date()));
        assert_eq!(field.value(), Some(date().and_hms_opt(0, 0, 0).unwrap()));
        assert_eq!(field.time_text(), "00:00");
        assert_eq!(field.text(), "Jun 01, 2025 00:00");
    }

    #[test]
    fn test_controlled_time_text_follows_caller() {
        let at = date().and_hms_opt(14, 30, 0).unwrap();
        let mut field = DateTimeField::new(Binding::Controlled(Some(at)));
        field.on_time_input("8:15");
        assert_eq!(field.value(), Some(at));
        assert_eq!(field.time_text(), "8:15");

        field.set_value(Some(date().and_hms_opt(8, 15, 0).unwrap()));
        assert_eq!(field.time_text(), "08:15");
    }

    #[test]
    fn test_select_none_clears() {
        let mut field = DateTimeField::new(Binding::Uncontrolled {
            default: Some(date().and_hms_opt(8, 0, 0).unwrap()),
        });
        field.select_date(None);
        assert_eq!(field.text(), "");
    }
}
