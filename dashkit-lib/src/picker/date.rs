//! Single date field with free-text entry.

use chrono::Datelike;
use chrono::NaiveDate;
use log::debug;

use super::Binding;
use super::FieldCore;
use super::parse::{form_value, format_long, parse_date};

/// An editable date text box with a calendar popover.
///
/// Typing commits as soon as the text parses. Blur tidies up: valid text is
/// reformatted, blank text clears the value, anything else reverts to the
/// last committed value.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dashkit_lib::picker::{Binding, DateField};
///
/// let mut field = DateField::new(Binding::Uncontrolled { default: None });
/// field.on_input("Jun 1, 2025");
/// field.on_blur();
/// assert_eq!(field.text(), "June 01, 2025");
/// assert_eq!(field.form_value(), "2025-06-01");
/// assert_eq!(field.value(), NaiveDate::from_ymd_opt(2025, 6, 1));
/// ```
#[derive(Debug)]
pub struct DateField {
    core: FieldCore<NaiveDate>,
    text: String,
    name: Option<String>,
}

field_common!(DateField, NaiveDate);

impl DateField {
    pub fn new(binding: Binding<NaiveDate>) -> Self {
        let core = FieldCore::new(binding, "Select date", |d: &NaiveDate| *d);
        let text = core.value().copied().map(format_long).unwrap_or_default();
        Self {
            core,
            text,
            name: None,
        }
    }

    /// Form field name for the hidden `YYYY-MM-DD` input.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.core.value().copied()
    }

    /// Current text box content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Committed value as `YYYY-MM-DD`, empty when unset.
    pub fn form_value(&self) -> String {
        self.value().map(form_value).unwrap_or_default()
    }

    /// `(name, value)` for the hidden input, when a name is set.
    pub fn form_field(&self) -> Option<(&str, String)> {
        self.name.as_deref().map(|name| (name, self.form_value()))
    }

    /// Pushes a new value from outside, e.g. a controlled update.
    /// Does not notify.
    pub fn set_value(&mut self, value: Option<NaiveDate>) {
        self.core.replace(value);
        self.text = value.map(format_long).unwrap_or_default();
        if let Some(date) = value {
            self.core.show_month(date);
        }
    }

    /// Keystroke in the text box.
    pub fn on_input(&mut self, text: impl Into<String>) {
        if self.core.disabled {
            return;
        }
        self.text = text.into();
        if let Ok(date) = parse_date(&self.text) {
            self.core.show_month(date);
            self.core.commit(Some(date));
        }
    }

    pub fn on_blur(&mut self) {
        if self.core.disabled {
            return;
        }
        if let Ok(date) = parse_date(&self.text) {
            self.text = format_long(date);
        } else if self.text.trim().is_empty() {
            self.text.clear();
            self.core.commit(None);
        } else {
            debug!("reverting unparseable date text '{}'", self.text);
            self.text = self.value().map(format_long).unwrap_or_default();
        }
    }

    /// Calendar click. `None` deselects.
    pub fn select(&mut self, date: Option<NaiveDate>) {
        if self.core.disabled {
            return;
        }
        self.text = date.map(format_long).unwrap_or_default();
        if let Some(date) = date {
            self.core.show_month(date);
        }
        self.core.commit(date);
        self.core.set_open(false);
    }

    /// `(year, month)` shown by the calendar caption dropdowns.
    pub fn month_year(&self) -> (i32, u32) {
        let month = self.core.month();
        (month.year(), month.month())
    }
}
