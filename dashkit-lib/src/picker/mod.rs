//! Date inputs
//!
//! Headless state for the single date, date range, and date-time fields.
//! Each field pairs an editable or read-only text box with a calendar
//! popover and reports committed values through an optional `on_change`
//! callback.

/// Shared builder and popover methods for the three field types.
macro_rules! field_common {
    ($field:ty, $value:ty) => {
        impl $field {
            pub fn disabled(mut self, disabled: bool) -> Self {
                self.core.disabled = disabled;
                if disabled {
                    self.core.set_open(false);
                }
                self
            }

            pub fn required(mut self, required: bool) -> Self {
                self.core.required = required;
                self
            }

            pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
                self.core.placeholder = placeholder.into();
                self
            }

            /// Called with every committed value, `None` when cleared.
            pub fn on_change<F>(mut self, handler: F) -> Self
            where
                F: FnMut(Option<&$value>) + Send + 'static,
            {
                self.core.set_on_change(Box::new(handler));
                self
            }

            pub fn is_disabled(&self) -> bool {
                self.core.disabled
            }

            pub fn is_required(&self) -> bool {
                self.core.required
            }

            pub fn placeholder_text(&self) -> &str {
                &self.core.placeholder
            }

            pub fn is_controlled(&self) -> bool {
                self.core.is_controlled()
            }

            /// A required field with no committed value.
            pub fn is_missing(&self) -> bool {
                self.core.required && self.core.value().is_none()
            }

            pub fn is_open(&self) -> bool {
                self.core.is_open()
            }

            pub fn open(&mut self) {
                self.core.set_open(true);
            }

            pub fn close(&mut self) {
                self.core.set_open(false);
            }

            pub fn on_key(&mut self, key: $crate::picker::Key) {
                self.core.on_key(key);
            }

            /// First day of the month the calendar shows.
            pub fn month(&self) -> chrono::NaiveDate {
                self.core.month()
            }

            /// Calendar navigation. Does not change the value.
            pub fn show_month(&mut self, date: chrono::NaiveDate) {
                self.core.show_month(date);
            }
        }
    };
}

mod date;
mod datetime;
mod parse;
mod range;

pub use date::*;
pub use datetime::*;
pub use parse::*;
pub use range::*;

use std::fmt;

use chrono::Datelike;
use chrono::NaiveDate;

/// Who owns a field's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding<T> {
    /// The caller owns the value. Commits only notify; the caller pushes the
    /// new value back with `set_value`.
    Controlled(Option<T>),
    /// The field owns the value, starting from `default`.
    Uncontrolled { default: Option<T> },
}

impl<T> Default for Binding<T> {
    fn default() -> Self {
        Binding::Uncontrolled { default: None }
    }
}

/// Keys the text box reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    Escape,
    Other,
}

type ChangeHandler<T> = Box<dyn FnMut(Option<&T>) + Send>;

/// State shared by every date input: value ownership, popover, visible
/// calendar month and the change callback.
pub(crate) struct FieldCore<T> {
    controlled: bool,
    value: Option<T>,
    open: bool,
    month: NaiveDate,
    pub(crate) disabled: bool,
    pub(crate) required: bool,
    pub(crate) placeholder: String,
    on_change: Option<ChangeHandler<T>>,
}

impl<T: Clone> FieldCore<T> {
    pub(crate) fn new(binding: Binding<T>, placeholder: &str, month_of: impl Fn(&T) -> NaiveDate) -> Self {
        let (controlled, value) = match binding {
            Binding::Controlled(value) => (true, value),
            Binding::Uncontrolled { default } => (false, default),
        };
        let month = value
            .as_ref()
            .map(&month_of)
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        Self {
            controlled,
            value,
            open: false,
            month: first_of_month(month),
            disabled: false,
            required: false,
            placeholder: placeholder.to_string(),
            on_change: None,
        }
    }

    pub(crate) fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub(crate) fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Store (when uncontrolled) and notify.
    pub(crate) fn commit(&mut self, next: Option<T>) {
        if let Some(handler) = self.on_change.as_mut() {
            handler(next.as_ref());
        }
        if !self.controlled {
            self.value = next;
        }
    }

    /// Replace the value without notifying. Used for controlled updates.
    pub(crate) fn replace(&mut self, next: Option<T>) {
        self.value = next;
    }

    pub(crate) fn set_on_change(&mut self, handler: ChangeHandler<T>) {
        self.on_change = Some(handler);
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn set_open(&mut self, open: bool) {
        self.open = open && !self.disabled;
    }

    pub(crate) fn on_key(&mut self, key: Key) {
        match key {
            Key::ArrowDown => self.set_open(true),
            Key::Escape => self.set_open(false),
            Key::Other => {}
        }
    }

    pub(crate) fn month(&self) -> NaiveDate {
        self.month
    }

    pub(crate) fn show_month(&mut self, date: NaiveDate) {
        self.month = first_of_month(date);
    }
}

impl<T: fmt::Debug> fmt::Debug for FieldCore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldCore")
            .field("controlled", &self.controlled)
            .field("value", &self.value)
            .field("open", &self.open)
            .field("month", &self.month)
            .field("disabled", &self.disabled)
            .field("required", &self.required)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
