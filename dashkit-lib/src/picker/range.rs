//! Date range field.

use chrono::NaiveDate;

use super::Binding;
use super::FieldCore;
use super::parse::format_short;

/// A start/end pair. Either end may be open while the user is picking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn starting(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            (Some(start), None) => start == date,
            _ => false,
        }
    }

    /// `"Jun 01, 2025 – Jun 05, 2025"`, `"Jun 01, 2025 –"` while the end is
    /// open, empty without a start.
    pub fn display(&self) -> String {
        match (self.start, self.end) {
            (Some(start), Some(end)) => format!("{} – {}", format_short(start), format_short(end)),
            (Some(start), None) => format!("{} –", format_short(start)),
            (None, _) => String::new(),
        }
    }

    /// Range after clicking `day` on the calendar.
    ///
    /// No start, or a finished range, starts over at `day`. With only a start,
    /// `day` closes the range; an earlier day becomes the new start.
    pub fn extended(self, day: NaiveDate) -> Self {
        match (self.start, self.end) {
            (Some(start), None) if day < start => Self::new(day, start),
            (Some(start), None) => Self::new(start, day),
            _ => Self::starting(day),
        }
    }
}

/// Read-only range text box with a two-month calendar popover.
#[derive(Debug)]
pub struct DateRangeField {
    core: FieldCore<DateRange>,
}

field_common!(DateRangeField, DateRange);

impl DateRangeField {
    pub fn new(binding: Binding<DateRange>) -> Self {
        let core = FieldCore::new(binding, "Select date range", |r: &DateRange| {
            r.start.unwrap_or_else(|| chrono::Local::now().date_naive())
        });
        Self { core }
    }

    pub fn value(&self) -> Option<DateRange> {
        self.core.value().copied()
    }

    pub fn text(&self) -> String {
        self.value().map(|r| r.display()).unwrap_or_default()
    }

    pub fn set_value(&mut self, value: Option<DateRange>) {
        self.core.replace(value);
        if let Some(start) = value.and_then(|r| r.start) {
            self.core.show_month(start);
        }
    }

    /// Calendar click. The popover stays open.
    pub fn select_day(&mut self, day: NaiveDate) {
        if self.core.disabled {
            return;
        }
        let next = self.value().unwrap_or_default().extended(day);
        self.commit(Some(next));
    }

    /// Commits a whole range, or clears it with `None`.
    pub fn commit(&mut self, range: Option<DateRange>) {
        if self.core.disabled {
            return;
        }
        if let Some(start) = range.and_then(|r| r.start) {
            self.core.show_month(start);
        }
        self.core.commit(range);
    }

    /// Second month of the two-month calendar.
    pub fn next_month(&self) -> NaiveDate {
        self.core
            .month()
            .checked_add_months(chrono::Months::new(1))
            .unwrap_or(self.core.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(DateRange::default().display(), "");
        assert_eq!(DateRange::starting(date(6, 1)).display(), "Jun 01, 2025 –");
        assert_eq!(
            DateRange::new(date(6, 1), date(6, 5)).display(),
            "Jun 01, 2025 – Jun 05, 2025"
        );
        let end_only = DateRange {
            start: None,
            end: Some(date(6, 5)),
        };
        assert_eq!(end_only.display(), "");
    }

    #[test]
    fn test_picking_a_range() {
        let mut field = DateRangeField::new(Binding::default());
        assert_eq!(field.text(), "");
        field.open();
        field.select_day(date(6, 10));
        assert_eq!(field.text(), "Jun 10, 2025 –");
        field.select_day(date(6, 3));
        assert_eq!(field.value(), Some(DateRange::new(date(6, 3), date(6, 10))));
        assert!(field.is_open());
        assert_eq!(field.month(), date(6, 1));
        assert_eq!(field.next_month(), date(7, 1));

        field.select_day(date(7, 4));
        assert_eq!(field.value(), Some(DateRange::starting(date(7, 4))));
    }

    #[test]
    fn test_contains() {
        let range = DateRange::new(date(6, 1), date(6, 5));
        assert!(range.contains(date(6, 1)));
        assert!(range.contains(date(6, 5)));
        assert!(!range.contains(date(6, 6)));
    }

    #[test]
    fn test_clear() {
        let mut field = DateRangeField::new(Binding::Uncontrolled {
            default: Some(DateRange::new(date(6, 1), date(6, 5))),
        })
        .required(true);
        assert!(!field.is_missing());
        field.commit(None);
        assert!(field.is_missing());
    }
}
