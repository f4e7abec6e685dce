use std::ops::RangeInclusive;

use chrono::{Datelike, Days, NaiveDate};

/// Inclusive range of dates.
///
/// The ends are kept as given: a range whose end precedes its start is
/// empty rather than swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> DateRange {
        DateRange { start_date, end_date }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn is_reversed(&self) -> bool {
        self.end_date < self.start_date
    }

    pub fn is_empty(&self) -> bool {
        self.is_reversed()
    }

    pub fn len(&self) -> usize {
        if self.is_reversed() {
            0
        } else {
            ((self.end_date - self.start_date).num_days() + 1) as usize
        }
    }

    /// Calendar years the range touches; empty for a reversed range.
    pub fn years(&self) -> RangeInclusive<i32> {
        if self.is_reversed() {
            #[allow(clippy::reversed_empty_ranges)]
            return 1..=0;
        }
        self.start_date.year()..=self.end_date.year()
    }

    pub fn iter(&self) -> DateRangeIterator<'_> {
        DateRangeIterator {
            date_range: self,
            index: 0,
        }
    }
}

pub struct DateRangeIterator<'a> {
    date_range: &'a DateRange,
    index: usize,
}

impl<'a> Iterator for DateRangeIterator<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.date_range.len() {
            let result = self
                .date_range
                .start_date()
                .checked_add_days(Days::new(self.index as u64));
            self.index += 1;
            result
        } else {
            None
        }
    }
}
