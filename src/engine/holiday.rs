use chrono::NaiveDate;

/// One holiday returned by a range query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    pub holiday_name: String,
    pub date: NaiveDate,
    pub country_abbreviation: String
}

impl Holiday {
    pub fn new(holiday_name: String, date: NaiveDate, country_abbreviation: String) -> Holiday {
        Holiday { holiday_name, date, country_abbreviation }
    }
}
