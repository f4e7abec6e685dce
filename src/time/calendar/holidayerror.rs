use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HolidayError {
    /// The oracle has no holiday rules for the country code.
    #[error("holidays are not implemented for country '{0}'")]
    UnsupportedCountry(String)
}
