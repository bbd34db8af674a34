use crate::data_structures::MONTHS;
use chrono::{Datelike, Month, NaiveDate};

const MONTHS_OF_YEAR: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Abbreviated month names for the projection horizon, starting at the
/// month of `start`.
pub fn month_labels(start: NaiveDate) -> Vec<String> {
    let first = start.month0() as usize;

    (0..MONTHS)
        .map(|offset| {
            let month = MONTHS_OF_YEAR[(first + offset) % MONTHS_OF_YEAR.len()];
            month.name().chars().take(3).collect()
        })
        .collect()
}
