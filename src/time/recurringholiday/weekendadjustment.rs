use std::collections::HashMap;

use chrono::{
    Datelike, 
    Duration,
    NaiveDate, 
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};


#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum WeekendAdjustment {
    Unadjusted = 0,
    NextWeekday = 1,
    PreviousWeekday = -1
}

/// Where a holiday is observed when its nominal date falls on a given weekday.
/// Indexed by `Weekday::num_days_from_monday()`; `None` means no observed copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeekendAdjustmentRule {
    rule: [Option<i64>; 7]
}

impl WeekendAdjustmentRule {
    /// Builds the rule from a weekend adjustment map. Consecutive adjusted days
    /// are skipped over, so `{Sat: NextWeekday, Sun: NextWeekday}` moves a
    /// Saturday holiday to Monday. `Unadjusted` days are valid targets.
    ///
    /// `None` when a walk never reaches an unadjusted day, i.e. every weekday
    /// is adjusted.
    pub fn new(
        adjustment_map: &HashMap<Weekday, WeekendAdjustment>,
    ) -> Option<WeekendAdjustmentRule> {
        let is_adjusted = |weekday: &Weekday| {
            adjustment_map
                .get(weekday)
                .is_some_and(|adj| *adj != WeekendAdjustment::Unadjusted)
        };
        let mut rule: [Option<i64>; 7] = [None; 7];

        for (&weekday, &adj) in adjustment_map {
            if adj == WeekendAdjustment::Unadjusted {
                continue;
            }

            let next_weekday = if adj == WeekendAdjustment::NextWeekday {
                Weekday::succ
            } else {
                Weekday::pred
            };
            let one_day = adj as i64;

            let mut to_weekday = weekday;
            let mut shift_days: i64 = 0;
            while is_adjusted(&to_weekday) {
                if shift_days.abs() >= 7 {
                    return None;
                }
                to_weekday = next_weekday(&to_weekday);
                shift_days += one_day;
            }

            rule[weekday.num_days_from_monday() as usize] = Some(shift_days);
        }

        Some(WeekendAdjustmentRule { rule })
    }

    /// Builds the rule from explicit day shifts, for holidays whose observed
    /// day must also skip a neighbouring holiday (Christmas and Boxing Day).
    pub fn from_shift_days(shift_map: &HashMap<Weekday, i64>) -> WeekendAdjustmentRule {
        let mut rule: [Option<i64>; 7] = [None; 7];
        for (&weekday, &shift) in shift_map {
            if shift != 0 {
                rule[weekday.num_days_from_monday() as usize] = Some(shift);
            }
        }
        WeekendAdjustmentRule { rule }
    }

    pub fn is_empty(&self) -> bool {
        self.rule.iter().all(Option::is_none)
    }

    /// The observed date for a nominal holiday date, if it is moved at all.
    #[inline]
    pub fn observed(&self, d: NaiveDate) -> Option<NaiveDate> {
        let idx = d.weekday().num_days_from_monday() as usize;
        self.rule[idx].and_then(|shift| d.checked_add_signed(Duration::days(shift)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn nearest_weekday_rule() {
        let rule = WeekendAdjustmentRule::new(&HashMap::from([
            (Weekday::Sat, WeekendAdjustment::PreviousWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday),
        ])).unwrap();
        // Saturday -> Friday, Sunday -> Monday, weekdays untouched.
        assert_eq!(rule.observed(ymd(2022, 1, 1)), Some(ymd(2021, 12, 31)));
        assert_eq!(rule.observed(ymd(2022, 12, 25)), Some(ymd(2022, 12, 26)));
        assert_eq!(rule.observed(ymd(2022, 7, 4)), None);
    }

    #[test]
    fn consecutive_weekend_days_are_skipped() {
        let rule = WeekendAdjustmentRule::new(&HashMap::from([
            (Weekday::Sat, WeekendAdjustment::NextWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday),
        ])).unwrap();
        assert_eq!(rule.observed(ymd(2022, 1, 1)), Some(ymd(2022, 1, 3)));
        assert_eq!(rule.observed(ymd(2023, 1, 1)), Some(ymd(2023, 1, 2)));
    }

    #[test]
    fn explicit_shifts() {
        let rule = WeekendAdjustmentRule::from_shift_days(&HashMap::from([
            (Weekday::Sat, 2),
            (Weekday::Sun, 2),
        ]));
        // Christmas 2022 falls on a Sunday; Boxing Day takes the Monday.
        assert_eq!(rule.observed(ymd(2022, 12, 25)), Some(ymd(2022, 12, 27)));
        assert!(WeekendAdjustmentRule::default().is_empty());
    }

    #[test]
    fn unadjusted_days_are_targets_not_skipped() {
        let rule = WeekendAdjustmentRule::new(&HashMap::from([
            (Weekday::Sat, WeekendAdjustment::NextWeekday),
            (Weekday::Sun, WeekendAdjustment::Unadjusted),
        ])).unwrap();
        // Saturday moves to Sunday; Sunday itself stays put.
        assert_eq!(rule.observed(ymd(2022, 1, 1)), Some(ymd(2022, 1, 2)));
        assert_eq!(rule.observed(ymd(2022, 1, 2)), None);
    }

    #[test]
    fn every_day_adjusted_has_no_rule() {
        let all_days: HashMap<Weekday, WeekendAdjustment> = [
            Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
            Weekday::Fri, Weekday::Sat, Weekday::Sun,
        ]
        .into_iter()
        .map(|w| (w, WeekendAdjustment::NextWeekday))
        .collect();
        assert_eq!(WeekendAdjustmentRule::new(&all_days), None);
    }
}
