use super::parse::LogParser;
use crate::error::Result;
use crate::git::GitRepo;
use crate::model::{ReportRow, ReportWindow};
use chrono::{Datelike, NaiveDate, Weekday};
use indicatif::ProgressBar;
use std::collections::BTreeMap;

/// Separator between distinct ticket summaries within one day's row.
const TICKET_SEPARATOR: &str = " + ";

/// Walk the window one day at a time, fetch that day's log, parse it, and
/// collect `"<ticket> <message>"` entries keyed by date. Days with zero
/// matched tickets get no key at all; reconciliation against business days
/// happens separately.
pub fn grouped_messages(
    repo: &GitRepo,
    parser: &LogParser,
    window: &ReportWindow,
    progress: Option<&ProgressBar>,
) -> Result<BTreeMap<NaiveDate, Vec<String>>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();

    for date in window.days() {
        let lines = repo.log_for_date(date)?;
        for (ticket, message) in parser.parse_day(&lines) {
            grouped
                .entry(date)
                .or_default()
                .push(format!("{ticket} {message}"));
        }
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }

    Ok(grouped)
}

/// Every date in the closed interval that is not a Saturday or Sunday.
pub fn business_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    ReportWindow::new(start, end)
        .days()
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .collect()
}

/// Merge grouped messages with the business-day baseline: one row per date
/// in the union, ascending. Dates with activity get their joined summaries;
/// business days without activity get an empty message.
pub fn reconcile(
    grouped: &BTreeMap<NaiveDate, Vec<String>>,
    business_days: &[NaiveDate],
) -> Vec<ReportRow> {
    let mut rows: BTreeMap<NaiveDate, String> = grouped
        .iter()
        .map(|(date, messages)| (*date, messages.join(TICKET_SEPARATOR)))
        .collect();

    for day in business_days {
        rows.entry(*day).or_default();
    }

    rows.into_iter()
        .map(|(date, message)| ReportRow {
            date,
            weekday: date.format("%A").to_string(),
            message,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn business_days_excludes_weekends() {
        // 2024-01-01 is a Monday; the 6th and 7th are the weekend.
        let days = business_days(date(2024, 1, 1), date(2024, 1, 7));
        assert_eq!(
            days,
            vec![
                date(2024, 1, 1),
                date(2024, 1, 2),
                date(2024, 1, 3),
                date(2024, 1, 4),
                date(2024, 1, 5),
            ]
        );
    }

    #[test]
    fn business_days_covers_every_weekday_exactly_once() {
        let days = business_days(date(2024, 1, 1), date(2024, 1, 31));
        assert_eq!(days.len(), 23);
        let mut sorted = days.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, days);
    }

    #[test]
    fn business_days_inverted_range_is_empty() {
        assert!(business_days(date(2024, 1, 10), date(2024, 1, 5)).is_empty());
    }

    #[test]
    fn reconcile_fills_empty_business_days() {
        let mut grouped = BTreeMap::new();
        grouped.insert(
            date(2024, 1, 2),
            vec!["ABC-1 fix login".to_string(), "XYZ-2 review".to_string()],
        );
        let business = vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)];

        let rows = reconcile(&grouped, &business);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].date, date(2024, 1, 1));
        assert_eq!(rows[0].message, "");
        assert_eq!(rows[1].message, "ABC-1 fix login + XYZ-2 review");
        assert_eq!(rows[2].message, "");
    }

    #[test]
    fn reconcile_has_exactly_one_row_per_date() {
        let mut grouped = BTreeMap::new();
        grouped.insert(date(2024, 1, 2), vec!["ABC-1 work".to_string()]);
        // 2024-01-02 is both a business day and an activity day.
        let business = vec![date(2024, 1, 2)];

        let rows = reconcile(&grouped, &business);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].message, "ABC-1 work");
    }

    #[test]
    fn reconcile_keeps_weekend_activity() {
        let mut grouped = BTreeMap::new();
        // 2024-01-06 is a Saturday.
        grouped.insert(date(2024, 1, 6), vec!["ABC-1 hotfix".to_string()]);
        let business = vec![date(2024, 1, 5), date(2024, 1, 8)];

        let rows = reconcile(&grouped, &business);
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2024, 1, 5), date(2024, 1, 6), date(2024, 1, 8)]);
        assert_eq!(rows[1].message, "ABC-1 hotfix");
        assert_eq!(rows[1].weekday, "Saturday");
    }

    #[test]
    fn reconcile_rows_sorted_ascending() {
        let mut grouped = BTreeMap::new();
        grouped.insert(date(2024, 1, 9), vec!["B-2 later".to_string()]);
        grouped.insert(date(2024, 1, 3), vec!["A-1 earlier".to_string()]);
        let business = vec![date(2024, 1, 5)];

        let rows = reconcile(&grouped, &business);
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn reconcile_empty_inputs_yield_no_rows() {
        let rows = reconcile(&BTreeMap::new(), &[]);
        assert!(rows.is_empty());
    }

    #[test]
    fn weekday_names_match_dates() {
        let mut grouped = BTreeMap::new();
        grouped.insert(date(2024, 1, 2), vec!["ABC-1 x".to_string()]);
        let rows = reconcile(&grouped, &[]);
        assert_eq!(rows[0].weekday, "Tuesday");
    }
}
