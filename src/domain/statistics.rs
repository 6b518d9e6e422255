//! Learning-progress snapshot and the practice streak.
//!
//! The streak counts consecutive practice days ending today. The most recent
//! date may also be yesterday, so a streak survives until the first log of
//! the day is written; the remaining days then have to follow on from it.
//! That one-day grace applies only to the most recent gap, an older gap
//! ends the streak.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

use crate::domain::models::ItemType;
use crate::storage::{Collection, CountFilter, StatsStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatisticsSnapshot {
    pub total_lessons: u64,
    pub completed_lessons: u64,
    pub total_theory: u64,
    pub completed_theory: u64,
    pub total_practice_minutes: i64,
    pub practice_streak: u32,
    pub total_sheet_music: u64,
    pub bookmarks_count: u64,
}

/// Read-only summary over a [`StatsStore`].
pub struct StatisticsAggregator<'a, S: StatsStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: StatsStore + ?Sized> StatisticsAggregator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Snapshot as of the current UTC date.
    pub async fn get_statistics(&self) -> Result<StatisticsSnapshot, StoreError> {
        self.snapshot_on(Utc::now().date_naive()).await
    }

    /// Snapshot with the streak anchored at `today`.
    ///
    /// All reads run concurrently; the first failure aborts the rest and no
    /// partial snapshot is produced.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn snapshot_on(&self, today: NaiveDate) -> Result<StatisticsSnapshot, StoreError> {
        let store = self.store;
        let (
            total_lessons,
            completed_lessons,
            total_theory,
            completed_theory,
            total_sheet_music,
            bookmarks_count,
            samples,
        ) = tokio::try_join!(
            store.count(Collection::Lessons, CountFilter::All),
            store.count(
                Collection::Progress,
                CountFilter::Completed(ItemType::Lesson)
            ),
            store.count(Collection::Theory, CountFilter::All),
            store.count(
                Collection::Progress,
                CountFilter::Completed(ItemType::Theory)
            ),
            store.count(Collection::SheetMusic, CountFilter::All),
            store.count(Collection::Bookmarks, CountFilter::All),
            store.find_practice_samples(),
        )?;

        let total_practice_minutes: i64 = samples
            .iter()
            .map(|sample| sample.duration_minutes.unwrap_or(0))
            .sum();
        let practice_streak =
            practice_streak(samples.iter().map(|sample| sample.date.as_str()), today);

        tracing::debug!(
            logs = samples.len(),
            total_practice_minutes,
            practice_streak,
            "computed statistics"
        );

        Ok(StatisticsSnapshot {
            total_lessons,
            completed_lessons,
            total_theory,
            completed_theory,
            total_practice_minutes,
            practice_streak,
            total_sheet_music,
            bookmarks_count,
        })
    }
}

// `%#z` takes `Z`, `+HH`, `+HHMM` and `+HH:MM`
const ZONED_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M%#z",
];

const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a practice date, trying ISO-8601 date-times before plain `YYYY-MM-DD`.
///
/// Date-times may use `T` or a space, may stop at minutes or hours, and may
/// carry an offset. The calendar date is the one written, in its own offset.
pub fn parse_practice_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    if let Some(datetime) = ZONED_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(raw, format).ok())
    {
        return Some(datetime.date_naive());
    }
    if let Some(datetime) = LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(datetime.date());
    }

    // hour-only date-time, e.g. `2026-10-15T07`
    let (date, rest) = NaiveDate::parse_and_remainder(raw, "%Y-%m-%d").ok()?;
    if rest.is_empty() {
        return Some(date);
    }
    let hour = rest.strip_prefix(['T', ' '])?;
    let valid_hour = hour.len() == 2
        && hour.bytes().all(|b| b.is_ascii_digit())
        && hour.parse::<u32>().is_ok_and(|hour| hour < 24);
    valid_hour.then_some(date)
}

/// Counts consecutive practice days ending at `today` (or yesterday).
///
/// Dates are deduplicated per calendar day and walked most recent first.
/// An unparsable entry keeps its raw text as the sort key and stops the
/// walk when reached.
pub fn practice_streak<'a, I>(dates: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    let mut days: BTreeMap<String, Option<NaiveDate>> = BTreeMap::new();
    for raw in dates {
        match parse_practice_date(raw) {
            Some(day) => {
                days.insert(day.format("%Y-%m-%d").to_string(), Some(day));
            }
            None => {
                tracing::warn!(date = raw, "unparsable practice date");
                days.insert(raw.to_string(), None);
            }
        }
    }

    let mut streak = 0;
    let mut anchor = today;
    for (position, day) in days.values().rev().enumerate() {
        let Some(day) = day else {
            break;
        };
        if position == 0 {
            if today.signed_duration_since(*day).num_days() > 1 {
                break;
            }
            // a head dated yesterday moves the rest of the walk back one day
            if *day < today {
                anchor = *day;
            }
        } else if *day != anchor - TimeDelta::days(position as i64) {
            break;
        }
        streak += 1;
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::PracticeSample;
    use crate::storage::testing::{FailingStore, StubStore};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    fn days_ago(days: i64) -> String {
        (today() - TimeDelta::days(days))
            .format("%Y-%m-%d")
            .to_string()
    }

    fn streak_of(dates: &[String]) -> u32 {
        practice_streak(dates.iter().map(String::as_str), today())
    }

    fn sample(date: &str, duration_minutes: Option<i64>) -> PracticeSample {
        PracticeSample {
            date: date.to_string(),
            duration_minutes,
        }
    }

    #[test]
    fn no_dates_means_no_streak() {
        assert_eq!(streak_of(&[]), 0);
    }

    #[test]
    fn three_consecutive_days_ending_today() {
        assert_eq!(streak_of(&[days_ago(0), days_ago(1), days_ago(2)]), 3);
    }

    #[test]
    fn yesterday_still_counts_at_the_head() {
        assert_eq!(streak_of(&[days_ago(1), days_ago(2)]), 2);
    }

    #[test]
    fn two_day_gap_at_the_head_breaks_the_streak() {
        assert_eq!(streak_of(&[days_ago(2)]), 0);
    }

    #[test]
    fn duplicate_dates_advance_one_position() {
        assert_eq!(streak_of(&[days_ago(0), days_ago(0)]), 1);
        assert_eq!(streak_of(&[days_ago(0), days_ago(0), days_ago(1)]), 2);
    }

    #[test]
    fn grace_only_applies_to_the_most_recent_gap() {
        // today, then a one-day hole, then older days
        assert_eq!(streak_of(&[days_ago(0), days_ago(2), days_ago(3)]), 1);
    }

    #[test]
    fn yesterday_head_anchors_the_rest_of_the_walk() {
        assert_eq!(streak_of(&[days_ago(1), days_ago(2), days_ago(3)]), 3);
        assert_eq!(streak_of(&[days_ago(1), days_ago(3)]), 1);
    }

    #[test]
    fn input_order_does_not_matter() {
        assert_eq!(streak_of(&[days_ago(2), days_ago(0), days_ago(1)]), 3);
    }

    #[test]
    fn future_head_is_accepted_by_grace() {
        assert_eq!(streak_of(&[days_ago(-1)]), 1);
    }

    #[test]
    fn time_of_day_is_discarded() {
        let dates = vec![
            format!("{}T07:15:00", days_ago(0)),
            format!("{}T21:40:00Z", days_ago(0)),
            days_ago(1),
        ];
        assert_eq!(streak_of(&dates), 2);
    }

    #[test]
    fn unparsable_date_stops_the_walk() {
        // "2026-10-14x" sorts between today and yesterday
        let dates = vec![days_ago(0), "2026-10-14x".to_string(), days_ago(1)];
        assert_eq!(streak_of(&dates), 1);
    }

    #[test]
    fn unparsable_head_yields_zero() {
        assert_eq!(streak_of(&["not a date".to_string(), days_ago(0)]), 0);
    }

    #[test]
    fn parse_falls_back_to_plain_dates() {
        let expected = NaiveDate::from_ymd_opt(2026, 3, 9);
        assert_eq!(parse_practice_date("2026-03-09"), expected);
        assert_eq!(parse_practice_date("2026-03-09T10:00:00"), expected);
        assert_eq!(parse_practice_date("2026-03-09T10:00:00.250"), expected);
        assert_eq!(parse_practice_date("2026-03-09T23:30:00+02:00"), expected);
        assert_eq!(parse_practice_date(" 2026-03-09 "), expected);
        assert_eq!(parse_practice_date("09/03/2026"), None);
        assert_eq!(parse_practice_date(""), None);
    }

    #[test]
    fn parse_accepts_shortened_iso_date_times() {
        let expected = NaiveDate::from_ymd_opt(2026, 3, 9);
        for raw in [
            "2026-03-09T10:00",
            "2026-03-09T10",
            "2026-03-09 10:00:00",
            "2026-03-09 10:00",
            "2026-03-09 10",
            "2026-03-09T10:00Z",
            "2026-03-09T10:00+01:00",
            "2026-03-09T10:00:00+0100",
            "2026-03-09 23:30:00.5-05:00",
        ] {
            assert_eq!(parse_practice_date(raw), expected, "{raw}");
        }
    }

    #[test]
    fn parse_rejects_broken_time_suffixes() {
        for raw in [
            "2026-03-09T",
            "2026-03-09T25",
            "2026-03-09T7",
            "2026-03-09T+1",
            "2026-03-09x",
            "2026-03-09T10:61",
        ] {
            assert_eq!(parse_practice_date(raw), None, "{raw}");
        }
    }

    #[test]
    fn minutes_only_date_times_keep_the_streak() {
        let dates = vec![
            format!("{}T07:30", days_ago(0)),
            format!("{} 18:00", days_ago(1)),
            format!("{}T06", days_ago(2)),
        ];
        assert_eq!(streak_of(&dates), 3);
    }

    #[tokio::test]
    async fn empty_store_yields_zero_minutes_and_streak() {
        let store = StubStore::default();

        let snapshot = StatisticsAggregator::new(&store)
            .snapshot_on(today())
            .await
            .unwrap();

        assert_eq!(snapshot, StatisticsSnapshot::default());
    }

    #[tokio::test]
    async fn minutes_sum_includes_zero_and_missing_durations() {
        let store = StubStore::with_samples(vec![
            sample(&days_ago(0), Some(30)),
            sample(&days_ago(0), Some(0)),
            sample(&days_ago(1), None),
            sample(&days_ago(5), Some(45)),
        ]);

        let snapshot = StatisticsAggregator::new(&store)
            .snapshot_on(today())
            .await
            .unwrap();

        assert_eq!(snapshot.total_practice_minutes, 75);
        assert_eq!(snapshot.practice_streak, 2);
    }

    #[tokio::test]
    async fn counts_are_copied_from_the_store() {
        let store = StubStore {
            lessons: 10,
            theory: 6,
            sheet_music: 12,
            bookmarks: 3,
            completed_lessons: 4,
            completed_theory: 2,
            ..Default::default()
        };

        let snapshot = StatisticsAggregator::new(&store)
            .snapshot_on(today())
            .await
            .unwrap();

        assert_eq!(snapshot.total_lessons, 10);
        assert_eq!(snapshot.completed_lessons, 4);
        assert_eq!(snapshot.total_theory, 6);
        assert_eq!(snapshot.completed_theory, 2);
        assert_eq!(snapshot.total_sheet_music, 12);
        assert_eq!(snapshot.bookmarks_count, 3);
        assert_eq!(store.calls(), 7);
    }

    #[tokio::test]
    async fn repeated_snapshots_are_identical() {
        let store = StubStore::with_samples(vec![
            sample(&days_ago(0), Some(20)),
            sample(&days_ago(1), Some(25)),
        ]);
        let aggregator = StatisticsAggregator::new(&store);

        let first = aggregator.snapshot_on(today()).await.unwrap();
        let second = aggregator.snapshot_on(today()).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unavailable_store_fails_the_whole_snapshot() {
        let result = StatisticsAggregator::new(&FailingStore)
            .snapshot_on(today())
            .await;

        assert!(matches!(result, Err(StoreError::Unavailable { .. })));
    }
}
