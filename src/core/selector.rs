//! Inverse-frequency weighted selection and call bookkeeping.
//!
//! Every student weighs `1 / (count + 1)`, so each one keeps a non-zero chance
//! while students called less often are favoured. The random source is
//! always passed in; nothing here touches global state or the filesystem.

use crate::errors::{AppError, AppResult};
use crate::models::{HistoryRecord, Student};
use chrono::NaiveDateTime;
use rand::Rng;

/// Result of a draw: where the student sits in the roster and their count
/// *before* this call is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub name: String,
    pub count: u32,
}

/// Selection weight for a student called `count` times.
pub fn weight(count: u32) -> f64 {
    1.0 / (f64::from(count) + 1.0)
}

/// Running totals of the weights, one entry per student.
pub fn cumulative_weights(roster: &[Student]) -> Vec<f64> {
    roster
        .iter()
        .scan(0.0, |acc, s| {
            *acc += weight(s.count);
            Some(*acc)
        })
        .collect()
}

/// Index of the bucket a draw in `[0, total)` falls into: the first entry
/// whose cumulative bound is strictly greater than `draw`.
///
/// Draws at or past the last bound (only possible through float rounding)
/// land in the last bucket. `cumulative` must not be empty.
pub fn bucket_for(cumulative: &[f64], draw: f64) -> usize {
    let idx = cumulative.partition_point(|&bound| bound <= draw);
    idx.min(cumulative.len().saturating_sub(1))
}

/// Pick one student with a single weighted draw.
///
/// Returns `None` for an empty roster.
pub fn select_weighted<R: Rng + ?Sized>(roster: &[Student], rng: &mut R) -> Option<Selection> {
    let cumulative = cumulative_weights(roster);
    let total = *cumulative.last()?;

    let draw = rng.random_range(0.0..total);
    let index = bucket_for(&cumulative, draw);
    let student = &roster[index];

    Some(Selection {
        index,
        name: student.name.clone(),
        count: student.count,
    })
}

/// Apply a call to `roster` and `history`.
///
/// The first student named `name` gets its count bumped by one and a record
/// stamped with `now` is appended. Returns the new count. When no student
/// matches, nothing is changed and `StudentNotFound` is returned.
pub fn record_selection(
    roster: &mut [Student],
    history: &mut Vec<HistoryRecord>,
    name: &str,
    now: NaiveDateTime,
) -> AppResult<u32> {
    let student = roster
        .iter_mut()
        .find(|s| s.name == name)
        .ok_or_else(|| AppError::StudentNotFound(name.to_string()))?;

    student.count = student.count.saturating_add(1);
    history.push(HistoryRecord::new(name, now));

    Ok(student.count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    fn roster(counts: &[(&str, u32)]) -> Vec<Student> {
        counts
            .iter()
            .map(|(n, c)| Student::with_count(*n, *c))
            .collect()
    }

    #[test]
    fn weights_decrease_with_count_and_stay_positive() {
        assert_eq!(weight(0), 1.0);
        assert_eq!(weight(1), 0.5);
        assert_eq!(weight(3), 0.25);
        assert!(weight(u32::MAX) > 0.0);
        assert!(weight(4) < weight(3));
    }

    #[test]
    fn empty_roster_yields_no_selection() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_weighted(&[], &mut rng).is_none());
    }

    #[test]
    fn single_student_is_always_selected() {
        let r = roster(&[("Only", 12)]);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let sel = select_weighted(&r, &mut rng).unwrap();
            assert_eq!(sel.index, 0);
            assert_eq!(sel.name, "Only");
            assert_eq!(sel.count, 12);
        }
    }

    #[test]
    fn buckets_follow_cumulative_bounds() {
        // Alice (count 0) weighs 1.0, Bob (count 3) weighs 0.25
        let r = roster(&[("Alice", 0), ("Bob", 3)]);
        let cumulative = cumulative_weights(&r);
        assert_eq!(cumulative, vec![1.0, 1.25]);

        assert_eq!(bucket_for(&cumulative, 0.0), 0);
        assert_eq!(bucket_for(&cumulative, 0.999), 0);
        assert_eq!(bucket_for(&cumulative, 1.0), 1);
        assert_eq!(bucket_for(&cumulative, 1.24), 1);
        assert_eq!(bucket_for(&cumulative, 1.25), 1);
    }

    #[test]
    fn selection_always_comes_from_roster() {
        let r = roster(&[("A", 0), ("B", 5), ("C", 2), ("D", 0), ("E", 40)]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1_000 {
            let sel = select_weighted(&r, &mut rng).unwrap();
            assert_eq!(r[sel.index].name, sel.name);
            assert_eq!(r[sel.index].count, sel.count);
        }
    }

    #[test]
    fn less_called_students_are_drawn_more_often() {
        let r = roster(&[("Fresh", 0), ("Once", 1), ("Often", 9)]);
        let mut rng = StdRng::seed_from_u64(2024);
        let mut hits = [0usize; 3];

        for _ in 0..60_000 {
            hits[select_weighted(&r, &mut rng).unwrap().index] += 1;
        }

        // expected shares: 1.0 : 0.5 : 0.1 of 1.6
        assert!(hits.iter().all(|&h| h > 0));
        assert!(hits[0] > hits[1]);
        assert!(hits[1] > hits[2]);

        let share = hits[0] as f64 / 60_000.0;
        assert!((share - 0.625).abs() < 0.02, "share was {share}");
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let r = roster(&[("A", 0), ("B", 1), ("C", 2)]);
        let mut first = StdRng::seed_from_u64(7);
        let mut second = StdRng::seed_from_u64(7);

        let a: Vec<usize> = (0..20)
            .map(|_| select_weighted(&r, &mut first).unwrap().index)
            .collect();
        let b: Vec<usize> = (0..20)
            .map(|_| select_weighted(&r, &mut second).unwrap().index)
            .collect();

        assert_eq!(a, b);
    }

    #[test]
    fn recording_bumps_one_count_and_appends_one_record() {
        let mut r = roster(&[("Alice", 0), ("Bob", 3)]);
        let mut history = Vec::new();

        let count = record_selection(&mut r, &mut history, "Alice", at()).unwrap();

        assert_eq!(count, 1);
        assert_eq!(r, roster(&[("Alice", 1), ("Bob", 3)]));
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].name, "Alice");
        assert_eq!(history[0].timestamp, "2025-09-01 10:30:00");
    }

    #[test]
    fn recording_touches_only_the_first_duplicate() {
        let mut r = roster(&[("Sam", 2), ("Sam", 2)]);
        let mut history = Vec::new();

        record_selection(&mut r, &mut history, "Sam", at()).unwrap();

        assert_eq!(r[0].count, 3);
        assert_eq!(r[1].count, 2);
    }

    #[test]
    fn recording_unknown_name_changes_nothing() {
        let mut r = roster(&[("Alice", 0)]);
        let mut history = Vec::new();

        let err = record_selection(&mut r, &mut history, "Zed", at()).unwrap_err();

        assert!(matches!(err, AppError::StudentNotFound(ref n) if n == "Zed"));
        assert_eq!(r, roster(&[("Alice", 0)]));
        assert!(history.is_empty());
    }
}
