use crate::models::{HistoryRecord, Stats, Student, StudentStat};

/// Build call statistics from the current roster and history.
///
/// `total_calls` is the history length, not the sum of the counts: the two
/// drift apart once a roster is re-imported without clearing history.
/// Students are ordered by count, highest first. The sort is stable, so ties
/// keep their roster order.
pub fn compute(roster: &[Student], history: &[HistoryRecord]) -> Stats {
    let total_calls = history.len();

    let mut student_stats: Vec<StudentStat> = roster
        .iter()
        .map(|s| StudentStat {
            name: s.name.clone(),
            count: s.count,
            percentage: percentage(s.count, total_calls),
        })
        .collect();

    student_stats.sort_by(|a, b| b.count.cmp(&a.count));

    Stats {
        total_students: roster.len(),
        total_calls,
        student_stats,
    }
}

fn percentage(count: u32, total_calls: usize) -> f64 {
    if total_calls == 0 {
        0.0
    } else {
        f64::from(count) / total_calls as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> HistoryRecord {
        HistoryRecord {
            name: name.to_string(),
            timestamp: "2025-09-01 09:00:00".to_string(),
        }
    }

    #[test]
    fn empty_inputs_give_empty_stats() {
        assert_eq!(compute(&[], &[]), Stats::empty());
    }

    #[test]
    fn no_calls_means_zero_percent() {
        let roster = vec![Student::new("Alice"), Student::new("Bob")];
        let stats = compute(&roster, &[]);

        assert_eq!(stats.total_students, 2);
        assert_eq!(stats.total_calls, 0);
        assert!(stats.student_stats.iter().all(|s| s.percentage == 0.0));
    }

    #[test]
    fn sorted_by_count_with_ties_in_roster_order() {
        let roster = vec![
            Student::with_count("Carol", 1),
            Student::with_count("Alice", 2),
            Student::with_count("Bob", 1),
        ];
        let history: Vec<_> = ["Alice", "Carol", "Alice", "Bob"]
            .iter()
            .map(|n| record(n))
            .collect();

        let stats = compute(&roster, &history);
        let names: Vec<&str> = stats
            .student_stats
            .iter()
            .map(|s| s.name.as_str())
            .collect();

        assert_eq!(names, ["Alice", "Carol", "Bob"]);
        assert_eq!(stats.total_calls, 4);
        assert_eq!(stats.student_stats[0].percentage, 50.0);
        assert_eq!(stats.student_stats[1].percentage, 25.0);
    }
}
