//! Generic aggregate helpers.
//!
//! All helpers are pure and empty-set safe: grouping or averaging over an
//! empty record set yields zero counts and `0.0`, never `NaN`, infinity,
//! or a panic. Derived statistics are recomputed on demand and never
//! stored.

use serde::Serialize;

/// Count of one group produced by [`count_by`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct GroupCount {
    pub key: String,
    pub count: u64,
}

/// Groups `records` by `key_fn` and counts each group.
///
/// Groups appear in first-seen order, so the result is stable with respect
/// to the input ordering.
pub fn count_by<R, K>(records: &[R], key_fn: impl Fn(&R) -> K) -> Vec<GroupCount>
where
    K: Into<String>,
{
    let mut groups: Vec<GroupCount> = Vec::new();
    for record in records {
        let key: String = key_fn(record).into();
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.count += 1,
            None => groups.push(GroupCount { key, count: 1 }),
        }
    }
    groups
}

/// Sum of `value_fn` over `records`; empty input sums to `0.0`.
pub fn sum_by<R>(records: &[R], value_fn: impl Fn(&R) -> f64) -> f64 {
    records.iter().map(value_fn).sum()
}

/// Mean of `value_fn` over `records`; the empty mean is defined as `0.0`.
pub fn average_by<R>(records: &[R], value_fn: impl Fn(&R) -> f64) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    sum_by(records, value_fn) / records.len() as f64
}

/// `part` as a percentage of `total`; a zero total yields `0.0`.
pub fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Rounds to one decimal place, matching the dashboard's display precision
/// for averages.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_by_groups_in_first_seen_order() {
        let wards = ["icu", "general", "icu", "maternity", "general", "icu"];
        let counts = count_by(&wards, |w| *w);
        assert_eq!(
            counts,
            vec![
                GroupCount { key: "icu".into(), count: 3 },
                GroupCount { key: "general".into(), count: 2 },
                GroupCount { key: "maternity".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_count_by_duplicate_department_scenario() {
        // Six department records, one department appearing twice.
        let departments = [
            "Emergency", "ICU", "Cardiology", "Pediatrics", "ICU", "Neurology",
        ];
        let counts = count_by(&departments, |d| *d);
        assert_eq!(counts.len(), 5);
        let icu = counts.iter().find(|g| g.key == "ICU").unwrap();
        assert_eq!(icu.count, 2);
        for group in counts.iter().filter(|g| g.key != "ICU") {
            assert_eq!(group.count, 1);
        }
    }

    #[test]
    fn test_empty_input_aggregates_are_zero() {
        let empty: [u32; 0] = [];
        assert!(count_by(&empty, |v| v.to_string()).is_empty());
        assert_eq!(sum_by(&empty, |v| *v as f64), 0.0);
        let avg = average_by(&empty, |v| *v as f64);
        assert_eq!(avg, 0.0);
        assert!(avg.is_finite());
        assert_eq!(percentage(0, 0), 0.0);
    }

    #[test]
    fn test_average_and_percentage() {
        let values = [2.0_f64, 4.0, 6.0];
        assert_eq!(average_by(&values, |v| *v), 4.0);
        assert_eq!(percentage(78, 100), 78.0);
        assert_eq!(round1(percentage(1, 3)), 33.3);
    }

    #[test]
    fn test_round1_matches_display_precision() {
        assert_eq!(round1(3.16), 3.2);
        assert_eq!(round1(3.14), 3.1);
        assert_eq!(round1(0.0), 0.0);
    }
}
