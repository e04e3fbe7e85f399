use crate::model::GradingPolicy;

pub fn total(scores: &[(&str, f64)]) -> f64 {
    scores.iter().map(|&(_, s)| s).sum()
}

/// Percentage of the maximum reachable total, not rounded.
#[allow(clippy::cast_precision_loss)]
pub fn percentage(total: f64, subjects: usize, policy: &GradingPolicy) -> f64 {
    total / (subjects as f64 * policy.max_mark) * 100.0
}

/// Round half away from zero to two decimal places.
///
/// The value is scaled before rounding, so a float stored just below a half
/// can still round up: 9.25 marks over 10 subjects gives `0.9249999999999999`,
/// which becomes `0.93` here while `{:.2}` formatting gives `0.92`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// First subject holding the highest score.
pub fn highest<'a>(scores: &[(&'a str, f64)]) -> Option<&'a str> {
    first_extreme(scores, |candidate, best| candidate > best)
}

/// First subject holding the lowest score.
pub fn lowest<'a>(scores: &[(&'a str, f64)]) -> Option<&'a str> {
    first_extreme(scores, |candidate, best| candidate < best)
}

fn first_extreme<'a, F>(scores: &[(&'a str, f64)], better: F) -> Option<&'a str>
where
    F: Fn(f64, f64) -> bool,
{
    let (&first, rest) = scores.split_first()?;
    Some(
        rest.iter()
            .fold(first, |best, &candidate| {
                if better(candidate.1, best.1) {
                    candidate
                } else {
                    best
                }
            })
            .0,
    )
}

/// Split subject names into passed and failed, keeping their order.
pub fn partition(scores: &[(&str, f64)], policy: &GradingPolicy) -> (Vec<String>, Vec<String>) {
    let mut passed = Vec::new();
    let mut failed = Vec::new();
    for &(subject, score) in scores {
        if policy.passes(score) {
            passed.push(subject.to_owned());
        } else {
            failed.push(subject.to_owned());
        }
    }
    (passed, failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORES: [(&str, f64); 5] = [
        ("maths", 40.0),
        ("science", 92.0),
        ("english", 39.5),
        ("history", 92.0),
        ("art", 39.5),
    ];

    #[test]
    fn test_total_and_percentage() {
        let policy = GradingPolicy::default();
        assert_eq!(total(&SCORES), 303.0);
        assert_eq!(round2(percentage(303.0, 5, &policy)), 60.6);
        let out_of_fifty = GradingPolicy {
            max_mark: 50.0,
            ..policy
        };
        assert_eq!(round2(percentage(45.0, 1, &out_of_fifty)), 90.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(85.0), 85.0);
        assert_eq!(round2(31.5), 31.5);
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(33.333_333), 33.33);
        assert_eq!(round2(12.125), 12.13);
        assert_eq!(round2(0.925), 0.93);
        let just_below_half = percentage(9.25, 10, &GradingPolicy::default());
        assert!(just_below_half < 0.925);
        assert_eq!(format!("{just_below_half:.2}"), "0.92");
        assert_eq!(round2(just_below_half), 0.93);
    }

    #[test]
    fn test_ties_go_to_first_subject() {
        assert_eq!(highest(&SCORES), Some("science"));
        assert_eq!(lowest(&SCORES), Some("english"));
        assert_eq!(highest(&[]), None);
        assert_eq!(lowest(&[("only", 12.0)]), Some("only"));
    }

    #[test]
    fn test_partition_keeps_order() {
        let (passed, failed) = partition(&SCORES, &GradingPolicy::default());
        assert_eq!(passed, vec!["maths", "science", "history"]);
        assert_eq!(failed, vec!["english", "art"]);
    }
}
