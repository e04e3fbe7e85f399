use crate::checks::{self, ValidStudent};
use crate::model::{Grade, GradingPolicy, ReportCard, StudentRecord};
use crate::stats;
use tracing::{debug, trace};

/// Compute the report card of a student under the default grading policy.
///
/// `None` is returned for a missing or invalid record; use
/// [`checks::validate`] to learn which rule was broken.
pub fn compute(student: Option<&StudentRecord>) -> Option<ReportCard> {
    compute_with(student, &GradingPolicy::default())
}

pub fn compute_with(
    student: Option<&StudentRecord>,
    policy: &GradingPolicy,
) -> Option<ReportCard> {
    match checks::validate(student, policy) {
        Ok(valid) => Some(build(&valid, policy)),
        Err(e) => {
            debug!(reason = %e, "rejecting student record");
            None
        }
    }
}

/// Build the report card of an already validated student.
pub fn build(student: &ValidStudent<'_>, policy: &GradingPolicy) -> ReportCard {
    let subject_count = student.scores.len();
    let total_marks = stats::total(&student.scores);
    let percentage = stats::percentage(total_marks, subject_count, policy);
    let (passed_subjects, failed_subjects) = stats::partition(&student.scores, policy);
    trace!(
        student = student.name,
        total_marks,
        percentage,
        "computed report card"
    );
    ReportCard {
        name: student.name.to_owned(),
        total_marks,
        percentage: stats::round2(percentage),
        grade: Grade::from_percentage(percentage),
        highest_subject: stats::highest(&student.scores)
            .unwrap_or_default()
            .to_owned(),
        lowest_subject: stats::lowest(&student.scores)
            .unwrap_or_default()
            .to_owned(),
        passed_subjects,
        failed_subjects,
        subject_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_rahul() {
        let student = StudentRecord::new(
            "Rahul",
            [("maths", 85.0), ("science", 92.0), ("english", 78.0)],
        );
        assert_eq!(
            compute(Some(&student)),
            Some(ReportCard {
                name: "Rahul".into(),
                total_marks: 255.0,
                percentage: 85.0,
                grade: Grade::A,
                highest_subject: "science".into(),
                lowest_subject: "english".into(),
                passed_subjects: vec!["maths".into(), "science".into(), "english".into()],
                failed_subjects: vec![],
                subject_count: 3,
            })
        );
    }

    #[test]
    fn test_priya() {
        let student = StudentRecord::new("Priya", [("maths", 35.0), ("science", 28.0)]);
        assert_eq!(
            compute(Some(&student)),
            Some(ReportCard {
                name: "Priya".into(),
                total_marks: 63.0,
                percentage: 31.5,
                grade: Grade::F,
                highest_subject: "maths".into(),
                lowest_subject: "science".into(),
                passed_subjects: vec![],
                failed_subjects: vec!["maths".into(), "science".into()],
                subject_count: 2,
            })
        );
    }

    #[test]
    fn test_invalid_inputs_give_none() {
        assert_eq!(compute(None), None);
        let no_marks: [(&str, f64); 0] = [];
        for student in [
            StudentRecord::new("", [("maths", 80.0)]),
            StudentRecord::new("A", no_marks),
            StudentRecord::new("A", [("m", 150.0)]),
            StudentRecord::new("A", [("m", -5.0)]),
            StudentRecord::new("A", [("m", f64::NAN)]),
        ] {
            assert_eq!(compute(Some(&student)), None, "{student:?}");
        }
    }

    #[test]
    fn test_grade_uses_unrounded_percentage() {
        // 89.996 rounds up to 90 but stays in band A.
        let student = StudentRecord::new("A", [("m", 89.996)]);
        let card = compute(Some(&student)).unwrap();
        assert_eq!(card.grade, Grade::A);
        assert_eq!(card.percentage, 90.0);
    }

    #[test]
    fn test_single_subject_is_both_extremes() {
        let student = StudentRecord::new("A", [("m", 40.0)]);
        let card = compute(Some(&student)).unwrap();
        assert_eq!(card.highest_subject, "m");
        assert_eq!(card.lowest_subject, "m");
        assert_eq!(card.passed_subjects, vec!["m"]);
        assert_eq!(card.grade, Grade::D);
    }

    #[test]
    fn test_custom_policy() {
        let policy = GradingPolicy {
            pass_mark: 10.0,
            max_mark: 20.0,
        };
        let student = StudentRecord::new("A", [("m", 18.0), ("n", 9.0)]);
        let card = compute_with(Some(&student), &policy).unwrap();
        assert_eq!(card.total_marks, 27.0);
        assert_eq!(card.percentage, 67.5);
        assert_eq!(card.grade, Grade::C);
        assert_eq!(card.passed_subjects, vec!["m"]);
        assert_eq!(card.failed_subjects, vec!["n"]);
    }

    #[test]
    fn test_degenerate_policy_gives_none() {
        let student = StudentRecord::new("A", [("m", 0.0)]);
        for policy in [
            GradingPolicy {
                pass_mark: 0.0,
                max_mark: 0.0,
            },
            GradingPolicy {
                pass_mark: 0.0,
                max_mark: -10.0,
            },
            GradingPolicy {
                pass_mark: 40.0,
                max_mark: f64::NAN,
            },
            GradingPolicy {
                pass_mark: 150.0,
                max_mark: 100.0,
            },
        ] {
            assert_eq!(compute_with(Some(&student), &policy), None, "{policy:?}");
        }
    }

    fn marks() -> impl Strategy<Value = Vec<(String, f64)>> {
        prop::collection::btree_map("[a-z]{1,8}", 0u32..=10_000, 1..12).prop_map(|m| {
            m.into_iter()
                .map(|(s, v)| (s, f64::from(v) / 100.0))
                .collect::<Vec<_>>()
        })
    }

    proptest! {
        #[test]
        fn prop_report_card_invariants(marks in marks()) {
            let student = StudentRecord::new("Student", marks.clone());
            let card = compute(Some(&student)).unwrap();

            prop_assert_eq!(card.subject_count, marks.len());
            let sum: f64 = marks.iter().map(|(_, m)| m).sum();
            prop_assert_eq!(card.total_marks, sum);

            prop_assert!((0.0..=100.0).contains(&card.percentage));
            prop_assert_eq!(stats::round2(card.percentage), card.percentage);

            let passed: HashSet<_> = card.passed_subjects.iter().collect();
            let failed: HashSet<_> = card.failed_subjects.iter().collect();
            prop_assert!(passed.is_disjoint(&failed));
            prop_assert_eq!(passed.len() + failed.len(), marks.len());
            for (subject, mark) in &marks {
                prop_assert_eq!(passed.contains(subject), *mark >= 40.0);
            }

            let max = marks.iter().map(|(_, m)| *m).fold(f64::MIN, f64::max);
            let min = marks.iter().map(|(_, m)| *m).fold(f64::MAX, f64::min);
            let first_max = marks.iter().find(|(_, m)| *m == max).map(|(s, _)| s);
            let first_min = marks.iter().find(|(_, m)| *m == min).map(|(s, _)| s);
            prop_assert_eq!(Some(&card.highest_subject), first_max);
            prop_assert_eq!(Some(&card.lowest_subject), first_min);
        }

        #[test]
        fn prop_grade_is_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(Grade::from_percentage(high) <= Grade::from_percentage(low));
        }

        #[test]
        fn prop_out_of_range_is_rejected(bad in prop_oneof![-1000.0f64..-0.001, 100.001f64..1000.0]) {
            let student = StudentRecord::new("A", [("ok", 50.0), ("bad", bad)]);
            prop_assert_eq!(compute(Some(&student)), None);
        }
    }
}
