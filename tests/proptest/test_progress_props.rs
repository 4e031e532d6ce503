//! Property-based tests for lesson progress

use proptest::prelude::*;
use shell_lab::progress::LessonPlan;

fn command() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["pwd", "ls", "cd docs", "mkdir x", "touch y", "foo"])
        .prop_map(str::to_string)
}

proptest! {
    #[test]
    fn test_progress_only_moves_forward(
        expected in prop::collection::vec(command(), 0..8),
        typed in prop::collection::vec(command(), 0..30),
    ) {
        let mut plan = LessonPlan::new(expected.clone());
        let mut last_cursor = plan.cursor();
        let mut last_completed = plan.completed().len();

        for line in &typed {
            plan.advance(line);
            prop_assert!(plan.cursor() >= last_cursor);
            prop_assert!(plan.completed().len() >= last_completed);
            prop_assert!(plan.completed().len() <= expected.len());
            if !expected.is_empty() {
                prop_assert!(plan.cursor() < expected.len());
            }
            last_cursor = plan.cursor();
            last_completed = plan.completed().len();
        }
    }

    #[test]
    fn test_completed_are_expected_and_unique(
        expected in prop::collection::vec(command(), 1..8),
        typed in prop::collection::vec(command(), 0..30),
    ) {
        let mut plan = LessonPlan::new(expected.clone());
        for line in &typed {
            plan.advance(line);
        }

        let completed = plan.completed();
        for (i, c) in completed.iter().enumerate() {
            prop_assert!(expected.contains(c));
            prop_assert!(!completed[..i].contains(c));
        }
        let percent = plan.percent_complete();
        prop_assert!((0.0..=100.0).contains(&percent));
    }

    #[test]
    fn test_typing_the_plan_completes_distinct_lessons(
        expected in prop::sample::subsequence(
            vec!["pwd", "ls", "cd docs", "mkdir x", "touch y"], 1..=5
        ),
    ) {
        let mut plan = LessonPlan::new(expected.clone());
        for line in &expected {
            prop_assert!(plan.advance(&line.to_uppercase()).advanced());
        }
        prop_assert!(plan.is_complete());
        prop_assert_eq!(plan.percent_complete(), 100.0);
    }

    #[test]
    fn test_empty_plan_never_changes(typed in prop::collection::vec(command(), 0..10)) {
        let mut plan = LessonPlan::default();
        for line in &typed {
            plan.advance(line);
        }
        prop_assert_eq!(plan, LessonPlan::default());
    }
}
