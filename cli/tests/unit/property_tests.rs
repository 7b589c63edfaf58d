//! Property-based tests for the pure text helpers used by the report.

use css_doctor::domain::diagnosis::{char_prefix, first_lines, group_thousands};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_char_prefix_is_prefix_with_bounded_length(text in ".{0,200}", n in 0usize..300) {
        let prefix = char_prefix(&text, n);
        prop_assert!(text.starts_with(prefix));
        prop_assert_eq!(prefix.chars().count(), n.min(text.chars().count()));
    }

    #[test]
    fn prop_first_lines_is_prefix_with_at_most_n_lines(
        lines in proptest::collection::vec("[^\n]{0,20}", 0..80),
        n in 0usize..60,
    ) {
        let text = lines.join("\n");
        let excerpt = first_lines(&text, n);
        prop_assert!(text.starts_with(excerpt));
        prop_assert!(excerpt.split_inclusive('\n').count() <= n);
        if text.split_inclusive('\n').count() <= n {
            prop_assert_eq!(excerpt, text.as_str());
        }
    }

    #[test]
    fn prop_group_thousands_round_trips_digits(n in any::<u64>()) {
        let grouped = group_thousands(n);
        prop_assert_eq!(grouped.replace(',', ""), n.to_string());
        for (i, group) in grouped.split(',').enumerate() {
            if i == 0 {
                prop_assert!((1..=3).contains(&group.len()));
            } else {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
