//! Classify → filter → reduce chain over labeled strings.
//!
//! Unlike the other shapes this one terminates in an aggregation instead of a
//! full drain: strings are classified into a [`Token`], one token value is kept,
//! its ordinal is projected out, and the ordinals are summed.

/// Classification tag for the labeled-string fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Foo = 0,
    Bar = 1,
}

/// The fixed input: 50 `"foo"` labels followed by 50 `"bar"` labels.
pub fn classification_fixture() -> Vec<String> {
    let mut labels = vec!["foo".to_owned(); 50];
    labels.extend(std::iter::repeat_n("bar".to_owned(), 50));
    labels
}

/// Classify each label, keep only [`Token::Foo`], project its ordinal, sum.
///
/// Over [`classification_fixture`] the kept token's ordinal is 0, so the sum is
/// 0; the chain's cost is the measured quantity, not its output.
pub fn classify_filter_reduce(labels: &[String]) -> i64 {
    labels
        .iter()
        .map(|label| if label == "foo" { Token::Foo } else { Token::Bar })
        .filter(|token| *token == Token::Foo)
        .map(|token| token as i64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{classification_fixture, classify_filter_reduce, Token};

    #[test]
    fn fixture_is_fifty_foo_then_fifty_bar() {
        let labels = classification_fixture();
        assert_eq!(labels.len(), 100);
        assert!(labels[..50].iter().all(|l| l == "foo"));
        assert!(labels[50..].iter().all(|l| l == "bar"));
    }

    #[test]
    fn reduction_over_the_fixture_is_zero() {
        assert_eq!(classify_filter_reduce(&classification_fixture()), 0);
    }

    #[test]
    fn ordinals_are_stable() {
        assert_eq!(Token::Foo as i64, 0);
        assert_eq!(Token::Bar as i64, 1);
    }

    #[test]
    fn non_foo_labels_are_filtered_out_before_the_sum() {
        let labels = vec!["bar".to_owned(); 10];
        assert_eq!(classify_filter_reduce(&labels), 0);

        // A mixed input still only sums the kept token's ordinal.
        let mixed = vec!["foo".to_owned(), "bar".to_owned(), "foo".to_owned()];
        assert_eq!(classify_filter_reduce(&mixed), 0);
    }
}
