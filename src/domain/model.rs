use serde::{Deserialize, Serialize};
use std::fmt;

/// Three values whose sum is zero.
///
/// Two triplets describe the same multiset when their canonical forms match;
/// the derived `Eq`/`Ord` compare element by element in stored order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Triplet(pub [i64; 3]);

impl Triplet {
    pub fn new(a: i64, b: i64, c: i64) -> Self {
        Self([a, b, c])
    }

    /// Ascending form of the triplet.
    pub fn canonical(&self) -> Self {
        let mut values = self.0;
        values.sort_unstable();
        Self(values)
    }

    pub fn values(&self) -> [i64; 3] {
        self.0
    }

    /// Sum widened to `i128`; never overflows.
    pub fn sum(&self) -> i128 {
        self.0.iter().map(|&v| i128::from(v)).sum()
    }

    pub fn same_multiset(&self, other: &Triplet) -> bool {
        self.canonical() == other.canonical()
    }
}

impl From<[i64; 3]> for Triplet {
    fn from(values: [i64; 3]) -> Self {
        Self(values)
    }
}

impl TryFrom<Vec<i64>> for Triplet {
    type Error = Vec<i64>;

    fn try_from(values: Vec<i64>) -> std::result::Result<Self, Self::Error> {
        <[i64; 3]>::try_from(values).map(Self)
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// Two values (or two 1-based positions) found by a pair-sum scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pair<T> {
    pub first: T,
    pub second: T,
}

impl<T> Pair<T> {
    pub fn new(first: T, second: T) -> Self {
        Self { first, second }
    }
}

impl<T: fmt::Display> fmt::Display for Pair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.first, self.second)
    }
}

/// One self-test scenario: an input, the triplets it should produce and a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: Vec<i64>,
    pub expected: Vec<Triplet>,
    pub description: String,
}

impl TestCase {
    pub fn new(input: Vec<i64>, expected: Vec<Triplet>, description: impl Into<String>) -> Self {
        Self {
            input,
            expected,
            description: description.into(),
        }
    }
}

/// Formats a slice the way the reports print inputs: `[0, -1, 2]`.
pub fn format_values<T: fmt::Display>(values: &[T]) -> String {
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_sorts_values() {
        assert_eq!(Triplet::new(2, -3, 1).canonical(), Triplet::new(-3, 1, 2));
        assert!(Triplet::new(1, 0, -1).same_multiset(&Triplet::new(-1, 1, 0)));
        assert!(!Triplet::new(1, 0, -1).same_multiset(&Triplet::new(-2, 1, 1)));
    }

    #[test]
    fn test_sum_does_not_overflow() {
        let t = Triplet::new(i64::MAX, i64::MAX, i64::MIN);
        assert_eq!(t.sum(), i128::from(i64::MAX));
    }

    #[test]
    fn test_try_from_rejects_wrong_arity() {
        assert_eq!(Triplet::try_from(vec![-1, 0, 1]), Ok(Triplet::new(-1, 0, 1)));
        assert_eq!(Triplet::try_from(vec![1, -1]), Err(vec![1, -1]));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let json = serde_json::to_string(&Triplet::new(-1, 0, 1)).unwrap();
        assert_eq!(json, "[-1,0,1]");

        let parsed: Triplet = serde_json::from_str("[-3,1,2]").unwrap();
        assert_eq!(parsed, Triplet::new(-3, 1, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Triplet::new(-3, 1, 2).to_string(), "[-3, 1, 2]");
        assert_eq!(format_values(&[0, -1, 2]), "[0, -1, 2]");
        assert_eq!(format_values::<i64>(&[]), "[]");
    }
}
