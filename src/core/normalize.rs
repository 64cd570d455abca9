//! Order-independent comparison of triplet collections.

use crate::domain::model::Triplet;

/// Canonicalizes every triplet, then sorts the collection lexicographically.
///
/// Duplicates are kept, so a result that repeats a multiset will not compare
/// equal to a duplicate-free expectation.
pub fn normalize(triplets: &[Triplet]) -> Vec<Triplet> {
    let mut normalized: Vec<Triplet> = triplets.iter().map(Triplet::canonical).collect();
    normalized.sort_unstable();
    normalized
}

/// [`normalize`] followed by removal of repeated multisets.
pub fn canonicalize_set(triplets: &[Triplet]) -> Vec<Triplet> {
    let mut set = normalize(triplets);
    set.dedup();
    set
}

/// True when both collections hold the same triplets, ignoring order inside
/// and across triplets.
pub fn same_triplets(actual: &[Triplet], expected: &[Triplet]) -> bool {
    normalize(actual) == normalize(expected)
}

/// True when no two triplets share a value-multiset.
pub fn has_no_duplicates(triplets: &[Triplet]) -> bool {
    canonicalize_set(triplets).len() == triplets.len()
}
