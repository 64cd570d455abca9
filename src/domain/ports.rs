use crate::domain::model::Triplet;

/// A strategy that finds every distinct zero-sum triplet in a sequence.
///
/// Implementations must not mutate the caller's slice and must return each
/// value-multiset at most once. Output order is implementation-defined.
pub trait TripletFinder {
    fn name(&self) -> &'static str;
    fn find(&self, nums: &[i64]) -> Vec<Triplet>;
}
