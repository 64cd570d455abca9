pub mod brute_force;
pub mod harness;
pub mod normalize;
pub mod pair_sum;
pub mod report;
pub mod two_pointer;

pub use crate::domain::model::{Pair, TestCase, Triplet};
pub use crate::domain::ports::TripletFinder;
pub use crate::utils::error::Result;
