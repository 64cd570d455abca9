pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::{cases::CaseFile, OutputFormat};
pub use crate::core::brute_force::{find_zero_sum_triplets_brute_force, BruteForceFinder};
pub use crate::core::harness::{builtin_cases, demo, SelfTest, SuiteReport};
pub use crate::core::two_pointer::{find_zero_sum_triplets, TwoPointerFinder};
pub use crate::domain::model::{Pair, TestCase, Triplet};
pub use crate::domain::ports::TripletFinder;
pub use crate::utils::error::{Result, TripletError};
