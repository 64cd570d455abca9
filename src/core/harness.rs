use crate::core::brute_force::BruteForceFinder;
use crate::core::normalize::{normalize, same_triplets};
use crate::core::two_pointer::TwoPointerFinder;
use crate::domain::model::{TestCase, Triplet};
use crate::domain::ports::TripletFinder;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Inputs longer than this skip the O(n³) oracle unless configured otherwise.
pub const DEFAULT_BRUTE_FORCE_MAX_LEN: usize = 6;

pub const DEMO_INPUT: [i64; 5] = [0, -1, 2, -3, 1];

pub fn builtin_cases() -> Vec<TestCase> {
    let t = Triplet::new;
    vec![
        TestCase::new(
            vec![0, -1, 2, -3, 1],
            vec![t(-3, 1, 2), t(-1, 0, 1)],
            "Basic example",
        ),
        TestCase::new(vec![], vec![], "Empty array"),
        TestCase::new(vec![0], vec![], "Single element"),
        TestCase::new(vec![1, -1], vec![], "Two elements"),
        TestCase::new(vec![0, 0, 0], vec![t(0, 0, 0)], "All same values"),
        TestCase::new(vec![1, 0, 1], vec![], "No valid triplets"),
        TestCase::new(
            vec![0, 0, 1, -1, 1, -1],
            vec![t(-1, 0, 1)],
            "Duplicate triplets",
        ),
        TestCase::new(
            vec![-1, 0, 1, 2, -1, -4],
            vec![t(-1, -1, 2), t(-1, 0, 1)],
            "Complex case",
        ),
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub index: usize,
    pub description: String,
    pub input: Vec<i64>,
    pub expected: Vec<Triplet>,
    pub actual: Vec<Triplet>,
    pub passed: bool,
    /// `None` when the input was too long for the oracle.
    pub brute_force_match: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub name: String,
    pub generated_at: DateTime<Utc>,
    pub cases: Vec<CaseReport>,
    pub passed: usize,
    pub failed: usize,
    /// Cases where the oracle disagreed with the expected triplets.
    pub oracle_mismatches: usize,
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.oracle_mismatches == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub input: Vec<i64>,
    pub triplets: Vec<Triplet>,
}

/// Suite and demo together, as printed when no subcommand is given.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub suite: SuiteReport,
    pub demo: DemoReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct FindReport {
    pub input: Vec<i64>,
    pub strategy: String,
    pub triplets: Vec<Triplet>,
    /// Set when the result was cross-checked against a second finder.
    pub oracle_agrees: Option<bool>,
}

/// Runs test cases through a finder and cross-checks small ones with an oracle.
pub struct SelfTest<F: TripletFinder, O: TripletFinder> {
    finder: F,
    oracle: O,
    brute_force_max_len: usize,
}

impl SelfTest<TwoPointerFinder, BruteForceFinder> {
    pub fn new() -> Self {
        Self::with_finders(TwoPointerFinder, BruteForceFinder)
    }
}

impl Default for SelfTest<TwoPointerFinder, BruteForceFinder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: TripletFinder, O: TripletFinder> SelfTest<F, O> {
    pub fn with_finders(finder: F, oracle: O) -> Self {
        Self {
            finder,
            oracle,
            brute_force_max_len: DEFAULT_BRUTE_FORCE_MAX_LEN,
        }
    }

    pub fn brute_force_max_len(mut self, max_len: usize) -> Self {
        self.brute_force_max_len = max_len;
        self
    }

    pub fn run_case(&self, index: usize, case: &TestCase) -> CaseReport {
        let actual = self.finder.find(&case.input);
        let passed = same_triplets(&actual, &case.expected);

        let brute_force_match = (case.input.len() <= self.brute_force_max_len).then(|| {
            let oracle_result = self.oracle.find(&case.input);
            normalize(&oracle_result) == normalize(&case.expected)
        });

        if passed {
            tracing::debug!("case {} '{}' passed", index, case.description);
        } else {
            tracing::warn!(
                "case {} '{}' failed: expected {:?}, got {:?}",
                index,
                case.description,
                case.expected,
                actual
            );
        }
        if brute_force_match == Some(false) {
            tracing::warn!(
                "case {} '{}': {} disagrees with expected result",
                index,
                case.description,
                self.oracle.name()
            );
        }

        CaseReport {
            index,
            description: case.description.clone(),
            input: case.input.clone(),
            expected: case.expected.clone(),
            actual,
            passed,
            brute_force_match,
        }
    }

    pub fn run(&self, name: &str, cases: &[TestCase]) -> SuiteReport {
        tracing::info!(
            "Running suite '{}' ({} cases) with {}",
            name,
            cases.len(),
            self.finder.name()
        );

        let reports: Vec<CaseReport> = cases
            .iter()
            .enumerate()
            .map(|(i, case)| self.run_case(i + 1, case))
            .collect();

        let passed = reports.iter().filter(|r| r.passed).count();
        let failed = reports.len() - passed;
        let oracle_mismatches = reports
            .iter()
            .filter(|r| r.brute_force_match == Some(false))
            .count();
        tracing::info!(
            "Suite '{}' finished: {} passed, {} failed, {} oracle mismatches",
            name,
            passed,
            failed,
            oracle_mismatches
        );

        SuiteReport {
            name: name.to_string(),
            generated_at: Utc::now(),
            cases: reports,
            passed,
            failed,
            oracle_mismatches,
        }
    }

    /// Runs the main finder and, when `compare` is set, checks it against the oracle.
    pub fn find(&self, nums: &[i64], compare: bool) -> FindReport {
        let triplets = self.finder.find(nums);
        let oracle_agrees = compare.then(|| {
            let oracle_result = self.oracle.find(nums);
            same_triplets(&triplets, &oracle_result)
        });

        FindReport {
            input: nums.to_vec(),
            strategy: self.finder.name().to_string(),
            triplets,
            oracle_agrees,
        }
    }
}

pub fn demo() -> DemoReport {
    let input = DEMO_INPUT.to_vec();
    let triplets = crate::core::two_pointer::find_zero_sum_triplets(&input);
    DemoReport { input, triplets }
}
