use crate::core::harness::DEFAULT_BRUTE_FORCE_MAX_LEN;
use crate::domain::model::TestCase;
use crate::utils::error::{Result, TripletError};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_triplet, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound for the oracle cutoff; C(64, 3) index triples is still quick.
pub const MAX_BRUTE_FORCE_LEN: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFile {
    pub suite: SuiteConfig,
    #[serde(default)]
    pub cases: Vec<CaseConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    pub name: String,
    pub brute_force_max_len: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseConfig {
    pub description: String,
    #[serde(default)]
    pub input: Vec<i64>,
    /// Kept as raw lists so a wrong-sized triplet is reported by validation
    /// rather than as an opaque parse error.
    #[serde(default)]
    pub expected: Vec<Vec<i64>>,
}

impl CaseFile {
    /// 從 TOML 檔案載入測試案例
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TripletError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TripletError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn brute_force_max_len(&self) -> usize {
        self.suite
            .brute_force_max_len
            .unwrap_or(DEFAULT_BRUTE_FORCE_MAX_LEN)
    }

    /// Validates and converts the raw cases.
    pub fn into_cases(self) -> Result<Vec<TestCase>> {
        self.build_cases()
    }

    fn build_cases(&self) -> Result<Vec<TestCase>> {
        validate_non_empty_string("suite.name", &self.suite.name)?;

        if let Some(max_len) = self.suite.brute_force_max_len {
            validate_range("suite.brute_force_max_len", max_len, 0, MAX_BRUTE_FORCE_LEN)?;
        }

        if self.cases.is_empty() {
            return Err(TripletError::MissingConfigError {
                field: "cases".to_string(),
            });
        }

        self.cases
            .iter()
            .enumerate()
            .map(|(i, case)| {
                let field = format!("cases[{}].description", i);
                validate_non_empty_string(&field, &case.description)?;
                case.to_test_case(i)
            })
            .collect()
    }
}

impl CaseConfig {
    fn to_test_case(&self, index: usize) -> Result<TestCase> {
        let expected = self
            .expected
            .iter()
            .enumerate()
            .map(|(j, values)| {
                validate_triplet(&format!("cases[{}].expected[{}]", index, j), values)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TestCase::new(
            self.input.clone(),
            expected,
            self.description.clone(),
        ))
    }
}

impl Validate for CaseFile {
    fn validate(&self) -> Result<()> {
        self.build_cases().map(|_| ())
    }
}
