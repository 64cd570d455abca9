use crate::domain::model::{format_values, Triplet};
use crate::utils::error::{Result, TripletError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TripletError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(TripletError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Converts a raw value list into a [`Triplet`], rejecting any other arity.
pub fn validate_triplet(field_name: &str, values: &[i64]) -> Result<Triplet> {
    Triplet::try_from(values.to_vec()).map_err(|values| TripletError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: format_values(&values),
        reason: format!("A triplet needs exactly 3 values, found {}", values.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("description", "Basic example").is_ok());
        assert!(validate_non_empty_string("description", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("brute_force_max_len", 6, 0, 64).is_ok());
        assert!(validate_range("brute_force_max_len", 65, 0, 64).is_err());
    }

    #[test]
    fn test_validate_triplet() {
        assert_eq!(
            validate_triplet("expected", &[0, 0, 0]).unwrap(),
            Triplet::new(0, 0, 0)
        );
        let err = validate_triplet("expected", &[1, -1]).unwrap_err();
        assert!(err.to_string().contains("found 2"));
        assert!(validate_triplet("expected", &[1, -1, 0, 0]).is_err());
    }
}
