use crate::errors::DriftError;

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    let mut s = String::new();
    for i in items {
        s.push_str(i);
        s.push_str(&String::from(", "));
    }
    s
}

// Validation
pub fn validate_positive_float_parameter(value: f64, parameter: &str) -> Result<(), DriftError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(DriftError::InvalidParameter(
            parameter.to_string(),
            "finite real value greater than 0".to_string(),
            value.to_string(),
        ))
    }
}

pub fn validate_float_parameter(value: f64, min: f64, max: f64, parameter: &str) -> Result<(), DriftError> {
    if value.is_nan() || value < min || max < value {
        let ex_msg = format!("real value within range {} and {}", min, max);
        Err(DriftError::InvalidParameter(
            parameter.to_string(),
            ex_msg,
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Round a number to a given precision.
pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_float_parameter() {
        assert!(validate_float_parameter(0.05, 0.0, 1.0, "threshold").is_ok());
        assert!(validate_float_parameter(1.0, 0.0, 1.0, "threshold").is_ok());
        assert!(validate_float_parameter(1.5, 0.0, 1.0, "threshold").is_err());
        assert!(validate_float_parameter(f64::NAN, 0.0, 1.0, "threshold").is_err());
    }

    #[test]
    fn test_validate_positive_float_parameter() {
        assert!(validate_positive_float_parameter(1e-10, "eps").is_ok());
        assert!(validate_positive_float_parameter(0.0, "eps").is_err());
        assert!(validate_positive_float_parameter(f64::INFINITY, "eps").is_err());
    }

    #[test]
    fn test_precision_round() {
        assert_eq!(precision_round(0.123456, 3), 0.123);
        assert_eq!(items_to_strings(vec!["a", "b"]), "a, b, ");
    }
}
