// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation errors for externally supplied attributes.

/// An attribute value the core cannot lay out with.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AttributeError {
    /// A dimension was below zero.
    #[error("dimension `{name}` must not be negative (got {value})")]
    NegativeDimension {
        /// Attribute name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A dimension was NaN or infinite.
    #[error("dimension `{name}` must be finite")]
    NonFiniteDimension {
        /// Attribute name.
        name: &'static str,
    },
}

/// Check that `value` is a finite, non-negative dimension.
pub fn check_dimension(name: &'static str, value: f64) -> Result<f64, AttributeError> {
    if !value.is_finite() {
        return Err(AttributeError::NonFiniteDimension { name });
    }
    if value < 0.0 {
        return Err(AttributeError::NegativeDimension { name, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn accepts_zero_and_positive() {
        assert_eq!(check_dimension("gap", 0.0), Ok(0.0));
        assert_eq!(check_dimension("gap", 8.0), Ok(8.0));
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert_eq!(
            check_dimension("gap", -1.0),
            Err(AttributeError::NegativeDimension {
                name: "gap",
                value: -1.0
            })
        );
        assert_eq!(
            check_dimension("gap", f64::NAN),
            Err(AttributeError::NonFiniteDimension { name: "gap" })
        );
        assert_eq!(
            check_dimension("gap", f64::INFINITY).unwrap_err().to_string(),
            "dimension `gap` must be finite"
        );
    }
}
