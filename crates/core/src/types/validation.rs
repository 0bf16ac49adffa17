//! Input validation errors.

use rust_decimal::Decimal;

/// A single rejected form or API field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Name of the offending field (matches the form/JSON key).
    pub field: &'static str,
    /// Human-readable reason.
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for `field`.
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Shorthand for a missing required field.
    #[must_use]
    pub fn required(field: &'static str) -> Self {
        Self::new(field, "is required")
    }
}

/// Fail with [`ValidationError::required`] when `value` is blank.
///
/// # Errors
///
/// Returns an error if the trimmed value is empty.
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

/// Magnitude bound of a `NUMERIC(precision, scale)` column.
///
/// Inputs are checked against the column they are stored in, so the demo
/// store accepts exactly what `PostgreSQL` accepts and sums over stored
/// records stay far inside `Decimal`'s range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeric {
    precision: u32,
    scale: u32,
}

impl Numeric {
    /// Money, `NUMERIC(14, 2)`.
    pub const AMOUNT: Self = Self::new(14, 2);
    /// Quantities, `NUMERIC(14, 3)`.
    pub const QUANTITY: Self = Self::new(14, 3);
    /// Unit prices, `NUMERIC(14, 4)`.
    pub const PRICE: Self = Self::new(14, 4);
    /// Exchange rates, `NUMERIC(10, 4)`.
    pub const RATE: Self = Self::new(10, 4);
    /// Rupee totals, `NUMERIC(16, 2)`.
    pub const INR: Self = Self::new(16, 2);

    const fn new(precision: u32, scale: u32) -> Self {
        Self { precision, scale }
    }

    /// Fail when `value`, rounded to the column's scale, does not fit.
    ///
    /// # Errors
    ///
    /// Returns `"{field}: is out of range"`.
    pub fn check(self, field: &'static str, value: Decimal) -> Result<(), ValidationError> {
        let limit = Decimal::from(10_u64.pow(self.precision - self.scale));
        if value.round_dp(self.scale).abs() >= limit {
            return Err(ValidationError::new(field, "is out of range"));
        }
        Ok(())
    }

    /// [`Numeric::check`] for an optional value; `None` always fits.
    ///
    /// # Errors
    ///
    /// Returns `"{field}: is out of range"`.
    pub fn check_opt(
        self,
        field: &'static str,
        value: Option<Decimal>,
    ) -> Result<(), ValidationError> {
        value.map_or(Ok(()), |v| self.check(field, v))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_field() {
        let err = ValidationError::required("company_name");
        assert_eq!(err.to_string(), "company_name: is required");
    }

    #[test]
    fn test_require_text_rejects_whitespace() {
        assert!(require_text("country", "   ").is_err());
        assert!(require_text("country", "India").is_ok());
    }

    #[test]
    fn test_numeric_bounds_follow_column_precision() {
        let amount = Numeric::AMOUNT;
        assert!(amount.check("invoice_amount", "999999999999.99".parse().unwrap()).is_ok());
        assert!(amount.check("invoice_amount", "-999999999999.99".parse().unwrap()).is_ok());
        assert!(amount.check("invoice_amount", "1000000000000".parse().unwrap()).is_err());
        // Rounds up to 10^12 when stored.
        assert!(amount.check("invoice_amount", "999999999999.996".parse().unwrap()).is_err());

        assert!(Numeric::RATE.check("exchange_rate", "83.5".parse().unwrap()).is_ok());
        assert!(Numeric::RATE.check("exchange_rate", "1000000".parse().unwrap()).is_err());
    }

    #[test]
    fn test_numeric_rejects_decimal_extremes() {
        let err = Numeric::QUANTITY.check("quantity", Decimal::MAX).unwrap_err();
        assert_eq!(err.to_string(), "quantity: is out of range");
        assert!(Numeric::INR.check_opt("inr_value", None).is_ok());
        assert!(Numeric::INR.check_opt("inr_value", Some(Decimal::MIN)).is_err());
    }
}
