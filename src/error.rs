use rust_decimal::Decimal;
use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaxError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TaxError {
    pub fn non_positive_base_value(value: Decimal) -> Self {
        Self::InvalidArgument(format!("base value must be greater than 0 (got {value})"))
    }

    pub fn too_many_decimal_places(value: Decimal) -> Self {
        Self::InvalidArgument(format!(
            "base value has too many decimal places to compute taxes exactly (got {value})"
        ))
    }

    pub fn too_many_significant_digits() -> Self {
        Self::InvalidArgument(
            "base value has too many significant digits to compute taxes exactly".to_string(),
        )
    }

    pub fn invalid_category(category: impl Display) -> Self {
        Self::InvalidArgument(format!("invalid category: {category}"))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, TaxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_invalid_argument_displays_message_verbatim() {
        let err = TaxError::non_positive_base_value(dec!(-100.0));
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "base value must be greater than 0 (got -100.0)");

        let err = TaxError::invalid_category("Toys");
        assert_eq!(err.to_string(), "invalid category: Toys");
    }

    #[test]
    fn test_io_error_is_not_invalid_argument() {
        let err: TaxError = std::io::Error::other("disk gone").into();
        assert!(!err.is_invalid_argument());
        assert!(err.to_string().starts_with("IO error"));
    }
}
