//! Input collection: raw form field text to a validated request.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::error::CalcError;
use crate::net::types::{CalculationRequest, Operator};
use crate::util::number::parse_float;

/// Raw field values captured at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub num1: String,
    pub num2: String,
    pub operator: String,
}

impl FormFields {
    #[must_use]
    pub fn new(num1: impl Into<String>, num2: impl Into<String>, operator: impl Into<String>) -> Self {
        Self { num1: num1.into(), num2: num2.into(), operator: operator.into() }
    }
}

/// Validate the captured fields.
///
/// Numbers are checked before the operator so non-numeric input always
/// yields the numbers message.
///
/// # Errors
///
/// Returns [`CalcError::InvalidNumbers`] or [`CalcError::InvalidOperator`].
pub fn collect_request(fields: &FormFields) -> Result<CalculationRequest, CalcError> {
    let (Some(num1), Some(num2)) = (parse_float(&fields.num1), parse_float(&fields.num2)) else {
        return Err(CalcError::InvalidNumbers);
    };
    let operator: Operator = fields.operator.parse()?;
    CalculationRequest::new(num1, num2, operator)
}
