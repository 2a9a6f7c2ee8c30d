//! Wire DTOs for the `/calculate` exchange.
//!
//! DESIGN
//! ======
//! The request is built only from validated input, so a `CalculationRequest`
//! in hand always carries finite operands. Reply bodies are decoded loosely
//! (`serde_json::Value` fields) because the backend decides their shape per
//! status code.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Binary operation understood by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[default]
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "pow")]
    Power,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
    ];

    /// Wire symbol sent in the `operator` field.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "pow",
        }
    }

    /// Human label for the operator selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "+ Add",
            Self::Subtract => "− Subtract",
            Self::Multiply => "× Multiply",
            Self::Divide => "÷ Divide",
            Self::Power => "^ Power",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    /// Accepts the wire symbol or the operation name.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        match value.to_ascii_lowercase().as_str() {
            "+" | "add" => Ok(Self::Add),
            "-" | "subtract" => Ok(Self::Subtract),
            "*" | "multiply" => Ok(Self::Multiply),
            "/" | "divide" => Ok(Self::Divide),
            "pow" | "power" | "^" => Ok(Self::Power),
            _ => Err(CalcError::InvalidOperator(value.to_owned())),
        }
    }
}

/// Body of `POST /calculate`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculationRequest {
    num1: f64,
    num2: f64,
    operator: Operator,
}

impl CalculationRequest {
    /// Build a request from already-parsed operands.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidNumbers`] if either operand is NaN or infinite.
    pub fn new(num1: f64, num2: f64, operator: Operator) -> Result<Self, CalcError> {
        if !num1.is_finite() || !num2.is_finite() {
            return Err(CalcError::InvalidNumbers);
        }
        Ok(Self { num1, num2, operator })
    }

    #[must_use]
    pub fn num1(&self) -> f64 {
        self.num1
    }

    #[must_use]
    pub fn num2(&self) -> f64 {
        self.num2
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }
}

/// Loosely-typed reply body; which field matters depends on the status code.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CalculationResponse {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl CalculationResponse {
    /// Pick `result`/`error` out of an already-decoded body. Bodies that are
    /// not JSON objects carry neither field.
    #[must_use]
    pub fn from_body(body: &serde_json::Value) -> Self {
        let field = |name: &str| body.get(name).filter(|v| !v.is_null()).cloned();
        Self { result: field("result"), error: field("error") }
    }
}

/// Raw status + body as returned by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Mirrors `fetch`'s `Response.ok`.
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
