//! Human-readable views of call data, for display only

use alloy::primitives::Selector;
use serde::{Deserialize, Serialize};

/// One decoded parameter, rendered as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedParam {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub value: String,
}

impl DecodedParam {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: value.into(),
        }
    }
}

/// A best-effort breakdown of a contract call.
///
/// Never fed back into hash computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedCall {
    /// Method name, or a sentinel such as `Unknown`
    pub method: String,
    /// Full text signature when one was resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// 4-byte selector the call data started with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<Selector>,
    pub parameters: Vec<DecodedParam>,
}

impl DecodedCall {
    /// Creates a decoded call with a method name and no parameters
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            signature: None,
            selector: None,
            parameters: Vec::new(),
        }
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selector = Some(selector);
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<DecodedParam>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Looks up a parameter by name
    pub fn parameter(&self, name: &str) -> Option<&DecodedParam> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
