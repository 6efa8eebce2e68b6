//! Safe contract versions
//!
//! The hashing scheme changed twice over the Safe's history, so the contract
//! version decides which type hashes apply. Versions are compared
//! component-wise with missing components treated as zero, which makes
//! `1.3` and `1.3.0` equal.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Version assumed when the caller does not know which contract is deployed
pub const DEFAULT_SAFE_VERSION: &str = "1.3.0";

/// Compares two dotted version strings.
///
/// Components that are absent or not a non-negative integer count as `0`.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let parse = |v: &str| -> Vec<u64> {
        let v = v.trim();
        strip_metadata(v.strip_prefix('v').unwrap_or(v))
            .split('.')
            .map(|part| part.trim().parse::<u64>().unwrap_or(0))
            .collect()
    };
    compare_components(&parse(a), &parse(b))
}

fn compare_components(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let left = a.get(i).copied().unwrap_or(0);
        let right = b.get(i).copied().unwrap_or(0);
        match left.cmp(&right) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// The Safe service reports L2 deployments as e.g. `1.3.0+L2`.
fn strip_metadata(version: &str) -> &str {
    version
        .split_once(['+', '-'])
        .map(|(core, _)| core)
        .unwrap_or(version)
}

/// A parsed Safe contract version such as `1.3.0`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SafeVersion {
    components: Vec<u64>,
}

impl SafeVersion {
    /// Builds a version from its numeric components
    pub fn new(components: impl Into<Vec<u64>>) -> Self {
        Self {
            components: components.into(),
        }
    }

    /// Returns the numeric components as parsed
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Versions up to and including 1.2.0 bind the domain to the Safe address only
    pub fn uses_legacy_domain(&self) -> bool {
        *self <= Self::new([1, 2, 0])
    }

    /// Versions before 1.0.0 named `baseGas` `dataGas` in the SafeTx type
    pub fn uses_legacy_safe_tx(&self) -> bool {
        *self < Self::new([1, 0, 0])
    }
}

impl Default for SafeVersion {
    fn default() -> Self {
        Self::new([1, 3, 0])
    }
}

impl PartialEq for SafeVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SafeVersion {}

impl Ord for SafeVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_components(&self.components, &other.components)
    }
}

impl PartialOrd for SafeVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for SafeVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let core = strip_metadata(trimmed.strip_prefix('v').unwrap_or(trimmed));
        if core.is_empty() {
            return Err(Error::InvalidVersion(s.to_string()));
        }

        let components = core
            .split('.')
            .map(|part| {
                part.parse::<u64>()
                    .map_err(|_| Error::InvalidVersion(s.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { components })
    }
}

impl TryFrom<String> for SafeVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SafeVersion> for String {
    fn from(version: SafeVersion) -> Self {
        version.to_string()
    }
}

impl fmt::Display for SafeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(u64::to_string).collect();
        f.write_str(&parts.join("."))
    }
}
