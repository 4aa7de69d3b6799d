use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PackError;
use crate::scaling::RoundingFn;

/// Which component of a normalized part drives the descending sort within
/// each (thickness, priority) bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Sort by descending first (shorter, post-normalization) component.
    Width,
    /// Sort by descending second (longer, post-normalization) component.
    Length,
}

impl FromStr for SortKey {
    type Err = PackError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "width" => Ok(Self::Width),
            "length" => Ok(Self::Length),
            other => Err(PackError::InvalidSortKey(other.to_string())),
        }
    }
}

/// Parameters controlling one `pack` call.
///
/// `rounding_fn` is accepted for API symmetry with [`crate::scaling::forward_deform`]
/// / [`crate::scaling::backward_deform`] and is honored if you call those
/// directly, but the outer scheduler does not forward it to its own internal
/// deformation calls: those always round to 1 decimal (forward) and 4
/// decimals (backward) regardless of what's configured here.
#[derive(Debug, Clone, Copy)]
pub struct PackConfig {
    pub sort_key: SortKey,
    pub strain: f64,
    pub rounding_fn: Option<RoundingFn>,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            sort_key: SortKey::Width,
            strain: 1.0,
            rounding_fn: None,
        }
    }
}

impl PackConfig {
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.strain <= 0.0 {
            return Err(PackError::InvalidStrain(self.strain));
        }
        Ok(())
    }
}

/// Builder for [`PackConfig`] for ergonomic construction.
#[derive(Debug, Default, Clone, Copy)]
pub struct PackConfigBuilder {
    cfg: PackConfig,
}

impl PackConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackConfig::default(),
        }
    }
    pub fn sort_key(mut self, v: SortKey) -> Self {
        self.cfg.sort_key = v;
        self
    }
    pub fn strain(mut self, v: f64) -> Self {
        self.cfg.strain = v;
        self
    }
    pub fn rounding_fn(mut self, v: Option<RoundingFn>) -> Self {
        self.cfg.rounding_fn = v;
        self
    }
    pub fn build(self) -> PackConfig {
        self.cfg
    }
}

impl PackConfig {
    pub fn builder() -> PackConfigBuilder {
        PackConfigBuilder::new()
    }
}
