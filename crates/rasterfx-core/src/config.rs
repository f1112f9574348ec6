// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Effect configuration.

use serde::{Deserialize, Serialize};

use crate::error::{RasterError, Result};

/// Tunable constants for the built-in effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Multiplier applied to each channel of a dimmed pixel (result floored).
    pub dim_factor: f64,
    /// Largest channel spread (max - min) still considered grayish.
    pub gray_tolerance: i32,
}

impl EffectConfig {
    /// Parse a JSON document, filling omitted fields from the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.dim_factor.is_finite() || self.dim_factor < 0.0 {
            return Err(RasterError::InvalidConfig(format!(
                "dim_factor must be a non-negative finite number, got {}",
                self.dim_factor
            )));
        }
        if self.gray_tolerance < 0 {
            return Err(RasterError::InvalidConfig(format!(
                "gray_tolerance must be non-negative, got {}",
                self.gray_tolerance
            )));
        }
        Ok(())
    }
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            dim_factor: 0.8,
            // One third of the 8-bit range, rounded.
            gray_tolerance: 85,
        }
    }
}
