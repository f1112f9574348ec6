// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for rasterfx.

use thiserror::Error;

/// Errors raised while building rasters or loading effect configuration.
///
/// The pixel transforms themselves never fail; these only cover the edges
/// where caller-supplied data enters the system.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("pixel buffer does not match dimensions: expected {expected} pixels, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid effect configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, RasterError>;
