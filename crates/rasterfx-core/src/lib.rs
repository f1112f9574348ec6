// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// rasterfx — Core types shared across the rasterfx crates: colors, the image
// contract the transforms are written against, an owned raster, errors, and
// effect configuration.

pub mod config;
pub mod error;
pub mod raster;
pub mod types;

pub use config::EffectConfig;
pub use error::RasterError;
pub use raster::{Image, Raster};
pub use types::*;
