// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Effects module — interior dimming and desaturation toward gray.

pub mod dim;
pub mod grayish;

pub use dim::{dim_center, dim_center_with};
pub use grayish::{is_grayish, is_grayish_within, make_grayish, make_grayish_with};
