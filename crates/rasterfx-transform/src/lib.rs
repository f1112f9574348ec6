// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// rasterfx-transform — Higher-order pixel transformations over any
// `rasterfx_core::Image`.
//
// Provides generic traversals (map every pixel, map by coordinate, map
// conditionally, map a single row in place), region helpers (rectangular
// windows, border bands), and effects built from them (interior dimming,
// desaturation toward gray). Every operation except `map_line` leaves its
// input untouched and returns a fresh copy.

pub mod effects;
pub mod map;
pub mod processor;

// Re-export the primary API so callers can use `rasterfx_transform::image_map` etc.
pub use effects::{
    dim_center, dim_center_with, is_grayish, is_grayish_within, make_grayish, make_grayish_with,
};
pub use map::{image_map, image_map_coord, image_map_if, make_border, map_line, map_window};
pub use processor::RasterProcessor;
