// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Map module — whole-image traversals and region selections.

pub mod region;
pub mod traversal;

pub use region::{make_border, map_window};
pub use traversal::{image_map, image_map_coord, image_map_if, map_line};
