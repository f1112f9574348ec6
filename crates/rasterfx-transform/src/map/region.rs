// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Region primitives — restrict a per-pixel function to a rectangular window
// or to the band of pixels along the image edges.

use std::ops::RangeInclusive;

use rasterfx_core::{Color, Image};
use tracing::{debug, instrument};

use super::traversal::image_map_if;

/// Return a copy of `img` with `f` applied inside an inclusive window.
///
/// A pixel is inside when `x_interval` contains `x` and `y_interval`
/// contains `y`. Pixels outside the window are copied unchanged. An inverted
/// interval such as `3..=1` selects nothing.
#[instrument(skip(img, f), fields(width = img.width(), height = img.height()))]
pub fn map_window<I, F>(
    img: &I,
    x_interval: RangeInclusive<usize>,
    y_interval: RangeInclusive<usize>,
    f: F,
) -> I
where
    I: Image,
    F: Fn(Color) -> Color,
{
    image_map_if(
        img,
        |_, x, y| x_interval.contains(&x) && y_interval.contains(&y),
        f,
    )
}

/// Return a copy of `img` with `f` applied to every pixel within `thickness`
/// of any edge.
///
/// The interior, `thickness <= x < width - thickness` and likewise for `y`,
/// is copied unchanged. A thickness of at least half the smaller dimension
/// selects the whole image.
#[instrument(skip(img, f), fields(width = img.width(), height = img.height()))]
pub fn make_border<I, F>(img: &I, thickness: usize, f: F) -> I
where
    I: Image,
    F: Fn(Color) -> Color,
{
    let (width, height) = (img.width(), img.height());
    let mut out = img.clone();
    let mut touched = 0usize;

    for x in 0..width {
        for y in 0..height {
            let in_band = x < thickness
                || y < thickness
                || x >= width.saturating_sub(thickness)
                || y >= height.saturating_sub(thickness);
            if in_band {
                out.set_pixel(x, y, f(img.pixel(x, y)));
                touched += 1;
            }
        }
    }

    debug!(touched, "Border applied");
    out
}

// -- Tests --------------------------------------------------------------------
