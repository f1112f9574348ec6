// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Interior dimming — darken everything except a border band.

use rasterfx_core::{Color, EffectConfig, Image};
use tracing::{debug, instrument};

use crate::map::image_map_if;

/// Darken the interior of `img` by 20% per channel, leaving a border band of
/// width `thickness` untouched.
///
/// Equivalent to [`dim_center_with`] using [`EffectConfig::default`].
pub fn dim_center<I: Image>(img: &I, thickness: usize) -> I {
    dim_center_with(img, thickness, &EffectConfig::default())
}

/// Darken the interior of `img`, scaling each channel by
/// `config.dim_factor` and flooring the result.
///
/// A pixel is dimmed when its distance to the nearest edge,
/// `min(x, width - 1 - x, y, height - 1 - y)`, is at least `thickness`.
/// With `thickness == 0` the whole image is dimmed; with a thickness of at
/// least half the smaller dimension nothing is.
#[instrument(skip(img, config), fields(width = img.width(), height = img.height(), factor = config.dim_factor))]
pub fn dim_center_with<I: Image>(img: &I, thickness: usize, config: &EffectConfig) -> I {
    let (width, height) = (img.width(), img.height());
    let factor = config.dim_factor;

    let out = image_map_if(
        img,
        |_, x, y| distance_to_edge(x, y, width, height) >= thickness,
        |pixel| dim_pixel(pixel, factor),
    );

    debug!(
        touched = dimmed_area(width, height, thickness),
        "Interior dimmed"
    );
    out
}

/// Number of pixels at least `thickness` away from every edge.
fn dimmed_area(width: usize, height: usize, thickness: usize) -> usize {
    let band = thickness.saturating_mul(2);
    width.saturating_sub(band) * height.saturating_sub(band)
}

/// Distance from `(x, y)` to the nearest image edge, in pixels.
///
/// Only meaningful for coordinates inside the image.
fn distance_to_edge(x: usize, y: usize, width: usize, height: usize) -> usize {
    x.min(width - 1 - x).min(y).min(height - 1 - y)
}

fn dim_pixel(pixel: Color, factor: f64) -> Color {
    pixel.map(|channel| (channel as f64 * factor).floor() as i32)
}

// -- Tests --------------------------------------------------------------------
