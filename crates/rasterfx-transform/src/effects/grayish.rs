// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Grayish detection and desaturation toward the channel mean.

use std::cell::Cell;

use rasterfx_core::{Color, EffectConfig, Image};
use tracing::{debug, instrument};

use crate::map::image_map_if;

/// Whether `p` has a channel spread of at most 85.
pub fn is_grayish(p: Color) -> bool {
    is_grayish_within(p, EffectConfig::default().gray_tolerance)
}

/// Whether `max(p) - min(p) <= tolerance`.
pub fn is_grayish_within(p: Color, tolerance: i32) -> bool {
    p.spread() <= tolerance as i64
}

/// Replace every non-grayish pixel with a gray of its floored channel mean.
///
/// Equivalent to [`make_grayish_with`] using [`EffectConfig::default`].
pub fn make_grayish<I: Image>(img: &I) -> I {
    make_grayish_with(img, &EffectConfig::default())
}

/// Replace every pixel whose spread exceeds `config.gray_tolerance` with
/// `Color::gray(mean)`; grayish pixels are copied unchanged.
///
/// The result is a fixed point: running it again changes nothing.
#[instrument(skip_all, fields(width = img.width(), height = img.height(), tolerance = config.gray_tolerance))]
pub fn make_grayish_with<I: Image>(img: &I, config: &EffectConfig) -> I {
    let tolerance = config.gray_tolerance;

    if img.width() == 1 && img.height() == 1 {
        let mut out = img.clone();
        let pixel = out.pixel(0, 0);
        let touched = usize::from(!is_grayish_within(pixel, tolerance));
        if touched > 0 {
            out.set_pixel(0, 0, desaturate(pixel));
        }
        debug!(touched, "Single-pixel image handled directly");
        return out;
    }

    let touched = Cell::new(0usize);
    let out = image_map_if(
        img,
        |src, x, y| {
            let colorful = !is_grayish_within(src.pixel(x, y), tolerance);
            if colorful {
                touched.set(touched.get() + 1);
            }
            colorful
        },
        desaturate,
    );

    debug!(touched = touched.get(), "Colorful pixels desaturated");
    out
}

fn desaturate(pixel: Color) -> Color {
    Color::gray(pixel.mean())
}

// -- Tests --------------------------------------------------------------------
