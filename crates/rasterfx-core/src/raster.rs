// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The image contract the transforms are written against, plus an owned
// row-major raster and an adapter for `image::RgbImage`.

use image::{DynamicImage, RgbImage};

use crate::error::{RasterError, Result};
use crate::types::Color;

/// A width x height grid of [`Color`] values addressed by zero-based `(x, y)`.
///
/// `Clone` must produce an independent deep copy: mutating the clone never
/// affects the original. Behaviour for coordinates outside the grid is up to
/// the implementation.
pub trait Image: Clone {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn pixel(&self, x: usize, y: usize) -> Color;
    fn set_pixel(&mut self, x: usize, y: usize, color: Color);
}

/// Owned RGB raster with unclamped integer channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    /// Row-major pixel storage, `width * height` entries.
    pixels: Vec<Color>,
}

impl Raster {
    // -- Construction ---------------------------------------------------------

    /// A raster with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Wrap a row-major pixel buffer.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(RasterError::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Copy an 8-bit RGB buffer from the `image` crate.
    pub fn from_rgb_image(img: &RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width: width as usize,
            height: height as usize,
            pixels: img.pixels().map(|px| Color::from(*px)).collect(),
        }
    }

    /// Convert any decoded image, dropping alpha and widening to 8-bit RGB.
    pub fn from_dynamic(img: &DynamicImage) -> Self {
        Self::from_rgb_image(&img.to_rgb8())
    }

    // -- Accessors ------------------------------------------------------------

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Convert to an 8-bit RGB buffer, clamping every channel into `0..=255`.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            self.pixel(x as usize, y as usize).into()
        })
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} raster",
            self.width,
            self.height
        );
        y * self.width + x
    }
}

impl Image for Raster {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[self.index(x, y)]
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }
}

/// 8-bit storage: reads widen to `i32`, writes clamp into `0..=255`.
impl Image for RgbImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn pixel(&self, x: usize, y: usize) -> Color {
        (*self.get_pixel(x as u32, y as u32)).into()
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        self.put_pixel(x as u32, y as u32, color.into());
    }
}

// -- Tests --------------------------------------------------------------------
