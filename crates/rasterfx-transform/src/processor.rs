// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster processor — chains the traversal primitives and effects over a
// single owned image.

use std::ops::RangeInclusive;

use rasterfx_core::{Color, EffectConfig, Image};
use tracing::{debug, instrument};

use crate::effects;
use crate::map;

/// Transformation pipeline operating on a single in-memory image.
///
/// Each transformation consumes `self` and returns a new `RasterProcessor`
/// wrapping the result, enabling method chaining. `map_line` is the one
/// in-place step and takes `&mut self`.
///
/// ```ignore
/// let out = RasterProcessor::new(Raster::filled(64, 64, Color::RED))
///     .border(2, |_| Color::BLACK)
///     .dim_center(4)
///     .make_grayish()
///     .into_image();
/// ```
pub struct RasterProcessor<I: Image> {
    /// The current working image.
    image: I,
    /// Constants used by the effect steps.
    config: EffectConfig,
}

impl<I: Image> RasterProcessor<I> {
    // -- Construction ---------------------------------------------------------

    /// Wrap an image using the default effect configuration.
    pub fn new(image: I) -> Self {
        Self::with_config(image, EffectConfig::default())
    }

    pub fn with_config(image: I, config: EffectConfig) -> Self {
        debug!(
            width = image.width(),
            height = image.height(),
            "Processor created"
        );
        Self { image, config }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> usize {
        self.image.width()
    }

    pub fn height(&self) -> usize {
        self.image.height()
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// Borrow the current working image.
    pub fn as_image(&self) -> &I {
        &self.image
    }

    /// Consume the processor and return the underlying image.
    pub fn into_image(self) -> I {
        self.image
    }

    // -- Traversals (consume self, return new Self) ---------------------------

    pub fn map(self, f: impl Fn(Color) -> Color) -> Self {
        let image = map::image_map(&self.image, f);
        self.replace(image)
    }

    pub fn map_coord(self, f: impl Fn(&I, usize, usize) -> Color) -> Self {
        let image = map::image_map_coord(&self.image, f);
        self.replace(image)
    }

    pub fn map_if(
        self,
        cond: impl Fn(&I, usize, usize) -> bool,
        f: impl Fn(Color) -> Color,
    ) -> Self {
        let image = map::image_map_if(&self.image, cond, f);
        self.replace(image)
    }

    /// Apply `f` to row `line` of the working image in place. Rows outside
    /// the image are ignored.
    pub fn map_line(&mut self, line: usize, f: impl Fn(Color) -> Color) -> &mut Self {
        map::map_line(&mut self.image, line, f);
        self
    }

    // -- Regions --------------------------------------------------------------

    pub fn map_window(
        self,
        x_interval: RangeInclusive<usize>,
        y_interval: RangeInclusive<usize>,
        f: impl Fn(Color) -> Color,
    ) -> Self {
        let image = map::map_window(&self.image, x_interval, y_interval, f);
        self.replace(image)
    }

    pub fn border(self, thickness: usize, f: impl Fn(Color) -> Color) -> Self {
        let image = map::make_border(&self.image, thickness, f);
        self.replace(image)
    }

    // -- Effects --------------------------------------------------------------

    /// Dim everything deeper than `thickness` from the edges by the
    /// configured factor.
    #[instrument(skip(self))]
    pub fn dim_center(self, thickness: usize) -> Self {
        let image = effects::dim_center_with(&self.image, thickness, &self.config);
        self.replace(image)
    }

    /// Collapse pixels outside the configured tolerance to gray.
    #[instrument(skip(self))]
    pub fn make_grayish(self) -> Self {
        let image = effects::make_grayish_with(&self.image, &self.config);
        self.replace(image)
    }

    fn replace(self, image: I) -> Self {
        Self {
            image,
            config: self.config,
        }
    }
}

// -- Tests --------------------------------------------------------------------
