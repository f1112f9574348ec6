// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for rasterfx.

use serde::{Deserialize, Serialize};

/// An RGB pixel value.
///
/// Channels are conventionally in `0..=255` but nothing here enforces it:
/// effects may produce values outside that range and clamping is left to
/// whichever image implementation (or later stage) stores the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color(pub [i32; 3]);

impl Color {
    pub const BLACK: Self = Self([0, 0, 0]);
    pub const WHITE: Self = Self([255, 255, 255]);
    pub const RED: Self = Self([255, 0, 0]);
    pub const GREEN: Self = Self([0, 255, 0]);
    pub const BLUE: Self = Self([0, 0, 255]);
    pub const YELLOW: Self = Self([255, 255, 0]);
    pub const MAGENTA: Self = Self([255, 0, 255]);
    pub const CYAN: Self = Self([0, 255, 255]);

    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self([r, g, b])
    }

    /// A gray with all three channels set to `level`.
    pub const fn gray(level: i32) -> Self {
        Self([level, level, level])
    }

    pub fn r(self) -> i32 {
        self.0[0]
    }

    pub fn g(self) -> i32 {
        self.0[1]
    }

    pub fn b(self) -> i32 {
        self.0[2]
    }

    pub fn channels(self) -> [i32; 3] {
        self.0
    }

    /// Apply `f` to each channel independently.
    pub fn map(self, f: impl Fn(i32) -> i32) -> Self {
        Self(self.0.map(f))
    }

    pub fn max_channel(self) -> i32 {
        self.0.into_iter().max().unwrap_or_default()
    }

    pub fn min_channel(self) -> i32 {
        self.0.into_iter().min().unwrap_or_default()
    }

    /// Difference between the largest and smallest channel.
    ///
    /// Widened to `i64` since unclamped channels can span the whole `i32`
    /// range.
    pub fn spread(self) -> i64 {
        self.max_channel() as i64 - self.min_channel() as i64
    }

    /// Mean of the three channels, floored.
    pub fn mean(self) -> i32 {
        let sum: i64 = self.0.iter().map(|&c| c as i64).sum();
        // The mean of three i32 values always fits back into i32.
        sum.div_euclid(3) as i32
    }
}

impl From<[i32; 3]> for Color {
    fn from(channels: [i32; 3]) -> Self {
        Self(channels)
    }
}

impl From<Color> for [i32; 3] {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let image::Rgb([r, g, b]) = pixel;
        Self([r as i32, g as i32, b as i32])
    }
}

impl From<Color> for image::Rgb<u8> {
    /// Converts with every channel clamped into `0..=255`.
    fn from(color: Color) -> Self {
        image::Rgb(color.0.map(|c| c.clamp(0, 255) as u8))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.0[0], self.0[1], self.0[2])
    }
}
