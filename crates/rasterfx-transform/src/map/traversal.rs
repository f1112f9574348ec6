// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Traversal primitives — apply a per-pixel or per-coordinate function across
// an image, optionally gated by a predicate.

use rasterfx_core::{Color, Image};
use tracing::{debug, instrument};

/// Return a copy of `img` with `f` applied to every pixel.
///
/// `img` is never modified. Pixels are visited column by column but `f` must
/// not depend on the order.
#[instrument(skip_all, fields(width = img.width(), height = img.height()))]
pub fn image_map<I, F>(img: &I, f: F) -> I
where
    I: Image,
    F: Fn(Color) -> Color,
{
    let mut out = img.clone();
    for x in 0..out.width() {
        for y in 0..out.height() {
            let pixel = out.pixel(x, y);
            out.set_pixel(x, y, f(pixel));
        }
    }
    out
}

/// Replace every pixel of row `line` with `f(pixel)`, in place.
///
/// A `line` outside `0..height` is silently ignored.
#[instrument(skip(img, f), fields(width = img.width(), height = img.height()))]
pub fn map_line<I, F>(img: &mut I, line: usize, f: F)
where
    I: Image,
    F: Fn(Color) -> Color,
{
    if line >= img.height() {
        debug!("Line outside image; nothing to do");
        return;
    }
    for x in 0..img.width() {
        let pixel = img.pixel(x, line);
        img.set_pixel(x, line, f(pixel));
    }
}

/// Return a copy of `img` where each pixel `(x, y)` is `f(img, x, y)`.
///
/// `f` always sees the original image, so it may read neighbouring pixels
/// without observing values written earlier in the same traversal.
#[instrument(skip_all, fields(width = img.width(), height = img.height()))]
pub fn image_map_coord<I, F>(img: &I, f: F) -> I
where
    I: Image,
    F: Fn(&I, usize, usize) -> Color,
{
    let mut out = img.clone();
    for x in 0..img.width() {
        for y in 0..img.height() {
            out.set_pixel(x, y, f(img, x, y));
        }
    }
    out
}

/// Return a copy of `img` with `f` applied only where `cond(img, x, y)` holds.
///
/// Pixels failing the predicate are copied unchanged. Like
/// [`image_map_coord`], `cond` is evaluated against the original image.
pub fn image_map_if<I, C, F>(img: &I, cond: C, f: F) -> I
where
    I: Image,
    C: Fn(&I, usize, usize) -> bool,
    F: Fn(Color) -> Color,
{
    image_map_coord(img, |src, x, y| {
        let pixel = src.pixel(x, y);
        if cond(src, x, y) { f(pixel) } else { pixel }
    })
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rasterfx_core::Raster;

    fn invert(c: Color) -> Color {
        c.map(|ch| 255 - ch)
    }

    /// A 3x2 raster with a distinct color at every position.
    fn gradient() -> Raster {
        let pixels = (0..6).map(|i| Color::new(i * 40, 255 - i * 40, i)).collect();
        Raster::from_pixels(3, 2, pixels).expect("6 pixels for 3x2")
    }

    /// Mapping keeps dimensions and leaves the input untouched.
    #[test]
    fn image_map_preserves_dimensions_and_input() {
        let input = gradient();
        let snapshot = input.clone();

        let output = image_map(&input, invert);

        assert_eq!(output.width(), input.width());
        assert_eq!(output.height(), input.height());
        assert_eq!(input, snapshot);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(output.pixel(x, y), invert(input.pixel(x, y)));
            }
        }
    }

    /// Only the requested row changes, and the argument itself is mutated.
    #[test]
    fn map_line_mutates_one_row() {
        let mut img = Raster::filled(3, 3, Color::BLACK);
        map_line(&mut img, 1, |_| Color::WHITE);

        for x in 0..3 {
            assert_eq!(img.pixel(x, 0), Color::BLACK);
            assert_eq!(img.pixel(x, 1), Color::WHITE);
            assert_eq!(img.pixel(x, 2), Color::BLACK);
        }
    }

    /// Rows past the bottom edge are a no-op rather than a panic.
    #[test]
    fn map_line_out_of_range_is_noop() {
        let mut img = gradient();
        let snapshot = img.clone();
        map_line(&mut img, 2, invert);
        map_line(&mut img, usize::MAX, invert);
        assert_eq!(img, snapshot);
    }

    /// Identity by coordinate reproduces the input pixel for pixel.
    #[test]
    fn image_map_coord_identity() {
        let input = gradient();
        let output = image_map_coord(&input, |img, x, y| img.pixel(x, y));
        assert_eq!(output, input);
    }

    /// Inverting a red 2x2 image yields cyan at every position.
    #[test]
    fn image_map_coord_inverts_red_to_cyan() {
        let input = Raster::filled(2, 2, Color::RED);
        let output = image_map_coord(&input, |img, x, y| invert(img.pixel(x, y)));
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(output.pixel(x, y), Color::new(0, 255, 255));
            }
        }
        assert_eq!(input.pixel(0, 0), Color::RED);
    }

    /// Overwriting a single channel leaves the other two alone.
    #[test]
    fn image_map_coord_single_channel() {
        let input = Raster::filled(2, 2, Color::new(255, 128, 0));
        let output = image_map_coord(&input, |img, x, y| {
            let [r, g, _] = img.pixel(x, y).channels();
            Color::new(r, g, 255)
        });
        assert!(output.pixels().iter().all(|&c| c == Color::new(255, 128, 255)));
    }

    /// Constant functions work at both the 1x1 and a large extreme.
    #[test]
    fn image_map_coord_constant_on_extreme_sizes() {
        let tiny = image_map_coord(&Raster::filled(1, 1, Color::BLACK), |_, _, _| Color::WHITE);
        assert_eq!(tiny.pixel(0, 0), Color::WHITE);

        let big = image_map_coord(&Raster::filled(100, 100, Color::WHITE), |_, _, _| {
            Color::BLACK
        });
        assert_eq!(big.pixel(0, 0), Color::BLACK);
        assert_eq!(big.pixel(50, 50), Color::BLACK);
        assert_eq!(big.pixel(99, 99), Color::BLACK);
    }

    /// `f` reads from the original, so shifting left by one does not smear.
    #[test]
    fn image_map_coord_reads_original_neighbours() {
        let input = gradient();
        let output = image_map_coord(&input, |img, x, y| img.pixel((x + 1) % img.width(), y));
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(output.pixel(x, y), input.pixel((x + 1) % 3, y));
            }
        }
    }

    /// An always-true predicate matches `image_map`; always-false is identity.
    #[test]
    fn image_map_if_constant_predicates() {
        let input = gradient();
        assert_eq!(image_map_if(&input, |_, _, _| true, invert), image_map(&input, invert));
        assert_eq!(image_map_if(&input, |_, _, _| false, invert), input);
    }

    /// Swapping R and G on pixels whose G is zero turns red into green.
    #[test]
    fn image_map_if_applies_where_predicate_holds() {
        let input = Raster::filled(2, 2, Color::RED);
        let output = image_map_if(
            &input,
            |img, x, y| img.pixel(x, y).g() == 0,
            |c| Color::new(c.g(), c.r(), c.b()),
        );
        assert!(output.pixels().iter().all(|&c| c == Color::GREEN));
    }

    /// A coordinate predicate selects exactly the matching column.
    #[test]
    fn image_map_if_by_coordinate() {
        let input = Raster::filled(3, 2, Color::BLACK);
        let output = image_map_if(&input, |_, x, _| x == 1, |_| Color::WHITE);
        for y in 0..2 {
            assert_eq!(output.pixel(0, y), Color::BLACK);
            assert_eq!(output.pixel(1, y), Color::WHITE);
            assert_eq!(output.pixel(2, y), Color::BLACK);
        }
    }

    /// Empty images pass through without invoking the function.
    #[test]
    fn empty_image_is_passed_through() {
        let input = Raster::filled(0, 5, Color::BLACK);
        let output = image_map(&input, |_| panic!("no pixels to visit"));
        assert_eq!(output.height(), 5);
        assert!(output.pixels().is_empty());
    }
}
