//! Image to key color sampling.
//!
//! Images are placed onto the layout's canvas according to a [`FitMode`], and
//! each key takes the average color of its 3x3 window on that canvas.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};
use tracing::debug;

use crate::layout::WINDOW_SIZE;
use crate::{Color, ColorMap, FitMode, KeyboardError, Layout, Result};

/// Pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn sized(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

/// Which part of the source is drawn, and where on the canvas it lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub source: Rect,
    pub destination: Rect,
}

/// Compute source and destination rectangles for drawing a `width` x `height`
/// image onto a `canvas_width` x `canvas_height` canvas.
pub fn placement(
    width: u32,
    height: u32,
    canvas_width: u32,
    canvas_height: u32,
    fit: FitMode,
) -> Placement {
    let mut source = Rect::sized(width, height);
    let mut destination = Rect::sized(canvas_width, canvas_height);

    // source aspect ratio is greater than the canvas aspect ratio
    let wider = u64::from(width) * u64::from(canvas_height)
        > u64::from(canvas_width) * u64::from(height);
    let (w, h) = (f64::from(width), f64::from(height));
    let (cw, ch) = (f64::from(canvas_width), f64::from(canvas_height));

    match fit {
        FitMode::Stretch => {},
        FitMode::Fit => {
            if wider {
                let scaled = h * cw / w;
                destination.height = (scaled as u32).clamp(1, canvas_height);
                destination.y = (ch - scaled).max(0.) as u32 / 2;
            } else {
                let scaled = w * ch / h;
                destination.width = (scaled as u32).clamp(1, canvas_width);
                destination.x = (cw - scaled).max(0.) as u32 / 2;
            }
        },
        FitMode::Fill => {
            if wider {
                source.width = ((h * cw / ch) as u32).clamp(1, width);
                source.x = (width - source.width) / 2;
            } else {
                source.height = ((w * ch / cw) as u32).clamp(1, height);
                source.y = (height - source.height) / 2;
            }
        },
    }

    Placement {
        source,
        destination,
    }
}

/// Draw an image onto a black canvas of the given size
pub fn rasterize(
    image: &DynamicImage,
    canvas_width: u32,
    canvas_height: u32,
    fit: FitMode,
) -> Result<RgbImage> {
    if image.width() == 0 || image.height() == 0 {
        return Err(KeyboardError::UnsupportedImage("image has no pixels".into()));
    }
    let Placement {
        source,
        destination,
    } = placement(image.width(), image.height(), canvas_width, canvas_height, fit);
    debug!(?source, ?destination, %fit, "placing image");

    let rgb = image.to_rgb8();
    let cropped =
        imageops::crop_imm(&rgb, source.x, source.y, source.width, source.height).to_image();
    let scaled = if cropped.dimensions() == (destination.width, destination.height) {
        cropped
    } else {
        imageops::resize(
            &cropped,
            destination.width,
            destination.height,
            FilterType::CatmullRom,
        )
    };

    let mut canvas = RgbImage::new(canvas_width, canvas_height);
    imageops::replace(
        &mut canvas,
        &scaled,
        i64::from(destination.x),
        i64::from(destination.y),
    );
    Ok(canvas)
}

/// Sample a color for every key in the layout from an image.
/// Indicator keys are always white.
pub fn sample(layout: &Layout, image: &DynamicImage, fit: FitMode) -> Result<ColorMap> {
    let canvas = rasterize(image, layout.width, layout.height, fit)?;

    let mut colors = ColorMap::new();
    for entry in layout.entries() {
        let mut total = [0u32; 3];
        for y in entry.row..entry.row + WINDOW_SIZE {
            for x in entry.column..entry.column + WINDOW_SIZE {
                let pixel = canvas.get_pixel_checked(x, y).ok_or(
                    KeyboardError::InvalidLayout("sampling window outside of canvas"),
                )?;
                for (sum, channel) in total.iter_mut().zip(pixel.0) {
                    *sum += u32::from(channel);
                }
            }
        }
        let [r, g, b] = total.map(|sum| (sum / (WINDOW_SIZE * WINDOW_SIZE)) as u8);
        colors.insert(entry.key, Color::new(r, g, b));
    }

    for &key in layout.indicators {
        colors.insert(key, Color::WHITE);
    }

    Ok(colors)
}

#[cfg(test)]
mod tests {
    use image::Rgb;

    use super::*;
    use crate::layout::tests::{A, B, C, LED, TINY};

    #[test]
    fn stretch_uses_everything() {
        let p = placement(300, 20, 68, 19, FitMode::Stretch);
        assert_eq!(p.source, Rect::sized(300, 20));
        assert_eq!(p.destination, Rect::sized(68, 19));
    }

    #[test]
    fn fit_letterboxes_wide_images() {
        // twice as wide as the canvas, relative to height
        let p = placement(136, 19, 68, 19, FitMode::Fit);
        assert_eq!(p.source, Rect::sized(136, 19));
        assert_eq!(
            p.destination,
            Rect {
                x: 0,
                y: 4,
                width: 68,
                height: 9
            }
        );
    }

    #[test]
    fn fit_pillarboxes_tall_images() {
        let p = placement(100, 100, 68, 19, FitMode::Fit);
        assert_eq!(
            p.destination,
            Rect {
                x: 24,
                y: 0,
                width: 19,
                height: 19
            }
        );
    }

    #[test]
    fn equal_ratio_constrains_height() {
        let p = placement(136, 38, 68, 19, FitMode::Fit);
        assert_eq!(p.destination, Rect::sized(68, 19));
        let p = placement(136, 38, 68, 19, FitMode::Fill);
        assert_eq!(p.source, Rect::sized(136, 38));
    }

    #[test]
    fn fill_crops_wide_images() {
        let p = placement(136, 19, 68, 19, FitMode::Fill);
        assert_eq!(
            p.source,
            Rect {
                x: 34,
                y: 0,
                width: 68,
                height: 19
            }
        );
        assert_eq!(p.destination, Rect::sized(68, 19));
    }

    #[test]
    fn fill_crops_tall_images() {
        let p = placement(68, 38, 68, 19, FitMode::Fill);
        assert_eq!(
            p.source,
            Rect {
                x: 0,
                y: 9,
                width: 68,
                height: 19
            }
        );
    }

    #[test]
    fn fit_leaves_margins_undrawn() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(136, 19, Rgb([255; 3])));
        let canvas = rasterize(&image, 68, 19, FitMode::Fit).unwrap();
        for (_, y, pixel) in canvas.enumerate_pixels() {
            if (4..13).contains(&y) {
                assert!(pixel.0.iter().all(|&c| c > 250), "row {y} should be drawn");
            } else {
                assert_eq!(pixel.0, [0; 3], "row {y} should be empty");
            }
        }
    }

    #[test]
    fn stretch_averages_windows_exactly() {
        let source = RgbImage::from_fn(6, 6, |x, y| Rgb([(x * 40) as u8, (y * 40) as u8, 7]));
        let colors = sample(&TINY, &DynamicImage::ImageRgb8(source.clone()), FitMode::Stretch)
            .unwrap();

        for (key, (column, row)) in [(A, (0, 0)), (B, (3, 0)), (C, (1, 3))] {
            let mut total = [0u32; 3];
            for y in row..row + 3 {
                for x in column..column + 3 {
                    for (sum, c) in total.iter_mut().zip(source.get_pixel(x, y).0) {
                        *sum += c as u32;
                    }
                }
            }
            let expected = Color::from(total.map(|sum| (sum / 9) as u8));
            assert_eq!(colors[&key], expected);
        }
        // window of b is columns 3..6, rows 0..3: red avg 160, green avg 40
        assert_eq!(colors[&B], Color::new(160, 40, 7));
    }

    #[test]
    fn indicators_are_always_white() {
        let black = DynamicImage::new_rgb8(40, 40);
        for fit in [FitMode::Fit, FitMode::Fill, FitMode::Stretch] {
            let colors = sample(&TINY, &black, fit).unwrap();
            assert_eq!(colors[&LED], Color::WHITE);
            assert_eq!(colors[&A], Color::BLACK);
            assert_eq!(colors.len(), 4);
        }
    }

    #[test]
    fn empty_images_are_unsupported() {
        let empty = DynamicImage::new_rgb8(0, 0);
        assert!(matches!(
            sample(&TINY, &empty, FitMode::Fill),
            Err(KeyboardError::UnsupportedImage(_))
        ));
    }
}
