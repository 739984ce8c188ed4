//! Widget components for the instrument cluster.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform
//! independence, and take their geometry from [`Layout`](crate::layout::Layout)
//! so they scale with the window.

mod battery;
mod header;
mod indicators;
mod loading;
mod popups;
mod primitives;
mod speedometer;
mod start;
mod status;

pub use battery::draw_battery;
pub use header::draw_header;
pub use indicators::draw_indicator;
pub use loading::draw_loading_screen;
pub use popups::draw_popup;
pub use primitives::{
    background_color,
    draw_arc,
    draw_arc_with,
    draw_background,
    draw_hub,
    draw_needle,
    draw_tick,
    fill_trapezoid,
    stroke_polygon,
};
pub use speedometer::draw_speedometer;
pub use start::draw_start_screen;
pub use status::{draw_horn, draw_status_labels};

/// In-memory draw target for widget tests.
#[cfg(test)]
pub(crate) mod test_support {
    use core::convert::Infallible;

    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::*;

    pub struct FrameBuffer {
        size: Size,
        pixels: Vec<Rgb565>,
    }

    impl FrameBuffer {
        pub fn new(width: u32, height: u32) -> Self {
            Self { size: Size::new(width, height), pixels: vec![Rgb565::BLACK; (width * height) as usize] }
        }

        pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
            if x < 0 || y < 0 || x >= self.size.width as i32 || y >= self.size.height as i32 {
                return None;
            }
            Some(self.pixels[(y as u32 * self.size.width + x as u32) as usize])
        }

        /// Number of pixels with exactly `color`.
        pub fn count(&self, color: Rgb565) -> usize { self.pixels.iter().filter(|&&p| p == color).count() }

        /// Number of pixels with `color` inside a rectangle.
        pub fn count_in(&self, top_left: Point, size: Size, color: Rgb565) -> usize {
            let mut n = 0;
            for y in top_left.y..top_left.y + size.height as i32 {
                for x in top_left.x..top_left.x + size.width as i32 {
                    if self.pixel(x, y) == Some(color) {
                        n += 1;
                    }
                }
            }
            n
        }
    }

    impl OriginDimensions for FrameBuffer {
        fn size(&self) -> Size { self.size }
    }

    impl DrawTarget for FrameBuffer {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0 && point.y >= 0 && point.x < self.size.width as i32 && point.y < self.size.height as i32 {
                    let index = (point.y as u32 * self.size.width + point.x as u32) as usize;
                    self.pixels[index] = color;
                }
            }
            Ok(())
        }
    }
}
