//! Test doubles shared by the unit tests.

use core::convert::Infallible;

use embedded_graphics_core::Pixel;
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Point, Size};
use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_graphics_core::primitives::Rectangle;

use crate::screen::Screen;

/// Drive a screen operation to completion in either API flavour.
#[cfg(feature = "async")]
pub fn run<F: core::future::Future>(operation: F) -> F::Output {
    embassy_futures::block_on(operation)
}

#[cfg(not(feature = "async"))]
pub fn run<T>(operation: T) -> T {
    operation
}

const WIDTH: usize = 128;
const HEIGHT: usize = 160;

/// 128x160 in-memory panel, `None` where nothing was drawn.
pub struct FrameBuffer {
    pixels: Vec<Option<Rgb565>>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: vec![None; WIDTH * HEIGHT],
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb565> {
        self.pixels[y * WIDTH + x]
    }

    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|p| **p == Some(color)).count()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if (0..WIDTH as i32).contains(&point.x) && (0..HEIGHT as i32).contains(&point.y) {
                self.pixels[point.y as usize * WIDTH + point.x as usize] = Some(color);
            }
        }
        Ok(())
    }
}

/// One request received by [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear(Rgb565),
    Cursor(u16, u16),
    Text(String),
    Fill(Rectangle, Rgb565),
    Pixel(Point, Rgb565),
}

/// Screen that only records what it was asked to do.
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Recorder {
    pub fn pixels(&self) -> Vec<Point> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Pixel(point, _) => Some(*point),
                _ => None,
            })
            .collect()
    }

    pub fn text(&self) -> String {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "Recorder",),
    async(feature = "async", keep_self)
)]
impl Screen for Recorder {
    type Error = Infallible;

    async fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error> {
        self.calls.push(Call::Clear(color));
        Ok(())
    }

    async fn set_cursor(&mut self, column: u16, row: u16) -> Result<(), Self::Error> {
        self.calls.push(Call::Cursor(column, row));
        Ok(())
    }

    async fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        self.calls.push(Call::Text(text.into()));
        Ok(())
    }

    async fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        self.calls.push(Call::Fill(area, color));
        Ok(())
    }

    async fn draw_pixel(&mut self, point: Point, color: Rgb565) -> Result<(), Self::Error> {
        self.calls.push(Call::Pixel(point, color));
        Ok(())
    }
}
