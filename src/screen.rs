use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics_core::Drawable;
use embedded_graphics_core::Pixel;
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::Point;
use embedded_graphics_core::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics_core::primitives::Rectangle;

/// Width of one character cell in pixels
pub const CHAR_WIDTH: i32 = 6;
/// Height of one text row in pixels
pub const LINE_HEIGHT: i32 = 10;

/// Pack 8-bit RGB channels into a 16-bit RGB565 color.
pub const fn color_from_rgb(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "Screen",),
    async(feature = "async", keep_self)
)]
/// Drawing capabilities the text and plot routines need from a display driver.
///
/// Coordinates are in device pixels. Implementations drop (or clamp) anything
/// that falls outside the panel.
pub trait Screen {
    type Error;

    /// Fill the whole screen with `color`.
    async fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error>;

    /// Move the text cursor to a character cell.
    async fn set_cursor(&mut self, column: u16, row: u16) -> Result<(), Self::Error>;

    /// Write text at the cursor and advance it.
    async fn write_str(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Fill a rectangular area with a single color.
    async fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error>;

    /// Draw a single pixel.
    async fn draw_pixel(&mut self, point: Point, color: Rgb565) -> Result<(), Self::Error>;
}

/// [`Screen`] on top of any `embedded-graphics` draw target.
///
/// Text uses the 6x10 monospace font; the cursor is kept in pixels and moves
/// one cell right per character, back to column 0 of the next row on `'\n'`.
pub struct GraphicsScreen<D> {
    target: D,
    cursor: Point,
    text_color: Rgb565,
}

impl<D> GraphicsScreen<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            cursor: Point::zero(),
            text_color: Rgb565::WHITE,
        }
    }

    pub fn with_text_color(mut self, color: Rgb565) -> Self {
        self.text_color = color;
        self
    }

    /// Current cursor position in pixels
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn release(self) -> D {
        self.target
    }

    fn draw_line(&mut self, line: &str) -> Result<(), D::Error> {
        if line.is_empty() {
            return Ok(());
        }
        let style = MonoTextStyle::new(&FONT_6X10, self.text_color);
        Text::with_baseline(line, self.cursor, style, Baseline::Top).draw(&mut self.target)?;
        self.cursor.x += CHAR_WIDTH * line.chars().count() as i32;
        Ok(())
    }
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "GraphicsScreen",),
    async(feature = "async", keep_self)
)]
impl<D> Screen for GraphicsScreen<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    async fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error> {
        self.target.clear(color)
    }

    async fn set_cursor(&mut self, column: u16, row: u16) -> Result<(), Self::Error> {
        self.cursor = Point::new(
            i32::from(column) * CHAR_WIDTH,
            i32::from(row) * LINE_HEIGHT,
        );
        Ok(())
    }

    async fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.draw_line(first)?;
        }
        for line in lines {
            self.cursor = Point::new(0, self.cursor.y + LINE_HEIGHT);
            self.draw_line(line)?;
        }
        Ok(())
    }

    async fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        self.target.fill_solid(&area, color)
    }

    async fn draw_pixel(&mut self, point: Point, color: Rgb565) -> Result<(), Self::Error> {
        self.target.draw_iter(core::iter::once(Pixel(point, color)))
    }
}
