//! X-Y scatter plots in the 128x128 area below the header band.
//!
//! Data values use the same 0.001 resolution as [`crate::fixed::signed_decimal`].
//! [`PlotTransform::configure`] draws the title and blank plot area and returns
//! the transform; [`PlotTransform::render`] maps points through it.

use embedded_graphics_core::geometry::{Point, Size};
use embedded_graphics_core::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics_core::primitives::Rectangle;
use log::{debug, trace, warn};

use crate::screen::{Screen, color_from_rgb};

/// Plot area width in pixels
pub const PLOT_WIDTH: u32 = 128;
/// Plot area height in pixels
pub const PLOT_HEIGHT: u32 = 128;
/// Rows reserved above the plot area for the title
pub const HEADER_HEIGHT: i32 = 32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    /// Vertical offset of the plot area from the top of the screen
    pub y_offset: i32,
    /// Color the whole screen is cleared to
    pub clear_color: Rgb565,
    /// Plot area background
    pub background: Rgb565,
    /// Point color
    pub accent: Rgb565,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
            y_offset: HEADER_HEIGHT,
            clear_color: Rgb565::BLACK,
            background: color_from_rgb(228, 228, 228),
            accent: Rgb565::BLUE,
        }
    }
}

impl PlotConfig {
    /// Screen area the plot occupies
    pub fn plot_area(&self) -> Rectangle {
        Rectangle::new(
            Point::new(0, self.y_offset),
            Size::new(self.width, self.height),
        )
    }
}

/// A data point in thousandths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataPoint {
    pub x: i32,
    pub y: i32,
}

impl DataPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for DataPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Data-space rectangle shown by a plot. Expects `min < max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotDomain {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl PlotDomain {
    pub const fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, point: DataPoint) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }

    pub fn is_degenerate(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }
}

/// Affine mapping from a [`PlotDomain`] to device pixels.
///
/// Each axis reduces to one add and one multiply:
/// `px = (range_x + x) * ratio_x` and `py = (range_y - y) * ratio_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotTransform {
    domain: PlotDomain,
    range_x: i32,
    range_y: i32,
    ratio_x: f32,
    ratio_y: f32,
    y_offset: i32,
    accent: Rgb565,
}

impl PlotTransform {
    /// Derive the transform without touching the screen.
    pub fn new(domain: PlotDomain, config: &PlotConfig) -> Self {
        if domain.is_degenerate() {
            warn!(
                "degenerate plot domain x {}..{} y {}..{}",
                domain.min_x, domain.max_x, domain.min_y, domain.max_y
            );
        }

        let span_x = domain.max_x.wrapping_sub(domain.min_x);
        let span_y = domain.max_y.wrapping_sub(domain.min_y);

        Self {
            domain,
            // Reduces to -min_x
            range_x: span_x.wrapping_sub(domain.max_x),
            // Reduces to max_y
            range_y: span_y.wrapping_add(domain.min_y),
            ratio_x: config.width as f32 / span_x as f32,
            ratio_y: config.height as f32 / span_y as f32,
            y_offset: config.y_offset,
            accent: config.accent,
        }
    }

    pub fn domain(&self) -> PlotDomain {
        self.domain
    }

    /// Additive terms `(range_x, range_y)`
    pub fn offsets(&self) -> (i32, i32) {
        (self.range_x, self.range_y)
    }

    /// Pixels per data unit `(ratio_x, ratio_y)`
    pub fn ratios(&self) -> (f32, f32) {
        (self.ratio_x, self.ratio_y)
    }

    /// Device pixel for `point`, or `None` when it lies outside the domain.
    pub fn to_device(&self, point: DataPoint) -> Option<Point> {
        if !self.domain.contains(point) {
            return None;
        }

        let px = (self.range_x.wrapping_add(point.x) as f32 * self.ratio_x) as i32;
        let py = (self.range_y.wrapping_sub(point.y) as f32 * self.ratio_y) as i32;
        Some(Point::new(px, py.saturating_add(self.y_offset)))
    }
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "PlotTransform",),
    async(feature = "async", keep_self)
)]
impl PlotTransform {
    /// Clear the screen, draw `title` in the header and blank the plot area,
    /// then return the transform for `domain`.
    pub async fn configure<S: Screen>(
        screen: &mut S,
        title: &str,
        domain: PlotDomain,
        config: &PlotConfig,
    ) -> Result<Self, S::Error> {
        screen.clear(config.clear_color).await?;
        screen.set_cursor(0, 0).await?;
        screen.write_str(title).await?;
        screen.fill_rect(config.plot_area(), config.background).await?;

        let transform = Self::new(domain, config);
        debug!(
            "plot \"{}\" x {}..{} y {}..{} ratio {}x{}",
            title,
            domain.min_x,
            domain.max_x,
            domain.min_y,
            domain.max_y,
            transform.ratio_x,
            transform.ratio_y
        );
        Ok(transform)
    }

    /// Draw each point inside the domain as one accent-colored pixel.
    /// Points outside the domain are skipped.
    pub async fn render<S, I>(&self, screen: &mut S, points: I) -> Result<(), S::Error>
    where
        S: Screen,
        I: IntoIterator,
        I::Item: Into<DataPoint>,
    {
        for point in points {
            let point = point.into();
            match self.to_device(point) {
                Some(pixel) => screen.draw_pixel(pixel, self.accent).await?,
                None => trace!("skip ({}, {}) outside plot domain", point.x, point.y),
            }
        }
        Ok(())
    }

    /// [`render`](Self::render) for x and y held in separate slices.
    /// Extra elements in the longer slice are ignored.
    pub async fn render_parallel<S: Screen>(
        &self,
        screen: &mut S,
        xs: &[i32],
        ys: &[i32],
    ) -> Result<(), S::Error> {
        if xs.len() != ys.len() {
            warn!("plot buffers differ in length: {} x, {} y", xs.len(), ys.len());
        }
        self.render(
            screen,
            xs.iter().zip(ys).map(|(&x, &y)| DataPoint::new(x, y)),
        )
        .await
    }
}
