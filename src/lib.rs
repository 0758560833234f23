#![cfg_attr(not(test), no_std)]

//! Fixed-point text output and x-y scatter plots for 128x160 LCD panels.
//!
//! The crate talks to the panel only through [`Screen`]. With the default
//! `async` feature every drawing call is `async`; disable it for a blocking
//! API generated from the same source.

pub mod fixed;
pub mod plot;
pub mod screen;

#[cfg(test)]
mod testing;

pub use fixed::{
    Formatted, print_signed_decimal, print_unsigned_binary, signed_decimal, unsigned_binary,
};
pub use plot::{DataPoint, PlotConfig, PlotDomain, PlotTransform};
pub use screen::{GraphicsScreen, Screen, color_from_rgb};
