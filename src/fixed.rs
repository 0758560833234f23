//! Fixed-width text for fixed-point values.
//!
//! Two encodings are supported, each with its scale implied by the function
//! that reads it:
//!
//! * signed decimal, resolution 0.001, range -9.999 to +9.999
//! * unsigned binary, resolution 1/256, range 0 to 999.99
//!
//! Every result is exactly [`WIDTH`] characters, overflow included.

use core::fmt::{self, Write};

use heapless::String;

use crate::screen::Screen;

/// Characters produced by every formatter
pub const WIDTH: usize = 6;

/// Implicit denominator of the signed decimal encoding
pub const DECIMAL_SCALE: i32 = 1000;
/// Largest magnitude the signed decimal encoding can show
pub const DECIMAL_LIMIT: i32 = 9999;
/// Shown in place of a signed decimal that is out of range
pub const DECIMAL_OVERFLOW: &str = " *.***";

/// Implicit denominator of the unsigned binary encoding
pub const BINARY_SCALE: u32 = 256;
/// First raw value the unsigned binary encoding can no longer show
pub const BINARY_LIMIT: u32 = 256_000;
/// Shown in place of an unsigned binary value that is out of range
pub const BINARY_OVERFLOW: &str = "***.**";

/// Outcome of formatting a fixed-point value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatted {
    /// The value fit; the text is exactly [`WIDTH`] characters.
    Value(String<WIDTH>),
    /// The value was out of range. Holds the sentinel for that encoding.
    Overflow(&'static str),
}

impl Formatted {
    /// Text to put on screen. Overflow yields the sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            Formatted::Value(text) => text.as_str(),
            Formatted::Overflow(sentinel) => sentinel,
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, Formatted::Overflow(_))
    }

    /// The formatted digits, or `None` on overflow.
    pub fn value(&self) -> Option<&str> {
        match self {
            Formatted::Value(text) => Some(text.as_str()),
            Formatted::Overflow(_) => None,
        }
    }
}

impl AsRef<str> for Formatted {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn fixed_width(args: fmt::Arguments<'_>) -> Formatted {
    let mut text = String::new();
    // Callers only pass arguments that render to WIDTH characters.
    let _ = text.write_fmt(args);
    Formatted::Value(text)
}

/// Format `value` thousandths as `" d.ddd"` or `"-d.ddd"`.
///
/// | value  | text       |
/// |--------|------------|
/// | 12345  | `" *.***"` |
/// | 2345   | `" 2.345"` |
/// | -8100  | `"-8.100"` |
/// | -102   | `"-0.102"` |
/// | 31     | `" 0.031"` |
pub fn signed_decimal(value: i32) -> Formatted {
    if !(-DECIMAL_LIMIT..=DECIMAL_LIMIT).contains(&value) {
        return Formatted::Overflow(DECIMAL_OVERFLOW);
    }

    let sign = if value < 0 { '-' } else { ' ' };
    let magnitude = value.unsigned_abs();
    let scale = DECIMAL_SCALE.unsigned_abs();
    fixed_width(format_args!(
        "{sign}{}.{:03}",
        magnitude / scale,
        magnitude % scale
    ))
}

/// Format `value` 256ths right-justified with two decimals, `"ddd.dd"`.
///
/// The quotient is truncated to hundredths, never rounded, so the largest
/// raw value 255999 still fits as `"999.99"`.
///
/// | value  | text       |
/// |--------|------------|
/// | 0      | `"  0.00"` |
/// | 64     | `"  0.25"` |
/// | 100    | `"  0.39"` |
/// | 512    | `"  2.00"` |
/// | 5000   | `" 19.53"` |
/// | 256000 | `"***.**"` |
pub fn unsigned_binary(value: u32) -> Formatted {
    if value >= BINARY_LIMIT {
        return Formatted::Overflow(BINARY_OVERFLOW);
    }

    // floor(value * 100 / 256), exact in integers below BINARY_LIMIT
    let hundredths = value * 100 / BINARY_SCALE;
    fixed_width(format_args!("{:>3}.{:02}", hundredths / 100, hundredths % 100))
}

/// Write a signed decimal value at the cursor.
#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "print_signed_decimal",),
    async(feature = "async", keep_self)
)]
pub async fn print_signed_decimal<S: Screen>(
    screen: &mut S,
    value: i32,
) -> Result<Formatted, S::Error> {
    let formatted = signed_decimal(value);
    screen.write_str(formatted.as_str()).await?;
    Ok(formatted)
}

/// Write an unsigned binary value at the cursor.
#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "print_unsigned_binary",),
    async(feature = "async", keep_self)
)]
pub async fn print_unsigned_binary<S: Screen>(
    screen: &mut S,
    value: u32,
) -> Result<Formatted, S::Error> {
    let formatted = unsigned_binary(value);
    screen.write_str(formatted.as_str()).await?;
    Ok(formatted)
}
