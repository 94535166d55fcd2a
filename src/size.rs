use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A width/height pair in pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height, as used by the `aspectRatio` constraint.
    ///
    /// Returns `f64::INFINITY` (or `NaN` for `0x0`) when the height is zero.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses the `{width}x{height}` form produced by [`Display`](fmt::Display).
impl FromStr for Size {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        let invalid = || Error::ErrInvalidSize(raw.to_owned());

        let (width, height) = raw.split_once('x').ok_or_else(invalid)?;
        let width = width.trim().parse().map_err(|_| invalid())?;
        let height = height.trim().parse().map_err(|_| invalid())?;

        Ok(Self::new(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_string() {
        let tests = vec![
            (Size::new(1280, 720), "1280x720"),
            (Size::new(640, 480), "640x480"),
            (Size::new(0, 0), "0x0"),
        ];

        for (size, expected_string) in tests {
            assert_eq!(size.to_string(), expected_string);
            assert_eq!(expected_string.parse::<Size>().unwrap(), size);
        }
    }

    #[test]
    fn test_size_parse_whitespace() {
        assert_eq!(" 1920 x 1080 ".parse::<Size>().unwrap(), Size::new(1920, 1080));
    }

    #[test]
    fn test_size_parse_invalid() {
        for raw in ["1280", "1280x", "x720", "-1x720", "1280*720", "wide x tall"] {
            let err = raw.parse::<Size>().unwrap_err();
            assert!(matches!(err, Error::ErrInvalidSize(ref s) if s == raw), "{raw}");
        }
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(Size::new(1920, 1080).aspect_ratio(), 16.0 / 9.0);
        assert_eq!(Size::from((640, 480)).aspect_ratio(), 4.0 / 3.0);
        assert!(Size::new(640, 0).aspect_ratio().is_infinite());
    }
}
