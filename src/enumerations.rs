use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const FACING_MODE_USER_STR: &str = "user";
const FACING_MODE_ENVIRONMENT_STR: &str = "environment";

const RESIZE_MODE_NONE_STR: &str = "none";
const RESIZE_MODE_CROP_AND_SCALE_STR: &str = "crop-and-scale";

/// The directions that the camera can face, as seen from the user's perspective.
///
/// # W3C Spec Compliance
///
/// Corresponds to [`VideoFacingModeEnum`][video_facing_mode_enum], restricted to the
/// two values that mobile and desktop capture devices actually report.
///
/// [video_facing_mode_enum]: https://www.w3.org/TR/mediacapture-streams/#dom-videofacingmodeenum
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FacingMode {
    /// The source is facing toward the user (a self-view camera).
    User,

    /// The source is facing away from the user (viewing the environment).
    Environment,
}

impl fmt::Display for FacingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FacingMode::User => f.write_str(FACING_MODE_USER_STR),
            FacingMode::Environment => f.write_str(FACING_MODE_ENVIRONMENT_STR),
        }
    }
}

impl FromStr for FacingMode {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            FACING_MODE_USER_STR => Ok(FacingMode::User),
            FACING_MODE_ENVIRONMENT_STR => Ok(FacingMode::Environment),
            _ => Err(Error::ErrUnknownFacingMode(raw.to_owned())),
        }
    }
}

/// The means by which the resolution can be derived by the client.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ResizeMode {
    /// This resolution and frame rate is offered by the camera, its driver, or the OS.
    None,

    /// This resolution is downscaled and/or cropped from a higher camera resolution,
    /// or its frame rate is decimated.
    ///
    /// # Important
    /// The media MUST NOT be upscaled, stretched or have fake data created that did not occur in the input source.
    CropAndScale,
}

impl fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ResizeMode::None => f.write_str(RESIZE_MODE_NONE_STR),
            ResizeMode::CropAndScale => f.write_str(RESIZE_MODE_CROP_AND_SCALE_STR),
        }
    }
}

impl FromStr for ResizeMode {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            RESIZE_MODE_NONE_STR => Ok(ResizeMode::None),
            RESIZE_MODE_CROP_AND_SCALE_STR => Ok(ResizeMode::CropAndScale),
            _ => Err(Error::ErrUnknownResizeMode(raw.to_owned())),
        }
    }
}


#[cfg(feature = "serde")]
#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn serialize() {
        assert_eq!(
            serde_json::to_value(FacingMode::Environment).unwrap(),
            serde_json::json!("environment")
        );
        assert_eq!(
            serde_json::to_value(ResizeMode::CropAndScale).unwrap(),
            serde_json::json!("crop-and-scale")
        );
    }

    #[test]
    fn deserialize() {
        let facing_mode: FacingMode = serde_json::from_value(serde_json::json!("user")).unwrap();
        assert_eq!(facing_mode, FacingMode::User);

        let resize_mode: ResizeMode = serde_json::from_value(serde_json::json!("none")).unwrap();
        assert_eq!(resize_mode, ResizeMode::None);

        assert!(serde_json::from_value::<FacingMode>(serde_json::json!("left")).is_err());
    }
}
