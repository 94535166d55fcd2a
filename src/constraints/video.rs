#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{set_properties, TrackConstraints};
use crate::property::name::*;
use crate::{Constrain, FacingMode, ResizeMode};

/// The constraints for a video [`MediaStreamTrack`][media_stream_track].
///
/// Every field is optional. An unset field requests nothing about the
/// property, it does not stand for a default value.
///
/// # W3C Spec Compliance
///
/// Corresponds to the video subset of [`MediaTrackConstraintSet`][media_track_constraint_set]
/// from the W3C ["Media Capture and Streams"][media_capture_and_streams_spec] spec.
///
/// [media_stream_track]: https://www.w3.org/TR/mediacapture-streams/#dom-mediastreamtrack
/// [media_track_constraint_set]: https://www.w3.org/TR/mediacapture-streams/#dom-mediatrackconstraintset
/// [media_capture_and_streams_spec]: https://www.w3.org/TR/mediacapture-streams/
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct VideoTrackConstraints {
    #[cfg_attr(
        feature = "serde",
        serde(
            skip_serializing_if = "Option::is_none",
            deserialize_with = "super::deserialize_identifier"
        )
    )]
    pub device_id: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            skip_serializing_if = "Option::is_none",
            deserialize_with = "super::deserialize_identifier"
        )
    )]
    pub group_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub aspect_ratio: Option<Constrain<f64>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub facing_mode: Option<Constrain<FacingMode>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub frame_rate: Option<Constrain<f64>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub height: Option<Constrain<u32>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub width: Option<Constrain<u32>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub resize_mode: Option<Constrain<ResizeMode>>,
}

impl VideoTrackConstraints {
    /// Returns `true` if no property is constrained.
    pub fn is_empty(&self) -> bool {
        self.constrained_properties().is_empty()
    }

    /// Returns the names of the constrained properties, in declaration order.
    pub fn constrained_properties(&self) -> Vec<&'static str> {
        set_properties![
            self.device_id => DEVICE_ID,
            self.group_id => GROUP_ID,
            self.aspect_ratio => ASPECT_RATIO,
            self.facing_mode => FACING_MODE,
            self.frame_rate => FRAME_RATE,
            self.height => HEIGHT,
            self.width => WIDTH,
            self.resize_mode => RESIZE_MODE,
        ]
    }
}

impl TrackConstraints for VideoTrackConstraints {
    #[cfg(feature = "serde")]
    fn is_empty(&self) -> bool {
        VideoTrackConstraints::is_empty(self)
    }

    fn constrained_properties(&self) -> Vec<&'static str> {
        VideoTrackConstraints::constrained_properties(self)
    }
}
