#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{set_properties, TrackConstraints};
use crate::property::name::*;
use crate::Constrain;

/// The constraints for an audio [`MediaStreamTrack`][media_stream_track].
///
/// Every field is optional. An unset field requests nothing about the
/// property, it does not stand for a default value.
///
/// # W3C Spec Compliance
///
/// Corresponds to the audio subset of [`MediaTrackConstraintSet`][media_track_constraint_set]
/// from the W3C ["Media Capture and Streams"][media_capture_and_streams_spec] spec.
///
/// [media_stream_track]: https://www.w3.org/TR/mediacapture-streams/#dom-mediastreamtrack
/// [media_track_constraint_set]: https://www.w3.org/TR/mediacapture-streams/#dom-mediatrackconstraintset
/// [media_capture_and_streams_spec]: https://www.w3.org/TR/mediacapture-streams/
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AudioTrackConstraints {
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
    pub auto_gain_control: Option<Constrain<bool>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub channel_count: Option<Constrain<u32>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub echo_cancellation: Option<Constrain<bool>>,
    /// Latency in seconds.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub latency: Option<Constrain<f64>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub noise_suppression: Option<Constrain<bool>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub sample_rate: Option<Constrain<u32>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub volume: Option<Constrain<f64>>,
}

impl AudioTrackConstraints {
    /// Returns `true` if no property is constrained.
    pub fn is_empty(&self) -> bool {
        self.constrained_properties().is_empty()
    }

    /// Returns the names of the constrained properties, in declaration order.
    pub fn constrained_properties(&self) -> Vec<&'static str> {
        set_properties![
            self.device_id => DEVICE_ID,
            self.group_id => GROUP_ID,
            self.auto_gain_control => AUTO_GAIN_CONTROL,
            self.channel_count => CHANNEL_COUNT,
            self.echo_cancellation => ECHO_CANCELLATION,
            self.latency => LATENCY,
            self.noise_suppression => NOISE_SUPPRESSION,
            self.sample_rate => SAMPLE_RATE,
            self.volume => VOLUME,
        ]
    }
}

impl TrackConstraints for AudioTrackConstraints {
    #[cfg(feature = "serde")]
    fn is_empty(&self) -> bool {
        AudioTrackConstraints::is_empty(self)
    }

    fn constrained_properties(&self) -> Vec<&'static str> {
        AudioTrackConstraints::constrained_properties(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{audio_only, common};

    fn fully_constrained() -> AudioTrackConstraints {
        AudioTrackConstraints {
            device_id: Some("default".to_owned()),
            group_id: Some("headset".to_owned()),
            auto_gain_control: Some(Constrain::exact_only(false)),
            channel_count: Some(Constrain::ideal_only(2)),
            echo_cancellation: Some(Constrain::exact_only(true)),
            latency: Some(Constrain::ideal_only(0.01)),
            noise_suppression: Some(Constrain::default()),
            sample_rate: Some(Constrain::exact_only(48_000)),
            volume: Some(Constrain::ideal_only(0.5)),
        }
    }

    #[test]
    fn default_is_empty() {
        let constraints = AudioTrackConstraints::default();

        assert!(constraints.is_empty());
        assert!(constraints.constrained_properties().is_empty());
    }

    #[test]
    fn empty_constrain_still_counts_as_set() {
        let constraints = AudioTrackConstraints {
            noise_suppression: Some(Constrain::default()),
            ..Default::default()
        };

        assert!(!constraints.is_empty());
        assert_eq!(constraints.constrained_properties(), vec![NOISE_SUPPRESSION]);
    }

    #[test]
    fn constrained_properties_cover_all_audio_properties() {
        let mut expected = common::names();
        expected.append(&mut audio_only::names());

        assert_eq!(fully_constrained().constrained_properties(), expected);
    }
}
