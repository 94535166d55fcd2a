#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use super::track_properties;
use super::{AudioTrackConstraints, VideoTrackConstraints};
use crate::MediaStreamConstraintsBuilder;

/// The constraints for a [`MediaStream`][media_stream] request.
///
/// A `None` track means the track is not requested at all, while an empty
/// track record requests the track without constraining any of its properties.
///
/// # W3C Spec Compliance
///
/// Corresponds to [`MediaStreamConstraints`][media_stream_constraints]
/// from the W3C ["Media Capture and Streams"][media_capture_and_streams_spec] spec.
/// In JSON an absent track is written as `false` and an empty one as `true`.
///
/// [media_stream]: https://www.w3.org/TR/mediacapture-streams/#dom-mediastream
/// [media_stream_constraints]: https://www.w3.org/TR/mediacapture-streams/#dom-mediastreamconstraints
/// [media_capture_and_streams_spec]: https://www.w3.org/TR/mediacapture-streams/
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MediaStreamConstraints {
    #[cfg_attr(feature = "serde", serde(default, with = "bool_or_track"))]
    pub audio: Option<AudioTrackConstraints>,
    #[cfg_attr(feature = "serde", serde(default, with = "bool_or_track"))]
    pub video: Option<VideoTrackConstraints>,
}

impl MediaStreamConstraints {
    /// Returns a builder starting from constraints with neither track requested.
    pub fn builder() -> MediaStreamConstraintsBuilder {
        MediaStreamConstraintsBuilder::new()
    }

    /// Returns `true` if neither audio nor video is requested.
    pub fn is_empty(&self) -> bool {
        self.audio.is_none() && self.video.is_none()
    }
}

#[cfg(feature = "serde")]
impl MediaStreamConstraints {
    /// Parses constraints from their W3C JSON form, as passed to `getUserMedia()`.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let constraints: Self = serde_json::from_str(json)?;
        log::debug!(
            "loaded media stream constraints: audio={:?}, video={:?}",
            track_properties(&constraints.audio),
            track_properties(&constraints.video),
        );
        Ok(constraints)
    }

    /// Serializes the constraints into their W3C JSON form.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(feature = "serde")]
mod bool_or_track {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::constraints::TrackConstraints;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrTrack<T> {
        Bool(bool),
        Constraints(T),
    }

    pub(super) fn serialize<T, S>(track: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: TrackConstraints + Serialize,
        S: Serializer,
    {
        match track {
            None => serializer.serialize_bool(false),
            Some(track) if track.is_empty() => serializer.serialize_bool(true),
            Some(track) => track.serialize(serializer),
        }
    }

    pub(super) fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: TrackConstraints + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Ok(match BoolOrTrack::deserialize(deserializer)? {
            BoolOrTrack::Bool(false) => None,
            BoolOrTrack::Bool(true) => Some(T::default()),
            BoolOrTrack::Constraints(track) => Some(track),
        })
    }
}
