use log::trace;

use super::{AudioTrackConstraintsBuilder, VideoTrackConstraintsBuilder};
use crate::constraints::track_properties;
use crate::MediaStreamConstraints;

/// Builds [`MediaStreamConstraints`] from a chain of calls.
///
/// ```
/// use webrtc_media_constraints::MediaStreamConstraintsBuilder;
///
/// let constraints = MediaStreamConstraintsBuilder::new()
///     .audio(true)
///     .video_with(|video| video.width(1280).height(720))
///     .build();
///
/// assert!(constraints.audio.unwrap().is_empty());
/// assert_eq!(constraints.video.unwrap().width.unwrap().exact, Some(1280));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MediaStreamConstraintsBuilder {
    constraints: MediaStreamConstraints,
}

impl MediaStreamConstraintsBuilder {
    pub fn new() -> Self {
        MediaStreamConstraintsBuilder::default()
    }

    pub fn build(self) -> MediaStreamConstraints {
        trace!(
            "built media stream constraints: audio={:?}, video={:?}",
            track_properties(&self.constraints.audio),
            track_properties(&self.constraints.video),
        );
        self.constraints
    }

    /// Requests an audio track without adding any constraint to it.
    ///
    /// `false` leaves the builder untouched; it does not withdraw an audio
    /// track configured by an earlier call.
    pub fn audio(self, enabled: bool) -> Self {
        if enabled {
            self.audio_with(|audio| audio)
        } else {
            trace!("audio(false) leaves audio constraints unchanged");
            self
        }
    }

    /// Requests an audio track configured by `build`.
    ///
    /// The builder handed to `build` starts from the audio constraints set so
    /// far, so properties set by earlier calls are kept unless overwritten.
    pub fn audio_with<F>(mut self, build: F) -> Self
    where
        F: FnOnce(AudioTrackConstraintsBuilder) -> AudioTrackConstraintsBuilder,
    {
        let audio = self.constraints.audio.take().unwrap_or_default();
        self.constraints.audio = Some(build(audio.into()).build());
        self
    }

    /// Requests a video track without adding any constraint to it.
    ///
    /// `false` leaves the builder untouched; it does not withdraw a video
    /// track configured by an earlier call.
    pub fn video(self, enabled: bool) -> Self {
        if enabled {
            self.video_with(|video| video)
        } else {
            trace!("video(false) leaves video constraints unchanged");
            self
        }
    }

    /// Requests a video track configured by `build`.
    ///
    /// The builder handed to `build` starts from the video constraints set so
    /// far, so properties set by earlier calls are kept unless overwritten.
    pub fn video_with<F>(mut self, build: F) -> Self
    where
        F: FnOnce(VideoTrackConstraintsBuilder) -> VideoTrackConstraintsBuilder,
    {
        let video = self.constraints.video.take().unwrap_or_default();
        self.constraints.video = Some(build(video.into()).build());
        self
    }
}

impl From<MediaStreamConstraints> for MediaStreamConstraintsBuilder {
    fn from(constraints: MediaStreamConstraints) -> Self {
        Self { constraints }
    }
}
