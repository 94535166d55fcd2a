use crate::AudioTrackConstraints;

/// Builds [`AudioTrackConstraints`], usually from within
/// [`MediaStreamConstraintsBuilder::audio_with`](crate::MediaStreamConstraintsBuilder::audio_with).
#[derive(Debug, Clone, Default)]
pub struct AudioTrackConstraintsBuilder {
    constraints: AudioTrackConstraints,
}

impl AudioTrackConstraintsBuilder {
    pub fn new() -> Self {
        AudioTrackConstraintsBuilder::default()
    }

    pub fn build(self) -> AudioTrackConstraints {
        self.constraints
    }

    pub fn device_id<S>(mut self, id: S) -> Self
    where
        S: Into<String>,
    {
        self.constraints.device_id = Some(id.into());
        self
    }

    pub fn group_id<S>(mut self, id: S) -> Self
    where
        S: Into<String>,
    {
        self.constraints.group_id = Some(id.into());
        self
    }

    constrain_setters! {
        /// Requests automatic gain control to be on or off.
        auto_gain_control / auto_gain_control_with: bool;
        channel_count / channel_count_with: u32;
        /// Requests echo cancellation to be on or off.
        echo_cancellation / echo_cancellation_with: bool;
        /// Requests a latency, in seconds.
        latency / latency_with: f64;
        /// Requests noise suppression to be on or off.
        noise_suppression / noise_suppression_with: bool;
        /// Requests a sample rate, in samples per second.
        sample_rate / sample_rate_with: u32;
        volume / volume_with: f64;
    }
}

impl From<AudioTrackConstraints> for AudioTrackConstraintsBuilder {
    fn from(constraints: AudioTrackConstraints) -> Self {
        Self { constraints }
    }
}
