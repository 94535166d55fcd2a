//! Names of the constrainable properties of a [`MediaStreamTrack`][media_stream_track],
//! as they appear in W3C ["Media Capture and Streams"][media_capture_and_streams_spec]
//! dictionaries and thus in the JSON form of the constraints.
//!
//! [media_stream_track]: https://www.w3.org/TR/mediacapture-streams/#mediastreamtrack
//! [media_capture_and_streams_spec]: https://www.w3.org/TR/mediacapture-streams/

/// Properties that apply to both audio and video tracks.
pub mod common {
    pub mod name {
        /// The identifier of the device generating the content of the track.
        pub const DEVICE_ID: &str = "deviceId";

        /// The group identifier shared by devices of the same physical device
        /// (e.g. the microphone and camera of a single webcam).
        pub const GROUP_ID: &str = "groupId";
    }

    pub fn names() -> Vec<&'static str> {
        use self::name::*;

        vec![DEVICE_ID, GROUP_ID]
    }
}

/// Properties that apply only to audio tracks.
pub mod audio_only {
    pub mod name {
        /// Whether automatic gain control is applied to the microphone input.
        pub const AUTO_GAIN_CONTROL: &str = "autoGainControl";

        /// The number of independent channels of sound.
        pub const CHANNEL_COUNT: &str = "channelCount";

        /// Whether sound played out is removed from the recorded input.
        pub const ECHO_CANCELLATION: &str = "echoCancellation";

        /// The latency, in seconds.
        pub const LATENCY: &str = "latency";

        /// Whether noise suppression is applied to the microphone input.
        pub const NOISE_SUPPRESSION: &str = "noiseSuppression";

        /// The sample rate, in samples per second.
        pub const SAMPLE_RATE: &str = "sampleRate";

        /// The input volume, from `0.0` (silence) to `1.0` (maximum supported volume).
        pub const VOLUME: &str = "volume";
    }

    pub fn names() -> Vec<&'static str> {
        use self::name::*;

        vec![
            AUTO_GAIN_CONTROL,
            CHANNEL_COUNT,
            ECHO_CANCELLATION,
            LATENCY,
            NOISE_SUPPRESSION,
            SAMPLE_RATE,
            VOLUME,
        ]
    }
}

/// Properties that apply only to video tracks.
pub mod video_only {
    pub mod name {
        /// Width in pixels divided by height in pixels.
        pub const ASPECT_RATIO: &str = "aspectRatio";

        /// The direction the camera faces, as seen from the user's perspective.
        pub const FACING_MODE: &str = "facingMode";

        /// The frame rate, in frames per second.
        pub const FRAME_RATE: &str = "frameRate";

        /// The height, in pixels.
        pub const HEIGHT: &str = "height";

        /// The width, in pixels.
        pub const WIDTH: &str = "width";

        /// Whether the client may crop and downscale the camera output.
        pub const RESIZE_MODE: &str = "resizeMode";
    }

    pub fn names() -> Vec<&'static str> {
        use self::name::*;

        vec![
            ASPECT_RATIO,
            FACING_MODE,
            FRAME_RATE,
            HEIGHT,
            WIDTH,
            RESIZE_MODE,
        ]
    }
}

/// Names of all properties.
pub mod name {
    pub use super::audio_only::name::*;
    pub use super::common::name::*;
    pub use super::video_only::name::*;
}

/// Names of all properties, common ones first.
pub fn names() -> Vec<&'static str> {
    let mut all = vec![];
    all.append(&mut self::common::names());
    all.append(&mut self::audio_only::names());
    all.append(&mut self::video_only::names());
    all
}
