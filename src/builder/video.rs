use crate::{FacingMode, ResizeMode, Size, VideoTrackConstraints};

/// Builds [`VideoTrackConstraints`], usually from within
/// [`MediaStreamConstraintsBuilder::video_with`](crate::MediaStreamConstraintsBuilder::video_with).
#[derive(Debug, Clone, Default)]
pub struct VideoTrackConstraintsBuilder {
    constraints: VideoTrackConstraints,
}

impl VideoTrackConstraintsBuilder {
    pub fn new() -> Self {
        VideoTrackConstraintsBuilder::default()
    }

    pub fn build(self) -> VideoTrackConstraints {
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

    /// Requests exactly `size`, setting both the width and the height constraint.
    pub fn size(self, size: Size) -> Self {
        self.width(size.width).height(size.height)
    }

    constrain_setters! {
        /// Requests a width divided by height ratio.
        aspect_ratio / aspect_ratio_with: f64;
        facing_mode / facing_mode_with: FacingMode;
        /// Requests a frame rate, in frames per second.
        frame_rate / frame_rate_with: f64;
        /// Requests a height, in pixels.
        height / height_with: u32;
        /// Requests a width, in pixels.
        width / width_with: u32;
        resize_mode / resize_mode_with: ResizeMode;
    }
}

impl From<VideoTrackConstraints> for VideoTrackConstraintsBuilder {
    fn from(constraints: VideoTrackConstraints) -> Self {
        Self { constraints }
    }
}
