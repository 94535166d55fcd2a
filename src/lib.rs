//! Typed constraints for requesting audio and video capture tracks, modeled after the
//! W3C ["Media Capture and Streams"][mediacapture_streams] `MediaStreamConstraints`
//! dictionary, together with fluent builders to assemble them.
//!
//! The constraints are plain data: nothing here captures media or checks whether a
//! device can satisfy a request. That is left to whichever capture backend consumes
//! the built [`MediaStreamConstraints`].
//!
//! [mediacapture_streams]: https://www.w3.org/TR/mediacapture-streams/

#![warn(rust_2018_idioms)]

pub mod property;

mod builder;
mod constrain;
mod constraints;
mod enumerations;
mod error;
mod size;

#[cfg(all(test, feature = "serde"))]
mod macros;

pub use self::{
    builder::{
        AudioTrackConstraintsBuilder, MediaStreamConstraintsBuilder, VideoTrackConstraintsBuilder,
    },
    constrain::Constrain,
    constraints::{AudioTrackConstraints, MediaStreamConstraints, VideoTrackConstraints},
    enumerations::{FacingMode, ResizeMode},
    error::{Error, Result},
    size::Size,
};
