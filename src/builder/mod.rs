//! Fluent builders assembling [`MediaStreamConstraints`](crate::MediaStreamConstraints).
//!
//! Every [`Constrain`](crate::Constrain) attribute comes as a pair of setters:
//! `width(1280)` requests an exact value, while
//! `width_with(|width| width.ideal(1280))` configures `exact` and `ideal`
//! through a closure that receives an empty constraint and returns the
//! configured one. Either form replaces whatever was set before.

/// Generates the shorthand and closure setter for each listed `Constrain` field.
macro_rules! constrain_setters {
    ($(
        $(#[$meta:meta])*
        $field:ident / $field_with:ident: $t:ty;
    )*) => {
        $(
            $(#[$meta])*
            ///
            #[doc = concat!("Shorthand for `", stringify!($field_with), "(|c| c.exact(value))`.")]
            pub fn $field(self, value: $t) -> Self {
                self.$field_with(|constrain| constrain.exact(value))
            }

            #[doc = concat!("Sets the `", stringify!($field), "` constraint to the one configured by `build`.")]
            pub fn $field_with<F>(mut self, build: F) -> Self
            where
                F: FnOnce($crate::Constrain<$t>) -> $crate::Constrain<$t>,
            {
                self.constraints.$field = Some(build($crate::Constrain::default()));
                self
            }
        )*
    };
}

mod audio;
mod stream;
mod video;

pub use self::{
    audio::AudioTrackConstraintsBuilder, stream::MediaStreamConstraintsBuilder,
    video::VideoTrackConstraintsBuilder,
};
