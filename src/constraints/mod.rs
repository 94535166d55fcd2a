mod audio;
mod stream;
mod video;

pub use self::{
    audio::AudioTrackConstraints, stream::MediaStreamConstraints, video::VideoTrackConstraints,
};

/// Common surface of the per-track constraint records.
pub(crate) trait TrackConstraints: Default {
    #[cfg(feature = "serde")]
    fn is_empty(&self) -> bool;

    fn constrained_properties(&self) -> Vec<&'static str>;
}

/// Names of the constrained properties of `track`, or `None` if the track is not requested.
pub(crate) fn track_properties<T>(track: &Option<T>) -> Option<Vec<&'static str>>
where
    T: TrackConstraints,
{
    track.as_ref().map(TrackConstraints::constrained_properties)
}

/// Collects `name` for every field that is set, in the order given.
macro_rules! set_properties {
    ($($field:expr => $name:expr),* $(,)?) => {{
        let mut properties = vec![];
        $(
            if $field.is_some() {
                properties.push($name);
            }
        )*
        properties
    }};
}

pub(crate) use set_properties;

/// Deserializes a `deviceId`/`groupId` given either as a bare string or as a
/// `{ "exact": .., "ideal": .. }` dictionary, keeping `exact` over `ideal`.
#[cfg(feature = "serde")]
pub(crate) fn deserialize_identifier<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BareOrConstrainString {
        Bare(String),
        Constraint {
            exact: Option<String>,
            ideal: Option<String>,
        },
    }

    Ok(match BareOrConstrainString::deserialize(deserializer)? {
        BareOrConstrainString::Bare(id) => Some(id),
        BareOrConstrainString::Constraint { exact, ideal } => exact.or(ideal),
    })
}
