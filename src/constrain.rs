#[cfg(feature = "serde")]
use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

/// A constraint on a single property, requesting that the capability either
/// must equal `exact` or should come as close as possible to `ideal`.
///
/// Both, either or neither of the two values may be set. No consistency
/// between them is enforced; interpreting them is up to the capture device.
///
/// # W3C Spec Compliance
///
/// There exists no direct corresponding type in the
/// W3C ["Media Capture and Streams"][media_capture_and_streams_spec] spec,
/// since `Constrain<T>` aims to be a generalization over multiple types in the W3C spec:
///
/// | Rust                  | W3C                                                          |
/// | --------------------- | ------------------------------------------------------------ |
/// | `Constrain<bool>`     | [`ConstrainBooleanParameters`][constrain_boolean_parameters] |
/// | `Constrain<u32>`      | [`ConstrainULongRange`][constrain_ulong_range] (without `min`/`max`) |
/// | `Constrain<f64>`      | [`ConstrainDoubleRange`][constrain_double_range] (without `min`/`max`) |
///
/// When deserializing, a bare value is accepted in place of the dictionary and
/// is treated as `ideal`, matching the semantics of bare values in basic constraints.
///
/// [constrain_boolean_parameters]: https://www.w3.org/TR/mediacapture-streams/#dom-constrainbooleanparameters
/// [constrain_ulong_range]: https://www.w3.org/TR/mediacapture-streams/#dom-constrainulongrange
/// [constrain_double_range]: https://www.w3.org/TR/mediacapture-streams/#dom-constraindoublerange
/// [media_capture_and_streams_spec]: https://www.w3.org/TR/mediacapture-streams/
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Constrain<T> {
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "core::option::Option::is_none")
    )]
    pub exact: Option<T>,
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "core::option::Option::is_none")
    )]
    pub ideal: Option<T>,
}

impl<T> Constrain<T> {
    pub fn exact_only(exact: T) -> Self {
        Self {
            exact: Some(exact),
            ideal: None,
        }
    }

    pub fn ideal_only(ideal: T) -> Self {
        Self {
            exact: None,
            ideal: Some(ideal),
        }
    }

    /// Sets the value the capability must equal, replacing any previous one.
    pub fn exact(mut self, value: T) -> Self {
        self.exact = Some(value);
        self
    }

    /// Sets the value the capability should approach, replacing any previous one.
    pub fn ideal(mut self, value: T) -> Self {
        self.ideal = Some(value);
        self
    }

    pub fn is_required(&self) -> bool {
        self.exact.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_none() && self.ideal.is_none()
    }
}

impl<T> Default for Constrain<T> {
    fn default() -> Self {
        Self {
            exact: None,
            ideal: None,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(untagged)]
enum BareOrConstrain<T> {
    Bare(T),
    Constraint {
        exact: Option<T>,
        ideal: Option<T>,
        // range members are not modeled, only noticed
        min: Option<IgnoredAny>,
        max: Option<IgnoredAny>,
    },
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for Constrain<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match BareOrConstrain::deserialize(deserializer)? {
            BareOrConstrain::Bare(ideal) => Self::ideal_only(ideal),
            BareOrConstrain::Constraint {
                exact,
                ideal,
                min,
                max,
            } => {
                if min.is_some() || max.is_some() {
                    log::debug!(
                        "dropping unsupported range constraint (min: {}, max: {})",
                        min.is_some(),
                        max.is_some(),
                    );
                }
                Self { exact, ideal }
            }
        })
    }
}
