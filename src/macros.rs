/// Asserts that a value of type `$t` serializes to `$json`, and that `$json`
/// deserializes back into an equal value.
macro_rules! assert_serde_symmetric {
    ($t:ty, $subject:expr, $json:expr) => {{
        let subject: $t = $subject;
        let json: serde_json::Value = $json;

        assert_eq!(serde_json::to_value(&subject).unwrap(), json, "serialize");
        assert_eq!(
            serde_json::from_value::<$t>(json).unwrap(),
            subject,
            "deserialize"
        );
    }};
}

pub(crate) use assert_serde_symmetric;
