//! Configuration types deserialized from `vdiag.toml`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// The diagnostic configuration of a compilation run.
///
/// Every section is optional; an empty file is a valid configuration.
#[derive(Debug, Default, Deserialize)]
pub struct DiagnosticsConfig {
    /// Severity overrides: diagnostic identifier to severity text
    /// (`FATAL`, `ERROR`, `WARNING`, `NOTE`, `INFO` and their legacy forms).
    #[serde(default)]
    pub severity: BTreeMap<String, String>,
    /// Waiver rules, in file order.
    #[serde(default, rename = "waiver")]
    pub waivers: Vec<WaiverEntry>,
    /// Macro settings.
    #[serde(default)]
    pub macros: MacroConfig,
}

/// One `[[waiver]]` table.
///
/// `file`, `line` and `object` default to the wildcard (empty / 0).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WaiverEntry {
    /// The diagnostic to waive: symbolic name, decimal id or rendered tag.
    pub id: String,
    /// The file to match, empty for any.
    #[serde(default)]
    pub file: String,
    /// The line to match, 0 for any.
    #[serde(default)]
    pub line: u32,
    /// The object to match, empty for any.
    #[serde(default)]
    pub object: String,
}

/// The `[macros]` section.
#[derive(Debug, Default, Deserialize)]
pub struct MacroConfig {
    /// Macros exempt from argument-count diagnostics.
    ///
    /// Accepts either a single name or a list of names.
    #[serde(default, deserialize_with = "deserialize_string_or_vec")]
    pub allow_arg_count: Vec<String>,
}

/// Deserializes a field that can be either a single string or a list of strings.
fn deserialize_string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut vec = Vec::new();
            while let Some(val) = seq.next_element::<String>()? {
                vec.push(val);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(StringOrVec)
}
