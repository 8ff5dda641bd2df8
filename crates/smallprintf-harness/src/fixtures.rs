//! Fixture loading and management.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::HarnessError;

/// Integer width the engine is instantiated with for a case.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordWidth {
    U8,
    #[default]
    U16,
    U32,
    U64,
}

impl WordWidth {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
        }
    }
}

impl FromStr for WordWidth {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "u8" | "8" => Ok(Self::U8),
            "u16" | "16" => Ok(Self::U16),
            "u32" | "32" => Ok(Self::U32),
            "u64" | "64" => Ok(Self::U64),
            _ => Err(HarnessError::UnknownWord(s.to_string())),
        }
    }
}

/// One typed argument as written in fixture JSON.
///
/// `{"u": 7}`, `{"d": -5}`, `{"s": "ab"}` and `{"s": null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixtureArg {
    #[serde(rename = "u")]
    Unsigned(u64),
    #[serde(rename = "d")]
    Signed(i64),
    #[serde(rename = "s")]
    Str(Option<String>),
}

impl FromStr for FixtureArg {
    type Err = HarnessError;

    /// Parse the command-line form: `u:7`, `d:-5`, `s:text`, `s:null`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HarnessError::InvalidArgument(s.to_string());
        let (tag, value) = s.split_once(':').ok_or_else(invalid)?;
        match tag {
            "u" => value.parse().map(Self::Unsigned).map_err(|_| invalid()),
            "d" => value.parse().map(Self::Signed).map_err(|_| invalid()),
            "s" if value == "null" => Ok(Self::Str(None)),
            "s" => Ok(Self::Str(Some(value.to_string()))),
            _ => Err(invalid()),
        }
    }
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Behaviour section the case exercises (e.g. "scanner/width").
    pub section: String,
    /// Engine word width.
    #[serde(default)]
    pub word: WordWidth,
    /// Format string. May contain an embedded NUL to test early termination.
    pub format: String,
    /// Arguments, in order.
    #[serde(default)]
    pub args: Vec<FixtureArg>,
    /// Expected sink output, or `error:<message>` for strict failures.
    pub expected_output: String,
    /// Expected returned count, when it is worth pinning separately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_count: Option<usize>,
    /// `lenient`, `strict` or `both`.
    pub mode: String,
}

/// A collection of fixture cases for one behaviour family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Behaviour family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

/// List the `*.json` files in a fixture directory, sorted by path.
pub fn fixture_paths(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_arguments() {
        let set = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"smoke",
                "captured_at":"2026-10-19T00:00:00Z",
                "cases":[
                    {"name":"mixed","section":"scanner","format":"%u %d %s %s",
                     "args":[{"u":7},{"d":-5},{"s":"ab"},{"s":null}],
                     "expected_output":"7 -5 ab ","mode":"both"}
                ]
            }"#,
        )
        .expect("valid fixture json");

        let case = &set.cases[0];
        assert_eq!(case.word, WordWidth::U16);
        assert_eq!(case.expected_count, None);
        assert_eq!(
            case.args,
            vec![
                FixtureArg::Unsigned(7),
                FixtureArg::Signed(-5),
                FixtureArg::Str(Some("ab".to_string())),
                FixtureArg::Str(None),
            ]
        );
    }

    #[test]
    fn round_trips_through_json() {
        let set = FixtureSet {
            version: "v1".to_string(),
            family: "hex".to_string(),
            captured_at: "2026-10-19T00:00:00Z".to_string(),
            cases: vec![FixtureCase {
                name: "byte".to_string(),
                section: "hex".to_string(),
                word: WordWidth::U8,
                format: "%x".to_string(),
                args: vec![FixtureArg::Unsigned(0xAB)],
                expected_output: "AB".to_string(),
                expected_count: Some(2),
                mode: "lenient".to_string(),
            }],
        };
        let json = set.to_json().unwrap();
        assert!(json.contains(r#""word": "u8""#));
        assert!(json.contains(r#""u": 171"#));
        let back = FixtureSet::from_json(&json).unwrap();
        assert_eq!(back.cases[0].args, set.cases[0].args);
        assert_eq!(back.cases[0].expected_count, Some(2));
    }

    #[test]
    fn parses_command_line_arguments() {
        assert_eq!("u:7".parse::<FixtureArg>().unwrap(), FixtureArg::Unsigned(7));
        assert_eq!("d:-5".parse::<FixtureArg>().unwrap(), FixtureArg::Signed(-5));
        assert_eq!(
            "s:a:b".parse::<FixtureArg>().unwrap(),
            FixtureArg::Str(Some("a:b".to_string()))
        );
        assert_eq!("s:null".parse::<FixtureArg>().unwrap(), FixtureArg::Str(None));
        assert!("x:1".parse::<FixtureArg>().is_err());
        assert!("u:-1".parse::<FixtureArg>().is_err());
        assert!("7".parse::<FixtureArg>().is_err());
    }

    #[test]
    fn parses_word_widths() {
        assert_eq!("u32".parse::<WordWidth>().unwrap(), WordWidth::U32);
        assert_eq!("U8".parse::<WordWidth>().unwrap(), WordWidth::U8);
        assert_eq!("64".parse::<WordWidth>().unwrap(), WordWidth::U64);
        assert!(matches!(
            "u128".parse::<WordWidth>(),
            Err(HarnessError::UnknownWord(_))
        ));
    }
}
