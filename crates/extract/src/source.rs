// ABOUTME: Enumerated source identifiers for the configured news sites.
// ABOUTME: String keys at the process boundary map onto Source variants; unknown keys are rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// The news sources the engine knows how to extract from.
///
/// Each variant corresponds to one entry in the strategy registry. The string
/// keys are the stable identifiers used at the invocation boundary and in the
/// strategy configuration; they are deliberately short and lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "hindu")]
    Hindu,
    #[serde(rename = "hindustan-times")]
    HindustanTimes,
    #[serde(rename = "toi")]
    TimesOfIndia,
    #[serde(rename = "ie")]
    IndianExpress,
    #[serde(rename = "dna")]
    DnaIndia,
}

/// All configured sources, in registry order.
pub const ALL_SOURCES: &[Source] = &[
    Source::Hindu,
    Source::HindustanTimes,
    Source::TimesOfIndia,
    Source::IndianExpress,
    Source::DnaIndia,
];

impl Source {
    /// The stable string key for this source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Hindu => "hindu",
            Source::HindustanTimes => "hindustan-times",
            Source::TimesOfIndia => "toi",
            Source::IndianExpress => "ie",
            Source::DnaIndia => "dna",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Source {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hindu" => Ok(Source::Hindu),
            "hindustan-times" => Ok(Source::HindustanTimes),
            "toi" => Ok(Source::TimesOfIndia),
            "ie" => Ok(Source::IndianExpress),
            "dna" => Ok(Source::DnaIndia),
            other => Err(ExtractError::unknown_source(other, "ParseSource")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for source in ALL_SOURCES {
            let parsed: Source = source.as_str().parse().expect("key should parse");
            assert_eq!(parsed, *source);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "times".parse::<Source>().expect_err("should fail");
        assert!(err.is_unknown_source());
    }

    #[test]
    fn serde_uses_boundary_keys() {
        let json = serde_json::to_string(&Source::HindustanTimes).unwrap();
        assert_eq!(json, "\"hindustan-times\"");
        let back: Source = serde_json::from_str("\"toi\"").unwrap();
        assert_eq!(back, Source::TimesOfIndia);
    }
}
