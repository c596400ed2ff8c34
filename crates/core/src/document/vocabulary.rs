//! Closed vocabularies used by protocol documents

use std::fmt;

use serde::{Deserialize, Serialize};

/// Document language
///
/// The table is closed; unknown user input maps to a configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// German
    De,
    /// French
    Fr,
    /// Spanish
    Es,
    /// Italian
    It,
    /// Dutch
    Nl,
    /// Portuguese
    Pt,
    /// Polish
    Pl,
    /// Swedish
    Sv,
    /// Danish
    Da,
    /// Finnish
    Fi,
    /// Czech
    Cs,
}

impl Language {
    /// Every known language
    pub const ALL: [Language; 12] = [
        Language::En,
        Language::De,
        Language::Fr,
        Language::Es,
        Language::It,
        Language::Nl,
        Language::Pt,
        Language::Pl,
        Language::Sv,
        Language::Da,
        Language::Fi,
        Language::Cs,
    ];

    /// Two-letter lowercase code
    pub const fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::It => "it",
            Language::Nl => "nl",
            Language::Pt => "pt",
            Language::Pl => "pl",
            Language::Sv => "sv",
            Language::Da => "da",
            Language::Fi => "fi",
            Language::Cs => "cs",
        }
    }

    /// Exact lookup of a lowercase code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Published payment modality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentModality {
    /// Fixed price
    FixedPrice,
    /// Free of charge
    Free,
    /// Price is negotiated
    NegotiationBasis,
}

/// Published usage-policy class of an app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UsagePolicyClass {
    /// Unrestricted usage
    AllowDataUsage,
    /// Usage restricted to a purpose
    PurposeRestrictedDataUsage,
    /// Restricted number of usages
    RestrictedNumberOfUsages,
    /// Usage restricted to a duration
    DurationRestrictedDataUsage,
    /// Usage restricted to an interval
    IntervalRestrictedDataUsage,
    /// Data deleted after use
    UseDataAndDeleteAfter,
    /// Usage logged locally
    LocalLogging,
    /// Usage notified remotely
    RemoteNotification,
    /// Usage restricted to a connector
    ConnectorRestrictedDataUsage,
    /// Usage restricted to a security level
    SecurityLevelRestrictedPolicy,
}

/// Published role of an app endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppEndpointType {
    /// Configuration endpoint
    ConfigEndpoint,
    /// Input endpoint
    InputEndpoint,
    /// Output endpoint
    OutputEndpoint,
    /// Status endpoint
    StatusEndpoint,
    /// Usage-policy endpoint
    UsagePolicyEndpoint,
}
