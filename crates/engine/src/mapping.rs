//! Mapping of entity attributes onto protocol vocabularies
//!
//! Entities store what users typed; documents carry closed vocabularies.
//! Every mapping here is total: unknown input falls back to a default
//! instead of failing the build.

use unicode_normalization::UnicodeNormalization;
use url::Url;

use dataspace_core::{
    AppEndpointType, EndpointType, Language, PaymentMethod, PaymentModality, PolicyPattern,
    TypedLiteral, UsagePolicyClass,
};

/// Canonical form of a language tag: NFC, trimmed, lowercase primary subtag
///
/// `"EN-us"` → `"en"`, `" De "` → `"de"`.
pub fn normalize_language_tag(raw: &str) -> String {
    let normalized: String = raw.nfc().collect::<String>().trim().to_lowercase();
    normalized
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Language of a user-entered tag, or `default` if unknown
pub fn language(raw: &str, default: Language) -> Language {
    Language::from_code(&normalize_language_tag(raw)).unwrap_or(default)
}

/// Literals for each keyword, all in the same language
pub fn keywords(keywords: &[String], language: Language) -> Vec<TypedLiteral> {
    keywords
        .iter()
        .map(|keyword| TypedLiteral::new(keyword.as_str(), language))
        .collect()
}

/// Published payment modality; `Undefined` is omitted
pub fn payment_modality(method: PaymentMethod) -> Option<PaymentModality> {
    match method {
        PaymentMethod::Undefined => None,
        PaymentMethod::FixedPrice => Some(PaymentModality::FixedPrice),
        PaymentMethod::Free => Some(PaymentModality::Free),
        PaymentMethod::NegotiationBasis => Some(PaymentModality::NegotiationBasis),
    }
}

/// Published role of an endpoint
pub fn endpoint_type(kind: EndpointType) -> AppEndpointType {
    match kind {
        EndpointType::Config => AppEndpointType::ConfigEndpoint,
        EndpointType::Input => AppEndpointType::InputEndpoint,
        EndpointType::Output => AppEndpointType::OutputEndpoint,
        EndpointType::Status => AppEndpointType::StatusEndpoint,
        EndpointType::UsagePolicy => AppEndpointType::UsagePolicyEndpoint,
    }
}

/// Published usage-policy class of a supported pattern
pub fn usage_policy_class(pattern: PolicyPattern) -> UsagePolicyClass {
    match pattern {
        PolicyPattern::ProvideAccess => UsagePolicyClass::AllowDataUsage,
        PolicyPattern::ProhibitAccess => UsagePolicyClass::PurposeRestrictedDataUsage,
        PolicyPattern::NTimesUsage => UsagePolicyClass::RestrictedNumberOfUsages,
        PolicyPattern::DurationUsage => UsagePolicyClass::DurationRestrictedDataUsage,
        PolicyPattern::UsageDuringInterval => UsagePolicyClass::IntervalRestrictedDataUsage,
        PolicyPattern::UsageUntilDeletion => UsagePolicyClass::UseDataAndDeleteAfter,
        PolicyPattern::UsageLogging => UsagePolicyClass::LocalLogging,
        PolicyPattern::UsageNotification => UsagePolicyClass::RemoteNotification,
        PolicyPattern::ConnectorRestrictedUsage => UsagePolicyClass::ConnectorRestrictedDataUsage,
        PolicyPattern::SecurityProfileRestrictedUsage => {
            UsagePolicyClass::SecurityLevelRestrictedPolicy
        }
    }
}

/// Usage-policy classes in the order the patterns were stored
pub fn usage_policy_classes(patterns: &[PolicyPattern]) -> Vec<UsagePolicyClass> {
    patterns.iter().copied().map(usage_policy_class).collect()
}

/// Absolute access URL of an endpoint location, or `fallback`
pub fn access_url(location: &str, fallback: &Url) -> Url {
    Url::parse(location.trim()).unwrap_or_else(|_| fallback.clone())
}

/// Lowercase hex rendering of a CRC32 checksum
pub fn checksum_hex(checksum: u32) -> String {
    format!("{:08x}", checksum)
}
