/// Inclusion policy for extracted declarations
///
/// The skip-lists are static tables so the whole policy can be read (and
/// tested) in one place instead of being scattered through the walkers.
use crate::extractors::base::Modifiers;

/// Why a declaration was left out of a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    /// Logger handles carry no structural information
    LoggingNoise,
    /// `Object` overrides present on nearly every class
    ObjectBoilerplate,
    /// Only `public` methods and constructors are part of the surface
    NotPublic,
}

impl ExclusionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExclusionReason::LoggingNoise => "logging noise",
            ExclusionReason::ObjectBoilerplate => "object boilerplate",
            ExclusionReason::NotPublic => "not public",
        }
    }
}

/// Field names dropped wherever they appear (exact, case-sensitive)
pub const SKIPPED_FIELD_NAMES: &[(&str, ExclusionReason)] =
    &[("logger", ExclusionReason::LoggingNoise)];

/// Method names dropped regardless of signature or visibility
pub const SKIPPED_METHOD_NAMES: &[(&str, ExclusionReason)] = &[
    ("toString", ExclusionReason::ObjectBoilerplate),
    ("equals", ExclusionReason::ObjectBoilerplate),
    ("hashCode", ExclusionReason::ObjectBoilerplate),
];

/// A superclass whose name contains one of these marks the class as excluded
pub const THROWABLE_MARKERS: &[&str] = &["Exception", "Error"];

fn lookup(table: &[(&str, ExclusionReason)], name: &str) -> Option<ExclusionReason> {
    table
        .iter()
        .find(|(skipped, _)| *skipped == name)
        .map(|(_, reason)| *reason)
}

pub fn field_exclusion(name: &str) -> Option<ExclusionReason> {
    lookup(SKIPPED_FIELD_NAMES, name)
}

pub fn method_exclusion(name: &str, modifiers: &Modifiers) -> Option<ExclusionReason> {
    lookup(SKIPPED_METHOD_NAMES, name).or_else(|| constructor_exclusion(modifiers))
}

pub fn constructor_exclusion(modifiers: &Modifiers) -> Option<ExclusionReason> {
    if modifiers.is_public() {
        None
    } else {
        Some(ExclusionReason::NotPublic)
    }
}

/// Exception/error hierarchies are shown as headers only
///
/// Only the superclass name is checked; type arguments such as the
/// `IOException` in `Base<IOException>` do not count.
pub fn is_throwable_superclass(superclass: &str) -> bool {
    let name = superclass
        .split_once('<')
        .map_or(superclass, |(name, _)| name);
    THROWABLE_MARKERS.iter().any(|marker| name.contains(marker))
}
