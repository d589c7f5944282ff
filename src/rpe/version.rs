//! Schema version numbers of the RPE chart format.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// Chart schema version as stored in `META.RPEVersion`.
///
/// RPE writes this as a plain number, but charts edited by hand or by
/// other tools sometimes carry it as a numeric string. Both forms are
/// accepted on read; it is always written back as a number. A value that
/// is neither means the document is not an RPE chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RpeVersion(i64);

impl RpeVersion {
    /// Creates a version from its raw number.
    #[inline]
    #[must_use]
    pub const fn new(version: i64) -> Self {
        Self(version)
    }

    /// Gets the raw version number.
    #[inline]
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// The editor release line that saves charts with this version.
    #[must_use]
    pub const fn editor_version(self) -> EditorVersion {
        if self.0 >= 113 {
            EditorVersion::V12OrNewer
        } else if self.0 >= 105 {
            EditorVersion::V11
        } else {
            EditorVersion::V10OrOlder
        }
    }
}

impl fmt::Display for RpeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for RpeVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for RpeVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl de::Visitor<'_> for VersionVisitor {
            type Value = RpeVersion;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a version number or a numeric string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(RpeVersion(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(RpeVersion(v as i64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                if v.is_finite() {
                    Ok(RpeVersion(v as i64))
                } else {
                    Err(E::invalid_value(de::Unexpected::Float(v), &self))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .map(|n| RpeVersion(n as i64))
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(VersionVisitor)
    }
}

/// Editor release lines, shown to the user next to the raw version
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EditorVersion {
    /// `RPEVersion` below 105.
    V10OrOlder,
    /// `RPEVersion` in `105..113`.
    V11,
    /// `RPEVersion` of 113 and above.
    V12OrNewer,
}

impl fmt::Display for EditorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::V10OrOlder => "v1.0 or older",
            Self::V11 => "v1.1",
            Self::V12OrNewer => "v1.2 or newer",
        })
    }
}

/// Schema versions a chart can be downgraded to.
///
/// Fields arrived in the format in batches at 105 and 113, so these are
/// the only version numbers a downgrade can meaningfully land on. The set
/// is closed on purpose: there is no schema between two neighbors for an
/// in-between number to mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TargetVersion {
    /// The baseline schema.
    V100,
    /// Adds per-event easing overrides and the extended judge line
    /// fields.
    V105,
    /// Adds the judge line control curves.
    V113,
}

impl TargetVersion {
    /// All targets, oldest first.
    pub const ALL: [Self; 3] = [Self::V100, Self::V105, Self::V113];

    /// The `META.RPEVersion` number this target stands for.
    #[must_use]
    pub const fn number(self) -> i64 {
        match self {
            Self::V100 => 100,
            Self::V105 => 105,
            Self::V113 => 113,
        }
    }

    /// This target as an [`RpeVersion`].
    #[must_use]
    pub const fn version(self) -> RpeVersion {
        RpeVersion::new(self.number())
    }

    /// Targets that are not newer than `source`, oldest first.
    pub fn selectable(source: RpeVersion) -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(move |target| target.number() <= source.as_i64())
    }

    /// Default pick when offering [`selectable`](Self::selectable)
    /// targets to the user: the oldest one. `None` when the chart is
    /// older than every target.
    #[must_use]
    pub fn default_for(source: RpeVersion) -> Option<Self> {
        Self::selectable(source).next()
    }
}

impl fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Error for converting a raw number into a [`TargetVersion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("no downgrade target with version number {0}")]
pub struct UnknownTargetVersion(pub i64);

impl TryFrom<i64> for TargetVersion {
    type Error = UnknownTargetVersion;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|target| target.number() == value)
            .ok_or(UnknownTargetVersion(value))
    }
}

#[test]
fn editor_version_boundaries() {
    assert_eq!(
        RpeVersion::new(104).editor_version(),
        EditorVersion::V10OrOlder
    );
    assert_eq!(RpeVersion::new(105).editor_version(), EditorVersion::V11);
    assert_eq!(RpeVersion::new(112).editor_version(), EditorVersion::V11);
    assert_eq!(
        RpeVersion::new(113).editor_version(),
        EditorVersion::V12OrNewer
    );
    assert_eq!(
        RpeVersion::new(150).editor_version(),
        EditorVersion::V12OrNewer
    );
}

#[test]
fn selectable_targets_exclude_newer_ones() {
    let selectable: Vec<_> = TargetVersion::selectable(RpeVersion::new(110)).collect();
    assert_eq!(selectable, vec![TargetVersion::V100, TargetVersion::V105]);

    assert_eq!(
        TargetVersion::default_for(RpeVersion::new(110)),
        Some(TargetVersion::V100)
    );
    assert_eq!(TargetVersion::default_for(RpeVersion::new(99)), None);
    assert_eq!(
        TargetVersion::selectable(RpeVersion::new(99)).count(),
        0
    );
}

#[test]
fn target_version_from_number() {
    assert_eq!(TargetVersion::try_from(105), Ok(TargetVersion::V105));
    assert_eq!(TargetVersion::try_from(104), Err(UnknownTargetVersion(104)));
}
