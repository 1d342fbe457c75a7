//! Diff engine.
//!
//! Compares two vault secret collections by name and classifies every
//! difference. Pure function over immutable inputs; output items borrow the
//! input records rather than copying them.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::secret::SecretRecord;
use crate::error::{Error, Result};

/// Which diff categories to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComparisonMode {
    /// Presence differences plus every common-name pair, modified or not.
    All,
    /// Only presence differences; common names are not compared at all.
    OnlyMissing,
    /// Only common-name pairs with at least one property difference.
    OnlyModified,
}

impl ComparisonMode {
    fn includes_missing(self) -> bool {
        matches!(self, Self::All | Self::OnlyMissing)
    }

    fn includes_common(self) -> bool {
        matches!(self, Self::All | Self::OnlyModified)
    }
}

impl FromStr for ComparisonMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "only-missing" => Ok(Self::OnlyMissing),
            "only-modified" => Ok(Self::OnlyModified),
            other => Err(Error::InvalidComparisonMode(other.to_string())),
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::OnlyMissing => "only-missing",
            Self::OnlyModified => "only-modified",
        };
        f.write_str(s)
    }
}

/// Which input collection a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// Classification of a single compared name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiffType {
    /// Name exists only in the left vault.
    LeftOnly,
    /// Name exists only in the right vault.
    RightOnly,
    /// Name exists on both sides with differing properties.
    Modified,
    /// Name exists on both sides with identical properties.
    Unmodified,
}

/// One differing property of a common-name pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffProperty {
    pub property_name: &'static str,
    pub left_value: Option<String>,
    pub right_value: Option<String>,
}

/// One classified outcome of comparing the two collections for a single name.
///
/// Exactly one of `left`/`right` is absent for presence differences; both are
/// present otherwise. `differences` is non-empty only for `Modified`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffItem<'a> {
    #[serde(rename = "type")]
    pub diff_type: DiffType,
    pub left: Option<&'a SecretRecord>,
    pub right: Option<&'a SecretRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub differences: Vec<DiffProperty>,
}

impl DiffItem<'_> {
    /// Name this item sorts under: the left record's name when present,
    /// otherwise the right's.
    pub fn sort_key(&self) -> &str {
        match (self.left, self.right) {
            (Some(s), _) | (None, Some(s)) => &s.name,
            (None, None) => "",
        }
    }
}

/// Compare two secret collections and return the ordered list of differences.
///
/// Records are matched by exact, case-sensitive name. Property comparisons
/// are exact string equality with no normalization; an absent `content_type`
/// is distinct from an empty one. The result is sorted ascending by each
/// item's [`sort_key`](DiffItem::sort_key) using ordinal comparison, and the
/// sort is stable.
///
/// # Errors
///
/// Returns [`Error::AmbiguousMatch`] if either side contains two records with
/// the same name. Duplicates would make the common-name pairing ambiguous, so
/// they are rejected before any comparison happens.
pub fn diff<'a>(
    left: &'a [SecretRecord],
    right: &'a [SecretRecord],
    mode: ComparisonMode,
) -> Result<Vec<DiffItem<'a>>> {
    let left_by_name = index_by_name(left, Side::Left)?;
    let right_by_name = index_by_name(right, Side::Right)?;

    let mut items = Vec::new();

    if mode.includes_missing() {
        for record in left.iter().filter(|r| !right_by_name.contains_key(r.name.as_str())) {
            items.push(DiffItem {
                diff_type: DiffType::LeftOnly,
                left: Some(record),
                right: None,
                differences: Vec::new(),
            });
        }
        for record in right.iter().filter(|r| !left_by_name.contains_key(r.name.as_str())) {
            items.push(DiffItem {
                diff_type: DiffType::RightOnly,
                left: None,
                right: Some(record),
                differences: Vec::new(),
            });
        }
    }

    if mode.includes_common() {
        for l in left {
            let Some(&r) = right_by_name.get(l.name.as_str()) else {
                continue;
            };

            let differences = property_differences(l, r);
            if differences.is_empty() && mode == ComparisonMode::OnlyModified {
                continue;
            }

            items.push(DiffItem {
                diff_type: if differences.is_empty() {
                    DiffType::Unmodified
                } else {
                    DiffType::Modified
                },
                left: Some(l),
                right: Some(r),
                differences,
            });
        }
    }

    items.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));

    Ok(items)
}

/// Index a collection by name, rejecting duplicates.
fn index_by_name(records: &[SecretRecord], side: Side) -> Result<HashMap<&str, &SecretRecord>> {
    let mut by_name = HashMap::with_capacity(records.len());
    for record in records {
        if by_name.insert(record.name.as_str(), record).is_some() {
            return Err(Error::AmbiguousMatch {
                side,
                name: record.name.clone(),
            });
        }
    }
    Ok(by_name)
}

/// Collect the property-level differences of a common-name pair.
///
/// New compared properties only need another `compare` line here; the
/// classification logic above never changes.
fn property_differences(left: &SecretRecord, right: &SecretRecord) -> Vec<DiffProperty> {
    let mut differences = Vec::new();

    compare(
        "Value",
        Some(left.value.as_str()),
        Some(right.value.as_str()),
        &mut differences,
    );
    compare(
        "ContentType",
        left.content_type.as_deref(),
        right.content_type.as_deref(),
        &mut differences,
    );

    differences
}

fn compare(
    property_name: &'static str,
    left: Option<&str>,
    right: Option<&str>,
    differences: &mut Vec<DiffProperty>,
) {
    if left != right {
        differences.push(DiffProperty {
            property_name,
            left_value: left.map(str::to_owned),
            right_value: right.map(str::to_owned),
        });
    }
}
