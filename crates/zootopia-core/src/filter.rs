//! Optional skin-type filtering of a lookup result.

use std::collections::BTreeSet;

use crate::model::AnimalRecord;

/// What the user picked from the skin-type menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkinSelection {
    All,
    Only(String),
}

/// Records split by a selection. `missing` holds records without a skin type
/// (always empty for [`SkinSelection::All`]).
#[derive(Debug, Default)]
pub struct SkinGroups<'a> {
    pub matching: Vec<&'a AnimalRecord>,
    pub missing: Vec<&'a AnimalRecord>,
}

/// Distinct non-blank skin types, sorted.
pub fn unique_skin_types(records: &[AnimalRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(AnimalRecord::skin_type)
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Splits `records` by `selection`, preserving input order within each group.
/// Matching is case-insensitive; records with another skin type are dropped.
pub fn filter_by_skin_type<'a>(records: &'a [AnimalRecord], selection: &SkinSelection) -> SkinGroups<'a> {
    let wanted = match selection {
        SkinSelection::All => {
            return SkinGroups {
                matching: records.iter().collect(),
                missing: Vec::new(),
            }
        }
        SkinSelection::Only(skin) => skin.trim().to_lowercase(),
    };

    let mut groups = SkinGroups::default();
    for record in records {
        match record.skin_type() {
            None => groups.missing.push(record),
            Some(skin) if skin.trim().to_lowercase() == wanted => groups.matching.push(record),
            Some(_) => {}
        }
    }
    groups
}
