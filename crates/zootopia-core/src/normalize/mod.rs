//! Raw lookup records → [`AnimalRecord`].
//!
//! Extraction is per field and tolerant: missing keys become `None`, unknown
//! keys are ignored. A record whose shape is wrong (not an object, a nested
//! section that is not an object, a list that is not strings) is skipped with
//! a warning; the rest of the batch is still processed, in input order.

mod error;
mod fields;

pub use error::NormalizeError;

use serde_json::{Map, Value};

use crate::fetcher::RawRecord;
use crate::model::{AnimalRecord, Characteristics, Taxonomy};
use fields::{object, string_list, text, text_any};

/// Successfully normalized records plus the per-record failures that were skipped.
#[derive(Debug, Default)]
pub struct Normalized {
    pub records: Vec<AnimalRecord>,
    /// (input index, reason) for every skipped element.
    pub skipped: Vec<(usize, NormalizeError)>,
}

/// Normalizes a batch. Output order follows input order minus skipped items.
pub fn normalize_records(raw: &[RawRecord]) -> Normalized {
    let mut out = Normalized {
        records: Vec::with_capacity(raw.len()),
        skipped: Vec::new(),
    };
    for (idx, item) in raw.iter().enumerate() {
        match normalize_record(item) {
            Ok(record) => out.records.push(record),
            Err(e) => {
                tracing::warn!(index = idx, "skipping animal record: {}", e);
                out.skipped.push((idx, e));
            }
        }
    }
    out
}

/// Normalizes one raw element.
pub fn normalize_record(raw: &RawRecord) -> Result<AnimalRecord, NormalizeError> {
    let map = raw.as_object().ok_or(NormalizeError::NotAnObject {
        found: fields::kind(raw),
    })?;

    let taxonomy = match object(map, "taxonomy")? {
        Some(t) => taxonomy_from(t)?,
        None => Taxonomy::default(),
    };
    let characteristics = match object(map, "characteristics")? {
        Some(c) => characteristics_from(c)?,
        None => Characteristics::default(),
    };

    Ok(AnimalRecord {
        name: text(map, "name")?,
        taxonomy,
        locations: string_list(map, "locations")?,
        characteristics,
    })
}

fn taxonomy_from(t: &Map<String, Value>) -> Result<Taxonomy, NormalizeError> {
    Ok(Taxonomy {
        kingdom: text(t, "kingdom")?,
        phylum: text(t, "phylum")?,
        class_name: text(t, "class")?,
        order: text(t, "order")?,
        family: text(t, "family")?,
        genus: text(t, "genus")?,
        scientific_name: text(t, "scientific_name")?,
    })
}

fn characteristics_from(c: &Map<String, Value>) -> Result<Characteristics, NormalizeError> {
    Ok(Characteristics {
        most_distinctive_feature: text_any(c, &["most_distinctive_feature", "distinctive_feature"])?,
        temperament: text(c, "temperament")?,
        training: text(c, "training")?,
        diet: text(c, "diet")?,
        average_litter_size: text(c, "average_litter_size")?,
        r#type: text(c, "type")?,
        common_name: text(c, "common_name")?,
        slogan: text(c, "slogan")?,
        group: text(c, "group")?,
        color: text(c, "color")?,
        skin_type: text(c, "skin_type")?,
        lifespan: text(c, "lifespan")?,
        prey: text_any(c, &["prey", "main_prey"])?,
        name_of_young: text(c, "name_of_young")?,
        habitat: text(c, "habitat")?,
        predators: text(c, "predators")?,
        lifestyle: text(c, "lifestyle")?,
        favorite_food: text(c, "favorite_food")?,
        top_speed: text(c, "top_speed")?,
        weight: text(c, "weight")?,
        height: text(c, "height")?,
        length: text(c, "length")?,
        group_behavior: text(c, "group_behavior")?,
        estimated_population_size: text(c, "estimated_population_size")?,
        biggest_threat: text(c, "biggest_threat")?,
        gestation_period: text(c, "gestation_period")?,
        number_of_species: text(c, "number_of_species")?,
        age_of_sexual_maturity: text(c, "age_of_sexual_maturity")?,
        age_of_weaning: text(c, "age_of_weaning")?,
    })
}
