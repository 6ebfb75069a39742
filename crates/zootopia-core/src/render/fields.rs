//! Ordered table of card lines. A line is emitted only when its accessor
//! yields a non-blank value; the table order is the on-page order.

use crate::model::{non_blank, AnimalRecord};

/// One labelled line on a card.
pub struct CardField {
    pub label: &'static str,
    pub value: fn(&AnimalRecord) -> Option<String>,
}

impl CardField {
    pub fn extract(&self, record: &AnimalRecord) -> Option<String> {
        (self.value)(record)
    }
}

fn present(v: &Option<String>) -> Option<String> {
    non_blank(v.as_deref()).map(str::to_string)
}

fn locations(r: &AnimalRecord) -> Option<String> {
    let parts: Vec<&str> = r
        .locations
        .iter()
        .map(|l| l.as_str())
        .filter(|l| !l.trim().is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Card lines in display order: primary fields, secondary descriptive fields, taxonomy ranks.
pub static CARD_FIELDS: &[CardField] = &[
    CardField { label: "Scientific Name", value: |r| present(&r.taxonomy.scientific_name) },
    CardField { label: "Type", value: |r| present(&r.characteristics.r#type) },
    CardField { label: "Skin Type", value: |r| present(&r.characteristics.skin_type) },
    CardField { label: "Location(s)", value: locations },
    CardField { label: "Habitat", value: |r| present(&r.characteristics.habitat) },
    CardField { label: "Diet", value: |r| present(&r.characteristics.diet) },
    CardField { label: "Prey", value: |r| present(&r.characteristics.prey) },
    CardField { label: "Predators", value: |r| present(&r.characteristics.predators) },
    CardField {
        label: "Distinctive Features",
        value: |r| present(&r.characteristics.most_distinctive_feature),
    },
    CardField { label: "Temperament", value: |r| present(&r.characteristics.temperament) },
    CardField { label: "Offspring Name", value: |r| present(&r.characteristics.name_of_young) },
    // secondary
    CardField { label: "Common Name", value: |r| present(&r.characteristics.common_name) },
    CardField { label: "Group", value: |r| present(&r.characteristics.group) },
    CardField { label: "Lifestyle", value: |r| present(&r.characteristics.lifestyle) },
    CardField { label: "Color", value: |r| present(&r.characteristics.color) },
    CardField { label: "Lifespan", value: |r| present(&r.characteristics.lifespan) },
    CardField { label: "Weight", value: |r| present(&r.characteristics.weight) },
    CardField { label: "Height", value: |r| present(&r.characteristics.height) },
    CardField { label: "Length", value: |r| present(&r.characteristics.length) },
    CardField { label: "Top Speed", value: |r| present(&r.characteristics.top_speed) },
    CardField { label: "Favorite Food", value: |r| present(&r.characteristics.favorite_food) },
    CardField {
        label: "Average Litter Size",
        value: |r| present(&r.characteristics.average_litter_size),
    },
    CardField {
        label: "Gestation Period",
        value: |r| present(&r.characteristics.gestation_period),
    },
    CardField {
        label: "Age of Sexual Maturity",
        value: |r| present(&r.characteristics.age_of_sexual_maturity),
    },
    CardField { label: "Age of Weaning", value: |r| present(&r.characteristics.age_of_weaning) },
    CardField { label: "Group Behavior", value: |r| present(&r.characteristics.group_behavior) },
    CardField {
        label: "Estimated Population Size",
        value: |r| present(&r.characteristics.estimated_population_size),
    },
    CardField { label: "Biggest Threat", value: |r| present(&r.characteristics.biggest_threat) },
    CardField {
        label: "Number of Species",
        value: |r| present(&r.characteristics.number_of_species),
    },
    CardField { label: "Training", value: |r| present(&r.characteristics.training) },
    CardField { label: "Slogan", value: |r| present(&r.characteristics.slogan) },
    // taxonomy ranks
    CardField { label: "Kingdom", value: |r| present(&r.taxonomy.kingdom) },
    CardField { label: "Phylum", value: |r| present(&r.taxonomy.phylum) },
    CardField { label: "Class", value: |r| present(&r.taxonomy.class_name) },
    CardField { label: "Order", value: |r| present(&r.taxonomy.order) },
    CardField { label: "Family", value: |r| present(&r.taxonomy.family) },
    CardField { label: "Genus", value: |r| present(&r.taxonomy.genus) },
];
