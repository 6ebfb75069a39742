//! Normalized animal record: taxonomy, free-form characteristics, locations.
//!
//! Every field is independently optional. A record with nothing filled in is
//! still a valid record and renders as an empty card.

/// Scientific classification. `class` is stored as `class_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    pub kingdom: Option<String>,
    pub phylum: Option<String>,
    pub class_name: Option<String>,
    pub order: Option<String>,
    pub family: Option<String>,
    pub genus: Option<String>,
    pub scientific_name: Option<String>,
}

/// Descriptive attributes supplied by the lookup service. Keys the service
/// omits stay `None`; keys it sends that are not listed here are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Characteristics {
    pub most_distinctive_feature: Option<String>,
    pub temperament: Option<String>,
    pub training: Option<String>,
    pub diet: Option<String>,
    pub average_litter_size: Option<String>,
    pub r#type: Option<String>,
    pub common_name: Option<String>,
    pub slogan: Option<String>,
    pub group: Option<String>,
    pub color: Option<String>,
    pub skin_type: Option<String>,
    pub lifespan: Option<String>,
    pub prey: Option<String>,
    pub name_of_young: Option<String>,
    pub habitat: Option<String>,
    pub predators: Option<String>,
    pub lifestyle: Option<String>,
    pub favorite_food: Option<String>,
    pub top_speed: Option<String>,
    pub weight: Option<String>,
    pub height: Option<String>,
    pub length: Option<String>,
    pub group_behavior: Option<String>,
    pub estimated_population_size: Option<String>,
    pub biggest_threat: Option<String>,
    pub gestation_period: Option<String>,
    pub number_of_species: Option<String>,
    pub age_of_sexual_maturity: Option<String>,
    pub age_of_weaning: Option<String>,
}

/// One animal as rendered on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalRecord {
    pub name: Option<String>,
    pub taxonomy: Taxonomy,
    pub locations: Vec<String>,
    pub characteristics: Characteristics,
}

impl AnimalRecord {
    /// Record with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Skin type, if present and non-blank.
    pub fn skin_type(&self) -> Option<&str> {
        non_blank(self.characteristics.skin_type.as_deref())
    }
}

/// Treats whitespace-only strings like missing values.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
