//! HTML generation: one card per record, page body, template substitution.
//!
//! Output matches the `cards__item` markup of the bundled template. All
//! record text is escaped; missing fields are simply left out.

mod escape;
mod fields;

pub use escape::esc;
pub use fields::{CardField, CARD_FIELDS};

use crate::filter::{SkinGroups, SkinSelection};
use crate::model::{non_blank, AnimalRecord};

/// Renders one record as a `<li class="cards__item">` card.
///
/// The title block appears only when the name is present; the text block
/// appears only when at least one field line does.
pub fn render_card(record: &AnimalRecord) -> String {
    let mut card = vec![r#"<li class="cards__item">"#.to_string()];

    if let Some(name) = non_blank(record.name.as_deref()) {
        card.push(format!(r#"<div class="card__title">{}</div>"#, esc(name)));
    }

    let lines: Vec<String> = CARD_FIELDS
        .iter()
        .filter_map(|f| {
            f.extract(record)
                .map(|v| format!("<li><strong>{}:</strong> {}</li>", f.label, esc(v)))
        })
        .collect();
    if !lines.is_empty() {
        card.push(r#"<div class="card__text">"#.to_string());
        card.push("<ul>".to_string());
        card.extend(lines);
        card.push("</ul>".to_string());
        card.push("</div>".to_string());
    }

    card.push("</li>".to_string());
    card.join("\n") + "\n"
}

/// Concatenated cards, in the given order.
pub fn render_cards<'a>(records: impl IntoIterator<Item = &'a AnimalRecord>) -> String {
    records.into_iter().map(render_card).collect()
}

/// Informational block shown instead of cards when a lookup found nothing.
pub fn render_not_found(query: &str) -> String {
    format!(
        "<div class=\"not-found\"><h2>No animal found for \"{}\".</h2></div>\n",
        esc(query)
    )
}

/// Page body for an unfiltered lookup: header plus cards, or the not-found block.
pub fn render_results(query: &str, records: &[AnimalRecord]) -> String {
    if records.is_empty() {
        return render_not_found(query);
    }
    let mut out = format!("<h2>Animals matching \"{}\"</h2>\n", esc(query));
    out.push_str(&render_cards(records));
    out
}

/// Page body after a skin-type selection: matching cards, then records
/// with no skin type under their own heading.
pub fn render_filtered(query: &str, selection: &SkinSelection, groups: &SkinGroups<'_>) -> String {
    if groups.matching.is_empty() && groups.missing.is_empty() {
        return render_not_found(query);
    }
    let mut out = String::new();
    match selection {
        SkinSelection::All => {
            out.push_str("<h2>All Animals</h2>\n");
            out.push_str(&render_cards(groups.matching.iter().copied()));
        }
        SkinSelection::Only(skin) => {
            if !groups.matching.is_empty() {
                out.push_str(&format!(
                    "<h2>Matching Animals with {}</h2>\n",
                    esc(capitalize(skin))
                ));
                out.push_str(&render_cards(groups.matching.iter().copied()));
            }
        }
    }
    if !groups.missing.is_empty() {
        out.push_str("<h2 class=\"missing-data\">Animals with Unspecified Skin Type</h2>\n");
        out.push_str(&render_cards(groups.missing.iter().copied()));
    }
    out
}

/// Replaces the first occurrence of `placeholder` in `template` with `content`.
///
/// No occurrence: the template is returned unchanged and a warning is logged.
/// Several occurrences: only the first is replaced and a warning is logged.
pub fn substitute(template: &str, placeholder: &str, content: &str) -> String {
    if placeholder.is_empty() {
        tracing::warn!("empty placeholder token; template left unchanged");
        return template.to_string();
    }
    match template.matches(placeholder).count() {
        0 => {
            tracing::warn!(placeholder, "placeholder not found in template; nothing substituted");
            template.to_string()
        }
        1 => template.replacen(placeholder, content, 1),
        n => {
            tracing::warn!(
                placeholder,
                occurrences = n,
                "placeholder appears more than once; only the first is replaced"
            );
            template.replacen(placeholder, content, 1)
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
