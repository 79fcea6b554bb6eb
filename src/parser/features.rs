use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Feature;

/// `### N.M Title` sub-heading.
static FEATURE_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^###[ ]+([0-9]+\.[0-9]+)[ ]+(.+)$").expect("valid regex")
});

/// Split a section into features, one per `### N.M Title` sub-heading.
///
/// A numeral whose major part equals `section` loses that part to form the id, so
/// `### 6.3 Login Flow` in section 6 becomes `F3`. Lines before the first
/// sub-heading are ignored. Features come back in document order, each with
/// an empty task list.
pub fn segment_features(section_text: &str, section: u32) -> Vec<Feature> {
    let mut features = Vec::new();
    let mut current: Option<(Feature, Vec<&str>)> = None;

    for line in section_text.lines() {
        if let Some(caps) = FEATURE_HEADING.captures(line) {
            if let Some((feature, body)) = current.take() {
                features.push(finish(feature, body));
            }
            let feature = Feature::new(feature_id(&caps[1], section), caps[2].trim());
            current = Some((feature, Vec::new()));
            continue;
        }
        if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }

    if let Some((feature, body)) = current {
        features.push(finish(feature, body));
    }

    tracing::debug!("Segmented {} features", features.len());
    features
}

/// `F<minor>` when the numeral's major part equals `section` by value,
/// otherwise `F<numeral>`.
fn feature_id(numeral: &str, section: u32) -> String {
    match numeral.split_once('.') {
        Some((major, minor)) if major.parse::<u32>().ok() == Some(section) => {
            format!("F{}", minor)
        }
        _ => format!("F{}", numeral),
    }
}

fn finish(mut feature: Feature, body: Vec<&str>) -> Feature {
    feature.raw = body.join("\n");
    feature
}
