use std::collections::HashSet;
use std::fmt;

use crate::models::Feature;

/// A structural problem found in the feature section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    NoFeatures,
    MissingTitle { id: String },
    EmptyBody { id: String },
    DuplicateId { id: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFeatures => write!(f, "no features found in section"),
            Self::MissingTitle { id } => write!(f, "feature {} is missing a title", id),
            Self::EmptyBody { id } => write!(f, "feature {} has empty content", id),
            Self::DuplicateId { id } => write!(f, "duplicate feature id {}", id),
        }
    }
}

/// Check segmented features for missing titles, empty bodies and duplicate ids.
///
/// Issues are advisory. Processing still produces output for them.
pub fn validate_features(features: &[Feature]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if features.is_empty() {
        issues.push(ValidationIssue::NoFeatures);
        return issues;
    }

    let mut seen = HashSet::new();
    for feature in features {
        if feature.name.trim().is_empty() {
            issues.push(ValidationIssue::MissingTitle {
                id: feature.id.clone(),
            });
        }
        if feature.raw.trim().is_empty() {
            issues.push(ValidationIssue::EmptyBody {
                id: feature.id.clone(),
            });
        }
        if !seen.insert(feature.id.as_str()) {
            issues.push(ValidationIssue::DuplicateId {
                id: feature.id.clone(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(id: &str, name: &str, raw: &str) -> Feature {
        let mut feature = Feature::new(id, name);
        feature.raw = raw.to_string();
        feature
    }

    #[test]
    fn test_clean_features() {
        let features = vec![feature("F1", "Signup", "body"), feature("F2", "Login", "body")];
        assert!(validate_features(&features).is_empty());
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(validate_features(&[]), vec![ValidationIssue::NoFeatures]);
    }

    #[test]
    fn test_reports_each_problem() {
        let features = vec![
            feature("F1", "Signup", "body"),
            feature("F2", "", "body"),
            feature("F1", "Again", "  \n "),
        ];
        assert_eq!(
            validate_features(&features),
            vec![
                ValidationIssue::MissingTitle { id: "F2".to_string() },
                ValidationIssue::EmptyBody { id: "F1".to_string() },
                ValidationIssue::DuplicateId { id: "F1".to_string() },
            ]
        );
    }

    #[test]
    fn test_display() {
        let issue = ValidationIssue::EmptyBody { id: "F3".to_string() };
        assert_eq!(issue.to_string(), "feature F3 has empty content");
    }
}
