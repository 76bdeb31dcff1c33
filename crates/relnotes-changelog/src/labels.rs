//! Display labels for areas and section names

use std::collections::BTreeMap;

/// Built-in label exceptions for identifiers that are not simply capitalized
pub const LABEL_EXCEPTIONS: &[(&str, &str)] = &[
    ("ir", "IR"),
    ("api", "API"),
    ("xds", "xDS"),
    ("ci-tooling-testing", "CI Tooling Testing"),
];

/// Label an identifier using the built-in exception table
pub fn label_for(identifier: &str) -> String {
    Labeler::new().label(identifier)
}

/// Maps identifiers to display labels.
///
/// Lookup order is configured overrides, then [`LABEL_EXCEPTIONS`], then
/// first-character capitalization.
#[derive(Debug, Clone, Default)]
pub struct Labeler {
    overrides: BTreeMap<String, String>,
}

impl Labeler {
    /// Create a labeler with only the built-in exceptions
    pub fn new() -> Self {
        Self::default()
    }

    /// Add configured label overrides
    pub fn with_overrides(mut self, overrides: BTreeMap<String, String>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    /// Display label for an identifier
    pub fn label(&self, identifier: &str) -> String {
        if let Some(label) = self.overrides.get(identifier) {
            return label.clone();
        }

        LABEL_EXCEPTIONS
            .iter()
            .find(|(key, _)| *key == identifier)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| capitalize_first(identifier))
    }
}

/// Uppercase the first character, leave the rest untouched
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exceptions() {
        assert_eq!(label_for("ir"), "IR");
        assert_eq!(label_for("api"), "API");
        assert_eq!(label_for("xds"), "xDS");
        assert_eq!(label_for("ci-tooling-testing"), "CI Tooling Testing");
    }

    #[test]
    fn test_fallback_capitalizes_first_letter_only() {
        assert_eq!(label_for("routing"), "Routing");
        assert_eq!(label_for("bug fixes"), "Bug fixes");
        assert_eq!(label_for("translator-gatewayAPI"), "Translator-gatewayAPI");
        assert_eq!(label_for("Helm"), "Helm");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(label_for("API"), "API");
        assert_eq!(label_for("Xds"), "Xds");
    }

    #[test]
    fn test_empty_identifier() {
        assert_eq!(label_for(""), "");
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = BTreeMap::from([
            ("grpc".to_string(), "gRPC".to_string()),
            ("api".to_string(), "Gateway API".to_string()),
        ]);
        let labeler = Labeler::new().with_overrides(overrides);

        assert_eq!(labeler.label("grpc"), "gRPC");
        assert_eq!(labeler.label("api"), "Gateway API");
        assert_eq!(labeler.label("xds"), "xDS");
        assert_eq!(labeler.label("docs"), "Docs");
    }
}
