use serde::{Deserialize, Serialize};

/// Document title of the landing page
pub const LANDING_TITLE: &str = "SoroScope Dashboard";
/// Content of the description meta tag
pub const LANDING_DESCRIPTION: &str = "Soroban resource profiler dashboard";
/// Primary heading shown in the hero block
pub const LANDING_HEADING: &str = "SoroScope";
/// Secondary line shown under the heading
pub const LANDING_SUBTITLE: &str = "Soroban Resource Profiler – Web Dashboard";

/// Head metadata of a page (title + description meta tag)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Contents of the document <title>
    pub title: String,
    /// Contents of the "description" meta tag
    pub description: String,
}

/// Visible copy of a page (heading + subtitle)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// Primary heading text
    pub heading: String,
    /// Secondary text under the heading
    pub subtitle: String,
}

impl PageMetadata {
    /// Metadata of the landing page. Fixed values, identical on every call.
    pub fn landing() -> Self {
        Self {
            title: LANDING_TITLE.to_string(),
            description: LANDING_DESCRIPTION.to_string(),
        }
    }
}

impl PageContent {
    /// Copy of the landing page. Fixed values, identical on every call.
    pub fn landing() -> Self {
        Self {
            heading: LANDING_HEADING.to_string(),
            subtitle: LANDING_SUBTITLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_metadata_exact_strings() {
        let meta = PageMetadata::landing();
        assert_eq!(meta.title, "SoroScope Dashboard");
        assert_eq!(meta.description, "Soroban resource profiler dashboard");
    }

    #[test]
    fn test_landing_content_exact_strings() {
        let content = PageContent::landing();
        assert_eq!(content.heading, "SoroScope");
        assert_eq!(
            content.subtitle,
            "Soroban Resource Profiler – Web Dashboard"
        );
    }

    #[test]
    fn test_landing_is_idempotent() {
        assert_eq!(PageMetadata::landing(), PageMetadata::landing());
        assert_eq!(PageContent::landing(), PageContent::landing());
    }

    #[test]
    fn test_metadata_wire_shape() {
        let value = serde_json::to_value(PageMetadata::landing()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "SoroScope Dashboard",
                "description": "Soroban resource profiler dashboard",
            })
        );
    }
}
