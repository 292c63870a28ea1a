use crate::error::{ApiSemverError, Result};
use regex::Regex;

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pattern: String,
    matcher: Regex,
}

impl TagPattern {
    /// Compile a tag pattern. The pattern must contain exactly one `{version}` placeholder.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.matches("{version}").count() != 1 {
            return Err(ApiSemverError::config(format!(
                "Tag pattern '{}' must contain exactly one {{version}} placeholder",
                pattern
            )));
        }

        // Escape everything, then open up the placeholder as a capture group
        let escaped = regex::escape(&pattern);
        let regex_pattern = escaped.replace(r"\{version\}", r"(.+)");
        let matcher = Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| ApiSemverError::config(format!("Invalid tag pattern: {}", e)))?;

        Ok(TagPattern { pattern, matcher })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version="1.2.3" -> "v1.2.3"
    pub fn format(&self, version: &str) -> String {
        self.pattern.replace("{version}", version)
    }

    /// Version part of a tag, or `None` if the tag does not match this pattern.
    /// The extracted text is not validated here.
    pub fn extract_version<'a>(&self, tag: &'a str) -> Option<&'a str> {
        self.matcher
            .captures(tag)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_format() {
        let pattern = TagPattern::new("v{version}").unwrap();
        assert_eq!(pattern.format("1.2.3"), "v1.2.3");
    }

    #[test]
    fn test_pattern_format_with_suffix() {
        let pattern = TagPattern::new("release-{version}").unwrap();
        assert_eq!(pattern.format("1.2.3"), "release-1.2.3");
    }

    #[test]
    fn test_extract_version() {
        let pattern = TagPattern::new("v{version}").unwrap();
        assert_eq!(pattern.extract_version("v1.2.3"), Some("1.2.3"));
        assert_eq!(pattern.extract_version("v2.0.0-rc.1+b5"), Some("2.0.0-rc.1+b5"));
        assert_eq!(pattern.extract_version("release-1.2.3"), None);
        assert_eq!(pattern.extract_version("v"), None);
    }

    #[test]
    fn test_extract_version_escapes_literal_text() {
        let pattern = TagPattern::new("pkg.core@{version}").unwrap();
        assert_eq!(pattern.extract_version("pkg.core@1.0.0"), Some("1.0.0"));
        assert_eq!(pattern.extract_version("pkgxcore@1.0.0"), None);
    }

    #[test]
    fn test_bare_version_pattern() {
        let pattern = TagPattern::new("{version}").unwrap();
        assert_eq!(pattern.extract_version("1.0.0"), Some("1.0.0"));
    }

    #[test]
    fn test_pattern_requires_single_placeholder() {
        assert!(TagPattern::new("v-latest").is_err());
        assert!(TagPattern::new("{version}-{version}").is_err());
    }
}
