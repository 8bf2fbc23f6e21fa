//! Result activation
//!
//! Decides what selecting a result means. Navigation itself belongs to the
//! consumer; this only classifies the record's link.

use url::Url;

use crate::models::SearchRecord;

/// Protocols treated as external links. Anything else stays in-app.
const EXTERNAL_SCHEMES: &[&str] = &["http", "https"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Absolute web link, usually opened in a new tab
    External(Url),
    /// In-app route such as `/help/articles/ref-1`
    Internal(String),
    /// No link: show the record inline by id
    Detail(String),
}

impl Activation {
    pub fn for_record(record: &SearchRecord) -> Self {
        let Some(link) = record.url.as_deref().map(str::trim).filter(|l| !l.is_empty()) else {
            return Activation::Detail(record.id.clone());
        };

        match Url::parse(link) {
            Ok(url) if EXTERNAL_SCHEMES.contains(&url.scheme()) => Activation::External(url),
            _ => Activation::Internal(link.to_string()),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Activation::External(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::RecordType;

    fn record(url: Option<&str>) -> SearchRecord {
        SearchRecord {
            id: "resource:kit".into(),
            title: "Kit".into(),
            content: String::new(),
            category: String::new(),
            record_type: RecordType::Resource,
            tags: Vec::new(),
            last_updated: String::new(),
            views: None,
            helpful: None,
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_https_is_external() {
        let activation = Activation::for_record(&record(Some("https://cdn.example.com/kit.zip")));
        assert!(activation.is_external());
        if let Activation::External(url) = activation {
            assert_eq!(url.host_str(), Some("cdn.example.com"));
        }
    }

    #[test]
    fn test_relative_path_is_internal() {
        assert_eq!(
            Activation::for_record(&record(Some("/help/articles/ref-1"))),
            Activation::Internal("/help/articles/ref-1".into())
        );
    }

    #[test]
    fn test_other_scheme_is_internal() {
        assert_eq!(
            Activation::for_record(&record(Some("mailto:partners@example.com"))),
            Activation::Internal("mailto:partners@example.com".into())
        );
    }

    #[test]
    fn test_missing_or_blank_link_is_detail() {
        assert_eq!(Activation::for_record(&record(None)), Activation::Detail("resource:kit".into()));
        assert_eq!(Activation::for_record(&record(Some("  "))), Activation::Detail("resource:kit".into()));
    }
}
