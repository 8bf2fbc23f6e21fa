//! Search index builder
//!
//! Flattens the host collections and the static FAQ list into one ordered
//! `Vec<SearchRecord>`: featured → categorized articles → resources → FAQs.
//! The projection is pure and never fails; missing fields become empty
//! strings or `None`.

use std::collections::{BTreeMap, HashSet};

use url::form_urlencoded::byte_serialize;

use crate::catalog::FAQ_REVISION_DATE;
use crate::interface::RecordType;
use crate::models::{
    ArticleCategory, DownloadableResource, FaqEntry, FeaturedArticle, SearchRecord,
    SourceCollections,
};

/// Immutable, built once per search surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    records: Vec<SearchRecord>,
}

impl SearchIndex {
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SearchRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Distinct non-empty categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| !r.category.is_empty())
            .filter(|r| seen.insert(r.category.as_str()))
            .map(|r| r.category.clone())
            .collect()
    }

    pub fn type_counts(&self) -> BTreeMap<RecordType, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.record_type).or_insert(0) += 1;
        }
        counts
    }
}

fn escape(part: &str) -> String {
    byte_serialize(part.as_bytes()).collect()
}

/// Namespaced id: `namespace:escaped-id`, or `namespace#position` for a blank
/// id. Escaping keeps `:` and `#` out of the parts, so two different sources
/// can never produce the same id.
fn record_id(namespace: &str, id: &str, position: usize) -> String {
    match id.trim() {
        "" => format!("{namespace}#{position}"),
        id => format!("{namespace}:{}", escape(id)),
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn from_featured(position: usize, article: &FeaturedArticle) -> SearchRecord {
    SearchRecord {
        id: record_id("featured", &article.id, position),
        title: article.title.clone(),
        content: article.excerpt.clone(),
        category: article.category.clone(),
        record_type: RecordType::Featured,
        tags: Vec::new(),
        last_updated: article.last_updated.clone(),
        views: article.views,
        helpful: article.helpful,
        url: non_empty(&article.url),
    }
}

fn from_category(category: &ArticleCategory) -> impl Iterator<Item = SearchRecord> + '_ {
    // Article ids are only unique within their category
    let namespace = match category.id.trim() {
        "" => "article".to_string(),
        category_id => format!("article:{}", escape(category_id)),
    };
    category
        .articles
        .iter()
        .enumerate()
        .map(move |(position, article)| SearchRecord {
            id: record_id(&namespace, &article.id, position),
            title: article.title.clone(),
            content: article.summary.clone(),
            category: category.title.clone(),
            record_type: RecordType::Article,
            tags: article.tags.clone(),
            last_updated: article.last_updated.clone(),
            views: article.views,
            helpful: article.helpful,
            url: non_empty(&article.url),
        })
}

fn from_resource(position: usize, resource: &DownloadableResource) -> SearchRecord {
    let format = resource.format.trim();
    SearchRecord {
        id: record_id("resource", &resource.id, position),
        title: resource.title.clone(),
        content: resource.description.clone(),
        category: resource.category.clone(),
        record_type: RecordType::Resource,
        tags: if format.is_empty() {
            Vec::new()
        } else {
            vec![format.to_string()]
        },
        last_updated: resource.last_updated.clone(),
        views: resource.downloads,
        helpful: None,
        url: non_empty(&resource.url),
    }
}

fn from_faq(position: usize, entry: &FaqEntry) -> SearchRecord {
    SearchRecord {
        id: record_id("faq", &entry.id, position),
        title: entry.question.clone(),
        content: entry.answer.clone(),
        category: entry.category.clone(),
        record_type: RecordType::Faq,
        tags: entry.tags.clone(),
        last_updated: FAQ_REVISION_DATE.to_string(),
        views: None,
        helpful: None,
        url: None,
    }
}

/// Build the index. Same input always yields the same records in the same order.
pub fn build_index(sources: &SourceCollections, faqs: &[FaqEntry]) -> SearchIndex {
    let featured = sources
        .featured
        .iter()
        .enumerate()
        .map(|(i, a)| from_featured(i, a));
    let articles = sources.categories.iter().flat_map(from_category);
    let resources = sources
        .resources
        .iter()
        .enumerate()
        .map(|(i, r)| from_resource(i, r));
    let faq_records = faqs.iter().enumerate().map(|(i, f)| from_faq(i, f));

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(sources.len() + faqs.len());
    for record in featured.chain(articles).chain(resources).chain(faq_records) {
        if !seen.insert(record.id.clone()) {
            tracing::warn!(id = %record.id, "dropping record with duplicate id");
            continue;
        }
        records.push(record);
    }

    tracing::debug!(
        records = records.len(),
        featured = sources.featured.len(),
        categories = sources.categories.len(),
        resources = sources.resources.len(),
        faqs = faqs.len(),
        "built search index"
    );

    SearchIndex { records }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DEFAULT_SOURCES, STATIC_FAQS};
    use crate::models::HelpArticle;

    fn sample_sources() -> SourceCollections {
        SourceCollections {
            featured: vec![FeaturedArticle {
                id: "1".into(),
                title: "Quick start".into(),
                excerpt: "First steps".into(),
                category: "Getting Started".into(),
                last_updated: "2024-01-01".into(),
                views: Some(10),
                ..Default::default()
            }],
            categories: vec![ArticleCategory {
                id: "ref".into(),
                title: "Referrals".into(),
                articles: vec![
                    HelpArticle {
                        id: "1".into(),
                        title: "Submit a referral".into(),
                        tags: vec!["referral".into()],
                        ..Default::default()
                    },
                    HelpArticle {
                        id: "2".into(),
                        title: "Track a referral".into(),
                        url: Some("  ".into()),
                        ..Default::default()
                    },
                ],
            }],
            resources: vec![DownloadableResource {
                id: "kit".into(),
                title: "Brand kit".into(),
                format: "ZIP".into(),
                downloads: Some(1200),
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_order_featured_articles_resources_faqs() {
        let faqs = vec![FaqEntry {
            id: "1".into(),
            question: "Q?".into(),
            ..Default::default()
        }];
        let index = build_index(&sample_sources(), &faqs);
        let ids: Vec<&str> = index.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["featured:1", "article:ref:1", "article:ref:2", "resource:kit", "faq:1"]
        );
        let types: Vec<RecordType> = index.records().iter().map(|r| r.record_type).collect();
        assert_eq!(
            types,
            vec![
                RecordType::Featured,
                RecordType::Article,
                RecordType::Article,
                RecordType::Resource,
                RecordType::Faq
            ]
        );
    }

    #[test]
    fn test_projection_fields() {
        let index = build_index(&sample_sources(), &[]);

        let article = index.get("article:ref:1").unwrap();
        assert_eq!(article.category, "Referrals");
        assert_eq!(article.tags, vec!["referral"]);
        assert_eq!(article.content, "");
        assert_eq!(article.views, None);

        let blank_url = index.get("article:ref:2").unwrap();
        assert_eq!(blank_url.url, None);

        let resource = index.get("resource:kit").unwrap();
        assert_eq!(resource.tags, vec!["ZIP"]);
        assert_eq!(resource.views, Some(1200));
        assert_eq!(resource.helpful, None);
    }

    #[test]
    fn test_faq_gets_revision_date() {
        let faqs = vec![FaqEntry {
            id: "9".into(),
            question: "Why?".into(),
            answer: "Because.".into(),
            ..Default::default()
        }];
        let index = build_index(&SourceCollections::default(), &faqs);
        let record = index.get("faq:9").unwrap();
        assert_eq!(record.title, "Why?");
        assert_eq!(record.content, "Because.");
        assert_eq!(record.last_updated, FAQ_REVISION_DATE);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut sources = sample_sources();
        sources.featured.push(FeaturedArticle {
            id: "1".into(),
            title: "Duplicate".into(),
            ..Default::default()
        });
        let index = build_index(&sources, &[]);
        assert_eq!(index.get("featured:1").unwrap().title, "Quick start");
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn test_blank_ids_use_position() {
        let sources = SourceCollections {
            featured: vec![FeaturedArticle::default(), FeaturedArticle::default()],
            ..Default::default()
        };
        let index = build_index(&sources, &[]);
        assert!(index.get("featured#0").is_some());
        assert!(index.get("featured#1").is_some());
    }

    #[test]
    fn test_positional_ids_never_shadow_explicit_ids() {
        let sources = SourceCollections {
            featured: vec![
                FeaturedArticle::default(),
                FeaturedArticle::default(),
                FeaturedArticle {
                    id: "1".into(),
                    title: "Explicit".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let index = build_index(&sources, &[]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.get("featured:1").unwrap().title, "Explicit");
    }

    #[test]
    fn test_category_and_article_ids_do_not_run_together() {
        let category = |id: &str, article_id: &str| ArticleCategory {
            id: id.into(),
            title: id.into(),
            articles: vec![HelpArticle {
                id: article_id.into(),
                title: "Payout".into(),
                ..Default::default()
            }],
        };
        let sources = SourceCollections {
            categories: vec![category("a", "b-c"), category("a-b", "c"), category("a:b", "c")],
            ..Default::default()
        };
        let index = build_index(&sources, &[]);
        assert_eq!(index.len(), 3);
        assert!(index.get("article:a:b-c").is_some());
        assert!(index.get("article:a-b:c").is_some());
        assert!(index.get("article:a%3Ab:c").is_some());
    }

    #[test]
    fn test_empty_sources_yield_empty_index() {
        let index = build_index(&SourceCollections::default(), &[]);
        assert!(index.is_empty());
        assert!(index.categories().is_empty());
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = build_index(&DEFAULT_SOURCES, &STATIC_FAQS);
        let b = build_index(&DEFAULT_SOURCES, &STATIC_FAQS);
        assert_eq!(a, b);
    }

    #[test]
    fn test_categories_and_type_counts() {
        let index = build_index(&sample_sources(), &[]);
        assert_eq!(index.categories(), vec!["Getting Started", "Referrals"]);
        let counts = index.type_counts();
        assert_eq!(counts.get(&RecordType::Article), Some(&2));
        assert_eq!(counts.get(&RecordType::Faq), None);
    }
}
