//! Synthetic help-center collections for benchmarks and load testing.
//!
//! Output is deterministic for a given seed so benchmark runs compare like
//! with like.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{
    ArticleCategory, DownloadableResource, FeaturedArticle, HelpArticle, SourceCollections,
};

const CATEGORY_TITLES: &[(&str, &str)] = &[
    ("getting-started", "Getting Started"),
    ("referrals", "Referrals"),
    ("commissions", "Commissions & Payouts"),
    ("tiers", "Partnership Tiers"),
    ("technical", "Technical Integration"),
    ("marketing", "Marketing"),
];

const TOPIC_WORDS: &[&str] = &[
    "referral", "commission", "payout", "partner", "portal", "tier", "bonus", "invoice",
    "tracking", "link", "dashboard", "webhook", "api", "integration", "campaign", "lead",
    "contract", "onboarding", "report", "analytics", "brand", "asset", "deck", "template",
];

const FILLER_WORDS: &[&str] = &[
    "the", "your", "how", "to", "and", "with", "for", "when", "each", "every", "new",
    "update", "review", "manage", "submit", "track", "share", "setup", "monthly", "account",
];

const TAGS: &[&str] = &[
    "referral", "commission", "payout", "tier", "api", "marketing", "onboarding", "billing",
    "reporting", "security",
];

const FORMATS: &[&str] = &["PDF", "XLSX", "ZIP", "PPTX", "JSON"];

fn pick<'a>(rng: &mut StdRng, words: &[&'a str]) -> &'a str {
    words.choose(rng).copied().unwrap_or_default()
}

fn title(rng: &mut StdRng) -> String {
    let mut words = vec![pick(rng, FILLER_WORDS), pick(rng, TOPIC_WORDS)];
    if rng.gen_bool(0.5) {
        words.push(pick(rng, TOPIC_WORDS));
    }
    let mut title = words.join(" ");
    if let Some(first) = title.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    title
}

fn paragraph(rng: &mut StdRng) -> String {
    let len = rng.gen_range(12..=40);
    let words: Vec<&str> = (0..len)
        .map(|_| {
            if rng.gen_bool(0.25) {
                pick(rng, TOPIC_WORDS)
            } else {
                pick(rng, FILLER_WORDS)
            }
        })
        .collect();
    format!("{}.", words.join(" "))
}

fn date(rng: &mut StdRng) -> String {
    format!(
        "202{}-{:02}-{:02}",
        rng.gen_range(2..=4),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28)
    )
}

fn tags(rng: &mut StdRng) -> Vec<String> {
    let count = rng.gen_range(0..=3);
    TAGS.choose_multiple(rng, count).map(|t| t.to_string()).collect()
}

/// Generate roughly `count` source entries spread over featured articles,
/// categorized articles and resources.
pub fn generate(count: usize, seed: u64) -> SourceCollections {
    let mut rng = StdRng::seed_from_u64(seed);

    let featured_count = count / 10;
    let resource_count = count / 5;
    let article_count = count.saturating_sub(featured_count + resource_count);

    let featured = (0..featured_count)
        .map(|i| {
            let (_, category) = CATEGORY_TITLES[rng.gen_range(0..CATEGORY_TITLES.len())];
            FeaturedArticle {
                id: format!("syn-f{i}"),
                title: title(&mut rng),
                excerpt: paragraph(&mut rng),
                category: category.to_string(),
                read_time: format!("{} min read", rng.gen_range(2..=12)),
                last_updated: date(&mut rng),
                views: Some(rng.gen_range(0..5_000)),
                helpful: Some(rng.gen_range(50..=100)),
                url: Some(format!("/help/articles/syn-f{i}")),
            }
        })
        .collect();

    let mut categories: Vec<ArticleCategory> = CATEGORY_TITLES
        .iter()
        .map(|(id, title)| ArticleCategory {
            id: id.to_string(),
            title: title.to_string(),
            articles: Vec::new(),
        })
        .collect();

    for i in 0..article_count {
        let slot = rng.gen_range(0..categories.len());
        let article = HelpArticle {
            id: format!("syn-a{i}"),
            title: title(&mut rng),
            summary: paragraph(&mut rng),
            tags: tags(&mut rng),
            last_updated: date(&mut rng),
            views: rng.gen_bool(0.8).then(|| rng.gen_range(0..3_000)),
            helpful: rng.gen_bool(0.8).then(|| rng.gen_range(40..=100)),
            url: Some(format!("/help/articles/syn-a{i}")),
        };
        categories[slot].articles.push(article);
    }

    let resources = (0..resource_count)
        .map(|i| {
            let (_, category) = CATEGORY_TITLES[rng.gen_range(0..CATEGORY_TITLES.len())];
            DownloadableResource {
                id: format!("syn-r{i}"),
                title: title(&mut rng),
                description: paragraph(&mut rng),
                category: category.to_string(),
                format: pick(&mut rng, FORMATS).to_string(),
                size: format!("{:.1} MB", rng.gen_range(0.1..25.0)),
                last_updated: date(&mut rng),
                downloads: Some(rng.gen_range(0..2_000)),
                url: Some(format!("https://cdn.partners.example.com/resources/syn-r{i}")),
            }
        })
        .collect();

    SourceCollections {
        featured,
        categories,
        resources,
    }
}
