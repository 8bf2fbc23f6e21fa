//! Built-in partner help-center content.
//!
//! The FAQ list is part of the search surface itself. The featured, category
//! and resource collections are the default content used when the host does
//! not supply its own (CLI, benchmarks, tests).

use once_cell::sync::Lazy;

use crate::models::{
    ArticleCategory, DownloadableResource, FaqEntry, FeaturedArticle, HelpArticle,
    SourceCollections,
};

/// `last_updated` assigned to every static FAQ record
pub const FAQ_REVISION_DATE: &str = "2024-05-20";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn faq(id: &str, question: &str, answer: &str, category: &str, tags: &[&str]) -> FaqEntry {
    FaqEntry {
        id: id.into(),
        question: question.into(),
        answer: answer.into(),
        category: category.into(),
        tags: strings(tags),
    }
}

pub static STATIC_FAQS: Lazy<Vec<FaqEntry>> = Lazy::new(|| {
    vec![
        faq(
            "1",
            "What happens after I submit a referral?",
            "Our partnerships team reviews every referral within two business days. You can follow its status from the Referrals tab of the partner portal.",
            "Referrals",
            &["referral", "process", "status"],
        ),
        faq(
            "2",
            "When are commissions paid?",
            "Commissions are paid on the 15th of each month for deals that closed in the previous month.",
            "Commissions & Payouts",
            &["commission", "payment", "schedule"],
        ),
        faq(
            "3",
            "How do I move up a partnership tier?",
            "Tier reviews happen every quarter. Reaching the revenue and certification thresholds of the next tier qualifies you automatically.",
            "Partnership Tiers",
            &["tier", "upgrade", "requirements"],
        ),
        faq(
            "4",
            "Can I co-brand marketing materials?",
            "Yes. Silver partners and above can request co-branded versions of any asset in the marketing library.",
            "Marketing & Co-branding",
            &["marketing", "co-branding", "assets"],
        ),
        faq(
            "5",
            "Where do I find my API credentials?",
            "Open Settings > Integrations in the partner portal and generate a key. Keys are shown once, so store them securely.",
            "Technical Integration",
            &["api", "credentials", "integration"],
        ),
        faq(
            "6",
            "How long is a referral attributed to me?",
            "Attribution lasts 90 days from the first tracked visit of the referred client.",
            "Referrals",
            &["attribution", "tracking", "cookie"],
        ),
        faq(
            "7",
            "Which payout methods are supported?",
            "Bank transfer and PayPal are supported in all regions. Wire transfers are available for balances above $5,000.",
            "Commissions & Payouts",
            &["payout", "bank transfer", "paypal"],
        ),
        faq(
            "8",
            "Do I need a certification to sell?",
            "Certification is optional for Registered partners and required from the Gold tier upwards.",
            "Training & Certification",
            &["training", "certification"],
        ),
    ]
});

fn featured(
    id: &str,
    title: &str,
    excerpt: &str,
    category: &str,
    last_updated: &str,
    views: u64,
    helpful: u32,
) -> FeaturedArticle {
    FeaturedArticle {
        id: id.into(),
        title: title.into(),
        excerpt: excerpt.into(),
        category: category.into(),
        read_time: "5 min read".into(),
        last_updated: last_updated.into(),
        views: Some(views),
        helpful: Some(helpful),
        url: Some(format!("/help/articles/featured-{id}")),
    }
}

fn article(
    id: &str,
    title: &str,
    summary: &str,
    tags: &[&str],
    last_updated: &str,
    views: u64,
    helpful: u32,
) -> HelpArticle {
    HelpArticle {
        id: id.into(),
        title: title.into(),
        summary: summary.into(),
        tags: strings(tags),
        last_updated: last_updated.into(),
        views: Some(views),
        helpful: Some(helpful),
        url: Some(format!("/help/articles/{id}")),
    }
}

#[allow(clippy::too_many_arguments)]
fn resource(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    format: &str,
    size: &str,
    last_updated: &str,
    downloads: u64,
) -> DownloadableResource {
    DownloadableResource {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        category: category.into(),
        format: format.into(),
        size: size.into(),
        last_updated: last_updated.into(),
        downloads: Some(downloads),
        url: Some(format!("https://cdn.partners.example.com/resources/{id}")),
    }
}

pub static DEFAULT_SOURCES: Lazy<SourceCollections> = Lazy::new(|| SourceCollections {
    featured: vec![
        featured(
            "1",
            "Partner Program Quick Start Guide",
            "Everything you need for your first 30 days: portal setup, first referral and your first commission.",
            "Getting Started",
            "2024-06-01",
            4820,
            96,
        ),
        featured(
            "2",
            "Maximizing Your Referral Conversions",
            "Proven techniques from top partners for qualifying leads before you refer them.",
            "Referrals",
            "2024-05-12",
            2310,
            92,
        ),
        featured(
            "3",
            "Understanding Commission Structures",
            "How recurring and one-time commissions are calculated for each deal type.",
            "Commissions & Payouts",
            "2024-04-28",
            3105,
            89,
        ),
        featured(
            "4",
            "New Partner Portal Features",
            "A tour of the redesigned dashboard, reporting views and notification settings.",
            "Getting Started",
            "2024-06-10",
            870,
            94,
        ),
    ],
    categories: vec![
        ArticleCategory {
            id: "getting-started".into(),
            title: "Getting Started".into(),
            articles: vec![
                article(
                    "gs-1",
                    "Setting up your partner portal account",
                    "Activate your account, invite teammates and complete your company profile.",
                    &["account", "setup", "portal"],
                    "2024-03-14",
                    1540,
                    93,
                ),
                article(
                    "gs-2",
                    "Navigating the partner dashboard",
                    "Find your referrals, earnings and training progress at a glance.",
                    &["dashboard", "navigation"],
                    "2024-02-02",
                    760,
                    88,
                ),
                article(
                    "gs-3",
                    "Completing your tax information",
                    "Submit the tax forms required before your first payment can be released.",
                    &["tax", "compliance", "forms"],
                    "2023-11-20",
                    640,
                    85,
                ),
            ],
        },
        ArticleCategory {
            id: "referrals".into(),
            title: "Referrals".into(),
            articles: vec![
                article(
                    "ref-1",
                    "How to submit a referral",
                    "Use the referral form or your tracked link. Include the client contact and a short description of their needs.",
                    &["referral", "submit", "form"],
                    "2024-05-30",
                    2890,
                    95,
                ),
                article(
                    "ref-2",
                    "Tracking referral status",
                    "Each referral moves through submitted, qualified, in progress and closed. Notifications fire at every step.",
                    &["tracking", "status", "process"],
                    "2024-04-18",
                    1210,
                    90,
                ),
                article(
                    "ref-3",
                    "Referral link best practices",
                    "Place your tracked link where prospects already research solutions, and keep UTM parameters intact.",
                    &["links", "utm", "tracking"],
                    "2023-12-05",
                    450,
                    87,
                ),
            ],
        },
        ArticleCategory {
            id: "commissions".into(),
            title: "Commissions & Payouts".into(),
            articles: vec![
                article(
                    "com-1",
                    "Commission rates by product",
                    "Current rates for every product line, including recurring revenue share.",
                    &["commission", "rates", "pricing"],
                    "2024-06-03",
                    3560,
                    91,
                ),
                article(
                    "com-2",
                    "Payout methods and timing",
                    "Choose bank transfer or PayPal. Payouts run monthly once your balance exceeds $50.",
                    &["payout", "payment", "bank"],
                    "2024-01-22",
                    1980,
                    93,
                ),
                article(
                    "com-3",
                    "Disputing a commission",
                    "Open a dispute from the earnings page within 60 days of the statement date.",
                    &["dispute", "earnings"],
                    "2023-10-09",
                    310,
                    78,
                ),
            ],
        },
        ArticleCategory {
            id: "tiers".into(),
            title: "Partnership Tiers".into(),
            articles: vec![
                article(
                    "tier-1",
                    "Partnership tier overview",
                    "Registered, Silver, Gold and Platinum tiers and what each one unlocks.",
                    &["tiers", "benefits", "levels"],
                    "2024-02-27",
                    2240,
                    94,
                ),
                article(
                    "tier-2",
                    "Tier review criteria",
                    "Quarterly reviews consider closed revenue, certified staff and customer satisfaction.",
                    &["review", "requirements"],
                    "2024-03-30",
                    980,
                    86,
                ),
            ],
        },
        ArticleCategory {
            id: "technical".into(),
            title: "Technical Integration".into(),
            articles: vec![
                article(
                    "tech-1",
                    "API integration guide",
                    "Authenticate with your partner key, then sync referrals and deal status through the REST API.",
                    &["api", "integration", "rest"],
                    "2024-05-05",
                    1320,
                    90,
                ),
                article(
                    "tech-2",
                    "Webhook events reference",
                    "Subscribe to referral and payout events to keep your CRM in sync.",
                    &["webhooks", "events", "crm"],
                    "2024-04-02",
                    540,
                    89,
                ),
            ],
        },
    ],
    resources: vec![
        resource(
            "partner-handbook",
            "Partner Program Handbook",
            "The complete program reference: policies, tiers, commissions and brand rules.",
            "Getting Started",
            "PDF",
            "2.4 MB",
            "2024-05-15",
            1890,
        ),
        resource(
            "brand-kit",
            "Co-branded Marketing Kit",
            "Logos, email templates and social banners ready for co-branding.",
            "Marketing & Co-branding",
            "ZIP",
            "48 MB",
            "2024-04-11",
            1240,
        ),
        resource(
            "roi-calculator",
            "Client ROI Calculator",
            "Spreadsheet to estimate client savings during discovery calls.",
            "Referrals",
            "XLSX",
            "320 KB",
            "2024-03-08",
            760,
        ),
        resource(
            "pitch-deck",
            "Sales Pitch Deck",
            "Editable presentation covering the product story and customer proof points.",
            "Marketing & Co-branding",
            "PPTX",
            "12 MB",
            "2024-06-05",
            2150,
        ),
        resource(
            "api-postman",
            "API Postman Collection",
            "Ready-made requests for every partner API endpoint.",
            "Technical Integration",
            "JSON",
            "85 KB",
            "2024-02-19",
            410,
        ),
        resource(
            "commission-statement",
            "Commission Statement Template",
            "Template explaining each line of your monthly commission statement.",
            "Commissions & Payouts",
            "PDF",
            "540 KB",
            "2023-12-18",
            980,
        ),
    ],
});
