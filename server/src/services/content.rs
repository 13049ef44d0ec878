//! Content store: the page records behind the site and the builder API.
//!
//! DESIGN
//! ======
//! `ContentStore` is the seam where a real content service would plug in.
//! The in-memory implementation seeds the marketing pages as content trees
//! and supports the one mutation the builder needs: replacing a page's SEO
//! metadata.

use std::collections::HashMap;

use async_trait::async_trait;
use content::{ContentNode, NodeType, PageRecord, SeoData};
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Error returned by store lookups and mutations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("page not found: {0}")]
    NotFound(Uuid),
    #[error("no page at path: {0}")]
    PathNotFound(String),
}

/// Read/update access to page records.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All pages, ordered by path.
    async fn list_pages(&self) -> Vec<PageRecord>;

    /// Fetch one page by id.
    async fn page_by_id(&self, id: Uuid) -> Result<PageRecord, StoreError>;

    /// Fetch one page by site-relative path.
    async fn page_by_path(&self, path: &str) -> Result<PageRecord, StoreError>;

    /// Replace a page's SEO metadata and return the updated record.
    async fn update_seo(&self, id: Uuid, seo: SeoData) -> Result<PageRecord, StoreError>;
}

/// In-memory [`ContentStore`] keyed by page id.
pub struct MemoryContent {
    pages: RwLock<HashMap<Uuid, PageRecord>>,
}

impl MemoryContent {
    #[must_use]
    pub fn new(pages: Vec<PageRecord>) -> Self {
        Self {
            pages: RwLock::new(pages.into_iter().map(|p| (p.id, p)).collect()),
        }
    }

    /// Store seeded with the marketing site from [`default_site`].
    #[must_use]
    pub fn with_default_site() -> Self {
        Self::new(default_site())
    }
}

#[async_trait]
impl ContentStore for MemoryContent {
    async fn list_pages(&self) -> Vec<PageRecord> {
        let pages = self.pages.read().await;
        let mut list: Vec<PageRecord> = pages.values().cloned().collect();
        list.sort_by(|a, b| a.path.cmp(&b.path));
        list
    }

    async fn page_by_id(&self, id: Uuid) -> Result<PageRecord, StoreError> {
        let pages = self.pages.read().await;
        pages.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn page_by_path(&self, path: &str) -> Result<PageRecord, StoreError> {
        let pages = self.pages.read().await;
        pages
            .values()
            .find(|p| p.path == path)
            .cloned()
            .ok_or_else(|| StoreError::PathNotFound(path.to_owned()))
    }

    async fn update_seo(&self, id: Uuid, seo: SeoData) -> Result<PageRecord, StoreError> {
        let mut pages = self.pages.write().await;
        let page = pages.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        page.seo = Some(seo);
        Ok(page.clone())
    }
}

// =============================================================================
// SEEDED SITE
// =============================================================================

fn node(id: &str, node_type: NodeType) -> ContentNode {
    ContentNode::new(id, node_type)
}

fn text_node(id: &str, node_type: NodeType, key: &str, text: &str) -> ContentNode {
    let mut n = node(id, node_type);
    n.props.insert(key.to_owned(), Value::String(text.to_owned()));
    n
}

fn heading(id: &str, text: &str, level: u64) -> ContentNode {
    let mut n = text_node(id, NodeType::Heading, "text", text);
    n.props.insert("level".to_owned(), Value::from(level));
    n
}

fn column(id: &str, children: Vec<ContentNode>) -> ContentNode {
    let mut n = node(id, NodeType::Grid);
    n.props.insert("columns".to_owned(), Value::from(1));
    n.children = children;
    n
}

/// The marketing pages served to the builder.
#[must_use]
pub fn default_site() -> Vec<PageRecord> {
    vec![home_page(), pricing_page(), resources_page(), community_page()]
}

fn home_page() -> PageRecord {
    let mut hero = node("home-hero", NodeType::Hero);
    hero.name = Some("Hero".to_owned());
    hero.props.insert(
        "title".to_owned(),
        Value::String("Automate Your Business DNA".to_owned()),
    );
    hero.props.insert(
        "subtitle".to_owned(),
        Value::String(
            "Connect the tools you already use and let workflows run themselves.".to_owned(),
        ),
    );
    hero.props.insert(
        "buttonText".to_owned(),
        Value::String("Start Free Trial".to_owned()),
    );

    let mut features = node("home-features", NodeType::Grid);
    features.name = Some("Feature Grid".to_owned());
    features.props.insert("columns".to_owned(), Value::from(3));
    features.children = vec![
        text_node(
            "home-feature-connect",
            NodeType::Paragraph,
            "text",
            "Connect every tool in your stack without glue code.",
        ),
        text_node(
            "home-feature-automate",
            NodeType::Paragraph,
            "text",
            "Automate approvals, handoffs, and data entry.",
        ),
        text_node(
            "home-feature-measure",
            NodeType::Paragraph,
            "text",
            "Measure hours saved on every automated process.",
        ),
    ];

    let mut quote = node("home-testimonial", NodeType::Testimonial);
    quote.props.insert(
        "quote".to_owned(),
        Value::String("We cut our weekly reporting from six hours to six minutes.".to_owned()),
    );
    quote
        .props
        .insert("author".to_owned(), Value::String("Maya Okafor".to_owned()));
    quote.props.insert(
        "role".to_owned(),
        Value::String("Operations Lead, Brightline Logistics".to_owned()),
    );

    PageRecord {
        id: Uuid::new_v4(),
        path: "/".to_owned(),
        title: "Home".to_owned(),
        seo: Some(SeoData {
            title: "WorkflowGene Cloud — Business Automation Platform".to_owned(),
            description: "Connect your CRM, billing, and support tools, automate repetitive \
                          work, and measure the hours you get back. Start with a free trial."
                .to_owned(),
            keywords: "automation, workflow, integrations".to_owned(),
            og_image: "/img/og-home.png".to_owned(),
            ..SeoData::default()
        }),
        root: column(
            "home-root",
            vec![
                hero,
                heading("home-why", "Why Teams Choose WorkflowGene", 2),
                features,
                quote,
            ],
        ),
    }
}

fn pricing_page() -> PageRecord {
    let mut table = node("pricing-table", NodeType::PricingTable);
    table.name = Some("Plans".to_owned());
    table
        .props
        .insert("title".to_owned(), Value::String("Simple, Predictable Pricing".to_owned()));

    PageRecord {
        id: Uuid::new_v4(),
        path: "/pricing".to_owned(),
        title: "Pricing".to_owned(),
        seo: Some(SeoData {
            title: "Pricing — WorkflowGene Cloud".to_owned(),
            description: "Three plans, one calculator. See what manual work costs you today \
                          and how quickly automation pays for itself."
                .to_owned(),
            keywords: "pricing, plans, roi".to_owned(),
            ..SeoData::default()
        }),
        root: column(
            "pricing-root",
            vec![
                heading("pricing-heading", "Plans for Every Team", 1),
                table,
                text_node(
                    "pricing-note",
                    NodeType::Paragraph,
                    "text",
                    "Every paid plan starts with a 14-day free trial.",
                ),
            ],
        ),
    }
}

fn resources_page() -> PageRecord {
    let mut banner = node("resources-image", NodeType::Image);
    banner
        .props
        .insert("src".to_owned(), Value::String("/img/resources-banner.png".to_owned()));
    banner
        .props
        .insert("alt".to_owned(), Value::String("Learning resources".to_owned()));

    PageRecord {
        id: Uuid::new_v4(),
        path: "/resources".to_owned(),
        title: "Resources".to_owned(),
        // Deliberately sparse so the builder's SEO score has work to show.
        seo: None,
        root: column(
            "resources-root",
            vec![
                heading("resources-heading", "Learn Automation", 1),
                banner,
                text_node(
                    "resources-intro",
                    NodeType::Paragraph,
                    "text",
                    "Guides and learning paths for every stage of automation maturity.",
                ),
            ],
        ),
    }
}

fn community_page() -> PageRecord {
    let mut contact = node("community-form", NodeType::Form);
    contact
        .props
        .insert("title".to_owned(), Value::String("Join the Community".to_owned()));
    contact
        .props
        .insert("buttonText".to_owned(), Value::String("Request Invite".to_owned()));

    PageRecord {
        id: Uuid::new_v4(),
        path: "/community".to_owned(),
        title: "Community".to_owned(),
        seo: Some(SeoData {
            title: "Community — WorkflowGene Cloud".to_owned(),
            description: "Forum discussions, integration recipes, and monthly community calls."
                .to_owned(),
            ..SeoData::default()
        }),
        root: column(
            "community-root",
            vec![
                heading("community-heading", "The WorkflowGene Community", 1),
                text_node(
                    "community-intro",
                    NodeType::Paragraph,
                    "text",
                    "Thousands of operators share workflows, recipes, and rollout lessons.",
                ),
                contact,
            ],
        ),
    }
}
