//! Home page: hero, feature blocks, testimonials, newsletter.

use content::{ContentNode, NodeType};
use leptos::prelude::*;
use serde_json::Value;

use crate::components::hero::Hero;
use crate::components::newsletter_signup::NewsletterSignup;
use crate::components::renderer::ContentBlock;
use crate::components::testimonial_wall::TestimonialWall;

/// Feature section as a content tree, rendered through the same block
/// renderer the builder uses.
fn feature_section() -> ContentNode {
    let features = [
        (
            "feature-connect",
            "Connect every tool",
            "Link your CRM, billing, and support stack without writing glue code.",
        ),
        (
            "feature-automate",
            "Automate the busywork",
            "Turn repetitive data entry and handoffs into workflows that run themselves.",
        ),
        (
            "feature-measure",
            "Measure the gains",
            "See hours saved and payback progress for every automated process.",
        ),
    ];

    let children = features
        .into_iter()
        .map(|(id, title, body)| {
            let mut cell = ContentNode::new(id, NodeType::Paragraph);
            cell.props
                .insert("text".to_owned(), Value::String(format!("{title} — {body}")));
            cell
        })
        .collect();

    let mut grid = ContentNode::new("home-features", NodeType::Grid);
    grid.name = Some("Feature Grid".to_owned());
    grid.props.insert("columns".to_owned(), Value::from(3));
    grid.children = children;
    grid
}

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Hero/>

            <section class="home-page__features">
                <h2 class="home-page__features-title">"Why Teams Choose WorkflowGene"</h2>
                <ContentBlock node=feature_section()/>
            </section>

            <TestimonialWall/>
            <NewsletterSignup/>
        </div>
    }
}
