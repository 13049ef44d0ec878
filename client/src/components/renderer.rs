//! Generic block renderer mapping content descriptors to visual blocks.
//!
//! ARCHITECTURE
//! ============
//! Dispatch is a pure function of the node type tag to one of nine fixed
//! templates. Each template independently defaults every missing prop to a
//! hard-coded placeholder. `grid` is the only recursive case: children
//! render through the same entry point, with the editing flag and selection
//! callback passed through, so a page renders as a depth-first traversal
//! of the containment tree. The tree shape makes cycles impossible; no
//! depth limit is enforced.

use content::{ContentNode, NodeType};
use leptos::prelude::*;

#[cfg(test)]
#[path = "renderer_test.rs"]
mod renderer_test;

/// Cells rendered by a grid with an empty child list.
pub const EMPTY_GRID_CELLS: usize = 3;

/// Heading level used when `props.level` is missing or out of range.
pub const DEFAULT_HEADING_LEVEL: u64 = 2;

/// Grid column count used when `props.columns` is missing or out of range.
pub const DEFAULT_GRID_COLUMNS: u64 = 3;

/// Read a string prop with a placeholder fallback.
#[must_use]
pub fn text_prop(node: &ContentNode, key: &str, fallback: &str) -> String {
    node.prop_str(key).map_or_else(|| fallback.to_owned(), str::to_owned)
}

/// Heading level for a `heading` node, clamped to 1-6.
#[must_use]
pub fn heading_level(node: &ContentNode) -> u64 {
    node.prop_u64("level")
        .filter(|level| (1..=6).contains(level))
        .unwrap_or(DEFAULT_HEADING_LEVEL)
}

/// Column count for a `grid` node, clamped to 1-6.
#[must_use]
pub fn grid_columns(node: &ContentNode) -> u64 {
    node.prop_u64("columns")
        .filter(|columns| (1..=6).contains(columns))
        .unwrap_or(DEFAULT_GRID_COLUMNS)
}

/// Number of cells a `grid` node renders: its children, or the static
/// placeholder cells when the child list is empty.
#[must_use]
pub fn grid_cell_count(node: &ContentNode) -> usize {
    if node.children.is_empty() {
        EMPTY_GRID_CELLS
    } else {
        node.children.len()
    }
}

/// Render a content node as a visual block.
///
/// In editing mode, clicking a block stops the event and invokes
/// `on_select` with the clicked node instead of any default interaction.
/// Returns [`AnyView`] so the grid template can recurse without a
/// self-referential return type.
#[component]
pub fn ContentBlock(
    node: ContentNode,
    #[prop(optional)] editing: bool,
    #[prop(optional, into)] on_select: Option<Callback<ContentNode>>,
) -> AnyView {
    let css = node.styles.inline_css();
    let style_attr = (!css.is_empty()).then_some(css);
    let body = render_body(&node, editing, on_select);
    let node_id = node.id.clone();

    if editing {
        let selected = node.clone();
        view! {
            <div
                class="content-block content-block--editing"
                style=style_attr
                data-node-id=node_id
                on:click=move |ev| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    if let Some(cb) = on_select {
                        cb.run(selected.clone());
                    }
                }
            >
                {body}
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="content-block" style=style_attr data-node-id=node_id>
                {body}
            </div>
        }
        .into_any()
    }
}

fn render_body(
    node: &ContentNode,
    editing: bool,
    on_select: Option<Callback<ContentNode>>,
) -> AnyView {
    match node.node_type {
        NodeType::Hero => render_hero(node),
        NodeType::Heading => render_heading(node),
        NodeType::Paragraph => render_paragraph(node),
        NodeType::Button => render_button(node),
        NodeType::Image => render_image(node),
        NodeType::Grid => render_grid(node, editing, on_select),
        NodeType::Form => render_form(node),
        NodeType::PricingTable => render_pricing_table(node),
        NodeType::Testimonial => render_testimonial(node),
        NodeType::Unknown => render_unknown(node),
    }
}

fn render_hero(node: &ContentNode) -> AnyView {
    let title = text_prop(node, "title", "Hero Title");
    let subtitle = text_prop(node, "subtitle", "Hero subtitle goes here");
    let button = text_prop(node, "buttonText", "Get Started");

    view! {
        <section class="block-hero">
            <h1 class="block-hero__title">{title}</h1>
            <p class="block-hero__subtitle">{subtitle}</p>
            <button class="btn btn--primary">{button}</button>
        </section>
    }
    .into_any()
}

fn render_heading(node: &ContentNode) -> AnyView {
    let text = text_prop(node, "text", "Heading");
    match heading_level(node) {
        1 => view! { <h1 class="block-heading">{text}</h1> }.into_any(),
        3 => view! { <h3 class="block-heading">{text}</h3> }.into_any(),
        4 => view! { <h4 class="block-heading">{text}</h4> }.into_any(),
        5 => view! { <h5 class="block-heading">{text}</h5> }.into_any(),
        6 => view! { <h6 class="block-heading">{text}</h6> }.into_any(),
        _ => view! { <h2 class="block-heading">{text}</h2> }.into_any(),
    }
}

fn render_paragraph(node: &ContentNode) -> AnyView {
    let text = text_prop(node, "text", "Paragraph text goes here.");
    view! { <p class="block-paragraph">{text}</p> }.into_any()
}

fn render_button(node: &ContentNode) -> AnyView {
    let text = text_prop(node, "text", "Click Me");
    let variant = text_prop(node, "variant", "default");
    let class = format!("btn block-button block-button--{variant}");
    view! { <button class=class>{text}</button> }.into_any()
}

fn render_image(node: &ContentNode) -> AnyView {
    let src = text_prop(node, "src", "/img/placeholder.png");
    let alt = text_prop(node, "alt", "Image");
    view! { <img class="block-image" src=src alt=alt/> }.into_any()
}

fn render_grid(
    node: &ContentNode,
    editing: bool,
    on_select: Option<Callback<ContentNode>>,
) -> AnyView {
    let columns = grid_columns(node);
    let style = format!("grid-template-columns: repeat({columns}, minmax(0, 1fr));");

    let cells: Vec<AnyView> = if node.children.is_empty() {
        (1..=EMPTY_GRID_CELLS)
            .map(|n| {
                view! {
                    <div class="block-grid__placeholder">{format!("Grid Item {n}")}</div>
                }
                .into_any()
            })
            .collect()
    } else {
        node.children
            .iter()
            .cloned()
            .map(|child| {
                match on_select {
                    Some(cb) => {
                        view! { <ContentBlock node=child editing=editing on_select=cb/> }
                            .into_any()
                    }
                    None => {
                        view! { <ContentBlock node=child editing=editing/> }.into_any()
                    }
                }
            })
            .collect()
    };

    view! { <div class="block-grid" style=style>{cells}</div> }.into_any()
}

fn render_form(node: &ContentNode) -> AnyView {
    let title = text_prop(node, "title", "Contact Form");
    let button = text_prop(node, "buttonText", "Submit");

    view! {
        <div class="block-form">
            <h3 class="block-form__title">{title}</h3>
            <label class="block-form__label">
                "Name"
                <input class="block-form__input" type="text" placeholder="Your name"/>
            </label>
            <label class="block-form__label">
                "Email"
                <input class="block-form__input" type="email" placeholder="you@company.com"/>
            </label>
            <button class="btn btn--primary">{button}</button>
        </div>
    }
    .into_any()
}

fn render_pricing_table(node: &ContentNode) -> AnyView {
    let title = text_prop(node, "title", "Pricing Plans");
    let tiers = [
        ("Starter", "$29/mo"),
        ("Professional", "$99/mo"),
        ("Enterprise", "Custom"),
    ];

    view! {
        <div class="block-pricing">
            <h3 class="block-pricing__title">{title}</h3>
            <div class="block-pricing__tiers">
                {tiers
                    .into_iter()
                    .map(|(name, price)| {
                        view! {
                            <div class="block-pricing__tier">
                                <span class="block-pricing__name">{name}</span>
                                <span class="block-pricing__price">{price}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
    .into_any()
}

fn render_testimonial(node: &ContentNode) -> AnyView {
    let quote = text_prop(
        node,
        "quote",
        "This product changed how our team works every day.",
    );
    let author = text_prop(node, "author", "Customer Name");
    let role = text_prop(node, "role", "Job Title");

    view! {
        <figure class="block-testimonial">
            <blockquote class="block-testimonial__quote">{quote}</blockquote>
            <figcaption class="block-testimonial__attribution">
                <span class="block-testimonial__author">{author}</span>
                <span class="block-testimonial__role">{role}</span>
            </figcaption>
        </figure>
    }
    .into_any()
}

fn render_unknown(node: &ContentNode) -> AnyView {
    let label = format!("Unsupported block: {}", node.node_type.tag());
    view! { <div class="block-unknown">{label}</div> }.into_any()
}
