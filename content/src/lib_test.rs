use super::*;

fn sample_page() -> PageRecord {
    let grid = ContentNode {
        id: "grid-1".to_owned(),
        node_type: NodeType::Grid,
        name: Some("Feature Grid".to_owned()),
        props: serde_json::json!({"columns": 3})
            .as_object()
            .cloned()
            .unwrap_or_default(),
        styles: NodeStyles::default(),
        children: vec![
            ContentNode::new("p-1", NodeType::Paragraph),
            ContentNode::new("p-2", NodeType::Paragraph),
        ],
    };

    let mut hero = ContentNode::new("hero-1", NodeType::Hero);
    hero.props.insert(
        "title".to_owned(),
        Value::String("Automate Your Business DNA".to_owned()),
    );

    let mut root = ContentNode::new("root", NodeType::Grid);
    root.children = vec![hero, grid];

    PageRecord {
        id: Uuid::new_v4(),
        path: "/".to_owned(),
        title: "Home".to_owned(),
        seo: Some(SeoData::default()),
        root,
    }
}

// =============================================================
// NodeType
// =============================================================

#[test]
fn node_type_serializes_kebab_case() {
    let json = serde_json::to_string(&NodeType::PricingTable).unwrap();
    assert_eq!(json, "\"pricing-table\"");
    assert_eq!(serde_json::to_string(&NodeType::Hero).unwrap(), "\"hero\"");
}

#[test]
fn node_type_unknown_tag_falls_back() {
    let parsed: NodeType = serde_json::from_str("\"carousel\"").unwrap();
    assert_eq!(parsed, NodeType::Unknown);
}

#[test]
fn node_type_tag_round_trips_known_variants() {
    for ty in [
        NodeType::Hero,
        NodeType::Heading,
        NodeType::Paragraph,
        NodeType::Button,
        NodeType::Image,
        NodeType::Grid,
        NodeType::Form,
        NodeType::PricingTable,
        NodeType::Testimonial,
    ] {
        let parsed: NodeType = serde_json::from_str(&format!("\"{}\"", ty.tag())).unwrap();
        assert_eq!(parsed, ty);
    }
}

#[test]
fn only_grid_is_a_container() {
    assert!(NodeType::Grid.is_container());
    assert!(!NodeType::Hero.is_container());
    assert!(!NodeType::Form.is_container());
    assert!(!NodeType::Unknown.is_container());
}

// =============================================================
// NodeStyles
// =============================================================

#[test]
fn inline_css_renders_set_properties_in_order() {
    let styles = NodeStyles {
        padding: Some("2rem".to_owned()),
        background_color: Some("#0f172a".to_owned()),
        text_color: Some("#f8fafc".to_owned()),
        ..NodeStyles::default()
    };
    assert_eq!(
        styles.inline_css(),
        "padding: 2rem;background-color: #0f172a;color: #f8fafc;"
    );
}

#[test]
fn inline_css_empty_when_nothing_set() {
    assert_eq!(NodeStyles::default().inline_css(), "");
    assert!(NodeStyles::default().is_empty());
}

#[test]
fn inline_css_skips_empty_values() {
    let styles = NodeStyles {
        margin: Some(String::new()),
        border: Some("1px solid #334155".to_owned()),
        ..NodeStyles::default()
    };
    assert_eq!(styles.inline_css(), "border: 1px solid #334155;");
}

// =============================================================
// ContentNode props and tree
// =============================================================

#[test]
fn prop_accessors_default_to_none_on_missing_or_mistyped() {
    let mut node = ContentNode::new("n", NodeType::Heading);
    node.props
        .insert("text".to_owned(), Value::String("Pricing".to_owned()));
    node.props.insert("level".to_owned(), serde_json::json!(3));
    node.props.insert("flag".to_owned(), Value::Bool(true));

    assert_eq!(node.prop_str("text"), Some("Pricing"));
    assert_eq!(node.prop_str("missing"), None);
    assert_eq!(node.prop_str("level"), None);
    assert_eq!(node.prop_u64("level"), Some(3));
    assert_eq!(node.prop_u64("flag"), None);
    assert_eq!(node.prop_f64("missing"), None);
}

#[test]
fn prop_u64_accepts_whole_floats() {
    let mut node = ContentNode::new("n", NodeType::Grid);
    node.props.insert("columns".to_owned(), serde_json::json!(4.0));
    node.props.insert("ratio".to_owned(), serde_json::json!(1.5));
    assert_eq!(node.prop_u64("columns"), Some(4));
    assert_eq!(node.prop_u64("ratio"), None);
}

#[test]
fn node_count_and_depth_walk_the_tree() {
    let page = sample_page();
    // root + hero + grid + 2 paragraphs
    assert_eq!(page.root.node_count(), 5);
    assert_eq!(page.root.depth(), 3);
    assert_eq!(ContentNode::new("leaf", NodeType::Button).depth(), 1);
}

#[test]
fn find_locates_nested_nodes() {
    let page = sample_page();
    assert_eq!(
        page.root.find("p-2").map(|n| n.node_type),
        Some(NodeType::Paragraph)
    );
    assert!(page.root.find("nope").is_none());
    assert_eq!(page.root.find("root").map(|n| n.id.as_str()), Some("root"));
}

// =============================================================
// Serde round trips
// =============================================================

#[test]
fn content_node_round_trips_through_json() {
    let page = sample_page();
    let json = serde_json::to_string(&page.root).unwrap();
    let restored: ContentNode = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, page.root);
}

#[test]
fn content_node_defaults_missing_fields() {
    let node: ContentNode =
        serde_json::from_str(r#"{"id":"x","type":"paragraph"}"#).unwrap();
    assert_eq!(node.node_type, NodeType::Paragraph);
    assert!(node.props.is_empty());
    assert!(node.children.is_empty());
    assert!(node.styles.is_empty());
    assert!(node.name.is_none());
}

#[test]
fn content_node_unknown_type_preserves_children_shape() {
    let node: ContentNode = serde_json::from_str(
        r#"{"id":"x","type":"carousel","children":[{"id":"y","type":"heading"}]}"#,
    )
    .unwrap();
    assert_eq!(node.node_type, NodeType::Unknown);
    assert_eq!(node.children.len(), 1);
}

#[test]
fn page_record_json_round_trip() {
    let page = sample_page();
    let json = page.to_json().unwrap();
    let restored = PageRecord::from_json(&json).unwrap();
    assert_eq!(restored, page);
}

#[test]
fn page_record_rejects_malformed_json() {
    let err = PageRecord::from_json("{not json").unwrap_err();
    assert!(matches!(err, ContentError::Parse(_)));
}

// =============================================================
// SeoData defaults
// =============================================================

#[test]
fn seo_data_defaults_match_editor_expectations() {
    let seo = SeoData::default();
    assert!(seo.title.is_empty());
    assert_eq!(seo.twitter_card, "summary_large_image");
    assert_eq!(seo.robots, "index, follow");
}

#[test]
fn seo_data_deserializes_partial_objects() {
    let seo: SeoData =
        serde_json::from_str(r#"{"title":"Pricing","ogImage":"/img/og.png"}"#).unwrap();
    assert_eq!(seo.title, "Pricing");
    assert_eq!(seo.og_image, "/img/og.png");
    assert_eq!(seo.robots, "index, follow");
}
