use super::*;

#[test]
fn renders_headings_and_paragraphs() {
    let out = render_markdown_html("# Getting Started\n\nAutomate the boring parts.");
    assert!(out.contains("<h1>Getting Started</h1>"));
    assert!(out.contains("<p>Automate the boring parts.</p>"));
}

#[test]
fn renders_lists_and_emphasis() {
    let out = render_markdown_html("- one\n- *two*\n");
    assert!(out.contains("<ul>"));
    assert!(out.contains("<em>two</em>"));
}

#[test]
fn drops_raw_html_events() {
    let out = render_markdown_html("before\n\n<script>alert(1)</script>\n\nafter");
    assert!(!out.contains("<script>"));
    assert!(out.contains("before"));
    assert!(out.contains("after"));
}

#[test]
fn renders_tables_when_enabled() {
    let out = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(out.contains("<table>"));
}
