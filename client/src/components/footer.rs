//! Site footer.

use leptos::prelude::*;

const PRODUCT_LINKS: [(&str, &str); 3] =
    [("Pricing", "/pricing"), ("Resources", "/resources"), ("Builder", "/builder")];

const COMPANY_LINKS: [(&str, &str); 2] = [("Community", "/community"), ("Home", "/")];

/// Footer with link columns and copyright line.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__columns">
                <FooterColumn heading="Product" links=&PRODUCT_LINKS/>
                <FooterColumn heading="Company" links=&COMPANY_LINKS/>
            </div>
            <span class="site-footer__copyright">
                "\u{00a9} 2026 WorkflowGene Cloud. All rights reserved."
            </span>
        </footer>
    }
}

#[component]
fn FooterColumn(heading: &'static str, links: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <div class="site-footer__column">
            <span class="site-footer__heading">{heading}</span>
            {links
                .iter()
                .map(|(label, href)| {
                    view! {
                        <a class="site-footer__link" href=*href>
                            {*label}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
