//! Site header with navigation and dark mode toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Pricing", "/pricing"),
    ("Resources", "/resources"),
    ("Community", "/community"),
    ("Builder", "/builder"),
];

/// Sticky site header: logo, nav links, dark mode and mobile nav toggles.
#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Pick up the stored preference once the browser is driving.
    Effect::new(move || {
        let preferred = dark_mode::read_preference();
        dark_mode::apply(preferred);
        ui.update(|s| s.dark_mode = preferred);
    });

    let toggle_dark = move |_| {
        ui.update(|s| s.dark_mode = dark_mode::toggle(s.dark_mode));
    };

    let toggle_nav = move |_| {
        ui.update(|s| s.mobile_nav_open = !s.mobile_nav_open);
    };

    view! {
        <header class="site-header">
            <a class="site-header__logo" href="/">
                "WorkflowGene Cloud"
            </a>

            <nav
                class="site-header__nav"
                class=("site-header__nav--open", move || ui.get().mobile_nav_open)
            >
                {NAV_LINKS
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <a class="site-header__link" href=*href>
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="site-header__controls">
                <button
                    class="site-header__dark-toggle"
                    title="Toggle dark mode"
                    on:click=toggle_dark
                >
                    {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263e}" }}
                </button>
                <button
                    class="site-header__nav-toggle"
                    title="Toggle navigation"
                    on:click=toggle_nav
                >
                    "\u{2630}"
                </button>
            </div>
        </header>
    }
}
