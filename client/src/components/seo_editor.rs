//! SEO metadata editor panel.
//!
//! ARCHITECTURE
//! ============
//! The panel mirrors a page's SEO fields in local draft signals, derives a
//! live search-result preview and a heuristic score from them, and only
//! talks to the outside world through two callbacks: `on_update` forwards
//! the assembled `SeoData` on save, `on_close` dismisses the panel. No
//! validation, diffing, or persistence happens here.

use content::{PageRecord, SeoData};
use leptos::prelude::*;

use crate::util::seo_score::{
    self, CheckStatus, DESCRIPTION_LENGTH_RANGE, TITLE_LENGTH_RANGE,
};

/// Field groups shown as tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum EditorTab {
    #[default]
    General,
    Social,
    Advanced,
}

/// SEO editor panel for one page.
#[component]
pub fn SeoEditor(
    page: PageRecord,
    on_update: Callback<SeoData>,
    on_close: Callback<()>,
) -> impl IntoView {
    let seo = page.seo.clone().unwrap_or_default();
    let page_title = page.title.clone();
    let page_path = page.path.clone();

    // Draft state, seeded from the page record. An unset SEO title falls
    // back to the page's display title.
    let title = RwSignal::new(if seo.title.is_empty() {
        page_title.clone()
    } else {
        seo.title.clone()
    });
    let description = RwSignal::new(seo.description.clone());
    let keywords = RwSignal::new(seo.keywords.clone());
    let og_title = RwSignal::new(seo.og_title.clone());
    let og_description = RwSignal::new(seo.og_description.clone());
    let og_image = RwSignal::new(seo.og_image.clone());
    let twitter_card = RwSignal::new(seo.twitter_card.clone());
    let canonical_url = RwSignal::new(seo.canonical_url.clone());
    let robots = RwSignal::new(seo.robots.clone());
    let custom_meta = RwSignal::new(seo.custom_meta.clone());
    let schema_markup = RwSignal::new(seo.schema_markup.clone());

    let tab = RwSignal::new(EditorTab::default());

    let current = move || SeoData {
        title: title.get(),
        description: description.get(),
        keywords: keywords.get(),
        og_title: og_title.get(),
        og_description: og_description.get(),
        og_image: og_image.get(),
        twitter_card: twitter_card.get(),
        canonical_url: canonical_url.get(),
        robots: robots.get(),
        custom_meta: custom_meta.get(),
        schema_markup: schema_markup.get(),
    };

    let preview_url = {
        let page_path = page_path.clone();
        move || {
            let canonical = canonical_url.get();
            if canonical.trim().is_empty() {
                format!("https://workflowgene.cloud{page_path}")
            } else {
                canonical
            }
        }
    };
    let preview_title = {
        let page_title = page_title.clone();
        move || {
            let t = title.get();
            if t.trim().is_empty() { page_title.clone() } else { t }
        }
    };

    let score = move || seo_score::evaluate(&current());

    let save = move |_| on_update.run(current());

    view! {
        <div class="seo-editor">
            <header class="seo-editor__header">
                <h2 class="seo-editor__title">{format!("SEO — {page_title}")}</h2>
                <button class="seo-editor__close" on:click=move |_| on_close.run(())>
                    "\u{00d7}"
                </button>
            </header>

            <nav class="seo-editor__tabs">
                <TabButton label="General" value=EditorTab::General tab=tab/>
                <TabButton label="Social" value=EditorTab::Social tab=tab/>
                <TabButton label="Advanced" value=EditorTab::Advanced tab=tab/>
            </nav>

            <Show when=move || tab.get() == EditorTab::General>
                <div class="seo-editor__fields">
                    <SeoField
                        label="Title"
                        value=title
                        hint=Signal::derive(move || {
                            length_hint(&title.get(), *TITLE_LENGTH_RANGE.start(), *TITLE_LENGTH_RANGE.end())
                        })
                        hint_ok=Signal::derive(move || seo_score::title_in_range(&title.get()))
                    />
                    <SeoTextArea
                        label="Description"
                        value=description
                        hint=Signal::derive(move || {
                            length_hint(
                                &description.get(),
                                *DESCRIPTION_LENGTH_RANGE.start(),
                                *DESCRIPTION_LENGTH_RANGE.end(),
                            )
                        })
                        hint_ok=Signal::derive(move || {
                            seo_score::description_in_range(&description.get())
                        })
                    />
                    <SeoField label="Keywords (comma-separated)" value=keywords/>
                    <SeoField label="Canonical URL" value=canonical_url/>
                </div>
            </Show>

            <Show when=move || tab.get() == EditorTab::Social>
                <div class="seo-editor__fields">
                    <SeoField label="Open Graph title" value=og_title/>
                    <SeoTextArea label="Open Graph description" value=og_description/>
                    <SeoField label="Open Graph image URL" value=og_image/>
                    <SeoField label="Twitter card type" value=twitter_card/>
                </div>
            </Show>

            <Show when=move || tab.get() == EditorTab::Advanced>
                <div class="seo-editor__fields">
                    <SeoField label="Robots directive" value=robots/>
                    <SeoTextArea label="Custom meta tags" value=custom_meta/>
                    <SeoTextArea label="Schema markup (JSON-LD)" value=schema_markup/>
                </div>
            </Show>

            <div class="seo-editor__preview">
                <span class="seo-editor__preview-heading">"Search preview"</span>
                <span class="seo-editor__preview-title">{preview_title}</span>
                <span class="seo-editor__preview-url">{preview_url}</span>
                <span class="seo-editor__preview-description">
                    {move || description.get()}
                </span>
            </div>

            <div class="seo-editor__score">
                <span class="seo-editor__score-value">
                    {move || {
                        let s = score();
                        format!("{} / 100 — {}", s.score, seo_score::rating_label(s.score))
                    }}
                </span>
                <ul class="seo-editor__checks">
                    {move || {
                        score()
                            .checks
                            .iter()
                            .map(|check| {
                                let passed = check.status == CheckStatus::Good;
                                let text = if passed {
                                    check.name.to_owned()
                                } else {
                                    format!("{} — {}", check.name, check.hint)
                                };
                                view! {
                                    <li
                                        class="seo-editor__check"
                                        class=("seo-editor__check--good", passed)
                                    >
                                        {text}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </div>

            <div class="seo-editor__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" on:click=save>
                    "Save"
                </button>
            </div>
        </div>
    }
}

fn length_hint(value: &str, min: usize, max: usize) -> String {
    format!("{} / {min}-{max} characters", value.chars().count())
}

/// One tab selector button.
#[component]
fn TabButton(label: &'static str, value: EditorTab, tab: RwSignal<EditorTab>) -> impl IntoView {
    view! {
        <button
            class="seo-editor__tab"
            class=("seo-editor__tab--active", move || tab.get() == value)
            on:click=move |_| tab.set(value)
        >
            {label}
        </button>
    }
}

/// Single-line labeled input bound to a draft signal, with an optional
/// length hint.
#[component]
fn SeoField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional, into)] hint: Option<Signal<String>>,
    #[prop(optional, into)] hint_ok: Option<Signal<bool>>,
) -> impl IntoView {
    view! {
        <label class="seo-editor__label">
            {label}
            <input
                class="seo-editor__input"
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {hint.map(|hint| {
                view! {
                    <span
                        class="seo-editor__hint"
                        class=("seo-editor__hint--ok", move || {
                            hint_ok.map_or(true, |ok| ok.get())
                        })
                    >
                        {hint}
                    </span>
                }
            })}
        </label>
    }
}

/// Multi-line labeled textarea bound to a draft signal.
#[component]
fn SeoTextArea(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional, into)] hint: Option<Signal<String>>,
    #[prop(optional, into)] hint_ok: Option<Signal<bool>>,
) -> impl IntoView {
    view! {
        <label class="seo-editor__label">
            {label}
            <textarea
                class="seo-editor__textarea"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            >
                {value.get_untracked()}
            </textarea>
            {hint.map(|hint| {
                view! {
                    <span
                        class="seo-editor__hint"
                        class=("seo-editor__hint--ok", move || {
                            hint_ok.map_or(true, |ok| ok.get())
                        })
                    >
                        {hint}
                    </span>
                }
            })}
        </label>
    }
}
