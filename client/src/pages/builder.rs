//! Builder page: stored pages rendered in editing mode with node
//! selection and the SEO editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the caller side of the renderer's editing contract: it
//! supplies the selection callback, owns which page is loaded, and
//! forwards SEO saves to the content API.

use content::{ContentNode, PageRecord, SeoData};
use leptos::prelude::*;

use crate::components::renderer::ContentBlock;
use crate::components::seo_editor::SeoEditor;

/// Page-editing surface backed by the content API.
#[component]
pub fn BuilderPage() -> impl IntoView {
    let pages = LocalResource::new(|| crate::net::api::fetch_pages());

    let selected_page = RwSignal::new(None::<PageRecord>);
    let selected_node = RwSignal::new(None::<ContentNode>);
    let show_seo = RwSignal::new(false);

    let on_select = Callback::new(move |node: ContentNode| {
        selected_node.set(Some(node));
    });

    let on_seo_close = Callback::new(move |_: ()| show_seo.set(false));

    let on_seo_update = Callback::new(move |seo: SeoData| {
        show_seo.set(false);
        let Some(page) = selected_page.get_untracked() else {
            return;
        };

        // Optimistic local update; the PATCH response replaces it with the
        // server's copy when it lands.
        selected_page.update(|current| {
            if let Some(current) = current {
                current.seo = Some(seo.clone());
            }
        });

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if let Some(updated) =
                    crate::net::api::update_page_seo(page.id, &seo).await
                {
                    selected_page.set(Some(updated));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = page;
        }
    });

    view! {
        <div class="builder-page">
            <aside class="builder-page__sidebar">
                <h2 class="builder-page__heading">"Pages"</h2>
                <Suspense fallback=move || view! { <p>"Loading pages..."</p> }>
                    {move || {
                        pages
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! {
                                        <p class="builder-page__empty">"No pages available."</p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <ul class="builder-page__list">
                                            {list
                                                .into_iter()
                                                .map(|page| {
                                                    let label = page.title.clone();
                                                    let id = page.id;
                                                    view! {
                                                        <li>
                                                            <button
                                                                class="builder-page__page"
                                                                class=("builder-page__page--active", move || {
                                                                    selected_page.get().is_some_and(|p| p.id == id)
                                                                })
                                                                on:click=move |_| {
                                                                    selected_node.set(None);
                                                                    show_seo.set(false);
                                                                    selected_page.set(Some(page.clone()));
                                                                }
                                                            >
                                                                {label}
                                                            </button>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </aside>

            <section class="builder-page__canvas">
                {move || match selected_page.get() {
                    Some(page) => {
                        let title = page.title.clone();
                        view! {
                            <div class="builder-page__canvas-head">
                                <h2 class="builder-page__heading">{title}</h2>
                                <button class="btn" on:click=move |_| show_seo.set(true)>
                                    "Edit SEO"
                                </button>
                            </div>
                            <ContentBlock node=page.root editing=true on_select=on_select/>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <p class="builder-page__hint">"Select a page to start editing."</p>
                        }
                            .into_any()
                    }
                }}
            </section>

            <aside class="builder-page__inspector">
                <h2 class="builder-page__heading">"Selection"</h2>
                {move || match selected_node.get() {
                    Some(node) => {
                        view! {
                            <dl class="builder-page__node">
                                <dt>"Id"</dt>
                                <dd>{node.id.clone()}</dd>
                                <dt>"Type"</dt>
                                <dd>{node.node_type.tag()}</dd>
                                <dt>"Name"</dt>
                                <dd>
                                    {node.name.clone().unwrap_or_else(|| "\u{2014}".to_owned())}
                                </dd>
                                <dt>"Props"</dt>
                                <dd>{node.props.len().to_string()}</dd>
                                <dt>"Children"</dt>
                                <dd>{node.children.len().to_string()}</dd>
                            </dl>
                        }
                            .into_any()
                    }
                    None => {
                        view! { <p class="builder-page__hint">"Click a block to inspect it."</p> }
                            .into_any()
                    }
                }}
            </aside>

            <Show when=move || show_seo.get()>
                {move || {
                    selected_page
                        .get()
                        .map(|page| {
                            view! {
                                <div class="builder-page__seo-overlay">
                                    <SeoEditor
                                        page=page
                                        on_update=on_seo_update
                                        on_close=on_seo_close
                                    />
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
