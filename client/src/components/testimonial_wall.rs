//! Customer testimonial grid for the home page.

use leptos::prelude::*;

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "We cut our weekly reporting from six hours to six minutes. The \
                payback math on the pricing page turned out to be conservative.",
        author: "Maya Okafor",
        role: "Operations Lead, Brightline Logistics",
    },
    Testimonial {
        quote: "The builder made it possible for our marketing team to restructure \
                landing pages without filing a single engineering ticket.",
        author: "Daniel Reyes",
        role: "Head of Growth, Fernwood Health",
    },
    Testimonial {
        quote: "Connecting our CRM and billing system took an afternoon. Support \
                answered every question the same day.",
        author: "Priya Natarajan",
        role: "Founder, Cobalt Studio",
    },
];

/// Static grid of customer quotes.
#[component]
pub fn TestimonialWall() -> impl IntoView {
    view! {
        <section class="testimonial-wall">
            <h2 class="testimonial-wall__title">"Teams Run on WorkflowGene"</h2>
            <div class="testimonial-wall__grid">
                {TESTIMONIALS
                    .iter()
                    .map(|t| {
                        view! {
                            <figure class="testimonial-wall__card">
                                <blockquote class="testimonial-wall__quote">{t.quote}</blockquote>
                                <figcaption class="testimonial-wall__attribution">
                                    <span class="testimonial-wall__author">{t.author}</span>
                                    <span class="testimonial-wall__role">{t.role}</span>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
