use crate::config::SiteConfig;
use crate::domain::FaqRecord;
use crate::templates::components::faq_list;
use crate::templates::{desktop_layout, PageMeta};
use maud::{html, Markup};

pub struct FaqVm<'a> {
    pub query: String,
    pub categories: Vec<&'a str>,
    pub faqs: Vec<&'a FaqRecord>,
}

pub fn faq_page(vm: &FaqVm<'_>, site: &SiteConfig) -> Markup {
    let meta = PageMeta {
        title: "Frequently Asked Questions",
        description: "Answers to common questions about booking, payments, cancellations, and more.",
        active: "/faq",
    };

    desktop_layout(
        &meta,
        site,
        html! {
            main class="container narrow" {
                h1 class="section-heading" { "Frequently Asked Questions" }
                p class="lead" {
                    "Find answers to common questions about our properties, booking process, and services."
                }

                form method="get" action="/faq" class="faq-search" role="search" {
                    label for="faq-q" class="sr-only" { "Search questions" }
                    input
                        id="faq-q"
                        type="search"
                        name="q"
                        value=(vm.query)
                        placeholder="Search questions..."
                        hx-get="/faq/results"
                        hx-trigger="input changed delay:300ms, search"
                        hx-target="#faq-results";
                }

                @if !vm.categories.is_empty() {
                    ul class="chips" {
                        @for category in &vm.categories {
                            li class="chip" { (category) }
                        }
                    }
                }

                div id="faq-results" {
                    (faq_list(&vm.faqs, &vm.query))
                }

                section class="card contact-cta" {
                    h3 { "Still have questions?" }
                    p { "Can't find the answer you're looking for? Our friendly team is here to help." }
                    a href="/contact" class="btn btn-accent" { "Contact Support" }
                }
            }
        },
    )
}
