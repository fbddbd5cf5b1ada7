use crate::config::SiteConfig;
use crate::domain::PropertyCategory;
use maud::{html, Markup, DOCTYPE};

const NAV_ITEMS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Gallery", "/gallery"),
    ("About Us", "/about"),
    ("FAQ", "/faq"),
    ("Contact", "/contact"),
];

/// Page metadata for the `<head>`.
pub struct PageMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// Path of the nav entry to highlight.
    pub active: &'a str,
}

pub fn desktop_layout(meta: &PageMeta<'_>, site: &SiteConfig, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (meta.title) " - " (site.name) }
                meta name="description" content=(meta.description);
                link rel="icon" type="image/svg+xml" href="/static/favicon.svg";
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" { (site.name) }
                    nav aria-label="Main" {
                        ul {
                            @for (label, path) in NAV_ITEMS {
                                li {
                                    a href=(path) class=[(path == meta.active).then_some("active")] { (label) }
                                }
                            }
                        }
                    }
                    a href="/contact" class="btn btn-accent" { "Book Now" }
                }

                (content)

                (footer(site))
            }
        }
    }
}

fn footer(site: &SiteConfig) -> Markup {
    html! {
        footer class="site-footer" {
            div class="footer-grid" {
                div {
                    a href="/" class="brand" { (site.name) }
                    p { (site.tagline) }
                }
                div {
                    h4 { "Quick Links" }
                    ul {
                        li { a href="/about" { "About Us" } }
                        li { a href="/gallery" { "Gallery" } }
                        li { a href="/faq" { "FAQ" } }
                        li { a href="/contact" { "Contact" } }
                    }
                }
                div {
                    h4 { "Property Types" }
                    ul {
                        @for category in PropertyCategory::ALL {
                            li {
                                a href={ "/?type=" (category.label().to_lowercase()) } { (category.label()) }
                            }
                        }
                    }
                }
                div {
                    h4 { "Contact" }
                    ul {
                        li { a href={ "tel:" (site.phone.replace(' ', "")) } { (site.phone) } }
                        li { a href={ "mailto:" (site.email) } { (site.email) } }
                        li { (site.address) }
                    }
                }
            }
            p class="copyright" { "© " (site.name) ". All rights reserved." }
        }
    }
}
