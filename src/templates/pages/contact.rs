use crate::config::SiteConfig;
use crate::domain::inquiry::{ContactInquiry, FieldErrors};
use crate::domain::PropertyCategory;
use crate::templates::components::{select_field, text_field, textarea_field, Field};
use crate::templates::{desktop_layout, PageMeta};
use maud::{html, Markup};

fn meta() -> PageMeta<'static> {
    PageMeta {
        title: "Contact Us",
        description: "Questions about a stay or listing your property? Get in touch.",
        active: "/contact",
    }
}

fn interest_options(categories: &[PropertyCategory]) -> Vec<(String, String)> {
    std::iter::once((String::new(), "Select a property type".to_string()))
        .chain(
            categories
                .iter()
                .map(|c| (c.label().to_string(), c.label().to_string())),
        )
        .collect()
}

fn info_cards(site: &SiteConfig) -> Markup {
    html! {
        div class="contact-info" {
            div class="card" {
                h3 { "Phone" }
                a href={ "tel:" (site.phone.replace(' ', "")) } { (site.phone) }
            }
            div class="card" {
                h3 { "Email" }
                a href={ "mailto:" (site.email) } { (site.email) }
            }
            div class="card" {
                h3 { "Address" }
                p { (site.address) }
            }
        }
    }
}

pub fn contact_page(
    inquiry: &ContactInquiry,
    errors: &FieldErrors,
    categories: &[PropertyCategory],
    site: &SiteConfig,
) -> Markup {
    let interest = inquiry.property_interest.as_deref().unwrap_or("");

    desktop_layout(
        &meta(),
        site,
        html! {
            main class="container" {
                h1 class="section-heading" { "Get in Touch" }
                p class="lead" { "Have a question or ready to book? We'd love to hear from you." }

                div class="contact-grid" {
                    (info_cards(site))

                    form method="post" action="/contact" class="card contact-form" novalidate {
                        div class="form-grid" {
                            (text_field(&Field::new("contact-name", "name", "Full Name", &inquiry.name, true), "text", "John Doe", errors))
                            (text_field(&Field::new("contact-email", "email", "Email", &inquiry.email, true), "email", "john@example.com", errors))
                            (text_field(&Field::new("contact-phone", "phone", "Phone Number", &inquiry.phone, true), "tel", "+256 700 123 456", errors))
                            (select_field(&Field::new("contact-property", "property", "Property of Interest", interest, false), &interest_options(categories), errors))
                        }
                        (textarea_field(&Field::new("contact-message", "message", "Message", &inquiry.message, true), 5, "How can we help you?", errors))
                        button type="submit" class="btn btn-accent" { "Send Message" }
                    }
                }
            }
        },
    )
}

pub fn contact_sent_page(reference: &str, site: &SiteConfig) -> Markup {
    desktop_layout(
        &meta(),
        site,
        html! {
            main class="container narrow confirmation" {
                h1 { "Message Sent Successfully!" }
                p { "Thank you for reaching out. We'll get back to you within 24 hours." }
                p { "Your reference: " strong class="reference" { (reference) } }
                p { a href="/" class="btn btn-navy" { "Back to home" } }
            }
        },
    )
}
