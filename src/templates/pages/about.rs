use crate::config::SiteConfig;
use crate::templates::{desktop_layout, PageMeta};
use maud::{html, Markup};

const STATS: [(&str, &str); 4] = [
    ("5,000+", "Happy Guests"),
    ("150+", "Properties"),
    ("4.9", "Average Rating"),
    ("8+", "Years Experience"),
];

const MILESTONES: [(&str, &str, &str); 5] = [
    ("2016", "Company Founded", "Started with just 5 properties in Kampala"),
    ("2018", "Expanded to Entebbe", "Added airport-adjacent accommodations"),
    ("2020", "Digital Platform Launch", "Launched online booking system"),
    ("2022", "National Coverage", "Expanded to all major cities in Uganda"),
    ("2024", "150+ Properties", "Reached milestone of 150 verified properties"),
];

pub fn about_page(site: &SiteConfig) -> Markup {
    let meta = PageMeta {
        title: "About Us",
        description: "Our mission, our founder, and why thousands of guests choose us.",
        active: "/about",
    };

    desktop_layout(
        &meta,
        site,
        html! {
            main class="container" {
                section class="about-hero" {
                    h1 class="section-heading" { "About " (site.name) }
                    p class="lead" {
                        "We're on a mission to make finding your perfect accommodation in Uganda easy, affordable, and luxurious."
                    }
                    div class="stats" {
                        @for (value, label) in STATS {
                            div class="stat" {
                                div class="stat-value" { (value) }
                                div class="stat-label" { (label) }
                            }
                        }
                    }
                }

                section class="mission" {
                    h2 { "Our Mission" }
                    p {
                        "At " (site.name) ", we believe everyone deserves access to quality accommodation. "
                        "Whether you're a business traveler seeking luxury, a backpacker looking for budget-friendly options, "
                        "or a family planning a memorable vacation, we have the perfect property for you."
                    }
                    p {
                        "We partner with property owners across Uganda to bring you verified, high-quality accommodations at competitive prices."
                    }
                }

                section class="card founder" {
                    h3 { "Meet Our Founder" }
                    blockquote {
                        "I started " (site.name) " with a simple vision: to make quality accommodation accessible "
                        "to everyone visiting or living in Uganda."
                    }
                }

                section class="timeline" {
                    h2 { "Our Journey" }
                    ol {
                        @for (year, title, text) in MILESTONES {
                            li {
                                span class="year" { (year) }
                                h3 { (title) }
                                p { (text) }
                            }
                        }
                    }
                }
            }
        },
    )
}
