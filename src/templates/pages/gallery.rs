use crate::config::SiteConfig;
use crate::domain::gallery::{GalleryImage, LightboxView};
use crate::templates::components::image_url;
use crate::templates::{desktop_layout, PageMeta};
use maud::{html, Markup};

pub fn gallery_page(images: &[GalleryImage], site: &SiteConfig) -> Markup {
    let meta = PageMeta {
        title: "Gallery",
        description: "Photos of our apartments, hostels, villas and unique stays across Uganda.",
        active: "/gallery",
    };

    desktop_layout(
        &meta,
        site,
        html! {
            main class="container" {
                h1 class="section-heading" { "Our Gallery" }
                p class="lead" { "Take a visual tour of our stunning properties across Uganda." }
                div class="masonry" {
                    @for image in images {
                        a href={ "/gallery/" (image.id) } class={ "tile " (image.height.class()) } {
                            img src=(image_url(image.image)) alt=(image.alt) loading="lazy";
                            div class="tile-caption" {
                                h3 { (image.title) }
                                p { (image.location) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn lightbox_page(view: &LightboxView, total: usize, site: &SiteConfig) -> Markup {
    let meta = PageMeta {
        title: view.current.title,
        description: view.current.alt,
        active: "/gallery",
    };

    desktop_layout(
        &meta,
        site,
        html! {
            main class="lightbox" role="dialog" aria-label="Image lightbox" {
                a href="/gallery" class="lightbox-close" aria-label="Close" { "×" }
                a href={ "/gallery/" (view.prev.id) } class="lightbox-prev" rel="prev" aria-label="Previous image" { "‹" }
                figure {
                    img src=(image_url(view.current.image)) alt=(view.current.alt);
                    figcaption {
                        h2 { (view.current.title) }
                        p { (view.current.location) }
                        p class="counter" { (view.index + 1) " / " (total) }
                    }
                }
                a href={ "/gallery/" (view.next.id) } class="lightbox-next" rel="next" aria-label="Next image" { "›" }
            }
        },
    )
}
