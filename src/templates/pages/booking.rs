use crate::config::SiteConfig;
use crate::domain::inquiry::{BookingRequest, FieldErrors, ValidBooking, MAX_GUESTS, MIN_GUESTS};
use crate::domain::PropertyRecord;
use crate::templates::components::{price_tag, select_field, text_field, textarea_field, Field};
use crate::templates::{desktop_layout, PageMeta};
use maud::{html, Markup};

fn guest_options() -> Vec<(String, String)> {
    (MIN_GUESTS..=MAX_GUESTS)
        .map(|n| {
            let label = if n == 1 { "Guest" } else { "Guests" };
            (n.to_string(), format!("{n} {label}"))
        })
        .collect()
}

pub fn booking_form(p: &PropertyRecord, req: &BookingRequest, errors: &FieldErrors) -> Markup {
    html! {
        form method="post" action={ "/properties/" (p.id) "/book" } class="booking-form" novalidate {
            h2 { "Book this property" }
            p class="price-box" { (price_tag(p)) }

            div class="form-grid" {
                (text_field(&Field::new("booking-name", "name", "Full Name", &req.name, true), "text", "John Doe", errors))
                (text_field(&Field::new("booking-email", "email", "Email", &req.email, true), "email", "john@example.com", errors))
                (text_field(&Field::new("booking-phone", "phone", "Phone Number", &req.phone, true), "tel", "+256 700 123 456", errors))
                (select_field(&Field::new("booking-guests", "guests", "Guests", &req.guests, false), &guest_options(), errors))
                (text_field(&Field::new("booking-checkin", "check_in", "Check-in Date", &req.check_in, true), "date", "", errors))
                (text_field(&Field::new("booking-checkout", "check_out", "Check-out Date", &req.check_out, true), "date", "", errors))
            }
            (textarea_field(&Field::new("booking-message", "message", "Special Requests", &req.message, false), 3, "Any special requests or requirements...", errors))

            button type="submit" class="btn btn-accent btn-block" { "Confirm Booking" }
        }
    }
}

pub fn booking_confirmation(
    p: &PropertyRecord,
    stay: &ValidBooking,
    reference: &str,
    site: &SiteConfig,
) -> Markup {
    let meta = PageMeta {
        title: "Booking Request Sent",
        description: "Your booking request has been received.",
        active: "",
    };

    desktop_layout(
        &meta,
        site,
        html! {
            main class="container narrow confirmation" {
                h1 { "Booking Request Sent!" }
                p { "We'll get back to you within 24 hours to confirm your reservation." }
                dl class="summary" {
                    dt { "Property" } dd { (p.title) }
                    dt { "Dates" } dd { (stay.check_in.format("%d %b %Y").to_string()) " – " (stay.check_out.format("%d %b %Y").to_string()) }
                    dt { "Nights" } dd { (stay.nights()) }
                    dt { "Guests" } dd { (stay.guests) }
                    dt { "Reference" } dd class="reference" { (reference) }
                }
                p { a href="/" class="btn btn-navy" { "Back to home" } }
            }
        },
    )
}
