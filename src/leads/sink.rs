// src/leads/sink.rs

use crate::domain::inquiry::{BookingRequest, ContactInquiry, ValidBooking};
use crate::leads::reference::{email_fingerprint, generate_reference_default};

/// A validated lead ready to be handed off.
#[derive(Debug, Clone)]
pub enum Lead<'a> {
    Contact(&'a ContactInquiry),
    Booking {
        request: &'a BookingRequest,
        stay: &'a ValidBooking,
    },
}

impl Lead<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Lead::Contact(_) => "contact",
            Lead::Booking { .. } => "booking",
        }
    }

    fn email(&self) -> &str {
        match self {
            Lead::Contact(c) => &c.email,
            Lead::Booking { request, .. } => &request.email,
        }
    }
}

/// Where captured leads go. There is no submission target; implementations
/// decide what "captured" means and return the reference shown to the visitor.
pub trait LeadSink: Send + Sync {
    fn capture(&self, lead: Lead<'_>) -> String;
}

/// Records each lead as a structured log event and nothing more.
#[derive(Debug, Default)]
pub struct LogLeadSink;

impl LeadSink for LogLeadSink {
    fn capture(&self, lead: Lead<'_>) -> String {
        let reference = generate_reference_default();
        let email = email_fingerprint(lead.email());

        match &lead {
            Lead::Contact(c) => tracing::info!(
                %reference,
                kind = lead.kind(),
                email = %email,
                interest = c.property_interest.as_deref().unwrap_or("-"),
                "lead captured"
            ),
            Lead::Booking { request, stay } => tracing::info!(
                %reference,
                kind = lead.kind(),
                email = %email,
                property_id = %request.property_id,
                check_in = %stay.check_in,
                nights = stay.nights(),
                guests = stay.guests,
                "lead captured"
            ),
        }

        reference
    }
}
