// src/domain/inquiry.rs

use chrono::NaiveDate;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const MIN_GUESTS: u8 = 1;
pub const MAX_GUESTS: u8 = 8;

/// Field name -> message, rendered next to the offending input.
pub type FieldErrors = HashMap<&'static str, String>;

fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message.to_string());
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.trim().is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !EMAIL_RE.is_match(email.trim()) {
        errors.insert("email", "Please enter a valid email".to_string());
    }
}

/// Raw values from the contact page form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_interest: Option<String>,
    pub message: String,
}

impl ContactInquiry {
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let field = |k: &str| form.get(k).cloned().unwrap_or_default();
        Self {
            name: field("name"),
            email: field("email"),
            phone: field("phone"),
            property_interest: form.get("property").filter(|v| !v.trim().is_empty()).cloned(),
            message: field("message"),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Name is required");
        check_email(&mut errors, &self.email);
        require(&mut errors, "phone", &self.phone, "Phone number is required");
        require(&mut errors, "message", &self.message, "Message is required");

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Raw values from the booking form on a property page. Dates stay as the
/// submitted strings so the form can be re-rendered verbatim on error.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub property_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: String,
    pub message: String,
}

impl Default for BookingRequest {
    fn default() -> Self {
        Self {
            property_id: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            guests: MIN_GUESTS.to_string(),
            message: String::new(),
        }
    }
}

/// A booking request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidBooking {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u8,
}

impl ValidBooking {
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

fn parse_date(errors: &mut FieldErrors, field: &'static str, value: &str, label: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, format!("{label} date is required"));
        return None;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(_) => {
            errors.insert(field, format!("{label} date must be YYYY-MM-DD"));
            None
        }
    }
}

impl BookingRequest {
    pub fn from_form(property_id: &str, form: &HashMap<String, String>) -> Self {
        let field = |k: &str| form.get(k).cloned().unwrap_or_default();
        let guests = form
            .get("guests")
            .filter(|v| !v.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| MIN_GUESTS.to_string());

        Self {
            property_id: property_id.to_string(),
            name: field("name"),
            email: field("email"),
            phone: field("phone"),
            check_in: field("check_in"),
            check_out: field("check_out"),
            guests,
            message: field("message"),
        }
    }

    pub fn validate(&self) -> Result<ValidBooking, FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Name is required");
        check_email(&mut errors, &self.email);
        require(&mut errors, "phone", &self.phone, "Phone number is required");

        let check_in = parse_date(&mut errors, "check_in", &self.check_in, "Check-in");
        let check_out = parse_date(&mut errors, "check_out", &self.check_out, "Check-out");
        if let (Some(i), Some(o)) = (check_in, check_out) {
            if o <= i {
                errors.insert("check_out", "Check-out must be after check-in".to_string());
            }
        }

        let guests = match self.guests.trim().parse::<u8>() {
            Ok(g) if (MIN_GUESTS..=MAX_GUESTS).contains(&g) => Some(g),
            _ => {
                errors.insert(
                    "guests",
                    format!("Guests must be between {MIN_GUESTS} and {MAX_GUESTS}"),
                );
                None
            }
        };

        match (check_in, check_out, guests) {
            (Some(check_in), Some(check_out), Some(guests)) if errors.is_empty() => Ok(ValidBooking {
                check_in,
                check_out,
                guests,
            }),
            _ => Err(errors),
        }
    }
}
