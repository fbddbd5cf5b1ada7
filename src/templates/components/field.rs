use crate::domain::inquiry::FieldErrors;
use maud::{html, Markup};

/// One labelled form control. `id` is also used to derive the error element id.
pub struct Field<'a> {
    pub id: &'a str,
    pub name: &'static str,
    pub label: &'a str,
    pub value: &'a str,
    pub required: bool,
}

impl<'a> Field<'a> {
    pub fn new(id: &'a str, name: &'static str, label: &'a str, value: &'a str, required: bool) -> Self {
        Self { id, name, label, value, required }
    }
}

fn error_for(field: &Field<'_>, errors: &FieldErrors) -> Option<String> {
    errors.get(field.name).cloned()
}

fn label(field: &Field<'_>) -> Markup {
    html! {
        label for=(field.id) {
            (field.label)
            @if field.required { " *" }
        }
    }
}

fn error_line(field: &Field<'_>, error: Option<&str>) -> Markup {
    html! {
        @if let Some(msg) = error {
            p id={ (field.id) "-error" } class="field-error" role="alert" { (msg) }
        }
    }
}

pub fn text_field(field: &Field<'_>, input_type: &str, placeholder: &str, errors: &FieldErrors) -> Markup {
    let error = error_for(field, errors);
    html! {
        div class="field" {
            (label(field))
            input
                id=(field.id)
                name=(field.name)
                type=(input_type)
                value=(field.value)
                placeholder=(placeholder)
                class=[error.as_ref().map(|_| "invalid")]
                aria-describedby=[error.as_ref().map(|_| format!("{}-error", field.id))]
                required[field.required];
            (error_line(field, error.as_deref()))
        }
    }
}

pub fn textarea_field(field: &Field<'_>, rows: u8, placeholder: &str, errors: &FieldErrors) -> Markup {
    let error = error_for(field, errors);
    html! {
        div class="field" {
            (label(field))
            textarea
                id=(field.id)
                name=(field.name)
                rows=(rows)
                placeholder=(placeholder)
                class=[error.as_ref().map(|_| "invalid")]
                required[field.required]
            { (field.value) }
            (error_line(field, error.as_deref()))
        }
    }
}

/// `options` are `(value, text)` pairs; the one equal to `field.value` is selected.
pub fn select_field(field: &Field<'_>, options: &[(String, String)], errors: &FieldErrors) -> Markup {
    let error = error_for(field, errors);
    html! {
        div class="field" {
            (label(field))
            select id=(field.id) name=(field.name) class=[error.as_ref().map(|_| "invalid")] {
                @for (value, text) in options {
                    option value=(value) selected[value == field.value] { (text) }
                }
            }
            (error_line(field, error.as_deref()))
        }
    }
}
