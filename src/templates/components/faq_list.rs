use crate::domain::FaqRecord;
use maud::{html, Markup};

/// Accordion of FAQ entries. Open/closed state lives in each `<details>` element.
pub fn faq_list(faqs: &[&FaqRecord], query: &str) -> Markup {
    html! {
        @if faqs.is_empty() {
            div class="empty-state" {
                p { "No questions match \"" (query) "\"." }
                p { a href="/faq" { "Show all questions" } }
            }
        } @else {
            div class="faq-list" {
                @for faq in faqs {
                    details class="faq-item" id={ "faq-" (faq.id) } {
                        summary { (faq.question) }
                        p class="faq-answer" { (faq.answer) }
                        span class="faq-category" { (faq.category) }
                    }
                }
            }
        }
    }
}
