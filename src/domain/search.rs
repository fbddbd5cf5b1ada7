// src/domain/search.rs

use crate::domain::faq::FaqRecord;
use crate::domain::filter::contains_folded;

/// FAQ keyword search. A blank query means "no filter" and returns every
/// record; otherwise a record matches when its question or answer contains the
/// query, ignoring case. Order is preserved.
pub fn search_faqs<'a>(faqs: &'a [FaqRecord], query: &str) -> Vec<&'a FaqRecord> {
    if query.trim().is_empty() {
        return faqs.iter().collect();
    }

    faqs.iter()
        .filter(|faq| contains_folded(&faq.question, query) || contains_folded(&faq.answer, query))
        .collect()
}
