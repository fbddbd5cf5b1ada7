pub mod faq;
pub mod filter;
pub mod gallery;
pub mod inquiry;
pub mod property;
pub mod search;

pub use faq::FaqRecord;
pub use filter::{filter_properties, FilterSpec};
pub use property::{PropertyCategory, PropertyRecord};
pub use search::search_faqs;
