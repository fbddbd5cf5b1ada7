pub mod about;
pub mod booking;
pub mod contact;
pub mod faq;
pub mod gallery;
pub mod home;
pub mod properties;

pub use about::about_page;
pub use booking::booking_confirmation;
pub use contact::{contact_page, contact_sent_page};
pub use faq::{faq_page, FaqVm};
pub use gallery::{gallery_page, lightbox_page};
pub use home::{home_page, HomeVm};
pub use properties::{listing_page, property_page, results_fragment, ListingVm};
