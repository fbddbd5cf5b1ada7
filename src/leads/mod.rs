pub mod reference;
pub mod sink;

pub use sink::{Lead, LeadSink, LogLeadSink};
