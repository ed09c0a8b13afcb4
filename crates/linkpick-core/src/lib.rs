//! Decisions behind a CMS link chooser: converting pasted URLs into page links,
//! building anchor/email/phone links, and deciding which pages may be chosen.

pub mod config;
pub mod error;
pub mod logging;

pub mod browse;
pub mod choose;
pub mod conversion;
pub mod link_text;
pub mod links;
pub mod page_type;
pub mod protocol;
pub mod resolver;
pub mod sitemap;
pub mod tree;
pub mod url_model;

/// Page identifier.
pub type PageId = u64;

pub use conversion::{ConversionDecision, ConversionPolicy, ExternalLinkSubmission, LinkResolver};
pub use error::LinkError;
pub use link_text::PriorSelection;
