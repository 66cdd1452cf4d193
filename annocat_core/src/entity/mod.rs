//! Entity model: categories, mentions, merged records and their references.
//!
//! A [`Mention`] is one contiguous run of tagged tokens on a page. Mentions
//! sharing a merge key fold into a single [`EntityRecord`], which accumulates
//! the pages and surface forms it was seen with.

pub mod category;
pub mod record;
pub mod reference;

pub use category::{Category, TagClass, classify_tag};
pub use record::{EntityRecord, Mention};
pub use reference::{
    AuthorityColumn, Reference, ReferenceSet, ReferenceTableSpec, default_reference_tables,
};
