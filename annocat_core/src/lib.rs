#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod catalog;
pub mod entity;
pub mod grouping;
pub mod token;
pub mod util;

pub use catalog::{Bucket, Catalog, CatalogEntity};
pub use entity::{
    AuthorityColumn, Category, EntityRecord, Mention, Reference, ReferenceSet, ReferenceTableSpec,
    TagClass, classify_tag, default_reference_tables,
};
pub use grouping::{MentionBoundary, MergeKey};
pub use token::{RowLayout, TokenFields, TokenRow, default_layouts};
pub use util::{UNKNOWN_LEMMA, push_unique};
