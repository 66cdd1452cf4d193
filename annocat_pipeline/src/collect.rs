use annocat_core::{Catalog, Category, EntityRecord};
use tracing::info;

/// Partition merged records into the five category buckets.
///
/// Order within a bucket is the order of `records`. Empty buckets stay in the
/// catalog.
#[must_use]
pub fn collect_catalog(records: impl IntoIterator<Item = EntityRecord>) -> Catalog {
    let mut catalog = Catalog::default();
    for record in records {
        catalog.push(record);
    }

    for category in Category::ALL {
        info!("{category}: {} entities", catalog.bucket(category).len());
    }
    catalog
}
