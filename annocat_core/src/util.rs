//! Small helpers shared by the entity types.

/// Lemma value emitted by the upstream tagger when it could not lemmatize a token.
pub const UNKNOWN_LEMMA: &str = "<unknown>";

/// Append `value` unless an equal element is already present.
///
/// Keeps first-seen order, which is what the catalog output relies on for
/// `terms` and `pages`. Returns `true` if the value was inserted.
pub fn push_unique<T: PartialEq>(items: &mut Vec<T>, value: T) -> bool {
    if items.contains(&value) {
        false
    } else {
        items.push(value);
        true
    }
}
