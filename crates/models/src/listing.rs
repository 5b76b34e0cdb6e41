//! Contract for rows displayed by listing pages.

/// A UI row that listing pages can filter and mutate.
///
/// `haystack` returns the fields the local (short-query) filter matches
/// against; which fields participate is fixed per entity.
pub trait ListRow: Clone {
    fn id(&self) -> i64;
    fn haystack(&self) -> Vec<&str>;

    /// Case-insensitive substring match over the haystack fields.
    fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.haystack()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
