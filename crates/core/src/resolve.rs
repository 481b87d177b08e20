//! Slug resolution over an in-memory collection.
//!
//! Boards are small and bounded (dozens), so the full list is fetched
//! wholesale and resolved locally. Videos are unbounded and resolved by a
//! database point query instead; this module is deliberately not used for
//! them.

/// Outcome of resolving a slug against a collection.
///
/// "Collection not loaded yet" and "slug genuinely absent" are distinct
/// states: consumers render a loading placeholder for the former and a
/// not-found page for the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugLookup<'a, T> {
    /// The backing collection is empty, i.e. has not been loaded.
    Unloaded,
    /// The collection is loaded but contains no entry with this slug.
    Missing,
    /// The unique entry carrying this slug.
    Found(&'a T),
}

/// Resolve `slug` against `items` by exact equality.
///
/// Linear scan, first match; slugs are unique in the store, so the first
/// match is also the only one. Never panics.
pub fn resolve_by_slug<'a, T, F>(items: &'a [T], slug: &str, slug_of: F) -> SlugLookup<'a, T>
where
    F: Fn(&T) -> &str,
{
    if items.is_empty() {
        return SlugLookup::Unloaded;
    }
    match items.iter().find(|item| slug_of(item) == slug) {
        Some(item) => SlugLookup::Found(item),
        None => SlugLookup::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[derive(Debug)]
    struct Entry {
        slug: &'static str,
        name: &'static str,
    }

    fn boards() -> Vec<Entry> {
        vec![
            Entry { slug: "drama", name: "Drama" },
            Entry { slug: "movie", name: "Movie" },
        ]
    }

    #[test]
    fn finds_exact_match() {
        let items = boards();
        let found = resolve_by_slug(&items, "movie", |e| e.slug);
        assert_matches!(found, SlugLookup::Found(e) if e.name == "Movie");
    }

    #[test]
    fn missing_slug_in_loaded_collection() {
        let items = boards();
        assert_matches!(
            resolve_by_slug(&items, "music", |e| e.slug),
            SlugLookup::Missing
        );
    }

    #[test]
    fn empty_collection_is_unloaded_not_missing() {
        let items: Vec<Entry> = Vec::new();
        assert_matches!(
            resolve_by_slug(&items, "movie", |e| e.slug),
            SlugLookup::Unloaded
        );
    }

    #[test]
    fn no_partial_matches() {
        let items = boards();
        assert_matches!(
            resolve_by_slug(&items, "mov", |e| e.slug),
            SlugLookup::Missing
        );
    }
}
