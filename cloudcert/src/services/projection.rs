use crate::models::{CategoryFilter, Document};

/// Derives the hub's visible subset: case-insensitive substring match on the
/// document name combined with the category selector. Pure; preserves
/// collection order; recomputed on every call.
pub fn filter_documents<'a>(
    documents: &'a [Document],
    query: &str,
    filter: CategoryFilter,
) -> Vec<&'a Document> {
    let needle = query.to_lowercase();
    documents
        .iter()
        .filter(|doc| doc.name.to_lowercase().contains(&needle))
        .filter(|doc| filter.matches(doc.category))
        .collect()
}
