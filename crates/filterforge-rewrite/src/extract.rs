use filterforge_filter::Filter;

/// Returns the first leaf on `path` in pre-order, looking through junctions
/// and negations.
pub fn extract_filter<'a>(filter: &'a Filter, path: &str) -> Option<&'a Filter> {
    match filter {
        Filter::And(junction) | Filter::Or(junction) => junction
            .children()
            .iter()
            .find_map(|child| extract_filter(child, path)),
        Filter::Not(child) => child
            .as_deref()
            .and_then(|child| extract_filter(child, path)),
        leaf => leaf.has_property_path(path).then_some(leaf),
    }
}
