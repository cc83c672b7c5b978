//! Dependency names collected while resolving one document.

use std::collections::BTreeSet;

/// The include and style names a document's resolution reached.
///
/// Both sets are flattened and transitive: an include of an include, or a
/// style reached inside a spliced subtree, lands in the top document's
/// sets. The build cache persists these to decide staleness on later runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedDeps {
    /// Names of every layout document spliced in, transitively.
    pub includes: BTreeSet<String>,
    /// Names of every style document merged, transitively.
    pub styles: BTreeSet<String>,
}

impl ResolvedDeps {
    /// Records a spliced layout document.
    pub fn record_include(&mut self, name: &str) {
        self.includes.insert(name.to_string());
    }

    /// Records a merged style document.
    pub fn record_style(&mut self, name: &str) {
        self.styles.insert(name.to_string());
    }

    /// The include set as a sorted list, for persistence.
    pub fn include_list(&self) -> Vec<String> {
        self.includes.iter().cloned().collect()
    }

    /// The style set as a sorted list, for persistence.
    pub fn style_list(&self) -> Vec<String> {
        self.styles.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_deduplicate() {
        let mut deps = ResolvedDeps::default();
        deps.record_include("header");
        deps.record_include("header");
        deps.record_style("card");
        assert_eq!(deps.include_list(), vec!["header"]);
        assert_eq!(deps.style_list(), vec!["card"]);
    }

    #[test]
    fn lists_are_sorted() {
        let mut deps = ResolvedDeps::default();
        deps.record_include("b");
        deps.record_include("a");
        assert_eq!(deps.include_list(), vec!["a", "b"]);
    }
}
