//! Fixed lookup of state names to their pre-rendered Sankey images.

/// One dropdown option of the party-hopping tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateImageEntry {
    /// Display name shown in the dropdown and captions.
    pub label: &'static str,
    /// Image path relative to the asset root.
    pub path: &'static str,
}

const fn entry(label: &'static str, path: &'static str) -> StateImageEntry {
    StateImageEntry { label, path }
}

/// Sankey images in dropdown order. The first entry is the default selection.
pub const SANKEY_PLOTS: &[StateImageEntry] = &[
    entry("Maharashtra", "mah.png"),
    entry("Karnataka", "karnataka.png"),
    entry("Madhya Pradesh", "mp.png"),
    entry("Kerala", "kerala.png"),
    entry("Jharkhand", "jrk.png"),
    entry("Odisha", "odisha.png"),
    entry("Nagaland", "nagaland.png"),
    entry("Mizoram", "mizoram.png"),
    entry("Meghalaya", "meghalaya.png"),
    entry("Manipur", "manipur.png"),
];

/// Entry selected before the user touches the dropdown.
pub fn default_state() -> &'static StateImageEntry {
    &SANKEY_PLOTS[0]
}

/// Find the entry bound to `label`, if any.
pub fn lookup_state(label: &str) -> Option<&'static StateImageEntry> {
    SANKEY_PLOTS.iter().find(|entry| entry.label == label)
}

/// Resolve a selection, falling back to the default for unknown labels.
pub fn resolve_selection(label: Option<&str>) -> &'static StateImageEntry {
    label.and_then(lookup_state).unwrap_or_else(default_state)
}

/// Dropdown labels in declared order.
pub fn state_labels() -> impl Iterator<Item = &'static str> {
    SANKEY_PLOTS.iter().map(|entry| entry.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_is_maharashtra() {
        assert_eq!(default_state().label, "Maharashtra");
        assert_eq!(default_state().path, "mah.png");
        assert_eq!(resolve_selection(None).label, "Maharashtra");
    }

    #[test]
    fn labels_and_paths_are_unique() {
        let labels: HashSet<_> = state_labels().collect();
        let paths: HashSet<_> = SANKEY_PLOTS.iter().map(|entry| entry.path).collect();
        assert_eq!(labels.len(), SANKEY_PLOTS.len());
        assert_eq!(paths.len(), SANKEY_PLOTS.len());
        assert_eq!(SANKEY_PLOTS.len(), 10);
    }

    #[test]
    fn unknown_label_falls_back_to_default() {
        assert_eq!(resolve_selection(Some("Goa")), default_state());
        assert_eq!(resolve_selection(Some("Kerala")).path, "kerala.png");
    }
}
