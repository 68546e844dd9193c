//! Interactive state owned by the window: active tab and Sankey selection.

use crate::dashboard::DashboardTab;
use crate::dashboard::catalog;

/// Everything the user can change while the dashboard is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardState {
    pub active_tab: DashboardTab,
    /// Label of the chosen Sankey state; always a key of the mapping.
    pub selected_state: &'static str,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DashboardTab::default())
    }
}

impl DashboardState {
    pub fn new(initial_tab: DashboardTab) -> Self {
        Self {
            active_tab: initial_tab,
            selected_state: catalog::default_state().label,
        }
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        if self.active_tab != tab {
            tracing::debug!("Switching to tab {:?}", tab);
            self.active_tab = tab;
        }
    }

    /// Select a Sankey state by label. Unknown labels are ignored.
    pub fn select_state(&mut self, label: &str) -> bool {
        let Some(entry) = catalog::lookup_state(label) else {
            tracing::warn!("Ignoring unknown state selection {label:?}");
            return false;
        };
        if self.selected_state != entry.label {
            tracing::debug!("Selected state {}", entry.label);
            self.selected_state = entry.label;
        }
        true
    }
}
