use serde::{Deserialize, Serialize};

/// The five mutually exclusive dashboard tabs, in strip order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    #[default]
    #[serde(rename = "analysis_1")]
    Univariate,
    #[serde(rename = "analysis_2")]
    Bivariate,
    #[serde(rename = "analysis_3")]
    Multivariate,
    PoliticalInsights,
    ModelComparison,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 5] = [
        DashboardTab::Univariate,
        DashboardTab::Bivariate,
        DashboardTab::Multivariate,
        DashboardTab::PoliticalInsights,
        DashboardTab::ModelComparison,
    ];

    /// Label shown in the tab strip.
    pub fn title(self) -> &'static str {
        match self {
            DashboardTab::Univariate => "📊 Analysis - 1",
            DashboardTab::Bivariate => "📈 Analysis - 2",
            DashboardTab::Multivariate => "🌍 Analysis - 3",
            DashboardTab::PoliticalInsights => "🔍 Political Insights",
            DashboardTab::ModelComparison => "🤖 ML Model Comparison",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        tab: DashboardTab,
    }

    #[test]
    fn config_names_round_trip() {
        let parsed: Wrapper = toml::from_str("tab = \"analysis_2\"").unwrap();
        assert_eq!(parsed.tab, DashboardTab::Bivariate);
        let parsed: Wrapper = toml::from_str("tab = \"model_comparison\"").unwrap();
        assert_eq!(parsed.tab, DashboardTab::ModelComparison);
        assert!(toml::from_str::<Wrapper>("tab = \"nope\"").is_err());
    }

    #[test]
    fn strip_starts_with_default() {
        assert_eq!(DashboardTab::ALL[0], DashboardTab::default());
    }
}
