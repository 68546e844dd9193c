//! Pure builders that turn the fixed dashboard content into view descriptions.
//!
//! Nothing here touches egui; the renderer in [`crate::egui_app::ui`] paints
//! whatever these functions return, so panels can be asserted on directly.

use crate::assets::AssetSource;
use crate::dashboard::catalog::{self, StateImageEntry};
use crate::dashboard::metrics::{self, MetricColumn, ModelMetricsRow};
use crate::dashboard::{DashboardTab, MODEL_METRICS};

/// Page title shown above the tab strip.
pub const PAGE_TITLE: &str = "🗳️ Indian Assembly Elections: Full Project Dashboard";
/// Intro line shown under the page title.
pub const PAGE_INTRO: &str =
    "This interactive dashboard displays the full project: EDA, Political Insights, and ML Model Results.";
/// Static image shown under the F1 chart.
pub const LOGISTIC_IMAGE: &str = "logistic.png";

/// One renderable element of a panel.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Header(String),
    Subheader(String),
    Paragraph(Vec<TextRun>),
    /// Bold run-in heading inside longer text.
    Strong(String),
    /// De-emphasized italic note.
    Note(String),
    Bullets(Vec<Vec<TextRun>>),
    Numbered(Vec<Vec<TextRun>>),
    Image {
        path: String,
        caption: String,
    },
    /// Inline user-visible error replacing an image.
    Error(String),
    Divider,
    /// Side-by-side columns, each a block list.
    Columns(Vec<Vec<Block>>),
    Expander {
        title: String,
        open: bool,
        body: Vec<Block>,
    },
    StatePicker(StatePickerView),
    MetricsTable(MetricsTableView),
    BarChart(BarChartView),
}

/// A stretch of text sharing one emphasis style.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    /// Rendered bold.
    pub strong: bool,
    /// Rendered in italics.
    pub italic: bool,
}

/// Split text marked with `**strong**` and `*italic*` into runs.
///
/// Markers toggle emphasis; an unclosed marker runs to the end of the text.
pub fn emphasis_runs(source: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut current = TextRun::default();
    let mut chars = source.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '*' {
            current.text.push(ch);
            continue;
        }
        let strong_marker = chars.peek() == Some(&'*');
        if strong_marker {
            chars.next();
        }
        let next = TextRun {
            text: String::new(),
            strong: current.strong ^ strong_marker,
            italic: current.italic ^ !strong_marker,
        };
        let finished = std::mem::replace(&mut current, next);
        if !finished.text.is_empty() {
            runs.push(finished);
        }
    }
    if !current.text.is_empty() {
        runs.push(current);
    }
    runs
}

/// Dropdown of Sankey states.
#[derive(Clone, Debug, PartialEq)]
pub struct StatePickerView {
    /// Label shown above the combo box.
    pub prompt: String,
    /// State labels in mapping order.
    pub options: Vec<&'static str>,
    /// Label the combo box currently shows.
    pub selected: &'static str,
}

/// One formatted metric value.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricCellView {
    /// Raw score, kept for comparison with the chart.
    pub value: f64,
    /// Score formatted with six decimals.
    pub text: String,
    /// Whether this cell holds its column's maximum.
    pub highlighted: bool,
}

/// A model's row in the metrics table.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricsRowView {
    /// Model name shown in the first column.
    pub model: &'static str,
    /// Cells in [`MetricColumn::ALL`] order.
    pub cells: Vec<MetricCellView>,
}

/// Metrics table with per-column maximum highlighting.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricsTableView {
    /// Column titles, starting with the model column.
    pub headers: Vec<&'static str>,
    /// Rows in source order.
    pub rows: Vec<MetricsRowView>,
}

/// One bar of the comparison chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarView {
    /// Model name, used for the x axis and legend.
    pub model: &'static str,
    /// Bar height.
    pub value: f64,
    /// Value printed above the bar, four decimals.
    pub label: String,
}

/// Bar chart of one metric per model, already in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartView {
    pub title: String,
    /// Axis titles.
    pub x_label: String,
    pub y_label: String,
    /// Bars left to right, highest F1 first.
    pub bars: Vec<BarView>,
}

/// Everything a tab displays, top to bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelView {
    pub tab: DashboardTab,
    pub blocks: Vec<Block>,
}

impl PanelView {
    /// Depth-first walk over every block, including nested ones.
    pub fn walk(&self) -> Vec<&Block> {
        fn visit<'a>(blocks: &'a [Block], out: &mut Vec<&'a Block>) {
            for block in blocks {
                out.push(block);
                match block {
                    Block::Columns(columns) => {
                        for column in columns {
                            visit(column, out);
                        }
                    }
                    Block::Expander { body, .. } => visit(body, out),
                    _ => {}
                }
            }
        }
        let mut out = Vec::new();
        visit(&self.blocks, &mut out);
        out
    }

    /// `(path, caption)` of every image block in display order.
    pub fn images(&self) -> Vec<(&str, &str)> {
        self.walk()
            .into_iter()
            .filter_map(|block| match block {
                Block::Image { path, caption } => Some((path.as_str(), caption.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Messages of every error block.
    pub fn errors(&self) -> Vec<&str> {
        self.walk()
            .into_iter()
            .filter_map(|block| match block {
                Block::Error(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Build the view for `tab`. `selection` only affects the political insights tab.
pub fn panel_for(
    tab: DashboardTab,
    selection: Option<&str>,
    assets: &dyn AssetSource,
) -> PanelView {
    match tab {
        DashboardTab::Univariate => univariate_panel(),
        DashboardTab::Bivariate => bivariate_panel(),
        DashboardTab::Multivariate => multivariate_panel(),
        DashboardTab::PoliticalInsights => party_hopping_panel(selection, assets),
        DashboardTab::ModelComparison => model_comparison_panel(&MODEL_METRICS, assets),
    }
}

fn image(path: &str, caption: &str) -> Block {
    Block::Image {
        path: path.to_string(),
        caption: caption.to_string(),
    }
}

fn titled_image(title: &str, path: &str, caption: &str) -> [Block; 2] {
    [Block::Subheader(title.to_string()), image(path, caption)]
}

fn text(value: &str) -> Block {
    Block::Paragraph(emphasis_runs(value))
}

fn items(values: &[&str]) -> Vec<Vec<TextRun>> {
    values.iter().map(|value| emphasis_runs(value)).collect()
}

/// Image block when the asset exists and decodes, otherwise an inline error.
fn checked_image(assets: &dyn AssetSource, path: &str, caption: String) -> Block {
    match assets.inspect(path) {
        Ok(_) => Block::Image {
            path: path.to_string(),
            caption,
        },
        Err(err) => {
            tracing::debug!("Asset {} unavailable: {err}", path);
            Block::Error(err.to_string())
        }
    }
}

/// Univariate EDA charts in two columns plus one full-width chart.
pub fn univariate_panel() -> PanelView {
    let left = [
        titled_image("Distribution of Candidate Sex", "uni1.png", "Distribution of Candidate Sex"),
        titled_image("Distribution of Candidate Age", "uni2.png", "Distribution of Candidate Age"),
        titled_image(
            "Top 15 Parties by Candidate Count",
            "uni3.png",
            "Top 15 Parties by Candidate Count",
        ),
    ];
    let right = [
        titled_image("Winning Margin %", "uni4.png", "Winning Margin"),
        titled_image("Voter Turnout %", "uni5.png", "Voter Turnout"),
        titled_image("Distribution of Winning Margin", "uni6.png", "Winning Margin %"),
    ];
    let mut blocks = vec![
        Block::Columns(vec![left.concat(), right.concat()]),
        Block::Divider,
    ];
    blocks.extend(titled_image(
        "Top 15 states by Number of Female Candidates Winning Elections(2009-2021)",
        "uni7.png",
        "Total Number of Female Winners",
    ));
    PanelView {
        tab: DashboardTab::Univariate,
        blocks,
    }
}

/// Bivariate EDA charts in two columns.
pub fn bivariate_panel() -> PanelView {
    let left = [
        titled_image(
            "Vote Share Percentage Distribution for Major Parties",
            "bi1.png",
            "Party-Wise",
        ),
        titled_image("Top 15 parties by Strike Rate", "bi3.png", "Party-Wise"),
        titled_image("Candidates Contesting Over the Years", "bi4.png", "For each year"),
    ];
    let right = [
        titled_image(
            "Total Electors vs. Election Outcome",
            "bi5.png",
            "Total Electors vs. Election Outcome",
        ),
        titled_image(
            "Age Distribution of Candidates for Major Parties",
            "bi7.png",
            "For Every Party",
        ),
        titled_image("Density of Wins in Indian States for BJP", "bi8.png", "BJP Win Rate"),
    ];
    PanelView {
        tab: DashboardTab::Bivariate,
        blocks: vec![Block::Columns(vec![left.concat(), right.concat()])],
    }
}

/// Correlation matrix with its collapsed insights.
pub fn multivariate_panel() -> PanelView {
    let mut blocks = titled_image(
        "Retention Rate",
        "mul1.png",
        "Correlation Matrix of Key Features",
    )
    .to_vec();
    blocks.push(Block::Expander {
        title: "Insights".to_string(),
        open: false,
        body: vec![text(
            "Shows the linear relationships between numerical features. There are no strong \
             correlations between predictors, which is good for many ML models. `result` is \
             weakly negatively correlated with `ac_total_candidates` (-0.23).",
        )],
    });
    blocks.push(Block::Divider);
    PanelView {
        tab: DashboardTab::Multivariate,
        blocks,
    }
}

/// Party-hopping Sankey viewer for the selected state.
///
/// Unknown or absent selections show the first state of the mapping.
pub fn party_hopping_panel(selection: Option<&str>, assets: &dyn AssetSource) -> PanelView {
    let selected: &StateImageEntry = catalog::resolve_selection(selection);
    let blocks = vec![
        Block::Header("🔍 Candidate Party-Hopping Analysis".to_string()),
        text(
            "This section visualizes the flow of candidates between the Top 5 political \
             parties for a selected state.",
        ),
        Block::Note("(Note: 'IND' candidates are excluded from this analysis)".to_string()),
        Block::StatePicker(StatePickerView {
            prompt: "Select a State to Analyze:".to_string(),
            options: catalog::state_labels().collect(),
            selected: selected.label,
        }),
        Block::Divider,
        Block::Subheader(format!(
            "Visualizing Candidate Flow for: {}",
            selected.label
        )),
        checked_image(
            assets,
            selected.path,
            format!("Sankey Chart for {}", selected.label),
        ),
        Block::Subheader("How to Read This Chart & Key Conclusions".to_string()),
        Block::Expander {
            title: "Click here for insights and analysis".to_string(),
            open: true,
            body: party_hopping_insights(),
        },
    ];
    PanelView {
        tab: DashboardTab::PoliticalInsights,
        blocks,
    }
}

fn party_hopping_insights() -> Vec<Block> {
    vec![
        text(
            "This Sankey chart visualizes the movement of political candidates *between* \
             different parties over time.",
        ),
        Block::Strong("Filters Applied (in the notebook):".to_string()),
        Block::Numbered(items(&[
            "**Independents Excluded:** All 'IND' candidates are removed from this analysis.",
            "**Top 5 Parties:** It *only* tracks movement to and from the Top 5 most active \
             parties in the *selected state*.",
        ])),
        Block::Strong("How to Read It:".to_string()),
        Block::Bullets(items(&[
            "**Timeframe:** This chart is **cumulative** (all years, 2009-2021).",
            "**Left Column (Source):** The party a candidate contested for in one election.",
            "**Right Column (Target):** The *different* party the *same candidate* contested \
             for in a *subsequent* election.",
            "**Flow Thickness:** Proportional to the **total number of candidates** who made \
             that switch.",
        ])),
        Block::Strong("Key Conclusions & What to Look For:".to_string()),
        Block::Bullets(items(&[
            "**High-Flow States (e.g., Maharashtra, Karnataka):** A chart with many thick, \
             crossing flows indicates a **volatile and fluid political landscape**.",
            "**Low-Flow States (e.g., Mizoram, Nagaland):** A chart with very few, thin flows \
             suggests **high party loyalty** and a rigid political structure.",
            "**Asymmetrical Flow (A \"Poaching\" Signal):** Look for \"one-way streets.\" If you \
             see a large flow from Party A to Party B, but *no* flow from B back to A, it can \
             signal a major power shift.",
        ])),
    ]
}

/// Highlighted metrics table, built from `rows` in their given order.
pub fn metrics_table(rows: &[ModelMetricsRow]) -> MetricsTableView {
    let flags: Vec<Vec<bool>> = MetricColumn::ALL
        .iter()
        .map(|column| metrics::column_max_flags(rows, *column))
        .collect();
    let rows = rows
        .iter()
        .enumerate()
        .map(|(row_idx, row)| MetricsRowView {
            model: row.model_name,
            cells: MetricColumn::ALL
                .iter()
                .zip(&flags)
                .map(|(column, column_flags)| {
                    let value = column.value(row);
                    MetricCellView {
                        value,
                        text: metrics::format_table_value(value),
                        highlighted: column_flags[row_idx],
                    }
                })
                .collect(),
        })
        .collect();
    let mut headers = vec!["Model"];
    headers.extend(MetricColumn::ALL.iter().map(|column| column.title()));
    MetricsTableView { headers, rows }
}

/// F1 bar chart, sorted from a private copy of `rows`.
pub fn f1_chart(rows: &[ModelMetricsRow]) -> BarChartView {
    let bars = metrics::sorted_by_f1_desc(rows)
        .into_iter()
        .map(|row| BarView {
            model: row.model_name,
            value: row.f1,
            label: metrics::format_bar_label(row.f1),
        })
        .collect();
    BarChartView {
        title: "Model Comparison by F1 Score".to_string(),
        x_label: "Model".to_string(),
        y_label: "F1 Score (Higher is Better)".to_string(),
        bars,
    }
}

/// Model comparison tab: table, F1 chart, baseline image and conclusions.
pub fn model_comparison_panel(rows: &[ModelMetricsRow], assets: &dyn AssetSource) -> PanelView {
    let blocks = vec![
        Block::Header("🤖 Machine Learning Model Comparison".to_string()),
        text(
            "This tab displays the performance metrics for various classification models \
             trained on the dataset.",
        ),
        Block::Subheader("Model Performance Metrics".to_string()),
        Block::MetricsTable(metrics_table(rows)),
        Block::Subheader("Visual Comparison (F1 Score)".to_string()),
        text(
            "F1 Score is a key metric for an imbalanced dataset as it balances Precision and \
             Recall.",
        ),
        Block::BarChart(f1_chart(rows)),
        Block::Divider,
        Block::Subheader("Baseline Model Analysis (Logistic Regression)".to_string()),
        checked_image(
            assets,
            LOGISTIC_IMAGE,
            "Analysis of the Logistic Regression model (e.g., Confusion Matrix)".to_string(),
        ),
        Block::Subheader("Key Conclusions from ML Modeling".to_string()),
        Block::Expander {
            title: "Click here for model insights".to_string(),
            open: true,
            body: vec![Block::Bullets(items(&[
                "**Top Performer:** The **Random Forest** model achieved the highest F1 Score (0.9156) \
                 and Precision (0.9127), making it the best-performing model for this task. It \
                 also tied for the highest Accuracy.",
                "**Strong Contenders:** CatBoost, XGBoost, and LightGBM (all gradient-boosted tree \
                 models) performed exceptionally well and were very close to the Random Forest.",
                "**Baseline Model:** The **Logistic Regression** model served as a strong baseline, but \
                 its F1 Score (0.8641) and Precision (0.8243) were significantly lower than the \
                 tree-based ensemble models. This indicates that the relationships between the \
                 features and the election outcome are complex and non-linear, which the tree \
                 models are better at capturing.",
                "**Overall Conclusion:** The high scores (F1 > 0.91) from the top models suggest \
                 that election outcomes are **highly predictable** given the features in this \
                 dataset.",
            ]))],
        },
    ];
    PanelView {
        tab: DashboardTab::ModelComparison,
        blocks,
    }
}
