//! Embedded model comparison metrics and the two derived views.
//!
//! The numbers come from an offline training run and are treated as fixture
//! data; nothing here recomputes them.

/// One classifier's evaluation scores.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelMetricsRow {
    /// Display name, unique within the table.
    pub model_name: &'static str,
    /// Test-set accuracy in `[0, 1]`.
    pub accuracy: f64,
    /// Test-set precision in `[0, 1]`.
    pub precision: f64,
    /// Test-set recall in `[0, 1]`.
    pub recall: f64,
    /// F1 score in `[0, 1]`; sorts the chart.
    pub f1: f64,
}

const fn row(
    model_name: &'static str,
    accuracy: f64,
    precision: f64,
    recall: f64,
    f1: f64,
) -> ModelMetricsRow {
    ModelMetricsRow {
        model_name,
        accuracy,
        precision,
        recall,
        f1,
    }
}

/// Source rows in table order.
pub const MODEL_METRICS: [ModelMetricsRow; 5] = [
    row("Random Forest", 0.922179, 0.912666, 0.922179, 0.915575),
    row("CatBoost", 0.914412, 0.910601, 0.922179, 0.912991),
    row("XGBoost", 0.911089, 0.909318, 0.921089, 0.912005),
    row("LightGBM", 0.901265, 0.907719, 0.921265, 0.908404),
    row("Logistic Regression", 0.900902, 0.824285, 0.907902, 0.864075),
];

/// Decimal places used by the metrics table.
pub const TABLE_DECIMALS: usize = 6;
/// Decimal places used by the bar labels.
pub const BAR_LABEL_DECIMALS: usize = 4;

/// Metric columns shown in the table, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricColumn {
    Accuracy,
    Precision,
    Recall,
    F1,
}

impl MetricColumn {
    pub const ALL: [MetricColumn; 4] = [
        MetricColumn::Accuracy,
        MetricColumn::Precision,
        MetricColumn::Recall,
        MetricColumn::F1,
    ];

    pub fn title(self) -> &'static str {
        match self {
            MetricColumn::Accuracy => "Accuracy",
            MetricColumn::Precision => "Precision",
            MetricColumn::Recall => "Recall",
            MetricColumn::F1 => "F1 Score",
        }
    }

    pub fn value(self, row: &ModelMetricsRow) -> f64 {
        match self {
            MetricColumn::Accuracy => row.accuracy,
            MetricColumn::Precision => row.precision,
            MetricColumn::Recall => row.recall,
            MetricColumn::F1 => row.f1,
        }
    }
}

/// Format a score for the table.
pub fn format_table_value(value: f64) -> String {
    format!("{:.*}", TABLE_DECIMALS, value)
}

/// Format a score for a bar label.
pub fn format_bar_label(value: f64) -> String {
    format!("{:.*}", BAR_LABEL_DECIMALS, value)
}

/// Per-row flags marking which rows hold the maximum of `column`.
///
/// Ties mark every tied row.
pub fn column_max_flags(rows: &[ModelMetricsRow], column: MetricColumn) -> Vec<bool> {
    let max = rows
        .iter()
        .map(|row| column.value(row))
        .fold(f64::NEG_INFINITY, f64::max);
    rows.iter().map(|row| column.value(row) == max).collect()
}

/// Copy of `rows` ordered by descending F1. The input is left untouched.
pub fn sorted_by_f1_desc(rows: &[ModelMetricsRow]) -> Vec<ModelMetricsRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| b.f1.total_cmp(&a.f1));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(column: MetricColumn) -> Vec<&'static str> {
        column_max_flags(&MODEL_METRICS, column)
            .into_iter()
            .zip(MODEL_METRICS.iter())
            .filter(|(flag, _)| *flag)
            .map(|(_, row)| row.model_name)
            .collect()
    }

    #[test]
    fn highlights_column_maxima() {
        assert_eq!(marked(MetricColumn::Accuracy), vec!["Random Forest"]);
        assert_eq!(marked(MetricColumn::Precision), vec!["Random Forest"]);
        assert_eq!(marked(MetricColumn::Recall), vec!["Random Forest", "CatBoost"]);
        assert_eq!(marked(MetricColumn::F1), vec!["Random Forest"]);
    }

    #[test]
    fn f1_sort_is_descending_and_non_mutating() {
        let source = MODEL_METRICS;
        let sorted = sorted_by_f1_desc(&source);
        let names: Vec<_> = sorted.iter().map(|row| row.model_name).collect();
        assert_eq!(
            names,
            vec![
                "Random Forest",
                "CatBoost",
                "XGBoost",
                "LightGBM",
                "Logistic Regression"
            ]
        );
        assert!(sorted.windows(2).all(|pair| pair[0].f1 > pair[1].f1));
        assert_eq!(source, MODEL_METRICS);
    }

    #[test]
    fn sort_handles_reordered_input() {
        let mut shuffled = MODEL_METRICS;
        shuffled.reverse();
        let sorted = sorted_by_f1_desc(&shuffled);
        assert_eq!(sorted, sorted_by_f1_desc(&MODEL_METRICS));
        assert_eq!(shuffled[0].model_name, "Logistic Regression");
    }

    #[test]
    fn formats_keep_trailing_zeros() {
        assert_eq!(format_table_value(0.9), "0.900000");
        assert_eq!(format_table_value(0.915575), "0.915575");
        assert_eq!(format_bar_label(0.9), "0.9000");
        assert_eq!(format_bar_label(0.915575), "0.9156");
        assert_eq!(format_bar_label(0.864075), "0.8641");
    }

    #[test]
    fn empty_rows_have_no_highlight() {
        assert!(column_max_flags(&[], MetricColumn::F1).is_empty());
    }
}
