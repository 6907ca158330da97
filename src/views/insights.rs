use serde::Serialize;

use crate::rubric::Rubric;
use crate::views::summary::SummaryView;

#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub model: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricInsight {
    pub metric: String,
    pub label: String,
    pub max_weight: f64,
    pub model: String,
    pub mean: f64,
}

/// Headline reductions over the summary view. Ties keep the first row
/// encountered; the summary row order is deterministic, so these are.
#[derive(Debug, Clone, Serialize)]
pub struct Insights {
    pub top_performer: Insight,
    pub lowest_performer: Insight,
    pub top_metric: Option<MetricInsight>,
}

pub fn derive_insights(summary: &SummaryView, rubric: &Rubric) -> Option<Insights> {
    let first = summary.rows.first()?;

    let mut top = (first.model.as_str(), first.total);
    let mut low = (first.model.as_str(), first.total);
    for row in &summary.rows[1..] {
        if row.total > top.1 {
            top = (&row.model, row.total);
        }
        if row.total < low.1 {
            low = (&row.model, row.total);
        }
    }

    let top_metric = rubric.primary_metric().and_then(|metric| {
        let mut best: Option<(&str, f64)> = None;
        for row in &summary.rows {
            let mean = row.metrics.iter().find(|m| m.key == metric.key)?.mean;
            if best.is_none_or(|(_, b)| mean > b) {
                best = Some((&row.model, mean));
            }
        }
        best.map(|(model, mean)| MetricInsight {
            metric: metric.key.clone(),
            label: metric.label.clone(),
            max_weight: metric.max_weight,
            model: model.to_string(),
            mean,
        })
    });

    Some(Insights {
        top_performer: Insight {
            model: top.0.to_string(),
            value: top.1,
        },
        lowest_performer: Insight {
            model: low.0.to_string(),
            value: low.1,
        },
        top_metric,
    })
}
