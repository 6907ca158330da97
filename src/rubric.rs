use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RubricMetric {
    pub key: String,
    pub label: String,
    pub max_weight: f64,
}

/// Ordered rubric descriptor. The aggregation and view code is
/// schema-agnostic; all metric keys and weight caps come from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rubric {
    pub metrics: Vec<RubricMetric>,
    #[serde(default = "default_total_weight")]
    pub total_weight: f64,
}

fn default_total_weight() -> f64 {
    100.0
}

impl Rubric {
    /// Built-in four-metric profile of the floor-plan conversion benchmark.
    pub fn floor_plan_v1() -> Self {
        Self {
            metrics: vec![
                RubricMetric {
                    key: "3d_conversion_fundamentals".to_string(),
                    label: "3D Fundamentals".to_string(),
                    max_weight: 35.0,
                },
                RubricMetric {
                    key: "geometric_accuracy".to_string(),
                    label: "Geometric Accuracy".to_string(),
                    max_weight: 30.0,
                },
                RubricMetric {
                    key: "interior_elements".to_string(),
                    label: "Interior Elements".to_string(),
                    max_weight: 15.0,
                },
                RubricMetric {
                    key: "visual_clarity".to_string(),
                    label: "Visual Clarity".to_string(),
                    max_weight: 20.0,
                },
            ],
            total_weight: 100.0,
        }
    }

    pub fn metric(&self, key: &str) -> Option<&RubricMetric> {
        self.metrics.iter().find(|m| m.key == key)
    }

    pub fn max_weight(&self, key: &str) -> Option<f64> {
        self.metric(key).map(|m| m.max_weight)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.metric(key).is_some()
    }

    /// Headline metric used for the single-metric insight.
    pub fn primary_metric(&self) -> Option<&RubricMetric> {
        self.metrics.first()
    }
}
