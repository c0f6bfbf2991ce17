//! Chart series: the data handed to an external plotting collaborator.
//!
//! Three time-indexed panels (BMI, activity score, blood sugar) with fixed
//! y-axis ranges. Each path step is one time unit, numbered from 1.

use glucopath_kernel::proof::canon::canonical_f64;
use glucopath_kernel::state::HealthStateV1;

/// Title over all three panels.
pub const CHART_TITLE: &str = "Growth Plan";

/// Closed y-axis range of a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRangeV1 {
    pub min: f64,
    pub max: f64,
}

pub const BMI_RANGE: AxisRangeV1 = AxisRangeV1 {
    min: 14.0,
    max: 30.0,
};

pub const ACTIVITY_RANGE: AxisRangeV1 = AxisRangeV1 {
    min: 0.0,
    max: 100.0,
};

pub const BLOOD_SUGAR_RANGE: AxisRangeV1 = AxisRangeV1 {
    min: 100.0,
    max: 400.0,
};

/// One line plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanelV1 {
    pub title: &'static str,
    pub y_label: &'static str,
    pub y_range: AxisRangeV1,
    pub values: Vec<f64>,
}

/// The three panels for one path, positionally aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeriesV1 {
    /// `1..=N` where N is the path length.
    pub time_points: Vec<u64>,
    pub bmi: ChartPanelV1,
    pub activity: ChartPanelV1,
    pub blood_sugar: ChartPanelV1,
}

impl ChartSeriesV1 {
    /// Split a start-to-goal path into the three panels.
    #[must_use]
    pub fn from_path(path: &[HealthStateV1]) -> Self {
        Self {
            time_points: (1..).take(path.len()).collect(),
            bmi: ChartPanelV1 {
                title: "BMI x Time",
                y_label: "BMI",
                y_range: BMI_RANGE,
                values: path.iter().map(|s| s.bmi).collect(),
            },
            activity: ChartPanelV1 {
                title: "Activity Score x Time",
                y_label: "Activity Score",
                y_range: ACTIVITY_RANGE,
                values: path.iter().map(|s| s.activity_score).collect(),
            },
            blood_sugar: ChartPanelV1 {
                title: "Blood Sugar Level x Time",
                y_label: "Blood Sugar Level",
                y_range: BLOOD_SUGAR_RANGE,
                values: path.iter().map(|s| s.blood_sugar).collect(),
            },
        }
    }

    /// Panels in display order (top to bottom).
    #[must_use]
    pub fn panels(&self) -> [&ChartPanelV1; 3] {
        [&self.bmi, &self.activity, &self.blood_sugar]
    }

    /// JSON form with floats as canonical strings.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "panels": self.panels().iter().map(|p| panel_to_json(p)).collect::<Vec<_>>(),
            "time_points": self.time_points,
            "title": CHART_TITLE,
        })
    }
}

fn panel_to_json(p: &ChartPanelV1) -> serde_json::Value {
    serde_json::json!({
        "title": p.title,
        "values": p.values.iter().map(|v| canonical_f64(*v)).collect::<Vec<_>>(),
        "y_label": p.y_label,
        "y_range": [canonical_f64(p.y_range.min), canonical_f64(p.y_range.max)],
    })
}
