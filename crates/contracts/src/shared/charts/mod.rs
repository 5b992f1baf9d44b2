//! Chart configuration handed to the charting library.
//!
//! The shape mirrors what `new Chart(canvas, config)` expects, so a
//! [`ChartConfig`] serialized to JSON can be passed through as is.

pub mod palette;
pub mod presets;

pub use palette::{chart_colors, with_alpha, Palette};
pub use presets::{
    bar_options, chart_defaults, horizontal_bar_options, line_options, merge_options,
    pie_options, radar_options,
};

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
    Bubble,
    Radar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: Value,
}

impl ChartConfig {
    /// Config with the preset options matching `kind`.
    pub fn new(kind: ChartKind, labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        let options = match kind {
            ChartKind::Line => line_options(),
            ChartKind::Bar => bar_options(),
            ChartKind::Doughnut => pie_options(),
            ChartKind::Bubble => chart_defaults(),
            ChartKind::Radar => radar_options(),
        };
        Self {
            kind,
            data: ChartData { labels, datasets },
            options,
        }
    }

    /// Replaces the preset options.
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }

    /// Deep-merges `overrides` into the current options.
    pub fn merge_options(mut self, overrides: Value) -> Self {
        merge_options(&mut self.options, overrides);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<DataPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            label: label.into(),
            data,
            ..Default::default()
        }
    }

    pub fn from_values(label: impl Into<String>, values: &[f64]) -> Self {
        Self::new(label, values.iter().copied().map(DataPoint::from).collect())
    }

    pub fn background(mut self, color: impl Into<ColorSpec>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn border(mut self, color: impl Into<ColorSpec>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn border_width(mut self, width: f64) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn dashed(mut self) -> Self {
        self.border_dash = Some(vec![5.0, 5.0]);
        self
    }

    pub fn filled(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn tension(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self
    }
}

/// One value of a dataset. Missing values serialize as `null` and leave a gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataPoint {
    Bubble { x: f64, y: f64, r: f64 },
    Value(Option<f64>),
}

impl From<f64> for DataPoint {
    fn from(value: f64) -> Self {
        DataPoint::Value(Some(value))
    }
}

impl From<Option<f64>> for DataPoint {
    fn from(value: Option<f64>) -> Self {
        DataPoint::Value(value)
    }
}

/// A single color for the whole dataset or one color per data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for ColorSpec {
    fn from(color: &str) -> Self {
        ColorSpec::Single(color.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(color: String) -> Self {
        ColorSpec::Single(color)
    }
}

impl From<Vec<String>> for ColorSpec {
    fn from(colors: Vec<String>) -> Self {
        ColorSpec::Many(colors)
    }
}
