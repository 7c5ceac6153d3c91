use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::Color;
use crate::component::axis::Axis;
use crate::component::axis_pointer::AxisPointer;
use crate::component::brush::Brush;
use crate::component::calendar::Calendar;
use crate::component::data_zoom::DataZoom;
use crate::component::dataset::Dataset;
use crate::component::geo::Geo;
use crate::component::grid::Grid;
use crate::component::legend::Legend;
use crate::component::parallel::{Parallel, ParallelAxis};
use crate::component::polar::{AngleAxis, Polar, RadiusAxis};
use crate::component::radar::Radar;
use crate::component::single_axis::SingleAxis;
use crate::component::timeline::Timeline;
use crate::component::title::Title;
use crate::component::toolbox::Toolbox;
use crate::component::tooltip::Tooltip;
use crate::component::visual_map::VisualMap;
use crate::series::Series;
use crate::style::TextStyle;
use crate::value::{BoolOrString, OneOrMany};

/// The full option object handed to the charting engine.
///
/// Components the engine accepts as a single object or an array keep that
/// flexibility here. Nothing is defaulted: an absent field stays absent on
/// the wire, and what it means is the engine's business.
///
/// ```JSON
/// {
///     "title": { "text": "Weekly rainfall" },
///     "xAxis": { "type": "category", "data": ["Mon", "Tue"] },
///     "yAxis": { "type": "value" },
///     "series": [{ "type": "bar", "data": [12, 34] }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<OneOrMany<Title>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<OneOrMany<Legend>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<OneOrMany<Grid>>,
    #[serde(rename = "xAxis", skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<OneOrMany<Axis>>,
    #[serde(rename = "yAxis", skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<OneOrMany<Axis>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polar: Option<OneOrMany<Polar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_axis: Option<OneOrMany<RadiusAxis>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle_axis: Option<OneOrMany<AngleAxis>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radar: Option<OneOrMany<Radar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_zoom: Option<OneOrMany<DataZoom>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_map: Option<OneOrMany<VisualMap>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_pointer: Option<AxisPointer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolbox: Option<Toolbox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brush: Option<OneOrMany<Brush>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<OneOrMany<Geo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<OneOrMany<Parallel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_axis: Option<OneOrMany<ParallelAxis>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_axis: Option<OneOrMany<SingleAxis>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<OneOrMany<Calendar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<OneOrMany<Dataset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<OneOrMany<Series>>,
    // Palette the engine cycles through when series carry no color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<Color>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    // true, false or "auto" (follow the theme)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_easing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration_update: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_easing_update: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_delay_update: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_layer_threshold: Option<f64>,
    #[serde(rename = "useUTC", skip_serializing_if = "Option::is_none")]
    pub use_utc: Option<bool>,
}

impl ChartOptions {
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).with_context(|| "Invalid chart option object")
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).with_context(|| "Failed to serialize chart options")
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).with_context(|| "Failed to serialize chart options")
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).with_context(|| "Failed to serialize chart options")
    }
}

/// Parses a full option document.
pub fn parse_options(json: &str) -> Result<ChartOptions> {
    serde_json::from_str(json).with_context(|| "Invalid JSON: expected a chart option object")
}

#[cfg(test)]
mod tests {
    use super::{ChartOptions, parse_options};
    use crate::series::Series;
    use serde_json::json;

    #[test]
    fn single_axis_object_stays_an_object() {
        let wire = json!({
            "xAxis": { "type": "category", "data": ["Mon", "Tue"] },
            "yAxis": { "type": "value" },
            "series": [{ "type": "bar", "data": [12, 34] }]
        });
        let options = ChartOptions::from_value(wire.clone()).unwrap();
        assert!(options.x_axis.as_ref().unwrap().is_singular());
        assert_eq!(options.to_value().unwrap(), wire);
    }

    #[test]
    fn axis_arrays_stay_arrays() {
        let wire = json!({
            "yAxis": [{ "type": "value" }, { "type": "value" }]
        });
        let options = ChartOptions::from_value(wire.clone()).unwrap();
        assert_eq!(options.y_axis.as_ref().unwrap().len(), 2);
        assert_eq!(options.to_value().unwrap(), wire);
    }

    #[test]
    fn series_dispatches_by_type() {
        let options = parse_options(
            r#"{ "series": [{ "type": "funnel", "name": "conversion" }] }"#,
        )
        .unwrap();
        let series = options.series.as_ref().unwrap();
        assert!(matches!(series.get(0), Some(Series::Funnel(_))));
    }

    #[test]
    fn malformed_document_reports_context() {
        let err = parse_options("[1, 2, 3]").unwrap_err();
        assert!(format!("{err:#}").contains("chart option object"));
    }
}
