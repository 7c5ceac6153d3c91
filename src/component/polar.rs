use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::axis::{
    AxisLabel, AxisLine, AxisTick, AxisType, BoundaryGap, MinorSplitLine, MinorTick, SplitArea,
    SplitLine,
};
use crate::component::axis_pointer::AxisPointer;
use crate::component::tooltip::Tooltip;
use crate::style::TextStyle;
use crate::value::{NumericOrString, OneOrMany};

/// Polar coordinate system, holding one radius axis and one angle axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zlevel: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<i64>,
    // [x, y] as pixels or percents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Vec<NumericOrString>>,
    // Outer radius, or [inner, outer]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<OneOrMany<NumericOrString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
}

/// Radial axis of a polar coordinate system.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiusAxis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polar_index: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_gap: Option<BoundaryGap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_number: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_interval: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_interval: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_base: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_event: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_line: Option<AxisLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_tick: Option<AxisTick>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor_tick: Option<MinorTick>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<AxisLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_line: Option<SplitLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor_split_line: Option<MinorSplitLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_area: Option<SplitArea>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_pointer: Option<AxisPointer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zlevel: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<i64>,
}

/// Angular axis of a polar coordinate system.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleAxis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polar_index: Option<i64>,
    // Degrees, 90 is twelve o'clock
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clockwise: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_gap: Option<BoundaryGap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_number: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_interval: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_interval: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_base: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_event: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_line: Option<AxisLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_tick: Option<AxisTick>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor_tick: Option<MinorTick>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<AxisLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_line: Option<SplitLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor_split_line: Option<MinorSplitLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_area: Option<SplitArea>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_pointer: Option<AxisPointer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zlevel: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<i64>,
}
