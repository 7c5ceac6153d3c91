use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::axis::{
    AxisLabel, AxisLine, AxisTick, AxisType, BoundaryGap, MinorTick,
};
use crate::style::TextStyle;
use crate::value::NumericOrString;

/// Parallel coordinate system: one vertical (or horizontal) axis per data
/// dimension.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parallel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zlevel: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    // Collapse axes to icons when the window is pressed for room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_expandable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_expand_center: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_expand_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_expand_width: Option<f64>,
    // "click", "mousemove" or "none"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_expand_trigger_on: Option<String>,
    // Defaults shared by every parallel axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_axis_default: Option<ParallelAxisDefault>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallelAxisDefault {
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
    pub data: Option<Vec<Value>>,
}

/// One axis of a parallel coordinate system, bound to a data dimension.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallelAxis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    // Dimension index this axis reads from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dim: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_index: Option<i64>,
    // Re-filter while the selection window is being dragged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_select_style: Option<AreaSelectStyle>,
    #[serde(flatten)]
    pub axis: ParallelAxisDefault,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSelectStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}
