use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::style::{Blur, Emphasis, ItemStyle, Label, LabelLayout, Select};
use crate::value::BoolOrString;

/// Heatmap series: colored cells on cartesian/calendar coordinates, blurred
/// density spots on geo coordinates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    // "cartesian2d", "geo" or "calendar"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_index: Option<i64>,
    // Geo rendering only: spot radius in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_size: Option<f64>,
    // Geo rendering only: opacity floor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progressive: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progressive_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_layout: Option<LabelLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<Blur>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_mode: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zlevel: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encode: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_layout_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_group_id: Option<String>,
    // [x, y, value] triples, or {"value": [...]} objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universal_transition: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<crate::component::tooltip::Tooltip>,
}
