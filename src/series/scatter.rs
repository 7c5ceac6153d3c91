use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::style::{
    Blur, Emphasis, ItemStyle, Label, LabelLayout, LabelLine, MarkArea, MarkLine, MarkPoint,
    Select,
};
use crate::value::{BoolOrString, NumericOrString, OneOrMany};

/// Scatter series on cartesian, polar, geo, calendar or single-axis
/// coordinates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polar_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_axis_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_hover_link: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_keep_aspect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_offset: Option<Vec<NumericOrString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_line: Option<LabelLine>,
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
    pub progressive: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progressive_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_point: Option<MarkPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_line: Option<MarkLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_area: Option<MarkArea>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Value>>,
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
    pub universal_transition: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<crate::component::tooltip::Tooltip>,
}

/// Scatter variant that renders a ripple animation around each symbol.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectScatterSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_hover_link: Option<bool>,
    // Only "ripple" is defined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect_type: Option<String>,
    // "render" or "emphasis"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_effect_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ripple_effect: Option<RippleEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polar_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_keep_aspect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_offset: Option<Vec<NumericOrString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_line: Option<LabelLine>,
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
    pub mark_point: Option<MarkPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_line: Option<MarkLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_area: Option<MarkArea>,
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
    pub data: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_easing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universal_transition: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<crate::component::tooltip::Tooltip>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RippleEffect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<f64>,
    // Ripple radius relative to the symbol size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    // "stroke" or "fill"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brush_type: Option<String>,
}
