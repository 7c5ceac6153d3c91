use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::style::{
    AreaStyle, Blur, Emphasis, ItemStyle, Label, LabelLayout, LabelLine, LineStyle, MarkArea,
    MarkLine, MarkPoint, Select,
};
use crate::value::{BoolOrNumber, BoolOrString, NumericOrString, OneOrMany};

/// Line / area series on a cartesian or polar coordinate system.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    // "series" or "data"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_by: Option<String>,
    // "cartesian2d" or "polar"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polar_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    // One size, or [width, height]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_keep_aspect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_offset: Option<Vec<NumericOrString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_symbol: Option<bool>,
    // true, false or "auto"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_all_symbol: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_hover_link: Option<bool>,
    // Series sharing a stack name pile up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    // "samesign", "all" or "positive"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_nulls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<bool>,
    // true, false, or the smoothing strength in (0, 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth: Option<BoolOrNumber>,
    // "sequence" or "none"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth_monotone: Option<String>,
    // "lttb", "average", "min", "max", "sum" or "none"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling: Option<String>,
    // true, false, "start", "middle" or "end"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_line: Option<LabelLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_layout: Option<LabelLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_style: Option<AreaStyle>,
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
    // Per-dimension names, or {"name", "type"} descriptors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<Value>>,
    // Dimension-to-channel wiring, e.g. {"x": "week", "y": "sales"}
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encode: Option<HashMap<String, Value>>,
    // "column" or "row"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_layout_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_group_id: Option<String>,
    // Points: numbers, [x, y] pairs, nulls, or {"value", "itemStyle"} objects
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
    pub animation_duration_update: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_easing_update: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_delay_update: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universal_transition: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<crate::component::tooltip::Tooltip>,
}
