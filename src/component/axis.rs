use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::color::Color;
use crate::component::axis_pointer::AxisPointer;
use crate::style::{LineStyle, TextStyle};
use crate::value::{NumericOrString, OneOrMany};

/// Axis scale kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Value,
    Category,
    Time,
    Log,
}

/// Gap policy at both ends of the axis. Category axes use the boolean form;
/// value axes take a `[min, max]` span of values or percent strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundaryGap {
    Toggle(bool),
    Span(Vec<NumericOrString>),
}

/// Cartesian axis shared by `xAxis` and `yAxis`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_ticks: Option<bool>,
    // "top", "bottom" for x; "left", "right" for y
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    // "start", "middle" or "end"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_truncate: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_gap: Option<BoundaryGap>,
    // A number, or "dataMin" / a percent like "20%"
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
    // Category entries: names or per-entry {"value", "textStyle"} objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_pointer: Option<AxisPointer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration_update: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zlevel: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_zero_axis_index: Option<i64>,
    // "none" or an arrow shape; one value covers both ends, a pair splits them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_offset: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTick {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_with_label: Option<bool>,
    // Category axes: tick every n-th entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inside: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinorTick {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_number: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inside: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_min_label: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_max_label: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_overlap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_min_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_max_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_blur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset_y: Option<f64>,
    #[serde(flatten)]
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<SplitLineStyle>,
}

/// Like [`LineStyle`] but the color may rotate through a list, one entry per
/// split segment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLineStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub line_type: Option<OneOrMany<NumericOrString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_blur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinorSplitLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitArea {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_style: Option<SplitAreaStyle>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitAreaStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_blur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::{Axis, AxisType, BoundaryGap};
    use serde_json::json;

    #[test]
    fn category_axis_parses_with_boolean_gap() {
        let wire = json!({
            "type": "category",
            "boundaryGap": true,
            "data": ["Mon", "Tue", "Wed"]
        });
        let axis: Axis = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(axis.axis_type, Some(AxisType::Category));
        assert_eq!(axis.boundary_gap, Some(BoundaryGap::Toggle(true)));
        assert_eq!(serde_json::to_value(&axis).unwrap(), wire);
    }

    #[test]
    fn value_axis_takes_a_span_gap_and_data_extremes() {
        let wire = json!({
            "type": "value",
            "boundaryGap": ["20%", "20%"],
            "min": "dataMin",
            "max": 100
        });
        let axis: Axis = serde_json::from_value(wire.clone()).unwrap();
        match axis.boundary_gap.as_ref().unwrap() {
            BoundaryGap::Span(span) => assert_eq!(span.len(), 2),
            other => panic!("expected span gap, got {other:?}"),
        }
        assert_eq!(axis.min.as_ref().unwrap().as_str(), Some("dataMin"));
        assert_eq!(axis.max.as_ref().unwrap().as_f64().unwrap(), 100.0);
        assert_eq!(serde_json::to_value(&axis).unwrap(), wire);
    }
}
