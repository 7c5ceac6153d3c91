use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::color::Color;
use crate::style::TextStyle;
use crate::value::{BoolOrString, NumericOrString, OneOrMany};

/// Mapping from data values to visual channels (color, symbol size, opacity),
/// dispatched on its `type` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VisualMap {
    Continuous(ContinuousVisualMap),
    Piecewise(PiecewiseVisualMap),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuousVisualMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    // Initially selected [from, to] span
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Vec<f64>>,
    // Show drag handles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    // [high-end label, low-end label]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    // Dimension index, or a named dimension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_index: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_link: Option<bool>,
    // Visual channel values applied inside the selected range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_range: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of_range: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<VisualMapController>,
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
    pub orient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    // Shorthand for inRange color when only color is mapped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_size: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_style: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator_size: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator_style: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiecewiseVisualMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    // Piece count when pieces are derived from [min, max]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_number: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pieces: Option<Vec<VisualMapPiece>>,
    // Discrete category names, for enumerated data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_open: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_open: Option<bool>,
    // "multiple" or "single"; booleans pass through too
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_mode: Option<BoolOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_gap: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_label: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_index: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_link: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_range: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of_range: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<VisualMapController>,
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
    pub orient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
}

/// One explicit piece: a closed/open interval or a single value, with the
/// visuals to apply when data falls inside it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualMapPiece {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<NumericOrString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<f64>,
}

/// Visuals used by the selector widget itself rather than the chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualMapController {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_range: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of_range: Option<HashMap<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::VisualMap;
    use serde_json::json;

    #[test]
    fn piecewise_bounds_and_selection_mode_survive() {
        let wire = json!({
            "type": "piecewise",
            "selectedMode": "single",
            "pieces": [
                { "gt": 0.0, "lte": 50.0, "color": "#93CE07" },
                { "gt": 50.0, "color": "#FD0100" }
            ]
        });
        let map: VisualMap = serde_json::from_value(wire.clone()).unwrap();
        match &map {
            VisualMap::Piecewise(p) => {
                assert_eq!(p.pieces.as_ref().unwrap().len(), 2);
                assert_eq!(
                    p.selected_mode.as_ref().unwrap().as_str(),
                    Some("single")
                );
            }
            other => panic!("expected piecewise map, got {other:?}"),
        }
        assert_eq!(serde_json::to_value(&map).unwrap(), wire);
    }
}
