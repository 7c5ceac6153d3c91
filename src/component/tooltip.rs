use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::color::Color;
use crate::component::axis_pointer::AxisPointer;
use crate::style::TextStyle;
use crate::value::{NumericOrString, OneOrMany};

/// Hover tooltip. Position accepts a named anchor (`"inside"`, `"top"`, ...)
/// or an `[x, y]` pair of pixels/percents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    // "item", "axis" or "none"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_pointer: Option<AxisPointer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_show_content: Option<bool>,
    // "mousemove", "click", "mousemove|click" or "none"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterable: Option<bool>,
    // "html" or "richText"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_mode: Option<String>,
    // Keep the tooltip inside the chart rectangle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confine: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_to_body: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<OneOrMany<NumericOrString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
    // Template applied to numeric values only, e.g. "${c}"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_formatter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<OneOrMany<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_css_text: Option<String>,
    // "seriesAsc", "seriesDesc", "valueAsc" or "valueDesc"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Tooltip;
    use serde_json::json;

    #[test]
    fn position_accepts_anchor_and_pair() {
        let t: Tooltip = serde_json::from_value(json!({ "position": "top" })).unwrap();
        assert!(t.position.as_ref().unwrap().is_singular());

        let wire = json!({ "position": ["50%", 10] });
        let t: Tooltip = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(t.position.as_ref().unwrap().len(), 2);
        assert_eq!(serde_json::to_value(&t).unwrap(), wire);
    }
}
