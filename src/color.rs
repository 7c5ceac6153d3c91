use serde::{Deserialize, Serialize};

/// A fill or stroke color: either a plain CSS color string or a gradient
/// object discriminated by its `type` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Plain(String),
    Gradient(Gradient),
}

impl From<&str> for Color {
    fn from(v: &str) -> Self {
        Color::Plain(v.to_owned())
    }
}

impl From<String> for Color {
    fn from(v: String) -> Self {
        Color::Plain(v)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Gradient {
    Linear(LinearGradient),
    Radial(RadialGradient),
}

/// Linear gradient between (x, y) and (x2, y2) in bounding-box coordinates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearGradient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y2: Option<f64>,
    #[serde(rename = "colorStops", skip_serializing_if = "Option::is_none")]
    pub color_stops: Option<Vec<ColorStop>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RadialGradient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
    #[serde(rename = "colorStops", skip_serializing_if = "Option::is_none")]
    pub color_stops: Option<Vec<ColorStop>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::{Color, Gradient};
    use serde_json::json;

    #[test]
    fn plain_color_is_a_bare_string() {
        let c: Color = serde_json::from_value(json!("#c23531")).unwrap();
        assert_eq!(c, Color::Plain("#c23531".into()));
        assert_eq!(serde_json::to_value(&c).unwrap(), json!("#c23531"));
    }

    #[test]
    fn gradient_dispatches_on_type_key() {
        let wire = json!({
            "type": "linear",
            "x": 0.0, "y": 0.0, "x2": 0.0, "y2": 1.0,
            "colorStops": [
                { "offset": 0.0, "color": "red" },
                { "offset": 1.0, "color": "blue" }
            ]
        });
        let c: Color = serde_json::from_value(wire.clone()).unwrap();
        match &c {
            Color::Gradient(Gradient::Linear(g)) => {
                assert_eq!(g.color_stops.as_ref().unwrap().len(), 2);
            }
            other => panic!("expected linear gradient, got {other:?}"),
        }
        assert_eq!(serde_json::to_value(&c).unwrap(), wire);
    }
}
