use serde::{Deserialize, Serialize};

use crate::style::{ItemStyle, LineStyle, TextStyle};
use crate::value::{NumericOrString, OneOrMany};

/// Calendar coordinate system: one cell per day, laid out by week.
///
/// ```JSON
/// {
///     "range": "2017-02",
///     "cellSize": ["auto", 20]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
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
    // A year ("2017"), a month ("2017-02"), a day, or a [start, end] pair
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<OneOrMany<NumericOrString>>,
    // Cell width/height: one value for both, or [width, height]; "auto" fits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_size: Option<OneOrMany<NumericOrString>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_line: Option<CalendarSplitLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_label: Option<CalendarDayLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_label: Option<CalendarMonthLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_label: Option<CalendarYearLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSplitLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
}

/// Week-day labels along the calendar edge.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDayLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    // 0 is Sunday, 1 is Monday
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_day: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    // "start" or "end"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    // A locale id like "en", or seven custom names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_map: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(flatten)]
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonthLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    // A locale id like "en", or twelve custom names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_map: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(flatten)]
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarYearLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    // "top", "bottom", "left", "right"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent: Option<bool>,
    #[serde(flatten)]
    pub text_style: TextStyle,
}

#[cfg(test)]
mod tests {
    use super::Calendar;
    use serde_json::json;

    #[test]
    fn singular_cell_size_stays_bare_on_the_wire() {
        let wire = json!({ "range": "2017-02", "cellSize": 20 });
        let calendar: Calendar = serde_json::from_value(wire.clone()).unwrap();
        assert!(calendar.cell_size.as_ref().unwrap().is_singular());
        assert_eq!(serde_json::to_value(&calendar).unwrap(), wire);
    }

    #[test]
    fn mixed_cell_size_pair_keeps_order() {
        let wire = json!({ "cellSize": ["auto", 20] });
        let calendar: Calendar = serde_json::from_value(wire.clone()).unwrap();
        let cell_size = calendar.cell_size.as_ref().unwrap();
        assert_eq!(cell_size.get(0).unwrap().as_str(), Some("auto"));
        assert_eq!(cell_size.get(1).unwrap().as_f64().unwrap(), 20.0);
        assert_eq!(serde_json::to_value(&calendar).unwrap(), wire);
    }

    #[test]
    fn range_pair_round_trips() {
        let wire = json!({ "range": ["2017-01-02", "2017-02-23"] });
        let calendar: Calendar = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(calendar.range.as_ref().unwrap().len(), 2);
        assert_eq!(serde_json::to_value(&calendar).unwrap(), wire);
    }
}
