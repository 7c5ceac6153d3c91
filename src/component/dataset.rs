use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::BoolOrNumber;

/// Shared tabular data that series reference by index or id instead of
/// carrying their own `data`.
///
/// ```JSON
/// {
///     "source": [
///         ["product", "2015", "2016"],
///         ["Matcha Latte", 43.3, 85.8]
///     ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    // Rows, objects, or a column map; the engine decides by inspection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<Value>>,
    // true/false, or the number of header rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_header: Option<BoolOrNumber>,
    // Transform pipeline (filter/sort/custom), passed through verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_dataset_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_dataset_id: Option<String>,
    // Which result a multi-output transform feeds from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_transform_result: Option<i64>,
}
