use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Input fields of the recommendation form, in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Nitrogen,
    Phosphorus,
    Potassium,
    Temperature,
    Humidity,
    Ph,
    Rainfall,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Nitrogen,
        FormField::Phosphorus,
        FormField::Potassium,
        FormField::Temperature,
        FormField::Humidity,
        FormField::Ph,
        FormField::Rainfall,
    ];

    /// Element id of the input on the recommendation page.
    pub fn element_id(self) -> &'static str {
        match self {
            FormField::Nitrogen => "nitrogen",
            FormField::Phosphorus => "phosphorus",
            FormField::Potassium => "potassium",
            FormField::Temperature => "temperature",
            FormField::Humidity => "humidity",
            FormField::Ph => "ph",
            FormField::Rainfall => "rainfall",
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            FormField::Nitrogen | FormField::Phosphorus | FormField::Potassium
        )
    }
}

/// Body of `POST /api/recommend`.
///
/// `None` stands for a value that did not parse as a number. It is sent as
/// JSON `null` and left for the service to reject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(rename = "N")]
    pub nitrogen: Option<i64>,
    #[serde(rename = "P")]
    pub phosphorus: Option<i64>,
    #[serde(rename = "K")]
    pub potassium: Option<i64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub ph: Option<f64>,
    pub rainfall: Option<f64>,
}

/// Successful body of `POST /api/recommend`.
///
/// Only the fields shown to the user are strictly typed. The echoed
/// `input_parameters` are kept as opaque JSON and unknown fields land in
/// `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub crop: String,
    pub confidence: f64,
    pub season: String,
    pub duration: String,
    pub water_requirement: String,
    pub soil_type: String,
    pub tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_temp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_rainfall: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_probabilities: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_parameters: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
