use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;

// ============ API Request/Response Models ============

/// One raw lead record as received from the caller: a loosely-typed mapping
/// from field name to value.
///
/// Callers send arbitrary JSON objects; the typed accessors below validate
/// presence and value types lazily, so the encoder can report exactly which
/// field is missing instead of rejecting the whole payload up front.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RawLead(pub Map<String, Value>);

impl RawLead {
    /// Build a record from field/value pairs. Mostly useful in tests and
    /// batch tooling.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Fetch a categorical field, normalized to lowercase.
    ///
    /// Absent key is a caller error (`MissingField`); a non-string value is
    /// `BadRequest`. Values outside the known vocabulary are NOT rejected
    /// here; the encoder maps them to all-zero indicators.
    pub fn categorical(&self, field: &str) -> Result<String, AppError> {
        let value = self
            .0
            .get(field)
            .ok_or_else(|| AppError::MissingField(field.to_string()))?;

        match value {
            Value::String(s) => Ok(s.to_lowercase()),
            other => Err(AppError::BadRequest(format!(
                "field '{}' must be a string, got: {}",
                field, other
            ))),
        }
    }

    /// Fetch a numeric field as f64.
    ///
    /// Accepts JSON numbers and numeric strings, mirroring the permissive
    /// input model of the upstream callers.
    pub fn numeric(&self, field: &str) -> Result<f64, AppError> {
        let value = self
            .0
            .get(field)
            .ok_or_else(|| AppError::MissingField(field.to_string()))?;

        match value {
            Value::Number(n) => n.as_f64().ok_or_else(|| {
                AppError::BadRequest(format!("field '{}' is not a finite number: {}", field, n))
            }),
            Value::String(s) => s.trim().parse::<f64>().map_err(|_| {
                AppError::BadRequest(format!(
                    "field '{}' must be numeric, got: \"{}\"",
                    field, s
                ))
            }),
            other => Err(AppError::BadRequest(format!(
                "field '{}' must be numeric, got: {}",
                field, other
            ))),
        }
    }
}

/// Response for a scoring request.
///
/// Field name matches the established wire contract of the service.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(rename = "Lead_Score")]
    pub lead_score: i64,
}

// ============ Synthetic Corpus Models ============

/// One fully-typed labeled lead produced by the synthetic corpus generator.
///
/// Field order matches the persisted CSV header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabeledLead {
    pub lead_source: String,
    pub country: String,
    pub age: i64,
    pub gender: String,
    pub education_level: String,
    pub occupation: String,
    pub industry: String,
    pub income: i64,
    pub initial_response: String,
    pub do_not_contact: String,
    pub total_calls_attended: i64,
    pub total_meetings_attended: i64,
    pub general_knowledge: String,
    pub business_knowledge: String,
    pub company_size: String,
    pub company_estimated_revenue: i64,
    pub lead_quality: String,
    /// Target label, present only in training data.
    pub lead_score: i64,
}

impl LabeledLead {
    /// View this labeled record as a raw inference input (label dropped),
    /// for feeding generated data back through the encoder.
    pub fn to_raw(&self) -> RawLead {
        RawLead::from_pairs([
            ("lead_source", Value::from(self.lead_source.clone())),
            ("country", Value::from(self.country.clone())),
            ("age", Value::from(self.age)),
            ("gender", Value::from(self.gender.clone())),
            ("education_level", Value::from(self.education_level.clone())),
            ("occupation", Value::from(self.occupation.clone())),
            ("industry", Value::from(self.industry.clone())),
            ("income", Value::from(self.income)),
            ("initial_response", Value::from(self.initial_response.clone())),
            ("do_not_contact", Value::from(self.do_not_contact.clone())),
            ("total_calls_attended", Value::from(self.total_calls_attended)),
            (
                "total_meetings_attended",
                Value::from(self.total_meetings_attended),
            ),
            ("general_knowledge", Value::from(self.general_knowledge.clone())),
            ("business_knowledge", Value::from(self.business_knowledge.clone())),
            ("company_size", Value::from(self.company_size.clone())),
            (
                "company_estimated_revenue",
                Value::from(self.company_estimated_revenue),
            ),
            ("lead_quality", Value::from(self.lead_quality.clone())),
        ])
    }
}
