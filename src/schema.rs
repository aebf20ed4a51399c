//! Canonical feature schema for the lead scoring model.
//!
//! The expanded column list is a fixed contract baked in from the training
//! corpus: numeric fields first, then one indicator column per
//! (categorical field, known value) pair. The downstream scaler and model
//! were fitted against this exact layout, so it is never derived from
//! incoming data.

/// Numeric fields, in canonical order. These occupy the head of every
/// feature vector and are the only columns the fitted scaler touches.
const NUMERIC_FIELDS: &[&str] = &[
    "age",
    "income",
    "total_calls_attended",
    "total_meetings_attended",
    "company_estimated_revenue",
];

/// Categorical fields in canonical record order, each with its closed
/// vocabulary of known values (lower-cased, sorted within the field).
/// Values outside a vocabulary carry no signal at encode time.
const CATEGORICAL_FIELDS: &[(&str, &[&str])] = &[
    ("lead_source", &["inbound", "organic", "other", "paid", "referral"]),
    (
        "country",
        &[
            "australia", "brazil", "canada", "china", "france", "germany", "india", "japan",
            "pakistan", "uk", "usa",
        ],
    ),
    ("gender", &["female", "male", "other"]),
    ("education_level", &["bachelor", "college", "high school", "master", "phd"]),
    (
        "occupation",
        &["businessman", "employee", "other", "retired", "self-employed", "unemployed"],
    ),
    (
        "industry",
        &["finance", "healthcare", "manufacturing", "retail", "services", "technology"],
    ),
    ("initial_response", &["negative", "neutral", "positive"]),
    ("do_not_contact", &["no", "yes"]),
    ("general_knowledge", &["advanced", "basic", "expert", "intermediate", "novice"]),
    ("business_knowledge", &["advanced", "basic", "expert", "intermediate", "novice"]),
    ("company_size", &["large", "medium", "small"]),
    ("lead_quality", &["cold", "hot", "warm"]),
];

/// Immutable feature schema shared by the encoder, the fitted scaler and
/// the trained model. Multiple schema versions can coexist in one process;
/// each lives in its own instance.
#[derive(Debug, Clone)]
pub struct LeadSchema {
    numeric: &'static [&'static str],
    categorical: &'static [(&'static str, &'static [&'static str])],
    columns: Vec<String>,
}

impl LeadSchema {
    /// The schema version the current scaler and model artifacts were
    /// fitted against.
    pub fn v1() -> Self {
        let mut columns: Vec<String> =
            NUMERIC_FIELDS.iter().map(|name| name.to_string()).collect();
        for (field, values) in CATEGORICAL_FIELDS {
            for value in *values {
                columns.push(format!("{}_{}", field, value));
            }
        }

        Self {
            numeric: NUMERIC_FIELDS,
            categorical: CATEGORICAL_FIELDS,
            columns,
        }
    }

    /// Ordered numeric field names.
    pub fn numeric_fields(&self) -> &'static [&'static str] {
        self.numeric
    }

    /// Ordered categorical fields with their closed vocabularies.
    pub fn categorical_fields(&self) -> &'static [(&'static str, &'static [&'static str])] {
        self.categorical
    }

    /// Known values for one categorical field, if the field exists.
    pub fn vocabulary(&self, field: &str) -> Option<&'static [&'static str]> {
        self.categorical
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, values)| *values)
    }

    /// The final expanded column list, in the order the model expects.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Total feature vector width.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of numeric columns at the head of the vector.
    pub fn numeric_width(&self) -> usize {
        self.numeric.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expanded_width() {
        let schema = LeadSchema::v1();
        assert_eq!(schema.numeric_width(), 5);
        assert_eq!(schema.width(), 62);
    }

    #[test]
    fn test_column_layout_is_stable() {
        let schema = LeadSchema::v1();
        let columns = schema.columns();

        // Numeric head, then indicators grouped by field.
        assert_eq!(columns[0], "age");
        assert_eq!(columns[4], "company_estimated_revenue");
        assert_eq!(columns[5], "lead_source_inbound");
        assert_eq!(columns[9], "lead_source_referral");
        assert_eq!(columns[10], "country_australia");
        assert_eq!(columns[26], "education_level_high school");
        assert_eq!(columns[61], "lead_quality_warm");
    }

    #[test]
    fn test_two_instances_agree() {
        let a = LeadSchema::v1();
        let b = LeadSchema::v1();
        assert_eq!(a.columns(), b.columns());
    }

    #[test]
    fn test_vocabulary_lookup() {
        let schema = LeadSchema::v1();
        assert_eq!(
            schema.vocabulary("company_size"),
            Some(&["large", "medium", "small"][..])
        );
        assert_eq!(schema.vocabulary("unknown_field"), None);
    }
}
