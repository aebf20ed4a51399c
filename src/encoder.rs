//! Feature alignment: raw lead record to the canonical feature vector.
//!
//! The encoder is a pure, synchronous function of (record, schema, scaler).
//! Schema and scaler are read-only after load, so one encoder can serve
//! arbitrarily many concurrent callers.

use std::sync::Arc;

use crate::errors::AppError;
use crate::models::RawLead;
use crate::scaler::NumericScaler;
use crate::schema::LeadSchema;

/// Encodes raw lead records into the fixed-width, fixed-order numeric
/// vector the trained model expects.
#[derive(Clone)]
pub struct FeatureEncoder {
    schema: Arc<LeadSchema>,
    scaler: Arc<dyn NumericScaler>,
}

impl FeatureEncoder {
    /// Build an encoder after verifying that the scaler was fitted against
    /// this schema's numeric column layout.
    ///
    /// A divergence in length or order means the artifacts belong to a
    /// different schema version; scoring with them would silently corrupt
    /// every prediction, so construction fails with `SchemaMismatch`.
    pub fn new(
        schema: Arc<LeadSchema>,
        scaler: Arc<dyn NumericScaler>,
    ) -> Result<Self, AppError> {
        check_column_alignment("scaler", schema.numeric_fields(), scaler.columns())?;
        Ok(Self { schema, scaler })
    }

    /// The schema this encoder is bound to.
    pub fn schema(&self) -> &LeadSchema {
        &self.schema
    }

    /// Encode one raw record into the canonical feature vector.
    ///
    /// Numeric fields come first in schema order, then one indicator per
    /// (categorical field, known value) pair. A categorical value outside
    /// the known vocabulary contributes all-zero indicators for its field;
    /// that is expected input, not an error. Missing fields fail fast with
    /// `MissingField`.
    pub fn encode(&self, lead: &RawLead) -> Result<Vec<f64>, AppError> {
        let mut vector = Vec::with_capacity(self.schema.width());

        for field in self.schema.numeric_fields() {
            vector.push(lead.numeric(field)?);
        }

        for (field, vocabulary) in self.schema.categorical_fields() {
            let value = lead.categorical(field)?;
            for known in *vocabulary {
                vector.push(if value == *known { 1.0 } else { 0.0 });
            }
        }

        // Unpopulated columns cannot occur: the loops above emit exactly
        // schema.width() entries, indicators defaulting to 0.0.
        debug_assert_eq!(vector.len(), self.schema.width());

        self.scaler
            .transform(&mut vector[..self.schema.numeric_width()]);

        Ok(vector)
    }
}

/// Compare two column lists by length and order; `SchemaMismatch` carries
/// expected-vs-actual counts and the first diverging column so the fault
/// can be diagnosed without re-running.
pub fn check_column_alignment<E, A>(
    artifact: &str,
    expected: &[E],
    actual: &[A],
) -> Result<(), AppError>
where
    E: AsRef<str>,
    A: AsRef<str>,
{
    if expected.len() != actual.len() {
        return Err(AppError::SchemaMismatch(format!(
            "{} fitted against {} columns, schema defines {}",
            artifact,
            actual.len(),
            expected.len()
        )));
    }

    for (i, (e, a)) in expected.iter().zip(actual.iter()).enumerate() {
        if e.as_ref() != a.as_ref() {
            return Err(AppError::SchemaMismatch(format!(
                "{} column {} is '{}', schema expects '{}'",
                artifact,
                i,
                a.as_ref(),
                e.as_ref()
            )));
        }
    }

    Ok(())
}
