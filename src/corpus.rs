//! Export a generated corpus to a flat CSV file.
//!
//! The header and column order are a contract with the training pipeline;
//! rows are written in generation order with no shuffle.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::AppError;
use crate::models::LabeledLead;

/// Header row of the persisted corpus, matching the raw lead field names
/// plus the label.
pub const CORPUS_HEADER: &str = "Lead_Source,Country,Age,Gender,Education_Level,Occupation,\
Industry,Income,Initial_Response,Do_Not_Contact,Total_Calls_Attended,Total_Meetings_Attended,\
General_Knowledge,Business_Knowledge,Company_Size,Company_Estimated_Revenue,Lead_Quality,Lead_Score";

/// Write a labeled corpus to `path` as CSV.
///
/// All categorical values come from closed vocabularies and all numeric
/// values are plain integers, so no quoting or escaping is needed.
pub fn write_corpus_csv(path: &Path, leads: &[LabeledLead]) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::InternalError(format!(
            "failed to create corpus file '{}': {}",
            path.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", CORPUS_HEADER)
        .map_err(|e| AppError::InternalError(format!("failed to write corpus header: {}", e)))?;

    for lead in leads {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            lead.lead_source,
            lead.country,
            lead.age,
            lead.gender,
            lead.education_level,
            lead.occupation,
            lead.industry,
            lead.income,
            lead.initial_response,
            lead.do_not_contact,
            lead.total_calls_attended,
            lead.total_meetings_attended,
            lead.general_knowledge,
            lead.business_knowledge,
            lead.company_size,
            lead.company_estimated_revenue,
            lead.lead_quality,
            lead.lead_score,
        )
        .map_err(|e| AppError::InternalError(format!("failed to write corpus row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::InternalError(format!("failed to flush corpus file: {}", e)))?;

    Ok(())
}
