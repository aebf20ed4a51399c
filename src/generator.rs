//! Synthetic training corpus generation.
//!
//! Each record is drawn from one of three segment profiles (good/mid/bad),
//! then deterministic post-hoc rules overwrite a few fields based on the
//! realized score. Segments are concatenated in configuration order with no
//! shuffle, so downstream consumers must shuffle explicitly if they need
//! label-balanced batches.

use rand::Rng;

use crate::errors::AppError;
use crate::models::LabeledLead;

/// Uniform candidate pool over a half-open integer range with a fixed
/// stride, e.g. incomes 100_000..200_000 in steps of 1000.
#[derive(Debug, Clone, Copy)]
pub struct StepRange {
    pub start: i64,
    pub end: i64,
    pub step: i64,
}

impl StepRange {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end, step: 1 }
    }

    pub const fn with_step(start: i64, end: i64, step: i64) -> Self {
        Self { start, end, step }
    }

    /// Number of candidate values in the pool.
    pub fn len(&self) -> usize {
        if self.step <= 0 || self.end <= self.start {
            return 0;
        }
        ((self.end - self.start + self.step - 1) / self.step) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draw one candidate uniformly. Callers validate non-emptiness first.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> i64 {
        self.start + self.step * rng.gen_range(0..self.len() as i64)
    }

    /// Whether `value` lies inside the half-open range (ignoring stride).
    pub fn contains(&self, value: i64) -> bool {
        value >= self.start && value < self.end
    }
}

/// Per-field candidate pools and score range for one lead-quality
/// archetype. A generated record belongs to exactly one segment at
/// creation time; the post-hoc overrides may still rewrite individual
/// fields afterwards, so final records are not segment-pure by design.
#[derive(Debug, Clone)]
pub struct SegmentProfile {
    pub name: String,
    pub lead_sources: Vec<String>,
    pub countries: Vec<String>,
    pub ages: StepRange,
    pub genders: Vec<String>,
    pub education_levels: Vec<String>,
    pub occupations: Vec<String>,
    pub industries: Vec<String>,
    pub incomes: StepRange,
    pub initial_responses: Vec<String>,
    pub do_not_contacts: Vec<String>,
    pub total_calls_attended: StepRange,
    pub total_meetings_attended: StepRange,
    pub general_knowledge: Vec<String>,
    pub business_knowledge: Vec<String>,
    pub company_sizes: Vec<String>,
    pub company_estimated_revenues: StepRange,
    pub lead_qualities: Vec<String>,
    pub lead_scores: StepRange,
}

fn pool(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn pick<'a, R: Rng>(rng: &mut R, values: &'a [String]) -> &'a str {
    &values[rng.gen_range(0..values.len())]
}

impl SegmentProfile {
    /// High-quality prospects: referral/paid/inbound sources, high income,
    /// engaged in calls and meetings.
    pub fn good() -> Self {
        Self {
            name: "good".to_string(),
            lead_sources: pool(&["REFERRAL", "PAID", "INBOUND"]),
            countries: pool(&["USA", "Canada", "UK", "Australia", "Japan"]),
            ages: StepRange::new(35, 60),
            genders: pool(&["MALE", "FEMALE", "OTHER"]),
            education_levels: pool(&["HIGH SCHOOL", "COLLEGE", "BACHELOR"]),
            occupations: pool(&["SELF-EMPLOYED", "BUSINESSMAN", "RETIRED"]),
            industries: pool(&["SERVICES", "RETAIL", "MANUFACTURING"]),
            incomes: StepRange::with_step(100_000, 200_000, 1000),
            initial_responses: pool(&["POSITIVE", "NEUTRAL"]),
            do_not_contacts: pool(&["No"]),
            total_calls_attended: StepRange::new(3, 8),
            total_meetings_attended: StepRange::new(2, 4),
            general_knowledge: pool(&["NOVICE", "INTERMEDIATE", "ADVANCED"]),
            business_knowledge: pool(&["NOVICE", "INTERMEDIATE", "ADVANCED"]),
            company_sizes: pool(&["MEDIUM", "LARGE"]),
            company_estimated_revenues: StepRange::with_step(1_000_000, 10_000_000, 1000),
            lead_qualities: pool(&["HOT", "WARM"]),
            lead_scores: StepRange::new(75, 100),
        }
    }

    /// Mid-range prospects: employed or between jobs, moderate income.
    pub fn mid() -> Self {
        Self {
            name: "mid".to_string(),
            lead_sources: pool(&["PAID", "OTHER"]),
            countries: pool(&["USA", "Canada", "UK", "Australia", "Japan"]),
            ages: StepRange::new(35, 45),
            genders: pool(&["MALE", "FEMALE", "OTHER"]),
            education_levels: pool(&["COLLEGE", "MASTER", "PhD"]),
            occupations: pool(&["EMPLOYEE", "UNEMPLOYED"]),
            industries: pool(&["SERVICES", "RETAIL", "MANUFACTURING"]),
            incomes: StepRange::with_step(80_000, 100_000, 1000),
            initial_responses: pool(&["POSITIVE", "NEUTRAL"]),
            do_not_contacts: pool(&["No"]),
            total_calls_attended: StepRange::new(3, 5),
            total_meetings_attended: StepRange::new(2, 3),
            general_knowledge: pool(&["NOVICE", "INTERMEDIATE", "ADVANCED"]),
            business_knowledge: pool(&["NOVICE", "INTERMEDIATE", "ADVANCED"]),
            company_sizes: pool(&["MEDIUM"]),
            company_estimated_revenues: StepRange::with_step(1_000_000, 10_000_000, 1000),
            lead_qualities: pool(&["HOT", "WARM"]),
            lead_scores: StepRange::new(50, 75),
        }
    }

    /// Low-quality prospects: low engagement, low revenue, likely cold.
    pub fn bad() -> Self {
        Self {
            name: "bad".to_string(),
            lead_sources: pool(&["REFERRAL", "ORGANIC", "PAID", "OTHER"]),
            countries: pool(&["India", "Pakistan", "Brazil", "China", "Germany", "France"]),
            ages: StepRange::new(18, 40),
            genders: pool(&["MALE", "FEMALE", "OTHER"]),
            education_levels: pool(&["BACHELOR", "MASTER", "PhD"]),
            occupations: pool(&["EMPLOYEE", "UNEMPLOYED", "BUSINESSMAN", "OTHER"]),
            industries: pool(&["FINANCE", "TECHNOLOGY", "HEALTHCARE"]),
            incomes: StepRange::with_step(20_000, 100_000, 1000),
            initial_responses: pool(&["NEGATIVE", "NEUTRAL"]),
            do_not_contacts: pool(&["Yes", "No"]),
            total_calls_attended: StepRange::new(1, 3),
            total_meetings_attended: StepRange::new(0, 1),
            general_knowledge: pool(&["NOVICE", "BASIC", "EXPERT"]),
            business_knowledge: pool(&["NOVICE", "BASIC", "EXPERT"]),
            company_sizes: pool(&["MEDIUM", "SMALL"]),
            company_estimated_revenues: StepRange::with_step(100_000, 1_000_000, 1000),
            lead_qualities: pool(&["COLD"]),
            lead_scores: StepRange::new(10, 45),
        }
    }

    /// Draw one record from this segment's pools, independently and
    /// uniformly with replacement.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> LabeledLead {
        LabeledLead {
            lead_source: pick(rng, &self.lead_sources).to_string(),
            country: pick(rng, &self.countries).to_string(),
            age: self.ages.sample(rng),
            gender: pick(rng, &self.genders).to_string(),
            education_level: pick(rng, &self.education_levels).to_string(),
            occupation: pick(rng, &self.occupations).to_string(),
            industry: pick(rng, &self.industries).to_string(),
            income: self.incomes.sample(rng),
            initial_response: pick(rng, &self.initial_responses).to_string(),
            do_not_contact: pick(rng, &self.do_not_contacts).to_string(),
            total_calls_attended: self.total_calls_attended.sample(rng),
            total_meetings_attended: self.total_meetings_attended.sample(rng),
            general_knowledge: pick(rng, &self.general_knowledge).to_string(),
            business_knowledge: pick(rng, &self.business_knowledge).to_string(),
            company_size: pick(rng, &self.company_sizes).to_string(),
            company_estimated_revenue: self.company_estimated_revenues.sample(rng),
            lead_quality: pick(rng, &self.lead_qualities).to_string(),
            lead_score: self.lead_scores.sample(rng),
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        let categorical_pools: [(&str, &Vec<String>); 10] = [
            ("lead_sources", &self.lead_sources),
            ("countries", &self.countries),
            ("genders", &self.genders),
            ("education_levels", &self.education_levels),
            ("occupations", &self.occupations),
            ("industries", &self.industries),
            ("initial_responses", &self.initial_responses),
            ("do_not_contacts", &self.do_not_contacts),
            ("general_knowledge", &self.general_knowledge),
            ("business_knowledge", &self.business_knowledge),
        ];
        for (field, values) in categorical_pools {
            if values.is_empty() {
                return Err(AppError::ConfigurationError(format!(
                    "segment '{}': empty candidate pool for {}",
                    self.name, field
                )));
            }
        }
        if self.company_sizes.is_empty() || self.lead_qualities.is_empty() {
            return Err(AppError::ConfigurationError(format!(
                "segment '{}': empty candidate pool for company_sizes or lead_qualities",
                self.name
            )));
        }

        let numeric_pools: [(&str, StepRange); 6] = [
            ("ages", self.ages),
            ("incomes", self.incomes),
            ("total_calls_attended", self.total_calls_attended),
            ("total_meetings_attended", self.total_meetings_attended),
            ("company_estimated_revenues", self.company_estimated_revenues),
            ("lead_scores", self.lead_scores),
        ];
        for (field, range) in numeric_pools {
            if range.is_empty() {
                return Err(AppError::ConfigurationError(format!(
                    "segment '{}': empty range for {}",
                    self.name, field
                )));
            }
        }

        Ok(())
    }
}

/// One segment plus how many records to draw from it.
#[derive(Debug, Clone)]
pub struct SegmentConfig {
    pub profile: SegmentProfile,
    pub count: usize,
}

/// Ordered segment configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub segments: Vec<SegmentConfig>,
}

impl GeneratorConfig {
    /// Default corpus: 5000 good, 1500 mid, 5000 bad. The asymmetry is
    /// intentional and matches the corpus the current model was trained on.
    pub fn defaults() -> Self {
        Self::with_counts(5000, 1500, 5000)
    }

    pub fn with_counts(good: usize, mid: usize, bad: usize) -> Self {
        Self {
            segments: vec![
                SegmentConfig {
                    profile: SegmentProfile::good(),
                    count: good,
                },
                SegmentConfig {
                    profile: SegmentProfile::mid(),
                    count: mid,
                },
                SegmentConfig {
                    profile: SegmentProfile::bad(),
                    count: bad,
                },
            ],
        }
    }

    /// Total number of records a run will produce.
    pub fn total(&self) -> usize {
        self.segments.iter().map(|s| s.count).sum()
    }

    /// Reject invalid parameters before any generation work begins.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.segments.is_empty() {
            return Err(AppError::ConfigurationError(
                "no segments configured".to_string(),
            ));
        }
        for segment in &self.segments {
            if segment.count == 0 {
                return Err(AppError::ConfigurationError(format!(
                    "segment '{}': sample count must be positive",
                    segment.profile.name
                )));
            }
            segment.profile.validate()?;
        }
        Ok(())
    }
}

/// Overwrite response/contact/quality fields based on the realized score.
///
/// Rules run in this exact order; the overlapping <50 and ≤30 thresholds
/// rely on later rules winning per field.
pub fn apply_score_overrides(lead: &mut LabeledLead) {
    if lead.lead_score > 85 {
        lead.initial_response = "POSITIVE".to_string();
        lead.lead_quality = "HOT".to_string();
    }
    if lead.lead_score < 50 {
        lead.lead_quality = "COLD".to_string();
    }
    if lead.lead_score <= 30 {
        lead.initial_response = "NEGATIVE".to_string();
        lead.do_not_contact = "Yes".to_string();
    }
}

/// Produce a labeled corpus: every segment sampled in order, then the
/// score-consistency overrides applied to every record. Output order is
/// generation order; no shuffling is performed.
pub fn generate_corpus<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<LabeledLead>, AppError> {
    config.validate()?;

    let mut leads = Vec::with_capacity(config.total());
    for segment in &config.segments {
        for _ in 0..segment.count {
            leads.push(segment.profile.sample(rng));
        }
        tracing::debug!(
            "Sampled {} '{}' segment leads",
            segment.count,
            segment.profile.name
        );
    }

    for lead in &mut leads {
        apply_score_overrides(lead);
    }

    tracing::info!("Generated {} labeled leads", leads.len());
    Ok(leads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_step_range_len() {
        assert_eq!(StepRange::new(35, 60).len(), 25);
        assert_eq!(StepRange::with_step(100_000, 200_000, 1000).len(), 100);
        assert_eq!(StepRange::new(5, 5).len(), 0);
        assert_eq!(StepRange::with_step(0, 10, 0).len(), 0);
    }

    #[test]
    fn test_step_range_sample_respects_stride() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = StepRange::with_step(20_000, 100_000, 1000);
        for _ in 0..200 {
            let v = range.sample(&mut rng);
            assert!(range.contains(v));
            assert_eq!((v - range.start) % range.step, 0);
        }
    }
}
