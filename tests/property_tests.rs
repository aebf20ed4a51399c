/// Property-based tests using proptest
/// Tests invariants and properties that should hold for all inputs
use proptest::prelude::*;
use std::sync::Arc;

use stormsales_api::encoder::FeatureEncoder;
use stormsales_api::errors::AppError;
use stormsales_api::generator::{apply_score_overrides, generate_corpus, GeneratorConfig};
use stormsales_api::models::{LabeledLead, RawLead};
use stormsales_api::scaler::StandardScaler;
use stormsales_api::schema::LeadSchema;

fn encoder() -> FeatureEncoder {
    let schema = LeadSchema::v1();
    let scaler = StandardScaler {
        columns: schema
            .numeric_fields()
            .iter()
            .map(|f| f.to_string())
            .collect(),
        mean: vec![0.0; schema.numeric_width()],
        scale: vec![1.0; schema.numeric_width()],
    };
    FeatureEncoder::new(Arc::new(schema), Arc::new(scaler)).unwrap()
}

fn record(
    categoricals: &[(&str, &str)],
    age: i64,
    income: i64,
    calls: i64,
    meetings: i64,
    revenue: i64,
) -> RawLead {
    let mut lead = RawLead::from_pairs(
        categoricals
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::from(*v))),
    );
    lead.0.insert("age".to_string(), serde_json::json!(age));
    lead.0.insert("income".to_string(), serde_json::json!(income));
    lead.0
        .insert("total_calls_attended".to_string(), serde_json::json!(calls));
    lead.0.insert(
        "total_meetings_attended".to_string(),
        serde_json::json!(meetings),
    );
    lead.0.insert(
        "company_estimated_revenue".to_string(),
        serde_json::json!(revenue),
    );
    lead
}

// Property: encoding arbitrary categorical values never panics and always
// yields the fixed schema width, with at most one indicator set per field.
proptest! {
    #[test]
    fn encode_width_fixed_for_arbitrary_values(
        lead_source in "\\PC*",
        country in "\\PC*",
        gender in "\\PC*",
        education in "\\PC*",
        occupation in "\\PC*",
        industry in "\\PC*",
        response in "\\PC*",
        dnc in "\\PC*",
        general in "\\PC*",
        business in "\\PC*",
        size in "\\PC*",
        quality in "\\PC*",
        age in 0i64..120,
        income in 0i64..1_000_000,
        calls in 0i64..50,
        meetings in 0i64..50,
        revenue in 0i64..100_000_000,
    ) {
        let enc = encoder();
        let schema = LeadSchema::v1();
        let lead = record(
            &[
                ("lead_source", lead_source.as_str()),
                ("country", country.as_str()),
                ("gender", gender.as_str()),
                ("education_level", education.as_str()),
                ("occupation", occupation.as_str()),
                ("industry", industry.as_str()),
                ("initial_response", response.as_str()),
                ("do_not_contact", dnc.as_str()),
                ("general_knowledge", general.as_str()),
                ("business_knowledge", business.as_str()),
                ("company_size", size.as_str()),
                ("lead_quality", quality.as_str()),
            ],
            age, income, calls, meetings, revenue,
        );

        let vector = enc.encode(&lead).unwrap();
        prop_assert_eq!(vector.len(), schema.width());

        // Indicators are always exactly 0 or 1, and each categorical field
        // sets at most one of its indicators (unknown values set none).
        let mut offset = schema.numeric_width();
        for (_, vocabulary) in schema.categorical_fields() {
            let block = &vector[offset..offset + vocabulary.len()];
            prop_assert!(block.iter().all(|v| *v == 0.0 || *v == 1.0));
            prop_assert!(block.iter().sum::<f64>() <= 1.0);
            offset += vocabulary.len();
        }
    }
}

// Property: omitting any one required field always yields MissingField
// naming exactly that field, never a silent default.
proptest! {
    #[test]
    fn any_missing_field_is_rejected_by_name(index in 0usize..17) {
        let enc = encoder();
        let fields = [
            "lead_source", "country", "gender", "education_level", "occupation",
            "industry", "initial_response", "do_not_contact", "general_knowledge",
            "business_knowledge", "company_size", "lead_quality",
            "age", "income", "total_calls_attended", "total_meetings_attended",
            "company_estimated_revenue",
        ];
        let mut lead = record(
            &[
                ("lead_source", "paid"), ("country", "usa"), ("gender", "other"),
                ("education_level", "college"), ("occupation", "employee"),
                ("industry", "services"), ("initial_response", "neutral"),
                ("do_not_contact", "no"), ("general_knowledge", "novice"),
                ("business_knowledge", "novice"), ("company_size", "medium"),
                ("lead_quality", "warm"),
            ],
            40, 90_000, 3, 2, 2_000_000,
        );
        lead.0.remove(fields[index]);

        match enc.encode(&lead) {
            Err(AppError::MissingField(field)) => prop_assert_eq!(field, fields[index]),
            other => prop_assert!(false, "expected MissingField, got {:?}", other),
        }
    }
}

// Property: generated segment scores always fall inside the segment's
// configured range, and the corpus preserves segment order and size.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn generated_scores_respect_segment_bounds(
        good in 1usize..25,
        mid in 1usize..25,
        bad in 1usize..25,
        seed in any::<u64>(),
    ) {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

        let config = GeneratorConfig::with_counts(good, mid, bad);
        let leads = generate_corpus(&config, &mut rng).unwrap();

        prop_assert_eq!(leads.len(), good + mid + bad);
        for lead in &leads[..good] {
            prop_assert!((75..100).contains(&lead.lead_score));
        }
        for lead in &leads[good..good + mid] {
            prop_assert!((50..75).contains(&lead.lead_score));
        }
        for lead in &leads[good + mid..] {
            prop_assert!((10..45).contains(&lead.lead_score));
        }
    }
}

// Property: the override rules leave every possible score with internally
// consistent response/contact/quality fields.
proptest! {
    #[test]
    fn overrides_are_consistent_for_any_score(score in 0i64..=100) {
        let mut lead = LabeledLead {
            lead_source: "PAID".to_string(),
            country: "USA".to_string(),
            age: 40,
            gender: "MALE".to_string(),
            education_level: "COLLEGE".to_string(),
            occupation: "EMPLOYEE".to_string(),
            industry: "SERVICES".to_string(),
            income: 90_000,
            initial_response: "NEUTRAL".to_string(),
            do_not_contact: "No".to_string(),
            total_calls_attended: 3,
            total_meetings_attended: 2,
            general_knowledge: "NOVICE".to_string(),
            business_knowledge: "NOVICE".to_string(),
            company_size: "MEDIUM".to_string(),
            company_estimated_revenue: 2_000_000,
            lead_quality: "WARM".to_string(),
            lead_score: score,
        };
        apply_score_overrides(&mut lead);

        if score > 85 {
            prop_assert_eq!(lead.initial_response.as_str(), "POSITIVE");
            prop_assert_eq!(lead.lead_quality.as_str(), "HOT");
        }
        if score < 50 {
            prop_assert_eq!(lead.lead_quality.as_str(), "COLD");
        }
        if score <= 30 {
            prop_assert_eq!(lead.initial_response.as_str(), "NEGATIVE");
            prop_assert_eq!(lead.do_not_contact.as_str(), "Yes");
        }
    }
}
