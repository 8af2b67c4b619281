// Criterion benchmarks for scheme-match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scheme_match::core::{derive_profile, range_midpoint, Matcher};
use scheme_match::models::{
    BusinessProfile, BusinessType, EligibilityRules, FundingType, LegacyAnswers, MsmeAnswers,
    RawAnswers, Scheme,
};

const STATES: &[&str] = &["Gujarat", "Maharashtra", "Karnataka", "Tamil Nadu", "Kerala"];
const INDUSTRIES: &[&str] = &["Manufacturing", "Services", "Technology", "Trading", "Agriculture"];

fn create_scheme(id: usize) -> Scheme {
    let rules = EligibilityRules {
        business_types: (id % 2 == 0).then(|| vec![BusinessType::Micro, BusinessType::Small]),
        industries: (id % 3 == 0).then(|| vec![INDUSTRIES[id % INDUSTRIES.len()].to_string()]),
        states: (id % 4 == 0).then(|| vec![STATES[id % STATES.len()].to_string()]),
        turnover_max: (id % 5 == 0).then_some(500.0),
        company_age_min_years: (id % 7 == 0).then_some(2.0),
        ..Default::default()
    };

    Scheme {
        id: id.to_string(),
        name: format!("Scheme {}", id),
        scheme_type: FundingType::Loan,
        eligibility_rules: rules,
        benefit_summary: String::new(),
        states_applicable: (id % 4 != 0).then(|| vec!["*".to_string()]),
        key_benefit_display: None,
        required_documents: None,
        estimated_timeline: None,
        created_at: None,
        updated_at: None,
    }
}

fn create_profile() -> BusinessProfile {
    derive_profile(&RawAnswers::Legacy(LegacyAnswers {
        recognition_status: Some("udyam".to_string()),
        turnover: Some("1_5cr".to_string()),
        sector: Some("manufacturing".to_string()),
        state: Some("Gujarat".to_string()),
        active_year: Some("2020".to_string()),
        support_types: vec!["bank_loan".to_string()],
        ..Default::default()
    }))
}

fn bench_range_midpoint(c: &mut Criterion) {
    c.bench_function("range_midpoint", |b| {
        b.iter(|| range_midpoint(black_box("5000-25000")));
    });
}

fn bench_derive_profile(c: &mut Criterion) {
    let answers = RawAnswers::Msme(MsmeAnswers {
        udyam_classification: Some("not_registered".to_string()),
        annual_turnover: Some("5_50cr".to_string()),
        nature_of_business_activity: Some("trading".to_string()),
        interest_subvention_requirement: Some("yes".to_string()),
        ..Default::default()
    });

    c.bench_function("derive_profile_msme", |b| {
        b.iter(|| derive_profile(black_box(&answers)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_penalties();
    let profile = create_profile();

    let mut group = c.benchmark_group("matching");

    for scheme_count in [10, 100, 500, 1000].iter() {
        let schemes: Vec<Scheme> = (0..*scheme_count).map(create_scheme).collect();

        group.bench_with_input(
            BenchmarkId::new("match_schemes", scheme_count),
            scheme_count,
            |b, _| {
                b.iter(|| matcher.match_schemes(black_box(&profile), black_box(schemes.clone())));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_range_midpoint, bench_derive_profile, bench_matching);

criterion_main!(benches);
