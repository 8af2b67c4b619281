use super::{opt, single, Question};

/// Startup branch (S1–S12)
pub const STARTUP_QUESTIONS: &[Question] = &[
    single(
        "dpiit_recognition_status",
        "DPIIT Recognition Status",
        Some("Do you have DPIIT Startup Recognition?"),
        &[
            opt("yes", "Yes"),
            opt("applied", "Applied"),
            opt("no", "No"),
            opt("not_eligible", "Not Eligible"),
        ],
    ),
    single(
        "startup_age",
        "Startup Age",
        Some("Years since incorporation / registration"),
        &[
            opt("0-1", "Less than 1 year"),
            opt("1-3", "1–3 years"),
            opt("3-5", "3–5 years"),
            opt("5-7", "5–7 years"),
            opt("7+", "More than 7 years"),
        ],
    ),
    single(
        "innovation_type",
        "Innovation Type",
        Some("What best describes your innovation?"),
        &[
            opt("product", "Product innovation"),
            opt("process", "Process innovation"),
            opt("business_model", "Business model innovation"),
            opt("tech_driven", "Technology-driven"),
            opt("none", "Not innovation-focused"),
        ],
    ),
    single(
        "technology_ip_orientation",
        "Technology / IP Orientation",
        Some("Do you have or plan IP (patents, etc.)?"),
        &[
            opt("patent_filed", "Patent(s) filed"),
            opt("patent_planned", "Patent planned"),
            opt("ip_other", "Other IP (trademark, design)"),
            opt("no_ip", "No IP / not applicable"),
        ],
    ),
    single(
        "sector_focus",
        "Sector Focus",
        Some("Primary sector of operation"),
        &[
            opt("technology_saas", "Technology / SaaS / IT"),
            opt("deeptech_rd", "DeepTech / R&D"),
            opt("manufacturing", "Manufacturing"),
            opt("agriculture_food", "Agriculture / Food"),
            opt("healthcare", "Healthcare / Pharma"),
            opt("fintech_edtech", "FinTech / EdTech"),
            opt("other", "Other"),
        ],
    ),
    single(
        "funding_stage",
        "Funding Stage",
        Some("Current funding stage"),
        &[
            opt("bootstrapped", "Bootstrapped / Pre-seed"),
            opt("seed", "Seed"),
            opt("series_a", "Series A"),
            opt("series_b_plus", "Series B+"),
            opt("revenue_no_external", "Revenue, no external funding"),
        ],
    ),
    single(
        "capital_requirement",
        "Capital Requirement",
        Some("Approximate funding requirement"),
        &[
            opt("under_10l", "< ₹10 L"),
            opt("10_50l", "₹10–50 L"),
            opt("50l_2cr", "₹50 L – 2 Cr"),
            opt("2_10cr", "₹2 – 10 Cr"),
            opt("over_10cr", "> ₹10 Cr"),
        ],
    ),
    single(
        "grant_vs_equity_preference",
        "Grant vs Equity Preference",
        Some("What type of support are you seeking?"),
        &[
            opt("grant", "Grant / non-dilutive"),
            opt("equity", "Equity / dilutive"),
            opt("both", "Both"),
            opt("debt", "Debt / loan"),
        ],
    ),
    single(
        "incubation_accelerator_status",
        "Incubation / Accelerator Status",
        Some("Are you or have you been part of an incubator or accelerator?"),
        &[
            opt("currently_incubated", "Currently incubated"),
            opt("graduated", "Graduated"),
            opt("applied", "Applied / in process"),
            opt("no", "No"),
        ],
    ),
    single(
        "fund_of_funds_aif_openness",
        "Fund-of-Funds / AIF Openness",
        Some("Would you consider fund-of-funds or AIF schemes?"),
        &[
            opt("yes", "Yes"),
            opt("maybe", "Maybe / need to know more"),
            opt("no", "No"),
        ],
    ),
    single(
        "export_global_market_focus",
        "Export / Global Market Focus",
        Some("Is your business export-oriented or targeting global markets?"),
        &[
            opt("yes_exporting", "Yes, already exporting"),
            opt("planning", "Planning to export"),
            opt("domestic_only", "Domestic only"),
        ],
    ),
    single(
        "strategic_social_impact_alignment",
        "Strategic / Social Impact Alignment",
        Some("Does your startup align with any of these?"),
        &[
            opt("social_impact", "Social impact / inclusion"),
            opt("strategic_sector", "Strategic sector (defence, space, etc.)"),
            opt("rural_employment", "Rural / employment focus"),
            opt("none", "None of these"),
        ],
    ),
];
