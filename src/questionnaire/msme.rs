use super::{opt, single, Question};

/// MSME branch (M1–M12)
pub const MSME_QUESTIONS: &[Question] = &[
    single(
        "udyam_classification",
        "Udyam Classification",
        Some("Your Udyam registration classification (if registered)"),
        &[
            opt("micro", "Micro"),
            opt("small", "Small"),
            opt("medium", "Medium"),
            opt("not_registered", "Not yet registered"),
        ],
    ),
    single(
        "annual_turnover",
        "Annual Turnover",
        Some("Last financial year turnover"),
        &[
            opt("pre_revenue", "Pre-revenue"),
            opt("under_1cr", "< ₹1 Cr"),
            opt("1_5cr", "₹1–5 Cr"),
            opt("5_50cr", "₹5–50 Cr"),
            opt("50_250cr", "₹50–250 Cr"),
            opt("over_250cr", "> ₹250 Cr"),
        ],
    ),
    single(
        "investment_plant_machinery",
        "Investment in Plant & Machinery",
        Some("Investment in plant, machinery or equipment"),
        &[
            opt("under_1cr", "< ₹1 Cr"),
            opt("1_10cr", "₹1–10 Cr"),
            opt("10_50cr", "₹10–50 Cr"),
            opt("over_50cr", "> ₹50 Cr"),
        ],
    ),
    single(
        "nature_of_business_activity",
        "Nature of Business Activity",
        Some("Primary activity"),
        &[
            opt("manufacturing", "Manufacturing"),
            opt("services", "Services"),
            opt("trading", "Trading"),
            opt("mixed", "Mixed"),
        ],
    ),
    single(
        "location_district_incentives",
        "Location & District Incentives",
        Some("Where is your unit located?"),
        &[
            opt("north_east", "North-East"),
            opt("aspirational_district", "Aspirational District"),
            opt("rural", "Rural"),
            opt("urban", "Urban / General"),
        ],
    ),
    single(
        "state_industrial_policy_coverage",
        "State Industrial Policy Coverage",
        Some("Is your unit in a state with specific industrial incentives?"),
        &[
            opt("yes_availing", "Yes, availing / eligible"),
            opt("yes_not_availing", "Yes, but not availing"),
            opt("no", "No / not sure"),
        ],
    ),
    single(
        "credit_exposure_status",
        "Credit Exposure Status",
        Some("Existing bank / institutional credit?"),
        &[
            opt("none", "No existing loan"),
            opt("secured", "Yes, secured"),
            opt("unsecured", "Yes, unsecured"),
        ],
    ),
    single(
        "interest_subvention_requirement",
        "Interest Subvention Requirement",
        Some("Do you need interest subsidy / subvention?"),
        &[
            opt("yes", "Yes"),
            opt("prefer", "Would prefer"),
            opt("no", "No"),
        ],
    ),
    single(
        "capex_technology_upgradation_plan",
        "Capex / Technology Upgradation Plan",
        Some("Planning capital expenditure or technology upgradation?"),
        &[
            opt("yes_short_term", "Yes, in next 1–2 years"),
            opt("yes_long_term", "Yes, later"),
            opt("no", "No"),
        ],
    ),
    single(
        "export_activity_status",
        "Export Activity Status",
        Some("Export orientation"),
        &[
            opt("exporting", "Currently exporting"),
            opt("planning", "Planning to export"),
            opt("no", "No export"),
        ],
    ),
    single(
        "quality_compliance_certifications",
        "Quality & Compliance Certifications",
        Some("Do you have or are you pursuing any?"),
        &[
            opt("iso_other", "ISO / other quality certs"),
            opt("gst_itr_ready", "GST + ITR compliant"),
            opt("partial", "Partial compliance"),
            opt("none", "None yet"),
        ],
    ),
    single(
        "employment_intensity",
        "Employment Intensity",
        Some("Number of employees (approx.)"),
        &[
            opt("1-5", "1–5"),
            opt("6-20", "6–20"),
            opt("21-50", "21–50"),
            opt("51-100", "51–100"),
            opt("100+", "100+"),
        ],
    ),
];
