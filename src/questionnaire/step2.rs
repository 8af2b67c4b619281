use super::{opt, single, Question};

const YES_NO: &[super::QuestionOption] = &[opt("yes", "Yes"), opt("no", "No")];

/// Optional extended questions asked after the first results
pub const STEP2_QUESTIONS: &[Question] = &[
    single("registered_in_india", "Is the entity registered in India?", None, YES_NO),
    single(
        "operational_status",
        "Current Operational Status",
        None,
        &[
            opt("idea", "Idea stage"),
            opt("pre_revenue", "Pre-revenue"),
            opt("revenue_generating", "Revenue-generating"),
            opt("scaling", "Scaling"),
            opt("mature", "Mature"),
        ],
    ),
    single(
        "dpiit_detail",
        "DPIIT Startup Recognition",
        None,
        &[
            opt("yes", "Yes"),
            opt("no", "No"),
            opt("applied", "Applied"),
            opt("not_eligible", "Not Eligible"),
        ],
    ),
    single(
        "udyam_detail",
        "Udyam (MSME) Registration",
        None,
        &[opt("yes", "Yes"), opt("no", "No"), opt("in_process", "In process")],
    ),
    single(
        "investment_pm",
        "Investment in Plant & Machinery / Equipment",
        None,
        &[
            opt("under_1cr", "< ₹1 Cr"),
            opt("1_10cr", "₹1–10 Cr"),
            opt("10_50cr", "₹10–50 Cr"),
            opt("over_50cr", "> ₹50 Cr"),
        ],
    ),
    single(
        "msme_classification",
        "MSME Classification (if applicable)",
        None,
        &[
            opt("micro", "Micro"),
            opt("small", "Small"),
            opt("medium", "Medium"),
            opt("not_classified", "Not classified"),
        ],
    ),
    single(
        "export_orientation",
        "Is the business export-oriented?",
        None,
        &[
            opt("no", "No"),
            opt("planning", "Planning exports"),
            opt("under_25", "Exporting (<25% revenue)"),
            opt("over_25", "Exporting (>25% revenue)"),
        ],
    ),
    single(
        "special_region",
        "Special Region",
        None,
        &[
            opt("north_east", "North-East"),
            opt("hilly", "Hilly"),
            opt("border", "Border area"),
            opt("none", "None"),
        ],
    ),
    single("first_gen_entrepreneur", "First-generation entrepreneur?", None, YES_NO),
    single(
        "timeline_requirement",
        "Timeline of requirement",
        None,
        &[
            opt("immediate", "Immediate (0–3 months)"),
            opt("short", "Short-term (3–6 months)"),
            opt("medium", "Medium-term (6–12 months)"),
        ],
    ),
    single(
        "existing_bank_loan",
        "Existing Bank Loan?",
        None,
        &[
            opt("no", "No"),
            opt("secured", "Yes (secured)"),
            opt("unsecured", "Yes (unsecured)"),
        ],
    ),
    single(
        "cibil_score",
        "CIBIL Score (approx.)",
        None,
        &[
            opt("under_650", "<650"),
            opt("650_700", "650–700"),
            opt("700_750", "700–750"),
            opt("over_750", ">750"),
        ],
    ),
    single(
        "collateral",
        "Collateral Availability",
        None,
        &[opt("none", "None"), opt("partial", "Partial"), opt("full", "Full")],
    ),
    single("gst_registered", "GST Registered?", None, YES_NO),
    single("itr_available", "Last 2 years ITR & Financials available?", None, YES_NO),
    single(
        "patent_status",
        "Any patents filed / planned?",
        None,
        &[opt("filed", "Filed"), opt("planning", "Planning"), opt("no", "No")],
    ),
    single("incubated", "Incubated under a recognised incubator?", None, YES_NO),
];
