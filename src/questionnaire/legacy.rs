use super::{opt, single, Question};

/// Legacy single flow still used by onboarding
pub const LEGACY_QUESTIONS: &[Question] = &[
    single(
        "legal_entity_type",
        "Legal Status & Age",
        Some("What is the legal structure and year of incorporation?"),
        &[
            opt("proprietorship", "Proprietorship"),
            opt("partnership_llp", "Partnership / LLP"),
            opt("private_limited_opc", "Private Limited / OPC"),
            opt("society_trust", "Society / Trust"),
        ],
    ),
    single(
        "active_year",
        "Year of incorporation / registration",
        Some("In which year did you incorporate or register?"),
        &[
            opt("2024", "2024"),
            opt("2023", "2023"),
            opt("2022", "2022"),
            opt("2021", "2021"),
            opt("2020", "2020"),
            opt("2019", "2019"),
            opt("2018", "2018"),
            opt("2015-2017", "2015–2017"),
            opt("2010-2014", "2010–2014"),
            opt("before_2010", "Before 2010"),
        ],
    ),
    single(
        "recognition_status",
        "Recognition Status",
        Some("Which registrations do you currently have?"),
        &[
            opt("dpiit", "DPIIT Startup Recognition"),
            opt("udyam", "Udyam (MSME) Registration"),
            opt("both", "Both"),
            opt("none", "None"),
        ],
    ),
    single(
        "turnover",
        "Turnover (Last FY)",
        Some("What is your annual turnover?"),
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
        "sector",
        "Sector of Operation",
        Some("Which sector best describes your business?"),
        &[
            opt("agriculture_food", "Agriculture / Food Processing"),
            opt("manufacturing", "Manufacturing"),
            opt("services", "Services"),
            opt("technology_saas", "Technology / SaaS / IT"),
            opt("deeptech_rd", "DeepTech / R&D / IP-based"),
            opt("trading", "Trading"),
        ],
    ),
    single(
        "sub_sector",
        "Sub-Sector (One Primary)",
        Some("Your primary sub-sector"),
        &[
            opt("electronics_ev_cleantech", "Electronics / EV / CleanTech"),
            opt("pharma_healthcare", "Pharma / Healthcare"),
            opt("textiles_apparel", "Textiles / Apparel"),
            opt("agritech_foodtech", "AgriTech / FoodTech"),
            opt("fintech_edtech", "FinTech / EdTech"),
            opt("defence_aerospace", "Defence / Aerospace"),
            opt("other", "Other"),
        ],
    ),
    single(
        "state",
        "Location — State",
        Some("Where is the business primarily located?"),
        &[
            opt("Maharashtra", "Maharashtra"),
            opt("Karnataka", "Karnataka"),
            opt("Gujarat", "Gujarat"),
            opt("Tamil Nadu", "Tamil Nadu"),
            opt("Delhi", "Delhi"),
            opt("Uttar Pradesh", "Uttar Pradesh"),
            opt("West Bengal", "West Bengal"),
            opt("Other", "Other"),
        ],
    ),
    single(
        "location_advantage",
        "Location Advantage",
        Some("Area type"),
        &[
            opt("ne_aspirational_rural", "North-East / Aspirational District / Rural"),
            opt("urban_general", "Urban / General"),
        ],
    ),
    single(
        "ownership_category",
        "Ownership Category",
        Some("Does the business have majority ownership by any of the following?"),
        &[
            opt("woman", "Woman Entrepreneur"),
            opt("sc_st", "SC / ST"),
            opt("minority_differently_abled", "Minority / Differently-abled"),
            opt("none", "None"),
        ],
    ),
    single(
        "stage",
        "Stage of Business",
        Some("Current stage of the business"),
        &[
            opt("idea_prototype", "Idea / Prototype"),
            opt("early_revenue", "Early revenue"),
            opt("scaling", "Scaling / Expansion"),
            opt("mature", "Mature / Stable"),
        ],
    ),
    Question {
        key: "support_types",
        title: "Type of Support Needed (Pick Top 2)",
        subtitle: Some("What support are you actively seeking?"),
        options: &[
            opt("grant_subsidy", "Grant / Subsidy"),
            opt("collateral_free_loan", "Collateral-free loan"),
            opt("bank_loan", "Bank loan"),
            opt("equity_seed", "Equity / Seed funding"),
            opt("interest_subsidy", "Interest subsidy"),
            opt("export_market", "Export / Market access"),
            opt("patent_ip", "Patent / IP support"),
        ],
        multi: true,
        max_selections: Some(2),
    },
    single(
        "funding_amount",
        "Funding Size Required",
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
        "compliance_readiness",
        "Credit & Compliance Readiness",
        Some("Which best describes your current status?"),
        &[
            opt("ready", "GST + ITR + financials ready"),
            opt("partial", "Partial compliance"),
            opt("early", "Early stage / not ready"),
        ],
    ),
    single(
        "innovation_ip_export",
        "Innovation / IP / Export Angle",
        Some("Does the business involve any of the following?"),
        &[
            opt("innovative", "Innovative product / process"),
            opt("patent", "Patent filed / planned"),
            opt("export", "Export-oriented"),
            opt("none", "None"),
        ],
    ),
];
