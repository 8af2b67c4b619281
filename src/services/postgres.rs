use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::models::{
    Application, ApplicationStatus, BusinessProfile, BusinessType, EligibilityRules, EntityType,
    FundingGoal, FundingType, Scheme, SchemeMatch, SchemePayload, UserSchemeMatch,
};

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid stored data: {0}")]
    InvalidData(String),
}

/// A derived profile together with the answers it was derived from
#[derive(Debug, Clone)]
pub struct ProfileRecord {
    pub profile: BusinessProfile,
    pub entity_type: Option<EntityType>,
    pub questionnaire_responses: Option<serde_json::Value>,
    pub step2_responses: Option<serde_json::Value>,
}

/// Lowercase and trim an email so pending profiles are keyed consistently
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

const SCHEME_COLUMNS: &str = "id, name, type, eligibility_rules, benefit_summary, states_applicable, \
     key_benefit_display, required_documents, estimated_timeline, created_at, updated_at";

const APPLICATION_COLUMNS: &str = "a.id, a.user_id, a.scheme_id, s.name AS scheme_name, a.status, \
     a.bank_name, a.created_at, a.updated_at";

/// PostgreSQL client for schemes, profiles and match snapshots
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Create a client whose pool connects on first use
    ///
    /// Migrations are not run.
    pub fn connect_lazy(database_url: &str) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(1))
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    /// Load the full scheme catalog in insertion order
    pub async fn fetch_schemes(&self) -> Result<Vec<Scheme>, PostgresError> {
        let query = format!("SELECT {} FROM schemes ORDER BY created_at, id", SCHEME_COLUMNS);
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        let schemes = rows.iter().map(scheme_from_row).collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("Loaded {} schemes", schemes.len());

        Ok(schemes)
    }

    /// Get a single scheme by id
    pub async fn get_scheme(&self, id: &str) -> Result<Option<Scheme>, PostgresError> {
        let query = format!("SELECT {} FROM schemes WHERE id = $1", SCHEME_COLUMNS);
        let row = sqlx::query(&query).bind(id).fetch_optional(&self.pool).await?;

        row.as_ref().map(scheme_from_row).transpose()
    }

    /// Insert a scheme and return its generated id
    pub async fn create_scheme(&self, payload: &SchemePayload) -> Result<String, PostgresError> {
        let id = uuid::Uuid::new_v4().to_string();
        let query = r#"
            INSERT INTO schemes (id, name, type, eligibility_rules, benefit_summary, states_applicable,
                                 key_benefit_display, required_documents, estimated_timeline)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#;

        sqlx::query(query)
            .bind(&id)
            .bind(&payload.name)
            .bind(payload.scheme_type.as_str())
            .bind(rules_json(&payload.rules())?)
            .bind(&payload.benefit_summary)
            .bind(payload.states_applicable.as_deref())
            .bind(payload.key_benefit_display.as_deref())
            .bind(payload.required_documents.as_slice())
            .bind(payload.estimated_timeline.as_deref())
            .execute(&self.pool)
            .await?;

        tracing::info!("Created scheme {} ({})", id, payload.name);
        Ok(id)
    }

    /// Replace every editable field of a scheme
    ///
    /// Returns false when no scheme has the given id.
    pub async fn update_scheme(&self, id: &str, payload: &SchemePayload) -> Result<bool, PostgresError> {
        let query = r#"
            UPDATE schemes SET
                name = $2,
                type = $3,
                eligibility_rules = $4,
                benefit_summary = $5,
                states_applicable = $6,
                key_benefit_display = $7,
                required_documents = $8,
                estimated_timeline = $9,
                updated_at = NOW()
            WHERE id = $1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .bind(&payload.name)
            .bind(payload.scheme_type.as_str())
            .bind(rules_json(&payload.rules())?)
            .bind(&payload.benefit_summary)
            .bind(payload.states_applicable.as_deref())
            .bind(payload.key_benefit_display.as_deref())
            .bind(payload.required_documents.as_slice())
            .bind(payload.estimated_timeline.as_deref())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a scheme, cascading to stored matches
    pub async fn delete_scheme(&self, id: &str) -> Result<bool, PostgresError> {
        let result = sqlx::query("DELETE FROM schemes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Insert or replace the profile owned by a verified user
    pub async fn upsert_business_profile(
        &self,
        user_id: &str,
        record: &ProfileRecord,
    ) -> Result<(), PostgresError> {
        let query = r#"
            INSERT INTO business_profiles (user_id, business_type, industry, state, turnover_range,
                                           company_age, funding_goal, entity_type,
                                           questionnaire_responses, step2_responses)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (user_id)
            DO UPDATE SET
                business_type = EXCLUDED.business_type,
                industry = EXCLUDED.industry,
                state = EXCLUDED.state,
                turnover_range = EXCLUDED.turnover_range,
                company_age = EXCLUDED.company_age,
                funding_goal = EXCLUDED.funding_goal,
                entity_type = COALESCE(EXCLUDED.entity_type, business_profiles.entity_type),
                questionnaire_responses = COALESCE(EXCLUDED.questionnaire_responses, business_profiles.questionnaire_responses),
                step2_responses = COALESCE(EXCLUDED.step2_responses, business_profiles.step2_responses),
                updated_at = NOW()
        "#;

        bind_record(sqlx::query(query).bind(user_id), record)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Saved business profile for user {}", user_id);
        Ok(())
    }

    /// Insert or replace the profile stored against an unverified email
    pub async fn upsert_pending_profile(
        &self,
        email: &str,
        record: &ProfileRecord,
    ) -> Result<(), PostgresError> {
        let query = r#"
            INSERT INTO pending_profiles (email, business_type, industry, state, turnover_range,
                                          company_age, funding_goal, entity_type,
                                          questionnaire_responses, step2_responses)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (email)
            DO UPDATE SET
                business_type = EXCLUDED.business_type,
                industry = EXCLUDED.industry,
                state = EXCLUDED.state,
                turnover_range = EXCLUDED.turnover_range,
                company_age = EXCLUDED.company_age,
                funding_goal = EXCLUDED.funding_goal,
                entity_type = EXCLUDED.entity_type,
                questionnaire_responses = EXCLUDED.questionnaire_responses,
                step2_responses = EXCLUDED.step2_responses,
                updated_at = NOW()
        "#;

        let email = normalize_email(email);
        bind_record(sqlx::query(query).bind(&email), record)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Saved pending profile for {}", email);
        Ok(())
    }

    /// Get the stored profile of a verified user with its answers
    pub async fn get_profile_record(&self, user_id: &str) -> Result<Option<ProfileRecord>, PostgresError> {
        let query = r#"
            SELECT business_type, industry, state, turnover_range, company_age, funding_goal,
                   entity_type, questionnaire_responses, step2_responses
            FROM business_profiles
            WHERE user_id = $1
        "#;

        let row = sqlx::query(query).bind(user_id).fetch_optional(&self.pool).await?;
        row.as_ref().map(record_from_row).transpose()
    }

    /// Move a pending profile onto a verified user
    ///
    /// Does nothing when the user already owns a profile or no pending profile
    /// exists for the email. Returns whether a profile was moved.
    pub async fn claim_pending_profile(&self, user_id: &str, email: &str) -> Result<bool, PostgresError> {
        let email = normalize_email(email);
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query("SELECT 1 FROM business_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        let moved = sqlx::query(
            r#"
            INSERT INTO business_profiles (user_id, business_type, industry, state, turnover_range,
                                           company_age, funding_goal, entity_type,
                                           questionnaire_responses, step2_responses)
            SELECT $1, business_type, industry, state, turnover_range, company_age, funding_goal,
                   entity_type, questionnaire_responses, step2_responses
            FROM pending_profiles
            WHERE email = $2
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(&email)
        .execute(&mut *tx)
        .await?;

        if moved.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query("DELETE FROM pending_profiles WHERE email = $1")
            .bind(&email)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!("Claimed pending profile {} for user {}", email, user_id);
        Ok(true)
    }

    /// Replace the user's stored match snapshot with a fresh one
    ///
    /// The delete and the inserts share one transaction, so readers never see
    /// a half-written snapshot.
    pub async fn replace_matches(
        &self,
        user_id: &str,
        matches: &[SchemeMatch],
    ) -> Result<u64, PostgresError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM user_scheme_matches WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let query = r#"
            INSERT INTO user_scheme_matches (user_id, scheme_id, match_score, missing_requirements)
            VALUES ($1, $2, $3, $4)
        "#;

        let mut inserted = 0;
        for scheme_match in matches {
            let result = sqlx::query(query)
                .bind(user_id)
                .bind(&scheme_match.scheme.id)
                .bind(i16::from(scheme_match.score))
                .bind(scheme_match.missing_requirements.as_slice())
                .execute(&mut *tx)
                .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;

        tracing::debug!("Stored {} matches for user {}", inserted, user_id);
        Ok(inserted)
    }

    /// Get the last stored match snapshot, best score first
    pub async fn get_saved_matches(&self, user_id: &str) -> Result<Vec<UserSchemeMatch>, PostgresError> {
        let query = r#"
            SELECT user_id, scheme_id, match_score, missing_requirements, created_at
            FROM user_scheme_matches
            WHERE user_id = $1
            ORDER BY match_score DESC, id
        "#;

        let rows = sqlx::query(query).bind(user_id).fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| -> Result<UserSchemeMatch, PostgresError> {
                let score: i16 = row.try_get("match_score")?;
                Ok(UserSchemeMatch {
                    user_id: row.try_get("user_id")?,
                    scheme_id: row.try_get("scheme_id")?,
                    match_score: score.clamp(0, 100) as u8,
                    missing_requirements: row.try_get("missing_requirements")?,
                    created_at: row.try_get("created_at")?,
                })
            })
            .collect()
    }

    /// Open an application for a scheme and return its generated id
    ///
    /// Returns `None` when the scheme does not exist.
    pub async fn create_application(
        &self,
        user_id: &str,
        scheme_id: &str,
        status: ApplicationStatus,
        bank_name: Option<&str>,
    ) -> Result<Option<String>, PostgresError> {
        let id = uuid::Uuid::new_v4().to_string();
        let query = r#"
            INSERT INTO applications (id, user_id, scheme_id, status, bank_name)
            SELECT $1, $2, id, $4, $5
            FROM schemes
            WHERE id = $3
            RETURNING id
        "#;

        let row = sqlx::query(query)
            .bind(&id)
            .bind(user_id)
            .bind(scheme_id)
            .bind(status.as_str())
            .bind(bank_name)
            .fetch_optional(&self.pool)
            .await?;

        if row.is_none() {
            return Ok(None);
        }

        tracing::info!("User {} opened application {} for scheme {}", user_id, id, scheme_id);
        Ok(Some(id))
    }

    /// Applications owned by a user, newest first
    pub async fn list_applications(&self, user_id: &str) -> Result<Vec<Application>, PostgresError> {
        let query = format!(
            "SELECT {} FROM applications a LEFT JOIN schemes s ON s.id = a.scheme_id \
             WHERE a.user_id = $1 ORDER BY a.created_at DESC, a.id",
            APPLICATION_COLUMNS
        );
        let rows = sqlx::query(&query).bind(user_id).fetch_all(&self.pool).await?;

        rows.iter().map(application_from_row).collect()
    }

    /// Get one application, only if the user owns it
    pub async fn get_application(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<Option<Application>, PostgresError> {
        let query = format!(
            "SELECT {} FROM applications a LEFT JOIN schemes s ON s.id = a.scheme_id \
             WHERE a.id = $1 AND a.user_id = $2",
            APPLICATION_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(application_from_row).transpose()
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

type PgQuery<'q> = sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments>;

fn bind_record<'q>(query: PgQuery<'q>, record: &'q ProfileRecord) -> PgQuery<'q> {
    let profile = &record.profile;
    query
        .bind(profile.business_type.as_str())
        .bind(&profile.industry)
        .bind(&profile.state)
        .bind(&profile.turnover_range)
        .bind(&profile.company_age)
        .bind(profile.funding_goal.map(|goal| goal.as_str()))
        .bind(record.entity_type.map(|entity| entity.as_str()))
        .bind(&record.questionnaire_responses)
        .bind(&record.step2_responses)
}

fn rules_json(rules: &EligibilityRules) -> Result<serde_json::Value, PostgresError> {
    serde_json::to_value(rules).map_err(|e| PostgresError::InvalidData(e.to_string()))
}

fn scheme_from_row(row: &PgRow) -> Result<Scheme, PostgresError> {
    let id: String = row.try_get("id")?;
    let scheme_type: String = row.try_get("type")?;
    let rules: serde_json::Value = row.try_get("eligibility_rules")?;

    Ok(Scheme {
        scheme_type: FundingType::parse(&scheme_type).ok_or_else(|| {
            PostgresError::InvalidData(format!("scheme {} has unknown type '{}'", id, scheme_type))
        })?,
        id,
        name: row.try_get("name")?,
        eligibility_rules: EligibilityRules::from_value(&rules),
        benefit_summary: row.try_get("benefit_summary")?,
        states_applicable: row.try_get("states_applicable")?,
        key_benefit_display: row.try_get("key_benefit_display")?,
        required_documents: row.try_get("required_documents")?,
        estimated_timeline: row.try_get("estimated_timeline")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn record_from_row(row: &PgRow) -> Result<ProfileRecord, PostgresError> {
    let entity_type: Option<String> = row.try_get("entity_type")?;

    Ok(ProfileRecord {
        profile: profile_from_row(row)?,
        entity_type: entity_type.as_deref().and_then(EntityType::parse),
        questionnaire_responses: row.try_get("questionnaire_responses")?,
        step2_responses: row.try_get("step2_responses")?,
    })
}

fn profile_from_row(row: &PgRow) -> Result<BusinessProfile, PostgresError> {
    let business_type: String = row.try_get("business_type")?;
    let funding_goal: Option<String> = row.try_get("funding_goal")?;

    Ok(BusinessProfile {
        business_type: BusinessType::parse(&business_type).ok_or_else(|| {
            PostgresError::InvalidData(format!("unknown business type '{}'", business_type))
        })?,
        industry: row.try_get("industry")?,
        state: row.try_get("state")?,
        turnover_range: row.try_get("turnover_range")?,
        company_age: row.try_get("company_age")?,
        funding_goal: funding_goal.as_deref().and_then(FundingGoal::parse),
    })
}

fn application_from_row(row: &PgRow) -> Result<Application, PostgresError> {
    let id: String = row.try_get("id")?;
    let status: String = row.try_get("status")?;

    Ok(Application {
        status: ApplicationStatus::parse(&status).ok_or_else(|| {
            PostgresError::InvalidData(format!("application {} has unknown status '{}'", id, status))
        })?,
        id,
        user_id: row.try_get("user_id")?,
        scheme_id: row.try_get("scheme_id")?,
        scheme_name: row.try_get("scheme_name")?,
        bank_name: row.try_get("bank_name")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
