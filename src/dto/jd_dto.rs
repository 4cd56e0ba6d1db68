use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::models::job_description::{JobDescription, Mode, Status};
use crate::services::jd_service::JdStats;

/// Accepts either a bare integer or a string for count-like fields; the
/// legacy form serializes them inconsistently.
pub(crate) fn deserialize_count_flexible<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        Int(i64),
        String(String),
    }

    let value = Option::<StringOrInt>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        StringOrInt::Int(i) => i.to_string(),
        StringOrInt::String(s) => s,
    }))
}

/// Submission payload for both create and full update; an update replaces
/// every mutable field of the stored record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JobDescriptionPayload {
    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title must not be empty")
    )]
    pub title: Option<String>,
    #[validate(required(message = "customer_id is required"))]
    pub customer_id: Option<i64>,
    #[validate(
        required(message = "consumer_company is required"),
        length(min = 1, message = "consumer_company must not be empty")
    )]
    pub consumer_company: Option<String>,
    #[validate(
        required(message = "original_text is required"),
        length(min = 1, message = "original_text must not be empty")
    )]
    pub original_text: Option<String>,
    pub skillset_category: Option<i32>,
    #[validate(
        required(message = "skills is required"),
        length(min = 1, message = "skills must contain at least one entry")
    )]
    pub skills: Option<Vec<String>>,
    #[validate(required(message = "mode is required"))]
    pub mode: Option<Mode>,
    #[validate(
        required(message = "tenure_months is required"),
        range(min = 1, message = "tenure_months must be 1 or greater")
    )]
    pub tenure_months: Option<i32>,
    #[validate(required(message = "experience_min is required"))]
    pub experience_min: Option<Decimal>,
    #[validate(required(message = "experience_max is required"))]
    pub experience_max: Option<Decimal>,
    #[validate(required(message = "budget_min is required"))]
    pub budget_min: Option<Decimal>,
    #[validate(required(message = "budget_max is required"))]
    pub budget_max: Option<Decimal>,
    pub currency: Option<String>,
    pub open_positions: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_count_flexible")]
    pub available_positions: Option<String>,
    pub revenue_potential: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub source: Option<String>,
    pub special_instruction: Option<String>,
    #[validate(required(message = "created_by is required"))]
    pub created_by: Option<i64>,
    #[validate(required(message = "status is required"))]
    pub status: Option<Status>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescriptionResponse {
    pub id: i64,
    pub title: String,
    pub customer_id: i64,
    pub consumer_company: String,
    pub original_text: String,
    pub skillset_category: Option<i32>,
    pub skills: Vec<String>,
    pub mode: Mode,
    pub tenure_months: i32,
    pub experience_min: Decimal,
    pub experience_max: Decimal,
    pub budget_min: Decimal,
    pub budget_max: Decimal,
    pub currency: String,
    pub open_positions: Option<i32>,
    pub available_positions: Option<String>,
    pub revenue_potential: Option<String>,
    pub keywords: Vec<String>,
    pub source: Option<String>,
    pub special_instruction: Option<String>,
    pub created_by: i64,
    pub status: Status,
    pub aging_days: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescriptionListResponse {
    pub items: Vec<JobDescriptionResponse>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgingRefreshResponse {
    pub updated_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdStatsResponse {
    pub total_jobs: usize,
    pub remote_jobs: usize,
    pub onsite_jobs: usize,
    pub hybrid_jobs: usize,
    pub contract_jobs: usize,
    pub part_time_jobs: usize,
    pub total_open_positions: i64,
    pub avg_tenure_months: f64,
}

/// Free text submitted for external extraction.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScanTextPayload {
    #[validate(length(min = 1, message = "jd_text is required"))]
    pub jd_text: String,
}

impl From<JobDescription> for JobDescriptionResponse {
    fn from(value: JobDescription) -> Self {
        Self {
            id: value.id,
            title: value.title,
            customer_id: value.customer_id,
            consumer_company: value.consumer_company,
            original_text: value.original_text,
            skillset_category: value.skillset_category,
            skills: value.skills,
            mode: value.mode,
            tenure_months: value.tenure_months,
            experience_min: value.experience_min,
            experience_max: value.experience_max,
            budget_min: value.budget_min,
            budget_max: value.budget_max,
            currency: value.currency,
            open_positions: value.open_positions,
            available_positions: value.available_positions,
            revenue_potential: value.revenue_potential,
            keywords: value.keywords,
            source: value.source,
            special_instruction: value.special_instruction,
            created_by: value.created_by,
            status: value.status,
            aging_days: value.aging_days,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<Vec<JobDescription>> for JobDescriptionListResponse {
    fn from(value: Vec<JobDescription>) -> Self {
        Self {
            total: value.len(),
            items: value.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<JdStats> for JdStatsResponse {
    fn from(value: JdStats) -> Self {
        Self {
            total_jobs: value.total_jobs,
            remote_jobs: value.remote_jobs,
            onsite_jobs: value.onsite_jobs,
            hybrid_jobs: value.hybrid_jobs,
            contract_jobs: value.contract_jobs,
            part_time_jobs: value.part_time_jobs,
            total_open_positions: value.total_open_positions,
            avg_tenure_months: value.avg_tenure_months,
        }
    }
}
