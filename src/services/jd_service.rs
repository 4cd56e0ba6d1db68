use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use crate::dto::jd_dto::JobDescriptionPayload;
use crate::error::{Error, Result};
use crate::models::job_description::{JobDescription, Mode};
use crate::utils::time::{days_between, now};

/// Aggregate numbers for the report header.
#[derive(Debug, Clone, PartialEq)]
pub struct JdStats {
    pub total_jobs: usize,
    pub remote_jobs: usize,
    pub onsite_jobs: usize,
    pub hybrid_jobs: usize,
    pub contract_jobs: usize,
    pub part_time_jobs: usize,
    pub total_open_positions: i64,
    pub avg_tenure_months: f64,
}

#[derive(Debug, Default)]
struct JdStore {
    // Ids are strictly increasing, so BTreeMap iteration doubles as
    // insertion order for listings.
    records: BTreeMap<i64, JobDescription>,
    next_id: i64,
}

/// In-memory record store. All access goes through the single lock; guards
/// are never held across an await point.
#[derive(Clone)]
pub struct JdService {
    store: Arc<RwLock<JdStore>>,
    default_currency: String,
}

impl JdService {
    pub fn new(default_currency: impl Into<String>) -> Self {
        Self {
            store: Arc::new(RwLock::new(JdStore::default())),
            default_currency: default_currency.into(),
        }
    }

    /// Stores a validated submission under a fresh id. The caller must have
    /// run the payload through `validate_payload` first.
    pub fn create(&self, payload: JobDescriptionPayload) -> Result<JobDescription> {
        let mut store = self.store.write().expect("job store lock poisoned");
        let id = store.next_id + 1;
        let created_at = now();
        let record = self.materialize(id, created_at, created_at, 0, payload)?;
        store.next_id = id;
        store.records.insert(id, record.clone());
        Ok(record)
    }

    /// All records in creation order.
    pub fn list(&self) -> Vec<JobDescription> {
        let store = self.store.read().expect("job store lock poisoned");
        store.records.values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> Result<JobDescription> {
        let store = self.store.read().expect("job store lock poisoned");
        store
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Replaces every mutable field of the record; `id`, `created_at` and the
    /// derived `aging_days` carry over from the stored copy.
    pub fn update(&self, id: i64, payload: JobDescriptionPayload) -> Result<JobDescription> {
        let mut store = self.store.write().expect("job store lock poisoned");
        let (created_at, aging_days) = match store.records.get(&id) {
            Some(existing) => (existing.created_at, existing.aging_days),
            None => return Err(not_found(id)),
        };
        let record = self.materialize(id, created_at, now(), aging_days, payload)?;
        store.records.insert(id, record.clone());
        Ok(record)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let mut store = self.store.write().expect("job store lock poisoned");
        store.records.remove(&id).map(|_| ()).ok_or_else(|| not_found(id))
    }

    /// Recomputes `aging_days` for every record against the current time.
    pub fn update_aging(&self) -> usize {
        self.update_aging_at(now())
    }

    /// Aging refresh against an explicit clock; repeated runs with the same
    /// `now` leave every record unchanged.
    pub fn update_aging_at(&self, now: DateTime<Utc>) -> usize {
        let mut store = self.store.write().expect("job store lock poisoned");
        let mut updated = 0;
        for record in store.records.values_mut() {
            record.aging_days = days_between(record.created_at, now);
            record.updated_at = now;
            updated += 1;
        }
        updated
    }

    pub fn stats(&self) -> JdStats {
        let store = self.store.read().expect("job store lock poisoned");
        let records = &store.records;
        let total_jobs = records.len();
        let count_mode =
            |mode: Mode| records.values().filter(|r| r.mode == mode).count();
        let total_open_positions = records
            .values()
            .filter_map(|r| r.open_positions)
            .map(i64::from)
            .sum();
        let avg_tenure_months = if total_jobs == 0 {
            0.0
        } else {
            let total_tenure: i64 = records.values().map(|r| i64::from(r.tenure_months)).sum();
            let avg = total_tenure as f64 / total_jobs as f64;
            (avg * 10.0).round() / 10.0
        };

        JdStats {
            total_jobs,
            remote_jobs: count_mode(Mode::Remote),
            onsite_jobs: count_mode(Mode::Onsite),
            hybrid_jobs: count_mode(Mode::Hybrid),
            contract_jobs: count_mode(Mode::Contract),
            part_time_jobs: count_mode(Mode::PartTime),
            total_open_positions,
            avg_tenure_months,
        }
    }

    fn materialize(
        &self,
        id: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        aging_days: i64,
        payload: JobDescriptionPayload,
    ) -> Result<JobDescription> {
        let currency = payload
            .currency
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.default_currency.clone());

        Ok(JobDescription {
            id,
            title: require(payload.title, "title")?,
            customer_id: require(payload.customer_id, "customer_id")?,
            consumer_company: require(payload.consumer_company, "consumer_company")?,
            original_text: require(payload.original_text, "original_text")?,
            skillset_category: payload.skillset_category,
            skills: require(payload.skills, "skills")?,
            mode: require(payload.mode, "mode")?,
            tenure_months: require(payload.tenure_months, "tenure_months")?,
            experience_min: require(payload.experience_min, "experience_min")?,
            experience_max: require(payload.experience_max, "experience_max")?,
            budget_min: require(payload.budget_min, "budget_min")?,
            budget_max: require(payload.budget_max, "budget_max")?,
            currency,
            open_positions: payload.open_positions,
            available_positions: payload.available_positions,
            revenue_potential: payload.revenue_potential,
            keywords: payload.keywords,
            source: payload.source,
            special_instruction: payload.special_instruction,
            created_by: require(payload.created_by, "created_by")?,
            status: require(payload.status, "status")?,
            aging_days,
            created_at,
            updated_at,
        })
    }
}

fn require<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| Error::BadRequest(format!("{} is required", field)))
}

fn not_found(id: i64) -> Error {
    Error::NotFound(format!("Job description {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job_description::Status;
    use chrono::Duration;
    use rust_decimal::Decimal;

    fn sample_payload(title: &str) -> JobDescriptionPayload {
        JobDescriptionPayload {
            title: Some(title.to_string()),
            customer_id: Some(1),
            consumer_company: Some("Acme".to_string()),
            original_text: Some("We are hiring a backend engineer.".to_string()),
            skillset_category: Some(2),
            skills: Some(vec!["Go".to_string(), "Postgres".to_string()]),
            mode: Some(Mode::Remote),
            tenure_months: Some(6),
            experience_min: Some(Decimal::from(2)),
            experience_max: Some(Decimal::from(4)),
            budget_min: Some(Decimal::from(50_000)),
            budget_max: Some(Decimal::from(70_000)),
            currency: None,
            open_positions: Some(2),
            available_positions: Some("2".to_string()),
            revenue_potential: None,
            keywords: vec!["agile".to_string()],
            source: None,
            special_instruction: None,
            created_by: Some(1),
            status: Some(Status::Active),
        }
    }

    #[test]
    fn create_assigns_increasing_ids_and_default_currency() {
        let service = JdService::new("USD");
        let first = service.create(sample_payload("First")).expect("create");
        let second = service.create(sample_payload("Second")).expect("create");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.currency, "USD");
        assert_eq!(first.aging_days, 0);
    }

    #[test]
    fn explicit_currency_is_kept() {
        let service = JdService::new("USD");
        let mut payload = sample_payload("Priced in rupees");
        payload.currency = Some("INR".to_string());
        let record = service.create(payload).expect("create");
        assert_eq!(record.currency, "INR");
    }

    #[test]
    fn get_returns_the_stored_record() {
        let service = JdService::new("USD");
        let created = service.create(sample_payload("Fetch me")).expect("create");
        let fetched = service.get(created.id).expect("get");
        assert_eq!(fetched, created);
    }

    #[test]
    fn get_unknown_id_reports_not_found() {
        let service = JdService::new("USD");
        assert!(matches!(service.get(42), Err(Error::NotFound(_))));
    }

    #[test]
    fn list_preserves_creation_order() {
        let service = JdService::new("USD");
        service.create(sample_payload("First")).expect("create");
        service.create(sample_payload("Second")).expect("create");

        let titles: Vec<String> = service.list().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["First".to_string(), "Second".to_string()]);
    }

    #[test]
    fn update_replaces_fields_but_preserves_identity() {
        let service = JdService::new("USD");
        let created = service.create(sample_payload("Original")).expect("create");

        let mut payload = sample_payload("Replaced");
        payload.mode = Some(Mode::Hybrid);
        payload.tenure_months = Some(12);
        let updated = service.update(created.id, payload).expect("update");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "Replaced");
        assert_eq!(updated.mode, Mode::Hybrid);
        assert_eq!(updated.tenure_months, 12);
    }

    #[test]
    fn update_unknown_id_reports_not_found() {
        let service = JdService::new("USD");
        let result = service.update(7, sample_payload("Nobody home"));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn delete_removes_the_record_and_repeats_report_not_found() {
        let service = JdService::new("USD");
        let created = service.create(sample_payload("Short lived")).expect("create");

        service.delete(created.id).expect("delete");
        assert!(matches!(service.get(created.id), Err(Error::NotFound(_))));
        assert!(matches!(service.delete(created.id), Err(Error::NotFound(_))));
    }

    #[test]
    fn aging_refresh_is_idempotent_for_a_fixed_clock() {
        let service = JdService::new("USD");
        let created = service.create(sample_payload("Aging")).expect("create");

        let later = created.created_at + Duration::days(3);
        assert_eq!(service.update_aging_at(later), 1);
        let first_pass = service.get(created.id).expect("get").aging_days;
        assert_eq!(service.update_aging_at(later), 1);
        let second_pass = service.get(created.id).expect("get").aging_days;

        assert_eq!(first_pass, 3);
        assert_eq!(first_pass, second_pass);

        service.update_aging_at(later + Duration::days(2));
        assert_eq!(service.get(created.id).expect("get").aging_days, 5);
    }

    #[test]
    fn stats_aggregate_modes_positions_and_tenure() {
        let service = JdService::new("USD");
        service.create(sample_payload("Remote role")).expect("create");

        let mut onsite = sample_payload("Onsite role");
        onsite.mode = Some(Mode::Onsite);
        onsite.tenure_months = Some(12);
        onsite.open_positions = Some(3);
        service.create(onsite).expect("create");

        let stats = service.stats();
        assert_eq!(stats.total_jobs, 2);
        assert_eq!(stats.remote_jobs, 1);
        assert_eq!(stats.onsite_jobs, 1);
        assert_eq!(stats.hybrid_jobs, 0);
        assert_eq!(stats.total_open_positions, 5);
        assert_eq!(stats.avg_tenure_months, 9.0);
    }
}
