use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Work arrangement classification. Wire format is the integer code used by
/// the engagement-modes lookup service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum Mode {
    Remote = 1,
    Onsite = 2,
    Hybrid = 3,
    Contract = 4,
    PartTime = 5,
}

impl From<Mode> for i32 {
    fn from(value: Mode) -> Self {
        value as i32
    }
}

impl TryFrom<i32> for Mode {
    type Error = String;

    fn try_from(value: i32) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Mode::Remote),
            2 => Ok(Mode::Onsite),
            3 => Ok(Mode::Hybrid),
            4 => Ok(Mode::Contract),
            5 => Ok(Mode::PartTime),
            other => Err(format!("unknown mode code: {}", other)),
        }
    }
}

/// Record lifecycle status, integer-coded on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum Status {
    Active = 1,
    Draft = 2,
    Closed = 3,
}

impl From<Status> for i32 {
    fn from(value: Status) -> Self {
        value as i32
    }
}

impl TryFrom<i32> for Status {
    type Error = String;

    fn try_from(value: i32) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Status::Active),
            2 => Ok(Status::Draft),
            3 => Ok(Status::Closed),
            other => Err(format!("unknown status code: {}", other)),
        }
    }
}

/// A stored job-description record. `id` and `created_at` are assigned by the
/// store at creation and never change afterwards; `aging_days` is derived and
/// only touched by the aging refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescription {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_wire_codes() {
        for code in 1..=5 {
            let mode = Mode::try_from(code).expect("valid code");
            assert_eq!(i32::from(mode), code);
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(Mode::try_from(0).is_err());
        assert!(Mode::try_from(6).is_err());
        assert!(Status::try_from(4).is_err());
    }

    #[test]
    fn enums_serialize_as_integers() {
        assert_eq!(serde_json::to_string(&Mode::Remote).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Status::Closed).unwrap(), "3");
        let mode: Mode = serde_json::from_str("4").unwrap();
        assert_eq!(mode, Mode::Contract);
    }
}
