use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Aggregated availability for one half-hour point on one date.
///
/// Produced wholesale by the backend per poll; the client treats it as
/// immutable and re-fetches rather than patching.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeatmapSlot {
    /// Join key in `<date>T<HH:MM>:00` form.
    pub dt: String,
    pub unavailable_count: u32,
    pub unavailable_members: Vec<String>,
}

/// A backend-ranked candidate meeting window. Ranking happens
/// server-side; the client never re-sorts these.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecommendedSlot {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub available_count: u32,
    pub all_available: bool,
}

/// One roster entry of the poll.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EventParticipant {
    pub user_id: u64,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub has_submitted: bool,
    pub submitted_at: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Active,
    Completed,
    Expired,
}

impl EventStatus {
    pub fn label(self) -> &'static str {
        match self {
            EventStatus::Active => "진행중",
            EventStatus::Completed => "종료",
            EventStatus::Expired => "만료",
        }
    }

    pub fn badge_variant(self) -> BadgeVariant {
        match self {
            EventStatus::Active => BadgeVariant::Default,
            EventStatus::Completed => BadgeVariant::Secondary,
            EventStatus::Expired => BadgeVariant::Outline,
        }
    }
}

/// Visual weight of a badge in the console's component library.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
}

/// Submission figures for the participation tab.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParticipationStats {
    pub total: u32,
    pub submitted: u32,
    pub not_submitted: u32,
    /// Rounded percentage; 0 for an empty roster.
    pub submit_rate: u32,
}

/// The event-detail payload as served by the admin API.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EventDetail {
    pub event_id: String,
    pub title: String,
    pub status: EventStatus,
    pub created_at: String,
    pub creator_id: u64,
    pub creator_nickname: Option<String>,
    pub creator_email: Option<String>,
    pub dates: Vec<String>,
    pub start_hour: u8,
    pub end_hour: u8,
    pub heatmap: Vec<HeatmapSlot>,
    pub recommended_times: Vec<RecommendedSlot>,
    pub participants: Vec<EventParticipant>,
}

impl EventDetail {
    /// Number of roster members who completed submission. This is the
    /// denominator for every availability ratio, not the roster size.
    pub fn submitted_count(&self) -> u32 {
        self.participants.iter().filter(|p| p.has_submitted).count() as u32
    }

    pub fn participation_stats(&self) -> ParticipationStats {
        let total = self.participants.len() as u32;
        let submitted = self.submitted_count();

        let submit_rate = if total == 0 {
            0
        } else {
            (f64::from(submitted) / f64::from(total) * 100.0).round() as u32
        };

        ParticipationStats {
            total,
            submitted,
            not_submitted: total - submitted,
            submit_rate,
        }
    }

    /// Sanity-checks the payload against the API contract.
    ///
    /// Grid building never fails on bad data (malformed slots degrade
    /// to fully-available cells), so this is a separate check for
    /// surfacing contract drift at the API boundary.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start_hour > 24 {
            return Err(ValidationError::HourOutOfRange {
                field: "start_hour",
                value: self.start_hour,
            });
        }
        if self.end_hour > 24 {
            return Err(ValidationError::HourOutOfRange {
                field: "end_hour",
                value: self.end_hour,
            });
        }

        let submitted = self.submitted_count();

        for slot in &self.heatmap {
            if slot.unavailable_members.len() != slot.unavailable_count as usize {
                return Err(ValidationError::MemberCountMismatch {
                    dt: slot.dt.clone(),
                    expected: slot.unavailable_count,
                    found: slot.unavailable_members.len(),
                });
            }
            if slot.unavailable_count > submitted {
                return Err(ValidationError::CountExceedsSubmitted {
                    dt: slot.dt.clone(),
                    unavailable: slot.unavailable_count,
                    submitted,
                });
            }
        }

        Ok(())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("hour out of range. Expected 0..=24, {field} was {value}")]
    HourOutOfRange { field: &'static str, value: u8 },
    #[error("slot {dt} lists {found} members for unavailable_count {expected}")]
    MemberCountMismatch {
        dt: String,
        expected: u32,
        found: usize,
    },
    #[error("slot {dt} has {unavailable} unavailable out of {submitted} submitted")]
    CountExceedsSubmitted {
        dt: String,
        unavailable: u32,
        submitted: u32,
    },
}
