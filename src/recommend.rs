use crate::event::{BadgeVariant, RecommendedSlot};
use crate::time::DateInfo;
use serde::Serialize;

/// Presentational card for one backend-ranked meeting window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecommendedCard {
    /// `M/D(요일)`, or the raw date string when it does not parse.
    pub date_label: String,
    pub start_time: String,
    pub end_time: String,
    pub badge_label: String,
    pub badge_variant: BadgeVariant,
    /// `N명 가능`, suffixed with ` (전원)` when everyone can attend.
    pub summary: String,
    pub available_count: u32,
    pub all_available: bool,
}

impl RecommendedCard {
    pub fn from_slot(slot: &RecommendedSlot, total_participants: u32) -> RecommendedCard {
        let info = DateInfo::from_date(&slot.date);
        let date_label = if info.day.is_empty() {
            info.label
        } else {
            format!("{}({})", info.label, info.day)
        };

        let (badge_label, badge_variant) = if slot.all_available {
            ("전원 가능".to_string(), BadgeVariant::Default)
        } else {
            (
                format!("{}/{}명", slot.available_count, total_participants),
                BadgeVariant::Secondary,
            )
        };

        let summary = if slot.all_available {
            format!("{}명 가능 (전원)", slot.available_count)
        } else {
            format!("{}명 가능", slot.available_count)
        };

        RecommendedCard {
            date_label,
            start_time: slot.start_time.clone(),
            end_time: slot.end_time.clone(),
            badge_label,
            badge_variant,
            summary,
            available_count: slot.available_count,
            all_available: slot.all_available,
        }
    }
}

/// Maps the ranked window list to cards, preserving the backend's
/// order exactly. An empty list means the whole panel is omitted, not
/// rendered empty.
pub fn recommended_panel(
    slots: &[RecommendedSlot],
    total_participants: u32,
) -> Option<Vec<RecommendedCard>> {
    if slots.is_empty() {
        return None;
    }

    Some(
        slots
            .iter()
            .map(|slot| RecommendedCard::from_slot(slot, total_participants))
            .collect(),
    )
}
