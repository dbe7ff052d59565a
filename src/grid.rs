use crate::cell::{available_label, HeatTier, TextTone};
use crate::event::HeatmapSlot;
use crate::time::{half_hour_slots, slot_key, DateInfo};
use itertools::Itertools;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// Indexes sparse slot records by their join key so per-cell lookups
/// during grid building are O(1).
///
/// Pure; rebuilt from scratch whenever the slot collection changes.
/// Duplicate keys keep the last record rather than failing.
pub fn slot_lookup(slots: &[HeatmapSlot]) -> HashMap<&str, &HeatmapSlot> {
    slots.iter().map(|slot| (slot.dt.as_str(), slot)).collect()
}

/// Hover disclosure for a cell with at least one unavailable member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellTooltip {
    /// `MM-DD HH:MM - N명 불가`
    pub heading: String,
    /// Comma-joined member names, in the order the backend sent them.
    pub members: String,
}

/// One rendered cell of the heatmap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub key: String,
    pub unavailable_count: u32,
    pub available_label: Option<u32>,
    pub tier: HeatTier,
    pub tone: TextTone,
    pub tooltip: Option<CellTooltip>,
}

/// One row of the grid: a half-hour boundary across every date column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GridRow {
    pub time: String,
    /// Gutter label, present only on full-hour rows (`9:00`, unpadded).
    pub hour_label: Option<String>,
    pub cells: Vec<GridCell>,
}

/// Dense date × half-hour render model of the availability heatmap.
///
/// Covers the full cross product of the event's dates and time axis;
/// slots missing from the sparse collection render as fully available.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeatmapGrid {
    pub dates: Vec<DateInfo>,
    pub rows: Vec<GridRow>,
}

impl HeatmapGrid {
    /// Builds the full grid. Pure: identical inputs yield an equal
    /// grid, and nothing is cached between calls.
    pub fn build(
        dates: &[String],
        start_hour: u8,
        end_hour: u8,
        heatmap: &[HeatmapSlot],
        submitted_count: u32,
    ) -> HeatmapGrid {
        let lookup = slot_lookup(heatmap);
        let times = half_hour_slots(start_hour, end_hour);

        debug!(
            "building heatmap grid: {} dates x {} time slots, {} slot records",
            dates.len(),
            times.len(),
            heatmap.len()
        );

        let rows = times
            .iter()
            .map(|time| GridRow {
                time: time.clone(),
                hour_label: hour_label(time),
                cells: dates
                    .iter()
                    .map(|date| build_cell(date, time, &lookup, submitted_count))
                    .collect(),
            })
            .collect();

        HeatmapGrid {
            dates: dates.iter().map(|d| DateInfo::from_date(d)).collect(),
            rows,
        }
    }
}

fn hour_label(time: &str) -> Option<String> {
    if !time.ends_with(":00") {
        return None;
    }

    time.get(..2)
        .and_then(|h| h.parse::<u8>().ok())
        .map(|h| format!("{}:00", h))
}

fn build_cell(
    date: &str,
    time: &str,
    lookup: &HashMap<&str, &HeatmapSlot>,
    submitted_count: u32,
) -> GridCell {
    let key = slot_key(date, time);
    let slot = lookup.get(key.as_str()).copied();
    let unavailable = slot.map_or(0, |s| s.unavailable_count);

    let tooltip = slot.filter(|s| s.unavailable_count > 0).map(|s| CellTooltip {
        heading: format!(
            "{} {} - {}명 불가",
            date.get(5..).unwrap_or(date),
            time,
            s.unavailable_count
        ),
        members: s.unavailable_members.iter().join(", "),
    });

    GridCell {
        key,
        unavailable_count: unavailable,
        available_label: available_label(unavailable, submitted_count),
        tier: HeatTier::classify(unavailable, submitted_count),
        tone: TextTone::classify(unavailable, submitted_count),
        tooltip,
    }
}
