use crate::event::EventDetail;
use crate::grid::HeatmapGrid;
use crate::recommend::{recommended_panel, RecommendedCard};
use serde::Serialize;

/// What the schedule tab of the detail page should show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ScheduleView {
    /// Nobody has submitted availability yet; show the placeholder
    /// message instead of an all-neutral grid.
    AwaitingSubmissions,
    Ready {
        heatmap: HeatmapGrid,
        /// Absent entirely when the backend recommends nothing.
        recommended: Option<Vec<RecommendedCard>>,
    },
}

impl EventDetail {
    /// Derives the full schedule view from the payload. Recomputed
    /// from scratch on every call; never patched incrementally.
    pub fn schedule_view(&self) -> ScheduleView {
        let submitted = self.submitted_count();
        if submitted == 0 {
            return ScheduleView::AwaitingSubmissions;
        }

        ScheduleView::Ready {
            heatmap: HeatmapGrid::build(
                &self.dates,
                self.start_hour,
                self.end_hour,
                &self.heatmap,
                submitted,
            ),
            recommended: recommended_panel(
                &self.recommended_times,
                self.participants.len() as u32,
            ),
        }
    }
}
