use serde::Serialize;

/// Discrete severity bucket for one grid cell, from "everyone can make
/// it" down to "nobody can".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum HeatTier {
    /// Nobody has submitted availability; the cell carries no signal.
    NoData,
    /// No unavailable members at all.
    Free,
    /// At most a quarter of submitters are unavailable.
    MostlyFree,
    /// At most half are unavailable.
    LeaningFree,
    /// At most three quarters are unavailable.
    LeaningBusy,
    /// More than three quarters, but not everyone.
    MostlyBusy,
    /// Every submitter is unavailable.
    AllBusy,
}

/// Legend order, best to worst.
pub const LEGEND: [HeatTier; 6] = [
    HeatTier::Free,
    HeatTier::MostlyFree,
    HeatTier::LeaningFree,
    HeatTier::LeaningBusy,
    HeatTier::MostlyBusy,
    HeatTier::AllBusy,
];

impl HeatTier {
    /// Classifies a cell by its unavailability ratio.
    ///
    /// Boundaries are inclusive on the less-severe side: a ratio of
    /// exactly 0.25, 0.5 or 0.75 lands in the lower tier. Comparisons
    /// are done in integers so the boundaries hold exactly.
    ///
    /// # Examples
    /// ```
    /// use chinba_libs::cell::HeatTier;
    ///
    /// assert_eq!(HeatTier::classify(0, 4), HeatTier::Free);
    /// assert_eq!(HeatTier::classify(1, 4), HeatTier::MostlyFree);
    /// assert_eq!(HeatTier::classify(2, 4), HeatTier::LeaningFree);
    /// assert_eq!(HeatTier::classify(3, 4), HeatTier::LeaningBusy);
    /// assert_eq!(HeatTier::classify(4, 5), HeatTier::MostlyBusy);
    /// assert_eq!(HeatTier::classify(4, 4), HeatTier::AllBusy);
    /// assert_eq!(HeatTier::classify(7, 0), HeatTier::NoData);
    /// ```
    pub fn classify(unavailable: u32, submitted: u32) -> HeatTier {
        if submitted == 0 {
            return HeatTier::NoData;
        }
        if unavailable == 0 {
            return HeatTier::Free;
        }

        let unavailable = u64::from(unavailable);
        let submitted = u64::from(submitted);

        if 4 * unavailable <= submitted {
            HeatTier::MostlyFree
        } else if 2 * unavailable <= submitted {
            HeatTier::LeaningFree
        } else if 4 * unavailable <= 3 * submitted {
            HeatTier::LeaningBusy
        } else if unavailable < submitted {
            HeatTier::MostlyBusy
        } else {
            HeatTier::AllBusy
        }
    }

    /// Background class used by the console for this tier.
    pub fn css_class(self) -> &'static str {
        match self {
            HeatTier::NoData => "bg-gray-100",
            HeatTier::Free => "bg-emerald-300",
            HeatTier::MostlyFree => "bg-emerald-200",
            HeatTier::LeaningFree => "bg-emerald-100",
            HeatTier::LeaningBusy => "bg-red-300",
            HeatTier::MostlyBusy => "bg-red-500",
            HeatTier::AllBusy => "bg-red-800",
        }
    }
}

/// Contrast bucket for the numeric label drawn on top of a cell.
///
/// Deliberately coarser than `HeatTier`: the label only has to stay
/// readable, so the split is at the half-way ratio rather than at every
/// tier boundary. The two threshold sets are independent and kept that
/// way.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TextTone {
    NoData,
    Accent,
    Dark,
    Light,
}

impl TextTone {
    pub fn classify(unavailable: u32, submitted: u32) -> TextTone {
        if submitted == 0 {
            return TextTone::NoData;
        }
        if unavailable == 0 {
            return TextTone::Accent;
        }

        if 2 * u64::from(unavailable) <= u64::from(submitted) {
            TextTone::Dark
        } else {
            TextTone::Light
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            TextTone::NoData => "text-gray-300",
            TextTone::Accent => "text-emerald-700",
            TextTone::Dark => "text-gray-700",
            TextTone::Light => "text-white",
        }
    }
}

/// Number shown inside a cell: how many submitters are still free.
///
/// Hidden when nobody has submitted, or when nobody is free.
///
/// # Examples
/// ```
/// use chinba_libs::cell::available_label;
///
/// assert_eq!(available_label(3, 5), Some(2));
/// assert_eq!(available_label(5, 5), None);
/// assert_eq!(available_label(0, 0), None);
/// ```
pub fn available_label(unavailable: u32, submitted: u32) -> Option<u32> {
    if submitted == 0 {
        return None;
    }

    match submitted.saturating_sub(unavailable) {
        0 => None,
        available => Some(available),
    }
}
