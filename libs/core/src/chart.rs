use std::collections::HashMap;

use serde::Serialize;

use crate::record::NameRecord;

/// Chart columns, drawn whether or not the data covers them.
pub const YEAR_AXIS: [&str; 10] = [
    "2014", "2015", "2016", "2017", "2018", "2019", "2020", "2021", "2022", "2023",
];

/// Height of the bar for the best observed rank.
pub const MAX_BAR_HEIGHT: u32 = 180;
/// Height of every ranked bar when all observed ranks are equal.
pub const TIED_BAR_HEIGHT: u32 = 80;
pub const TOP_TEN_CUTOFF: u64 = 10;

/// Horizontal placement of column `i` is `BAR_OFFSET + i * BAR_STRIDE` pixels.
pub const BAR_OFFSET: u32 = 10;
pub const BAR_STRIDE: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearBar {
    pub year: &'static str,
    /// 0 when the name was unranked that year.
    pub rank: u64,
    pub height: u32,
    pub top_ten: bool,
    pub offset: u32,
}

impl YearBar {
    /// Text drawn on the bar; flat bars carry none.
    pub fn label(&self) -> Option<String> {
        (self.height > 0).then(|| self.rank.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RankChart {
    /// No record carried a positive rank; nothing is drawn.
    NoRankingData,
    Bars { bars: Vec<YearBar> },
}

impl RankChart {
    pub fn bars(&self) -> &[YearBar] {
        match self {
            Self::NoRankingData => &[],
            Self::Bars { bars } => bars,
        }
    }
}

/// Maps one name's records onto the fixed year axis.
///
/// Bar height is linear in rank between the best (`MAX_BAR_HEIGHT`) and the
/// worst (0) rank observed for the name.
pub fn normalize(records: &[NameRecord]) -> RankChart {
    let mut year_to_rank = HashMap::new();
    for record in records {
        if let Some(rank) = record.rank_value() {
            year_to_rank.insert(record.year.as_str(), rank);
        }
    }

    let ranked = records
        .iter()
        .filter_map(NameRecord::rank_value)
        .filter(|rank| *rank > 0);

    let Some((min_rank, max_rank)) = ranked.fold(None, |bounds, rank| match bounds {
        None => Some((rank, rank)),
        Some((min, max)) => Some((rank.min(min), rank.max(max))),
    }) else {
        return RankChart::NoRankingData;
    };

    let bars = YEAR_AXIS
        .iter()
        .zip(0_u32..)
        .map(|(&year, index)| {
            let rank = year_to_rank.get(year).copied().unwrap_or(0);
            YearBar {
                year,
                rank,
                height: bar_height(rank, min_rank, max_rank),
                top_ten: (1..=TOP_TEN_CUTOFF).contains(&rank),
                offset: BAR_OFFSET + index * BAR_STRIDE,
            }
        })
        .collect();

    RankChart::Bars { bars }
}

fn bar_height(rank: u64, min_rank: u64, max_rank: u64) -> u32 {
    if rank == 0 {
        return 0;
    }
    if min_rank == max_rank {
        return TIED_BAR_HEIGHT;
    }

    let span = u128::from(max_rank - min_rank);
    let distance = u128::from(max_rank.saturating_sub(rank)).min(span);
    let height = distance * u128::from(MAX_BAR_HEIGHT) / span;
    u32::try_from(height).unwrap_or(MAX_BAR_HEIGHT)
}
