//! Internal numbering outcome produced by the strategy engine.

/// What the numbering strategies ultimately found in a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NumberingOutcome {
    /// A season/episode pair, e.g. S02E03 or 2x03.
    Episode { season: u16, episode: u16 },
    /// A calendar date, e.g. 2008-12-13.
    Date { year: u16, month: u8, day: u8 },
    /// A bare sequence number with its original digits preserved.
    Sequence { digits: String },
}

impl NumberingOutcome {
    /// Canonical identifier string for this outcome.
    pub(crate) fn identifier(&self) -> String {
        match self {
            NumberingOutcome::Episode { season, episode } => {
                format!("S{season:02}E{episode:02}")
            }
            NumberingOutcome::Date { year, month, day } => {
                format!("{year}-{month:02}-{day:02}")
            }
            NumberingOutcome::Sequence { digits } => digits.clone(),
        }
    }

    pub(crate) fn season(&self) -> Option<u16> {
        match self {
            NumberingOutcome::Episode { season, .. } => Some(*season),
            _ => None,
        }
    }

    pub(crate) fn episode(&self) -> Option<u16> {
        match self {
            NumberingOutcome::Episode { episode, .. } => Some(*episode),
            _ => None,
        }
    }
}
