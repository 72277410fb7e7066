/// Scheduling direction of a logical channel, as seen by the MAC scheduler
#[derive(Debug, Clone, PartialEq, Eq, Copy, Default)]
pub enum Direction {
    /// Bearer configured but not scheduled in either direction
    #[default]
    Idle,
    /// Uplink
    Ul,
    /// Downlink
    Dl,
    Both
}

impl Direction {
    #[inline]
    pub fn includes_ul(&self) -> bool {
        matches!(self, Direction::Ul | Direction::Both)
    }

    #[inline]
    pub fn includes_dl(&self) -> bool {
        matches!(self, Direction::Dl | Direction::Both)
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        *self == Direction::Idle
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Direction::Idle => write!(f, "Idle"),
            Direction::Ul => write!(f, "Ul"),
            Direction::Dl => write!(f, "Dl"),
            Direction::Both => write!(f, "Both"),
        }
    }
}
