/// TS 36.331 6.3.2 LogicalChannelConfig prioritisedBitRate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PrioritisedBitRate {
    Kbps0 = 0,
    Kbps8 = 1,
    Kbps16 = 2,
    Kbps32 = 3,
    Kbps64 = 4,
    Kbps128 = 5,
    Kbps256 = 6,
    Infinity = 7,
    Kbps512V1020 = 8,
    Kbps1024V1020 = 9,
    Kbps2048V1020 = 10,
}

impl std::convert::TryFrom<u64> for PrioritisedBitRate {
    type Error = ();
    fn try_from(x: u64) -> Result<Self, Self::Error> {
        match x {
            0 => Ok(PrioritisedBitRate::Kbps0),
            1 => Ok(PrioritisedBitRate::Kbps8),
            2 => Ok(PrioritisedBitRate::Kbps16),
            3 => Ok(PrioritisedBitRate::Kbps32),
            4 => Ok(PrioritisedBitRate::Kbps64),
            5 => Ok(PrioritisedBitRate::Kbps128),
            6 => Ok(PrioritisedBitRate::Kbps256),
            7 => Ok(PrioritisedBitRate::Infinity),
            8 => Ok(PrioritisedBitRate::Kbps512V1020),
            9 => Ok(PrioritisedBitRate::Kbps1024V1020),
            10 => Ok(PrioritisedBitRate::Kbps2048V1020),
            _ => Err(()),
        }
    }
}

impl PrioritisedBitRate {
    /// Convert this enum back into the raw ASN.1 enumerated index
    pub fn into_raw(self) -> u64 {
        self as u64
    }

    /// Bit rate in kByte/s. Infinity maps to -1.
    pub fn to_number(self) -> i32 {
        match self {
            PrioritisedBitRate::Kbps0 => 0,
            PrioritisedBitRate::Kbps8 => 8,
            PrioritisedBitRate::Kbps16 => 16,
            PrioritisedBitRate::Kbps32 => 32,
            PrioritisedBitRate::Kbps64 => 64,
            PrioritisedBitRate::Kbps128 => 128,
            PrioritisedBitRate::Kbps256 => 256,
            PrioritisedBitRate::Infinity => -1,
            PrioritisedBitRate::Kbps512V1020 => 512,
            PrioritisedBitRate::Kbps1024V1020 => 1024,
            PrioritisedBitRate::Kbps2048V1020 => 2048,
        }
    }
}

impl core::fmt::Display for PrioritisedBitRate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PrioritisedBitRate::Infinity => write!(f, "infinity"),
            _ => write!(f, "kBps{}", self.to_number()),
        }
    }
}
