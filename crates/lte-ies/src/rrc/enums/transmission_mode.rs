/// TS 36.331 6.3.2 AntennaInfoDedicated transmissionMode
/// ENUMERATED, tm8-v920 is the last R8/R9 value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TransmissionMode {
    Tm1 = 0,
    Tm2 = 1,
    Tm3 = 2,
    Tm4 = 3,
    Tm5 = 4,
    Tm6 = 5,
    Tm7 = 6,
    Tm8V920 = 7,
}

impl std::convert::TryFrom<u64> for TransmissionMode {
    type Error = ();
    fn try_from(x: u64) -> Result<Self, Self::Error> {
        match x {
            0 => Ok(TransmissionMode::Tm1),
            1 => Ok(TransmissionMode::Tm2),
            2 => Ok(TransmissionMode::Tm3),
            3 => Ok(TransmissionMode::Tm4),
            4 => Ok(TransmissionMode::Tm5),
            5 => Ok(TransmissionMode::Tm6),
            6 => Ok(TransmissionMode::Tm7),
            7 => Ok(TransmissionMode::Tm8V920),
            _ => Err(()),
        }
    }
}

impl TransmissionMode {
    /// Convert this enum back into the raw ASN.1 enumerated index
    pub fn into_raw(self) -> u64 {
        self as u64
    }

    /// Transmission mode number, 1..=8
    pub fn to_number(self) -> u8 {
        self as u8 + 1
    }
}

impl core::fmt::Display for TransmissionMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "tm{}", self.to_number())
    }
}
