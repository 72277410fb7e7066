/// TS 36.331 6.3.2 CQI-ReportModeAperiodic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CqiReportModeAperiodic {
    Rm12 = 0,
    Rm20 = 1,
    Rm22 = 2,
    Rm30 = 3,
    Rm31 = 4,
    Rm32V1250 = 5,
    Rm10V1310 = 6,
    Rm11V1310 = 7,
}

impl std::convert::TryFrom<u64> for CqiReportModeAperiodic {
    type Error = ();
    fn try_from(x: u64) -> Result<Self, Self::Error> {
        match x {
            0 => Ok(CqiReportModeAperiodic::Rm12),
            1 => Ok(CqiReportModeAperiodic::Rm20),
            2 => Ok(CqiReportModeAperiodic::Rm22),
            3 => Ok(CqiReportModeAperiodic::Rm30),
            4 => Ok(CqiReportModeAperiodic::Rm31),
            5 => Ok(CqiReportModeAperiodic::Rm32V1250),
            6 => Ok(CqiReportModeAperiodic::Rm10V1310),
            7 => Ok(CqiReportModeAperiodic::Rm11V1310),
            _ => Err(()),
        }
    }
}

impl CqiReportModeAperiodic {
    /// Convert this enum back into the raw ASN.1 enumerated index
    pub fn into_raw(self) -> u64 {
        self as u64
    }

    /// Reporting mode number, e.g. 30 for rm30
    pub fn to_number(self) -> u32 {
        match self {
            CqiReportModeAperiodic::Rm12 => 12,
            CqiReportModeAperiodic::Rm20 => 20,
            CqiReportModeAperiodic::Rm22 => 22,
            CqiReportModeAperiodic::Rm30 => 30,
            CqiReportModeAperiodic::Rm31 => 31,
            CqiReportModeAperiodic::Rm32V1250 => 32,
            CqiReportModeAperiodic::Rm10V1310 => 10,
            CqiReportModeAperiodic::Rm11V1310 => 11,
        }
    }
}

impl core::fmt::Display for CqiReportModeAperiodic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "rm{}", self.to_number())
    }
}
