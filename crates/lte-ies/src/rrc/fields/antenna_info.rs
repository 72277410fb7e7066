use crate::rrc::enums::transmission_mode::TransmissionMode;

/// codebookSubsetRestriction CHOICE of AntennaInfoDedicated.
/// Bitmaps are right-aligned; their width is given by the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodebookSubsetRestriction {
    /// 2 bits
    N2TxAntTm3(u8),
    /// 4 bits
    N4TxAntTm3(u8),
    /// 6 bits
    N2TxAntTm4(u8),
    /// 64 bits
    N4TxAntTm4(u64),
    /// 4 bits
    N2TxAntTm5(u8),
    /// 16 bits
    N4TxAntTm5(u16),
    /// 4 bits
    N2TxAntTm6(u8),
    /// 16 bits
    N4TxAntTm6(u16),
}

/// ue-TransmitAntennaSelection CHOICE, setup branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UeTxAntennaSelection {
    ClosedLoop,
    OpenLoop,
}

/// TS 36.331 6.3.2 AntennaInfoDedicated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntennaInfoDedicated {
    pub transmission_mode: TransmissionMode,
    pub codebook_subset_restriction: Option<CodebookSubsetRestriction>,
    /// None encodes the release branch
    pub ue_tx_antenna_selection: Option<UeTxAntennaSelection>,
}

/// antennaInfo CHOICE of PhysicalConfigDedicated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AntennaInfo {
    ExplicitValue(AntennaInfoDedicated),
    DefaultValue,
}
