use lte_core::Pci;

use super::rr_cfg_ded::RrCfgDedSCell;

/// cellIdentification-r10 of SCellToAddMod-r10
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellIdentification {
    pub pci_r10: Pci,
    pub dl_carrier_freq_r10: u32,
}

/// TS 36.331 6.3.2 SCellToAddMod-r10
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SCellToAddMod {
    /// 1..7
    pub scell_idx_r10: u8,
    pub cell_identification_r10: Option<CellIdentification>,
    pub rr_cfg_ded_scell_r10: Option<RrCfgDedSCell>,
}
