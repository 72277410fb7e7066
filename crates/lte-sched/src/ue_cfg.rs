use std::collections::BTreeMap;

use lte_core::{Direction, LcId, UE_PCELL_CC_IDX, is_srb_lcid};

/// Scheduler-side logical channel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BearerCfg {
    pub direction: Direction,
    /// Lower value is higher priority
    pub priority: u8,
    /// Prioritised bit rate in kByte/s, -1 is unlimited
    pub pbr: i32,
    /// Bucket size duration in ms, -1 is unlimited
    pub bsd: i32,
    /// Logical channel group for BSR reporting
    pub group: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxMode {
    #[default]
    Tm1,
    Tm2,
    Tm3,
    Tm4,
    Tm5,
    Tm6,
    Tm7,
    Tm8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodebookType {
    #[default]
    None,
    N2TxAntTm3,
    N4TxAntTm3,
    N2TxAntTm4,
    N4TxAntTm4,
    N2TxAntTm5,
    N4TxAntTm5,
    N2TxAntTm6,
    N4TxAntTm6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UeTxAntSel {
    #[default]
    Release,
    ClosedLoop,
    OpenLoop,
}

/// Dedicated DL antenna configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AntInfoDed {
    pub tx_mode: TxMode,
    pub cb_type: CodebookType,
    pub codebook_subset_restrict: u64,
    pub ue_tx_ant_sel: UeTxAntSel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DlCqiReportCfg {
    pub periodic_configured: bool,
    pub aperiodic_configured: bool,
    pub pmi_idx: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CcDlCfg {
    pub tm: TxMode,
    pub cqi_report: DlCqiReportCfg,
}

/// One entry of the UE carrier list. Index 0 of the list is the PCell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CcCfg {
    pub active: bool,
    /// eNB-wide carrier index this UE carrier maps to
    pub enb_cc_idx: u32,
    pub aperiodic_cqi_period: u32,
    pub dl_cfg: CcDlCfg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PucchCfg {
    pub sr_configured: bool,
    /// SR configuration index
    pub i_sr: u32,
    /// SR PUCCH resource index
    pub n_pucch_sr: u32,
    /// CQI PUCCH resource index
    pub n_pucch: u32,
    // From SIB2 PUCCH-ConfigCommon
    pub delta_pucch_shift: u32,
    pub n_cs: u32,
    pub n_rb_2: u32,
    pub n_pucch_1: u32,
}

/// PUSCH UCI beta offset indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UciOffsets {
    pub i_offset_cqi: u32,
    pub i_offset_ack: u32,
    pub i_offset_ri: u32,
}

/// Complete scheduler view of one UE
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UeSchedCfg {
    pub maxharq_tx: u32,
    pub continuous_pusch: bool,
    pub supported_cc_list: Vec<CcCfg>,
    pub ue_bearers: BTreeMap<LcId, BearerCfg>,
    pub pucch_cfg: PucchCfg,
    pub uci_offset: UciOffsets,
    pub dl_ant_info: AntInfoDed,
    /// Use the alternative (256QAM) TBS table
    pub use_tbs_index_alt: bool,
    pub support_ul_64qam: bool,
}

impl UeSchedCfg {
    /// PCell entry, if the carrier list is populated
    pub fn pcell(&self) -> Option<&CcCfg> {
        self.supported_cc_list.get(UE_PCELL_CC_IDX)
    }

    /// True if carrier 0 exists and is active
    pub fn has_active_pcell(&self) -> bool {
        self.pcell().is_some_and(|cc| cc.active)
    }

    /// Grows the carrier list so `ue_cc_idx` is addressable. New entries are inactive and zeroed.
    pub fn ensure_cc(&mut self, ue_cc_idx: usize) -> &mut CcCfg {
        if ue_cc_idx >= self.supported_cc_list.len() {
            self.supported_cc_list.resize(ue_cc_idx + 1, CcCfg::default());
        }
        &mut self.supported_cc_list[ue_cc_idx]
    }

    /// Bearer configuration of a logical channel, zeroed if never configured
    pub fn bearer(&self, lcid: LcId) -> BearerCfg {
        self.ue_bearers.get(&lcid).copied().unwrap_or_default()
    }

    /// Iterates over all configured data (non-signalling) bearers
    pub fn data_bearers(&self) -> impl Iterator<Item = (&LcId, &BearerCfg)> {
        self.ue_bearers.iter().filter(|(lcid, _)| !is_srb_lcid(**lcid))
    }

    /// Active flags of the carrier list, PCell first
    pub fn cc_activation(&self) -> Vec<bool> {
        self.supported_cc_list.iter().map(|cc| cc.active).collect()
    }
}
