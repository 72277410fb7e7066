use std::sync::Arc;
use lte_core::Pci;

/// Allowed values of MAC-MainConfig ul-SCH-Config maxHARQ-Tx, TS 36.331 6.3.2
pub const MAX_HARQ_TX_VALUES: [u32; 14] = [1, 2, 3, 4, 5, 6, 7, 8, 10, 12, 16, 20, 24, 28];

/// MAC main configuration, common to all UEs
#[derive(Debug, Clone)]
pub struct CfgMac {
    /// Maximum number of UL HARQ transmissions
    pub max_harq_tx: u32,
}

impl Default for CfgMac {
    fn default() -> Self {
        Self { max_harq_tx: 4 }
    }
}

/// CQI reporting configuration
#[derive(Debug, Clone)]
pub struct CfgCqi {
    /// Period in ms handed to the scheduler when a UE is configured for aperiodic CQI
    pub period: u32,
}

impl Default for CfgCqi {
    fn default() -> Self {
        Self { period: 40 }
    }
}

/// PUSCH UCI beta offsets used until a UE receives a dedicated PUSCH configuration
#[derive(Debug, Clone)]
pub struct CfgPusch {
    /// 4 bits, betaOffset-ACK-Index
    pub beta_offset_ack_idx: u8,
    /// 4 bits, betaOffset-RI-Index
    pub beta_offset_ri_idx: u8,
    /// 4 bits, betaOffset-CQI-Index
    pub beta_offset_cqi_idx: u8,
}

impl Default for CfgPusch {
    fn default() -> Self {
        Self {
            beta_offset_ack_idx: 6,
            beta_offset_ri_idx: 6,
            beta_offset_cqi_idx: 6,
        }
    }
}

/// PUCCH-ConfigCommon as broadcast in SIB2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CfgPucchCommon {
    /// deltaPUCCH-Shift, 1..=3
    pub delta_pucch_shift: u8,
    /// nRB-CQI, 0..=98
    pub nrb_cqi: u8,
    /// nCS-AN, 0..=7
    pub ncs_an: u8,
    /// n1PUCCH-AN, 0..=2047
    pub n1_pucch_an: u16,
}

impl Default for CfgPucchCommon {
    fn default() -> Self {
        Self {
            delta_pucch_shift: 1,
            nrb_cqi: 1,
            ncs_an: 0,
            n1_pucch_an: 12,
        }
    }
}

/// A cell served by this eNB. The position in `StackConfig::cells` is the eNB carrier index.
#[derive(Debug, Clone)]
pub struct CfgCell {
    pub pci: Pci,
    pub dl_earfcn: u32,
    pub pucch: CfgPucchCommon,
}

impl CfgCell {
    pub fn new(pci: Pci, dl_earfcn: u32) -> Self {
        Self { pci, dl_earfcn, pucch: CfgPucchCommon::default() }
    }
}

#[derive(Debug, Clone)]
pub struct StackConfig {
    pub debug_log: Option<String>,

    pub mac: CfgMac,
    pub cqi: CfgCqi,
    pub pusch: CfgPusch,

    /// Cell table is REQUIRED - at least one cell must be present
    pub cells: Vec<CfgCell>,
}

impl StackConfig {
    pub fn new(cells: Vec<CfgCell>) -> Self {
        StackConfig {
            debug_log: None,
            mac: CfgMac::default(),
            cqi: CfgCqi::default(),
            pusch: CfgPusch::default(),
            cells,
        }
    }

    /// Validate that all required configuration fields are properly set.
    pub fn validate(&self) -> Result<(), &str> {
        if !MAX_HARQ_TX_VALUES.contains(&self.mac.max_harq_tx) {
            return Err("mac_cnfg.max_harq_tx must be one of 1-8, 10, 12, 16, 20, 24, 28");
        }
        if self.cqi.period == 0 {
            return Err("cqi_cfg.period must be non-zero");
        }
        if self.pusch.beta_offset_ack_idx > 15 || self.pusch.beta_offset_ri_idx > 15 || self.pusch.beta_offset_cqi_idx > 15 {
            return Err("pusch_cfg beta offset indices must be in range 0-15");
        }

        if self.cells.is_empty() {
            return Err("at least one cell must be configured");
        }
        for (idx, cell) in self.cells.iter().enumerate() {
            if cell.pci > 503 {
                return Err("cell pci must be in range 0-503");
            }
            if !(1..=3).contains(&cell.pucch.delta_pucch_shift) {
                return Err("cell pucch.delta_pucch_shift must be 1, 2 or 3");
            }
            if cell.pucch.ncs_an > 7 {
                return Err("cell pucch.ncs_an must be in range 0-7");
            }
            if cell.pucch.n1_pucch_an > 2047 {
                return Err("cell pucch.n1_pucch_an must be in range 0-2047");
            }
            if self.cells[..idx].iter().any(|other| other.pci == cell.pci) {
                return Err("cell pci values must be unique");
            }
        }

        Ok(())
    }

    /// Look up the eNB carrier index of the cell with the given PCI
    pub fn enb_cc_idx_by_pci(&self, pci: Pci) -> Option<u32> {
        self.cells.iter().position(|c| c.pci == pci).map(|idx| idx as u32)
    }
}

/// Global shared configuration, immutable after construction.
#[derive(Clone, Debug)]
pub struct SharedConfig {
    cfg: Arc<StackConfig>,
}

impl SharedConfig {
    pub fn from_config(cfg: StackConfig) -> Self {
        // Check config for validity before returning the SharedConfig object
        match cfg.validate() {
            Ok(_) => {}
            Err(e) => panic!("Invalid stack configuration: {}", e),
        }

        Self { cfg: Arc::new(cfg) }
    }

    /// Access immutable config.
    pub fn config(&self) -> Arc<StackConfig> {
        Arc::clone(&self.cfg)
    }
}
