use lte_config::{CfgPucchCommon, SharedConfig};
use lte_core::{MAX_CARRIERS, Pci, UE_PCELL_CC_IDX};

/// eNB carrier backing one UE carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCarrier {
    pub enb_cc_idx: u32,
    /// SIB2 PUCCH-ConfigCommon of the cell
    pub pucch_common: CfgPucchCommon,
}

/// Maps UE carrier indices and physical cell ids onto eNB carriers
pub trait CarrierResolver {
    /// Returns the eNB carrier currently assigned to UE carrier `ue_cc_idx`, if any
    fn get_ue_cc(&self, ue_cc_idx: usize) -> Option<ResolvedCarrier>;

    /// Returns the eNB carrier index of the local cell with physical cell id `pci`
    fn get_enb_cc_idx_by_pci(&self, pci: Pci) -> Option<u32>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellListErr {
    InvalidUeCcIdx,
    InvalidEnbCcIdx,
    /// The eNB carrier already serves another UE carrier
    CarrierAlreadyInUse,
}

/// Carrier assignment of one UE, backed by the eNB cell table
pub struct UeCellList {
    config: SharedConfig,
    /// eNB carrier index per UE carrier, index 0 is the PCell
    ue_ccs: [Option<u32>; MAX_CARRIERS],
}

impl UeCellList {
    pub fn new(config: SharedConfig, pcell_enb_cc_idx: u32) -> Result<Self, CellListErr> {
        let mut list = Self { config, ue_ccs: [None; MAX_CARRIERS] };
        list.set_cc(UE_PCELL_CC_IDX, pcell_enb_cc_idx)?;
        Ok(list)
    }

    /// Assigns eNB carrier `enb_cc_idx` to UE carrier `ue_cc_idx`, replacing any previous assignment
    pub fn set_cc(&mut self, ue_cc_idx: usize, enb_cc_idx: u32) -> Result<(), CellListErr> {
        if ue_cc_idx >= MAX_CARRIERS {
            return Err(CellListErr::InvalidUeCcIdx);
        }
        if enb_cc_idx as usize >= self.config.config().cells.len() {
            return Err(CellListErr::InvalidEnbCcIdx);
        }
        let in_use = self.ue_ccs.iter().enumerate()
            .any(|(idx, cc)| idx != ue_cc_idx && *cc == Some(enb_cc_idx));
        if in_use {
            return Err(CellListErr::CarrierAlreadyInUse);
        }
        self.ue_ccs[ue_cc_idx] = Some(enb_cc_idx);
        Ok(())
    }

    /// Releases an SCell. The PCell can only be replaced, never removed.
    pub fn rem_scell(&mut self, ue_cc_idx: usize) -> Result<(), CellListErr> {
        if ue_cc_idx == UE_PCELL_CC_IDX || ue_cc_idx >= MAX_CARRIERS {
            return Err(CellListErr::InvalidUeCcIdx);
        }
        self.ue_ccs[ue_cc_idx] = None;
        Ok(())
    }

    pub fn nof_cells(&self) -> usize {
        self.ue_ccs.iter().filter(|cc| cc.is_some()).count()
    }
}

impl CarrierResolver for UeCellList {
    fn get_ue_cc(&self, ue_cc_idx: usize) -> Option<ResolvedCarrier> {
        let enb_cc_idx = (*self.ue_ccs.get(ue_cc_idx)?)?;
        let cfg = self.config.config();
        let cell = cfg.cells.get(enb_cc_idx as usize)?;
        Some(ResolvedCarrier { enb_cc_idx, pucch_common: cell.pucch })
    }

    fn get_enb_cc_idx_by_pci(&self, pci: Pci) -> Option<u32> {
        self.config.config().enb_cc_idx_by_pci(pci)
    }
}
