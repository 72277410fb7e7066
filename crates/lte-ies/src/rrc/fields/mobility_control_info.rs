use lte_core::{Pci, Rnti};

/// TS 36.331 6.3.4 MobilityControlInfo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobilityControlInfo {
    pub target_pci: Pci,
    /// C-RNTI allocated in the target cell
    pub new_ue_id: Rnti,
    /// T304 in ms
    pub t304: u16,
}
