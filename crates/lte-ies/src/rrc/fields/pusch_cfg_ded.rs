/// TS 36.331 6.3.2 PUSCH-ConfigDedicated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PuschCfgDed {
    /// 0..15
    pub beta_offset_ack_idx: u8,
    /// 0..15
    pub beta_offset_ri_idx: u8,
    /// 0..15
    pub beta_offset_cqi_idx: u8,
}
