/// TS 36.331 6.3.2 SchedulingRequestConfig, setup branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedRequestCfg {
    /// 0..2047
    pub sr_pucch_res_idx: u16,
    /// 0..157
    pub sr_cfg_idx: u8,
    /// dsr-TransMax, number of transmissions (4, 8, 16, 32, 64)
    pub dsr_trans_max: u8,
}
