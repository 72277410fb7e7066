use crate::rrc::fields::rr_cfg_ded::RrCfgDed;

/// TS 36.331 6.2.2 RRCConnectionSetup-r8-IEs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RrcConnSetup {
    /// 0..3
    pub rrc_transaction_id: u8,
    pub rr_cfg_ded: RrCfgDed,
}
