use crate::rrc::enums::bucket_size_duration::BucketSizeDuration;
use crate::rrc::enums::prioritised_bit_rate::PrioritisedBitRate;

/// ul-SpecificParameters of LogicalChannelConfig
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UlSpecificParams {
    /// 1..16
    pub priority: u8,
    pub prioritised_bit_rate: PrioritisedBitRate,
    pub bucket_size_duration: BucketSizeDuration,
    /// 0..3
    pub lc_ch_group: Option<u8>,
}

/// TS 36.331 6.3.2 LogicalChannelConfig
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogicalChannelCfg {
    pub ul_specific_params: Option<UlSpecificParams>,
}
