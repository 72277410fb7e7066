/// Summary of the UE-EUTRA-Capability fields relevant to scheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UeCapabilities {
    pub release: u8,
    pub category: u8,
    pub support_dl_256qam: bool,
    pub support_ul_64qam: bool,
}

impl Default for UeCapabilities {
    fn default() -> Self {
        Self {
            release: 8,
            category: 4,
            support_dl_256qam: false,
            support_ul_64qam: false,
        }
    }
}
