/// Radio Network Temporary Identifier, the per-UE addressing key used by the MAC scheduler
pub type Rnti = u16;

/// Logical channel identifier. Unique per UE.
pub type LcId = u8;

/// Physical cell identity, 0..=503
pub type Pci = u16;

/// Maximum number of carriers (PCell + SCells) a UE may aggregate
pub const MAX_CARRIERS: usize = 5;

/// Index of the PCell in the UE carrier list
pub const UE_PCELL_CC_IDX: usize = 0;

/// Highest logical channel id usable for dedicated bearers
pub const MAX_LC_ID: LcId = 10;

/// Radio bearer identifiers, TS 36.331 6.3.2
/// SRBs map 1:1 onto their logical channel id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum RbId {
    Srb0 = 0,
    Srb1 = 1,
    Srb2 = 2,
}

impl RbId {
    /// Logical channel carrying this SRB
    #[inline]
    pub fn lcid(self) -> LcId {
        self as LcId
    }

    /// SRBs whose scheduling state follows the dedicated configuration
    pub const DEDICATED_SRBS: [RbId; 2] = [RbId::Srb1, RbId::Srb2];
}

impl std::convert::TryFrom<u8> for RbId {
    type Error = ();
    fn try_from(x: u8) -> Result<Self, Self::Error> {
        match x {
            0 => Ok(RbId::Srb0),
            1 => Ok(RbId::Srb1),
            2 => Ok(RbId::Srb2),
            _ => Err(()),
        }
    }
}

impl core::fmt::Display for RbId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RbId::Srb0 => write!(f, "SRB0"),
            RbId::Srb1 => write!(f, "SRB1"),
            RbId::Srb2 => write!(f, "SRB2"),
        }
    }
}

/// Returns true if the logical channel carries signalling (CCCH, SRB1, SRB2)
#[inline]
pub fn is_srb_lcid(lcid: LcId) -> bool {
    lcid <= RbId::Srb2.lcid()
}
