use lte_ies::rrc::fields::drb_to_add_mod::DrbToAddMod;

/// Read-only view of the DRBs currently established for a UE
pub trait BearerList {
    fn established_drbs(&self) -> &[DrbToAddMod];
}

impl BearerList for Vec<DrbToAddMod> {
    fn established_drbs(&self) -> &[DrbToAddMod] {
        self
    }
}

impl<const N: usize> BearerList for [DrbToAddMod; N] {
    fn established_drbs(&self) -> &[DrbToAddMod] {
        self
    }
}
