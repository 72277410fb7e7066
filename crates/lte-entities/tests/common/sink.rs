use lte_core::Rnti;
use lte_sched::{SchedErr, SchedInterface, UeSchedCfg};

#[derive(Debug, Clone, PartialEq)]
pub enum SchedCall {
    BindIdentity { temp_crnti: Rnti, crnti: Rnti, cfg: UeSchedCfg },
    UpdateConfig { rnti: Rnti, cfg: UeSchedCfg },
    SetPhyAck { rnti: Rnti, enabled: bool },
}

/// A scheduler sink for testing purposes
/// Records every call for later inspection and can be told to refuse the next configuration
pub struct SchedSink {
    calls: Vec<SchedCall>,
    fail_next: Option<SchedErr>,
}

impl SchedSink {
    pub fn new() -> Self {
        Self { calls: vec![], fail_next: None }
    }

    pub fn take_calls(&mut self) -> Vec<SchedCall> {
        std::mem::take(&mut self.calls)
    }

    /// The next bind_identity or update_config call returns `err`
    pub fn fail_next(&mut self, err: SchedErr) {
        self.fail_next = Some(err);
    }

    pub fn nof_binds(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, SchedCall::BindIdentity { .. })).count()
    }

    /// Config carried by the most recent bind_identity or update_config call
    pub fn last_cfg(&self) -> Option<&UeSchedCfg> {
        self.calls.iter().rev().find_map(|c| match c {
            SchedCall::BindIdentity { cfg, .. } | SchedCall::UpdateConfig { cfg, .. } => Some(cfg),
            SchedCall::SetPhyAck { .. } => None,
        })
    }

    pub fn last_phy_ack(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            SchedCall::SetPhyAck { enabled, .. } => Some(*enabled),
            _ => None,
        })
    }
}

impl SchedInterface for SchedSink {
    fn bind_identity(&mut self, temp_crnti: Rnti, crnti: Rnti, cfg: &UeSchedCfg) -> Result<(), SchedErr> {
        tracing::debug!("bind_identity: 0x{:x} -> 0x{:x}", temp_crnti, crnti);
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }
        self.calls.push(SchedCall::BindIdentity { temp_crnti, crnti, cfg: cfg.clone() });
        Ok(())
    }

    fn update_config(&mut self, rnti: Rnti, cfg: &UeSchedCfg) -> Result<(), SchedErr> {
        tracing::debug!("update_config: 0x{:x}", rnti);
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }
        self.calls.push(SchedCall::UpdateConfig { rnti, cfg: cfg.clone() });
        Ok(())
    }

    fn set_phy_ack(&mut self, rnti: Rnti, enabled: bool) {
        self.calls.push(SchedCall::SetPhyAck { rnti, enabled });
    }
}
