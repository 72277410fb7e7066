use lte_sched::UeSchedCfg;

/// RRC procedure a staged configuration belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingProc {
    Reconfiguration,
    InterEnbHandover,
    IntraEnbHandover,
}

/// Applied/staged pair of scheduler configurations.
///
/// `applied` is what the scheduler runs with. `staged` is the configuration the UE will use
/// once the procedure in flight completes. `applied` only ever changes as a whole value.
#[derive(Debug, Clone)]
pub struct SchedCfgBuffers {
    applied: UeSchedCfg,
    staged: Option<(PendingProc, UeSchedCfg)>,
}

impl SchedCfgBuffers {
    pub fn new(applied: UeSchedCfg) -> Self {
        Self { applied, staged: None }
    }

    pub fn applied(&self) -> &UeSchedCfg {
        &self.applied
    }

    pub fn staged(&self) -> Option<&UeSchedCfg> {
        self.staged.as_ref().map(|(_, cfg)| cfg)
    }

    pub fn pending(&self) -> Option<PendingProc> {
        self.staged.as_ref().map(|(proc, _)| *proc)
    }

    pub fn set_applied(&mut self, cfg: UeSchedCfg) {
        self.applied = cfg;
    }

    /// Replaces `applied` with the result of `f`
    pub fn update_applied(&mut self, f: impl FnOnce(&UeSchedCfg) -> UeSchedCfg) {
        self.applied = f(&self.applied);
    }

    /// Stages `cfg` for `proc`. A previously staged configuration is dropped and its procedure
    /// returned.
    pub fn stage(&mut self, proc: PendingProc, cfg: UeSchedCfg) -> Option<PendingProc> {
        self.staged.replace((proc, cfg)).map(|(prev, _)| prev)
    }

    pub fn discard_staged(&mut self) -> Option<PendingProc> {
        self.staged.take().map(|(proc, _)| proc)
    }

    /// Moves the staged configuration into `applied`
    pub fn promote(&mut self) -> Option<PendingProc> {
        let (proc, cfg) = self.staged.take()?;
        self.applied = cfg;
        Some(proc)
    }
}
