use lte_config::SharedConfig;
use lte_core::{Direction, RbId, Rnti, UE_PCELL_CC_IDX, unimplemented_log};
use lte_ies::rrc::fields::rr_cfg_ded::RrCfgDed;
use lte_ies::rrc::fields::ue_capabilities::UeCapabilities;
use lte_ies::rrc::msgs::ho_prep_info::HoPrepInfo;
use lte_ies::rrc::msgs::rrc_conn_recfg::RrcConnRecfg;
use lte_ies::rrc::msgs::rrc_conn_reest::RrcConnReest;
use lte_ies::rrc::msgs::rrc_conn_setup::RrcConnSetup;
use lte_sched::{SchedErr, SchedInterface, TxMode, UeSchedCfg};

use crate::rrc::components::activation::{apply_established_drbs, with_drb_activation, with_scell_activation};
use crate::rrc::components::bearer_defaults::default_control_bearer;
use crate::rrc::components::bearer_list::BearerList;
use crate::rrc::components::cell_list::CarrierResolver;
use crate::rrc::components::cfg_buffers::{PendingProc, SchedCfgBuffers};
use crate::rrc::components::phy_cfg::apply_phy_cfg_ded;
use crate::rrc::components::reconf_updates::apply_reconf_complete_updates;
use crate::rrc::components::srb_updates::apply_srb_updates;

/// How far the procedure that triggered a scheduler update has progressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcStage {
    /// Configuration change outside of any RRC procedure, PHY ack state untouched
    None,
    /// RRC message sent, UE not yet acknowledged. Dedicated PHY config disabled.
    InTransit,
    /// UE acknowledged. Dedicated PHY config enabled.
    Complete,
}

/// Keeps the MAC scheduler configuration of one UE in step with its RRC procedures.
///
/// The scheduler always runs with the applied configuration. Reconfigurations and handovers
/// stage the configuration the UE will use once it has acknowledged the procedure.
pub struct MacController<'a> {
    rnti: Rnti,
    config: SharedConfig,
    cells: &'a dyn CarrierResolver,
    cfgs: SchedCfgBuffers,
    /// Set once the scheduler knows this UE under its final C-RNTI
    identity_resolved: bool,
}

impl<'a> MacController<'a> {
    pub fn new(rnti: Rnti, config: SharedConfig, cells: &'a dyn CarrierResolver, sched_ue_cfg: UeSchedCfg) -> Self {
        let mut ue_cfg = sched_ue_cfg;
        if !ue_cfg.has_active_pcell() {
            tracing::warn!(rnti, "No PCell set. Picking enb_cc_idx=0 as PCell");
            ue_cfg.supported_cc_list.truncate(1);
            let pcell = ue_cfg.ensure_cc(UE_PCELL_CC_IDX);
            pcell.active = true;
            pcell.enb_cc_idx = 0;
        }

        Self {
            rnti,
            config,
            cells,
            cfgs: SchedCfgBuffers::new(ue_cfg),
            identity_resolved: false,
        }
    }

    pub fn rnti(&self) -> Rnti {
        self.rnti
    }

    pub fn applied_cfg(&self) -> &UeSchedCfg {
        self.cfgs.applied()
    }

    pub fn staged_cfg(&self) -> Option<&UeSchedCfg> {
        self.cfgs.staged()
    }

    pub fn pending_proc(&self) -> Option<PendingProc> {
        self.cfgs.pending()
    }

    pub fn is_identity_resolved(&self) -> bool {
        self.identity_resolved
    }

    /// Active flags of the UE carriers, PCell first
    pub fn cc_activation(&self) -> Vec<bool> {
        self.cfgs.applied().cc_activation()
    }

    /// Replaces the applied configuration without notifying the scheduler
    pub fn set_applied_cfg(&mut self, ue_cfg: UeSchedCfg) {
        self.cfgs.set_applied(ue_cfg);
    }

    pub fn connection_setup(&mut self, sched: &mut dyn SchedInterface, setup: &RrcConnSetup) -> Result<(), SchedErr> {
        tracing::trace!(rnti = self.rnti, "connection_setup");
        self.apply_basic_conn_cfg(sched, &setup.rr_cfg_ded)
    }

    pub fn connection_reestablishment(&mut self, sched: &mut dyn SchedInterface, reest: &RrcConnReest) -> Result<(), SchedErr> {
        tracing::trace!(rnti = self.rnti, "connection_reestablishment");
        self.apply_basic_conn_cfg(sched, &reest.rr_cfg_ded)
    }

    /// RRCConnectionSetupComplete received, enables dedicated PHY config
    pub fn connection_setup_complete(&mut self, sched: &mut dyn SchedInterface) {
        tracing::trace!(rnti = self.rnti, "connection_setup_complete");
        sched.set_phy_ack(self.rnti, true);
    }

    /// RRCConnectionReestablishmentComplete received, enables dedicated PHY config
    pub fn connection_reestablishment_complete(&mut self, sched: &mut dyn SchedInterface) {
        tracing::trace!(rnti = self.rnti, "connection_reestablishment_complete");
        sched.set_phy_ack(self.rnti, true);
    }

    /// Makes sure the scheduler knows the UE, so that the reject can be scheduled
    pub fn connection_reject(&mut self, sched: &mut dyn SchedInterface) -> Result<(), SchedErr> {
        tracing::trace!(rnti = self.rnti, "connection_reject");
        if self.identity_resolved {
            return Ok(());
        }
        sched.bind_identity(self.rnti, self.rnti, self.cfgs.applied())?;
        self.identity_resolved = true;
        Ok(())
    }

    /// A UE context known under `temp_crnti` turned out to be this UE (C-RNTI CE during handover
    /// or reestablishment). The scheduler context is re-bound to this controller's RNTI with
    /// SCells and DRBs suspended until the reconfiguration completes.
    pub fn identity_confirmed(
        &mut self,
        sched: &mut dyn SchedInterface,
        drbs: &dyn BearerList,
        temp_crnti: Rnti,
    ) -> Result<(), SchedErr> {
        tracing::debug!(rnti = self.rnti, "identity confirmed, temp_crnti=0x{:x}", temp_crnti);

        let target = match self.cfgs.staged() {
            Some(staged) => staged.clone(),
            None => {
                tracing::warn!(rnti = self.rnti, "No staged config on C-RNTI CE, keeping applied config");
                self.cfgs.applied().clone()
            }
        };

        let mut next = with_scell_activation(&target, 0);
        next = with_drb_activation(&next, drbs.established_drbs(), false);
        // SRBs carry the ReconfigurationComplete and follow the target config
        for srb in RbId::DEDICATED_SRBS {
            let lcid = srb.lcid();
            match target.ue_bearers.get(&lcid) {
                Some(bearer) => next.ue_bearers.insert(lcid, *bearer),
                None => next.ue_bearers.remove(&lcid),
            };
        }
        self.cfgs.set_applied(next);

        sched.bind_identity(temp_crnti, self.rnti, self.cfgs.applied())?;
        self.identity_resolved = true;
        Ok(())
    }

    pub fn reconfiguration(
        &mut self,
        sched: &mut dyn SchedInterface,
        drbs: &dyn BearerList,
        recfg: &RrcConnRecfg,
        uecaps: &UeCapabilities,
    ) -> Result<(), SchedErr> {
        tracing::trace!(rnti = self.rnti, "reconfiguration");
        self.stage_reconfiguration(PendingProc::Reconfiguration, drbs, recfg, uecaps);
        self.push(sched, ProcStage::InTransit)
    }

    pub fn reconfiguration_complete(&mut self, sched: &mut dyn SchedInterface, drbs: &dyn BearerList) -> Result<(), SchedErr> {
        match self.cfgs.promote() {
            Some(proc) => tracing::debug!(rnti = self.rnti, "reconfiguration complete, {:?} config applied", proc),
            None => tracing::warn!(rnti = self.rnti, "Reconfiguration complete without staged config, keeping applied config"),
        }

        self.cfgs.update_applied(|cfg| apply_established_drbs(cfg, drbs.established_drbs()));
        self.push(sched, ProcStage::Complete)
    }

    /// Handover from another eNB into this one: the HandoverCommand is built here and forwarded
    /// by the source
    pub fn inter_node_handover_command(
        &mut self,
        sched: &mut dyn SchedInterface,
        drbs: &dyn BearerList,
        recfg: &RrcConnRecfg,
        uecaps: &UeCapabilities,
    ) -> Result<(), SchedErr> {
        tracing::trace!(rnti = self.rnti, "inter_node_handover_command");
        self.stage_reconfiguration(PendingProc::InterEnbHandover, drbs, recfg, uecaps);
        self.push(sched, ProcStage::InTransit)
    }

    /// Handover between two cells of this eNB
    pub fn intra_node_handover_command(
        &mut self,
        sched: &mut dyn SchedInterface,
        drbs: &dyn BearerList,
        recfg: &RrcConnRecfg,
        uecaps: &UeCapabilities,
    ) -> Result<(), SchedErr> {
        tracing::trace!(rnti = self.rnti, "intra_node_handover_command");
        let cfg = self.config.config();

        // Target config: new PCell only, SCells are added after the handover
        let mut next = self.cfgs.applied().clone();
        next.supported_cc_list.truncate(1);
        let pcell = next.ensure_cc(UE_PCELL_CC_IDX);
        pcell.active = true;
        let target_pci = recfg.mob_ctrl_info.map(|mob| mob.target_pci);
        match target_pci.and_then(|pci| self.cells.get_enb_cc_idx_by_pci(pci)) {
            Some(enb_cc_idx) => pcell.enb_cc_idx = enb_cc_idx,
            None => tracing::warn!(rnti = self.rnti, "Could not resolve handover target {:?}, keeping PCell", target_pci),
        }

        if let Some(phy_cfg) = recfg.rr_cfg_ded.as_ref().and_then(|rr| rr.phys_cfg_ded.as_ref()) {
            next = apply_phy_cfg_ded(&next, phy_cfg, &cfg.cqi);
        }
        next = apply_reconf_complete_updates(&next, recfg, self.cells, uecaps, &cfg.cqi);
        if let Some(prev) = self.cfgs.stage(PendingProc::IntraEnbHandover, next) {
            tracing::debug!(rnti = self.rnti, "dropping staged {:?} config", prev);
        }

        // Until the UE shows up on the target: no SCells, no data, SRBs DL only
        self.set_secondary_activation(0);
        self.set_data_bearer_activation(false, drbs);
        self.cfgs.update_applied(|cfg| {
            let mut cfg = cfg.clone();
            for srb in RbId::DEDICATED_SRBS {
                if let Some(bearer) = cfg.ue_bearers.get_mut(&srb.lcid()) {
                    bearer.direction = Direction::Dl;
                }
            }
            cfg
        });

        self.push(sched, ProcStage::InTransit)
    }

    /// Seeds the applied configuration from the source eNB's AS config
    pub fn handover_preparation(&mut self, ho_prep: &HoPrepInfo) {
        tracing::trace!(rnti = self.rnti, "handover_preparation");
        let Some(as_cfg) = &ho_prep.as_cfg else {
            tracing::warn!(rnti = self.rnti, "HandoverPreparationInformation without AS config");
            return;
        };

        if let Some(srbs) = &as_cfg.source_rr_cfg.srb_to_add_mod_list {
            self.cfgs.update_applied(|cfg| apply_srb_updates(cfg, srbs));
        }

        // TODO: seed PHY config and DRBs from source_rr_cfg once the target cell's resources are known
        if as_cfg.source_rr_cfg.phys_cfg_ded.is_some() || as_cfg.source_rr_cfg.drb_to_add_mod_list.is_some() {
            unimplemented_log!("source PHY/DRB config in HandoverPreparationInformation");
        }
    }

    /// Bit `i` of `scell_mask` activates UE carrier `i`. The PCell is never touched.
    pub fn set_secondary_activation(&mut self, scell_mask: u32) {
        self.cfgs.update_applied(|cfg| with_scell_activation(cfg, scell_mask));
    }

    /// Resumes (Both) or freezes (Idle) every established data bearer
    pub fn set_data_bearer_activation(&mut self, active: bool, drbs: &dyn BearerList) {
        self.cfgs.update_applied(|cfg| with_drb_activation(cfg, drbs.established_drbs(), active));
    }

    /// Hands the applied configuration to the scheduler
    pub fn push(&self, sched: &mut dyn SchedInterface, stage: ProcStage) -> Result<(), SchedErr> {
        tracing::debug!(rnti = self.rnti, "-> sched ue_cfg {:?}", stage);
        sched.update_config(self.rnti, self.cfgs.applied())?;
        match stage {
            ProcStage::None => {}
            ProcStage::InTransit => sched.set_phy_ack(self.rnti, false),
            ProcStage::Complete => sched.set_phy_ack(self.rnti, true),
        }
        Ok(())
    }

    /// Common part of reconfiguration and inter-eNB handover: dedicated PHY config is applied
    /// right away, everything else is staged. DRBs stay frozen until the UE acknowledges.
    fn stage_reconfiguration(
        &mut self,
        proc: PendingProc,
        drbs: &dyn BearerList,
        recfg: &RrcConnRecfg,
        uecaps: &UeCapabilities,
    ) {
        let cfg = self.config.config();

        if let Some(phy_cfg) = recfg.rr_cfg_ded.as_ref().and_then(|rr| rr.phys_cfg_ded.as_ref()) {
            self.cfgs.update_applied(|ue_cfg| apply_phy_cfg_ded(ue_cfg, phy_cfg, &cfg.cqi));
        }

        let next = apply_reconf_complete_updates(self.cfgs.applied(), recfg, self.cells, uecaps, &cfg.cqi);
        if let Some(prev) = self.cfgs.stage(proc, next) {
            tracing::debug!(rnti = self.rnti, "dropping staged {:?} config", prev);
        }

        self.set_data_bearer_activation(false, drbs);
    }

    /// Default configuration after RRCConnectionSetup or RRCConnectionReestablishment:
    /// PCell only, CCCH and SRB1, dedicated PHY config from the message.
    fn apply_basic_conn_cfg(&mut self, sched: &mut dyn SchedInterface, rr_cfg: &RrCfgDed) -> Result<(), SchedErr> {
        let cfg = self.config.config();
        let pcell = self.cells.get_ue_cc(UE_PCELL_CC_IDX);

        let mut ue_cfg = self.cfgs.applied().clone();
        ue_cfg.maxharq_tx = cfg.mac.max_harq_tx;
        ue_cfg.continuous_pusch = false;
        ue_cfg.use_tbs_index_alt = false;

        ue_cfg.supported_cc_list.truncate(1);
        let cc = ue_cfg.ensure_cc(UE_PCELL_CC_IDX);
        cc.active = true;
        cc.enb_cc_idx = match pcell {
            Some(carrier) => carrier.enb_cc_idx,
            None => {
                tracing::warn!(rnti = self.rnti, "PCell not resolvable, using enb_cc_idx=0");
                0
            }
        };
        cc.dl_cfg.tm = TxMode::Tm1;

        // Only CCCH and SRB1 until the reconfiguration
        ue_cfg.ue_bearers.clear();
        ue_cfg.ue_bearers.insert(RbId::Srb0.lcid(), default_control_bearer());
        ue_cfg.ue_bearers.insert(RbId::Srb1.lcid(), default_control_bearer());

        if let Some(phy_cfg) = &rr_cfg.phys_cfg_ded {
            ue_cfg = apply_phy_cfg_ded(&ue_cfg, phy_cfg, &cfg.cqi);
        }

        if let Some(carrier) = pcell {
            let pucch = carrier.pucch_common;
            ue_cfg.pucch_cfg.delta_pucch_shift = pucch.delta_pucch_shift as u32;
            ue_cfg.pucch_cfg.n_cs = pucch.ncs_an as u32;
            ue_cfg.pucch_cfg.n_rb_2 = pucch.nrb_cqi as u32;
            ue_cfg.pucch_cfg.n_pucch_1 = pucch.n1_pucch_an as u32;
        }

        ue_cfg.uci_offset.i_offset_cqi = cfg.pusch.beta_offset_cqi_idx as u32;
        ue_cfg.uci_offset.i_offset_ack = cfg.pusch.beta_offset_ack_idx as u32;
        ue_cfg.uci_offset.i_offset_ri = cfg.pusch.beta_offset_ri_idx as u32;

        if let Some(proc) = self.cfgs.discard_staged() {
            tracing::debug!(rnti = self.rnti, "dropping staged {:?} config", proc);
        }
        self.cfgs.set_applied(ue_cfg);

        sched.set_phy_ack(self.rnti, false);
        sched.bind_identity(self.rnti, self.rnti, self.cfgs.applied())?;
        self.identity_resolved = true;
        Ok(())
    }
}
