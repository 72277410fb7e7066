mod common;

use lte_config::SharedConfig;
use lte_core::{Direction, debug};
use lte_entities::MacController;
use lte_entities::rrc::components::bearer_defaults::{default_control_bearer, default_drb, default_srb2};
use lte_entities::rrc::components::cell_list::UeCellList;
use lte_entities::rrc::components::cfg_buffers::PendingProc;
use lte_ies::rrc::fields::mobility_control_info::MobilityControlInfo;
use lte_ies::rrc::fields::rr_cfg_ded::RrCfgDed;
use lte_ies::rrc::fields::srb_to_add_mod::SrbToAddMod;
use lte_ies::rrc::fields::ue_capabilities::UeCapabilities;
use lte_ies::rrc::msgs::ho_prep_info::{AsCfg, HoPrepInfo};
use lte_ies::rrc::msgs::rrc_conn_recfg::RrcConnRecfg;
use lte_sched::UeSchedCfg;
use common::{SchedCall, SchedSink, TEST_RNTI, TEST_TEMP_RNTI, conn_setup_msg, default_test_config, drb, recfg_msg, scell};

fn shared_config() -> SharedConfig {
    SharedConfig::from_config(default_test_config())
}

fn ho_cmd(target_pci: u16) -> RrcConnRecfg {
    RrcConnRecfg {
        mob_ctrl_info: Some(MobilityControlInfo { target_pci, new_ue_id: TEST_TEMP_RNTI, t304: 1000 }),
        ..recfg_msg(&[], vec![])
    }
}

/// Brings a controller to a connected state with SRB2, one DRB on lcid 3 and one SCell
fn connected<'a>(ctrl: &mut MacController<'a>, sched: &mut SchedSink) {
    let drbs = vec![drb(1, 3)];
    ctrl.connection_setup(sched, &conn_setup_msg()).unwrap();
    ctrl.connection_setup_complete(sched);
    ctrl.reconfiguration(sched, &drbs, &recfg_msg(&drbs, vec![scell(1, 2)]), &UeCapabilities::default()).unwrap();
    ctrl.reconfiguration_complete(sched, &drbs).unwrap();
    sched.take_calls();
}

#[test]
fn test_intra_node_handover() {
    debug::setup_logging_verbose();
    let config = shared_config();
    let mut cells = UeCellList::new(config.clone(), 0).unwrap();
    cells.set_cc(1, 1).unwrap();
    let mut sched = SchedSink::new();
    let mut ctrl = MacController::new(TEST_RNTI, config, &cells, UeSchedCfg::default());
    connected(&mut ctrl, &mut sched);
    assert_eq!(ctrl.cc_activation(), vec![true, true]);

    let drbs = vec![drb(1, 3)];
    ctrl.intra_node_handover_command(&mut sched, &drbs, &ho_cmd(3), &UeCapabilities::default()).unwrap();
    assert_eq!(ctrl.pending_proc(), Some(PendingProc::IntraEnbHandover));

    // Source side: no SCells, no data, SRBs DL only
    let applied = ctrl.applied_cfg();
    assert_eq!(applied.cc_activation(), vec![true, false]);
    assert_eq!(applied.supported_cc_list[0].enb_cc_idx, 0);
    assert_eq!(applied.bearer(3).direction, Direction::Idle);
    assert_eq!(applied.bearer(1).direction, Direction::Dl);
    assert_eq!(applied.bearer(2).direction, Direction::Dl);
    assert_eq!(applied.bearer(0).direction, Direction::Both);
    assert_eq!(
        sched.take_calls(),
        vec![
            SchedCall::UpdateConfig { rnti: TEST_RNTI, cfg: applied.clone() },
            SchedCall::SetPhyAck { rnti: TEST_RNTI, enabled: false },
        ]
    );

    // Target side: PCell only, on the carrier of pci 3
    let staged = ctrl.staged_cfg().unwrap();
    assert_eq!(staged.cc_activation(), vec![true]);
    assert_eq!(staged.supported_cc_list[0].enb_cc_idx, 2);
    assert_eq!(staged.bearer(1), default_control_bearer());
    assert_eq!(staged.bearer(2), default_srb2());
    assert_eq!(staged.bearer(3), default_drb());
}

#[test]
fn test_intra_node_handover_unknown_target() {
    debug::setup_logging_verbose();
    let config = shared_config();
    let cells = UeCellList::new(config.clone(), 1).unwrap();
    let mut sched = SchedSink::new();
    let mut ctrl = MacController::new(TEST_RNTI, config, &cells, UeSchedCfg::default());
    ctrl.connection_setup(&mut sched, &conn_setup_msg()).unwrap();

    let drbs = vec![drb(1, 3)];
    ctrl.intra_node_handover_command(&mut sched, &drbs, &ho_cmd(404), &UeCapabilities::default()).unwrap();
    assert_eq!(ctrl.staged_cfg().unwrap().supported_cc_list[0].enb_cc_idx, 1);

    // Missing mobility info behaves the same
    ctrl.intra_node_handover_command(&mut sched, &drbs, &recfg_msg(&drbs, vec![]), &UeCapabilities::default()).unwrap();
    assert_eq!(ctrl.staged_cfg().unwrap().supported_cc_list[0].enb_cc_idx, 1);
}

#[test]
fn test_identity_confirmed_after_intra_node_handover() {
    debug::setup_logging_verbose();
    let config = shared_config();
    let mut cells = UeCellList::new(config.clone(), 0).unwrap();
    cells.set_cc(1, 1).unwrap();
    let mut sched = SchedSink::new();
    let mut ctrl = MacController::new(TEST_RNTI, config, &cells, UeSchedCfg::default());
    connected(&mut ctrl, &mut sched);

    let drbs = vec![drb(1, 3)];
    // SCell in the handover command so the staged config has a non-primary carrier
    let mut cmd = ho_cmd(3);
    cmd.set_scell_to_add_mod_list(vec![scell(1, 2)]);
    ctrl.intra_node_handover_command(&mut sched, &drbs, &cmd, &UeCapabilities::default()).unwrap();
    let staged = ctrl.staged_cfg().unwrap().clone();
    assert_eq!(staged.cc_activation(), vec![true, true]);
    sched.take_calls();

    ctrl.identity_confirmed(&mut sched, &drbs, TEST_TEMP_RNTI).unwrap();

    let mut expected = staged.clone();
    expected.supported_cc_list[1].active = false;
    expected.ue_bearers.get_mut(&3).unwrap().direction = Direction::Idle;
    assert_eq!(ctrl.applied_cfg(), &expected);
    assert_eq!(ctrl.applied_cfg().bearer(1), staged.bearer(1));
    assert_eq!(ctrl.applied_cfg().bearer(2), staged.bearer(2));

    assert_eq!(
        sched.take_calls(),
        vec![SchedCall::BindIdentity { temp_crnti: TEST_TEMP_RNTI, crnti: TEST_RNTI, cfg: expected }]
    );

    // Staged config is kept until the UE completes the reconfiguration
    assert_eq!(ctrl.pending_proc(), Some(PendingProc::IntraEnbHandover));
    ctrl.reconfiguration_complete(&mut sched, &drbs).unwrap();
    assert_eq!(ctrl.applied_cfg(), &staged);
    assert_eq!(sched.last_phy_ack(), Some(true));
}

#[test]
fn test_inter_node_handover_target() {
    debug::setup_logging_verbose();
    let config = shared_config();
    let mut cells = UeCellList::new(config.clone(), 2).unwrap();
    cells.set_cc(1, 0).unwrap();
    let mut sched = SchedSink::new();
    let mut ctrl = MacController::new(TEST_RNTI, config, &cells, UeSchedCfg::default());

    // Source eNB AS config
    let ho_prep = HoPrepInfo {
        ue_capabilities: Some(UeCapabilities { support_ul_64qam: true, ..Default::default() }),
        as_cfg: Some(AsCfg {
            source_rr_cfg: RrCfgDed {
                srb_to_add_mod_list: Some(vec![SrbToAddMod::new(1), SrbToAddMod::new(2)]),
                drb_to_add_mod_list: Some(vec![drb(1, 3)]),
                ..Default::default()
            },
            source_ue_identity: 0x1234,
            source_dl_carrier_freq: 3350,
        }),
    };
    ctrl.handover_preparation(&ho_prep);
    assert!(sched.take_calls().is_empty());
    assert_eq!(ctrl.applied_cfg().bearer(1), default_control_bearer());
    assert_eq!(ctrl.applied_cfg().bearer(2), default_srb2());
    // DRBs are not seeded from the source config
    assert!(!ctrl.applied_cfg().ue_bearers.contains_key(&3));

    let drbs = vec![drb(1, 3)];
    let caps = ho_prep.ue_capabilities.unwrap();
    let mut cmd = ho_cmd(3);
    cmd.set_scell_to_add_mod_list(vec![scell(1, 1)]);
    ctrl.inter_node_handover_command(&mut sched, &drbs, &cmd, &caps).unwrap();
    assert_eq!(ctrl.pending_proc(), Some(PendingProc::InterEnbHandover));
    assert_eq!(sched.last_phy_ack(), Some(false));
    assert_eq!(sched.last_cfg(), Some(ctrl.applied_cfg()));
    let staged = ctrl.staged_cfg().unwrap().clone();
    assert!(staged.support_ul_64qam);
    assert_eq!(staged.supported_cc_list[1].enb_cc_idx, 0);

    // UE shows up with the C-RNTI it got in the handover command
    ctrl.identity_confirmed(&mut sched, &drbs, TEST_TEMP_RNTI).unwrap();
    assert!(ctrl.is_identity_resolved());
    assert_eq!(ctrl.cc_activation(), vec![true, false]);
    assert_eq!(ctrl.applied_cfg().bearer(2), staged.bearer(2));

    ctrl.reconfiguration_complete(&mut sched, &drbs).unwrap();
    let cfg = ctrl.applied_cfg();
    assert_eq!(cfg.cc_activation(), vec![true, true]);
    assert_eq!(cfg.bearer(3), default_drb());
    assert_eq!(ctrl.pending_proc(), None);
}

#[test]
fn test_identity_confirmed_without_staged() {
    debug::setup_logging_verbose();
    let config = shared_config();
    let cells = UeCellList::new(config.clone(), 0).unwrap();
    let mut sched = SchedSink::new();
    let mut ctrl = MacController::new(TEST_RNTI, config, &cells, UeSchedCfg::default());
    let before = ctrl.applied_cfg().clone();

    let drbs = vec![drb(1, 3)];
    ctrl.identity_confirmed(&mut sched, &drbs, TEST_TEMP_RNTI).unwrap();
    assert_eq!(ctrl.applied_cfg(), &before);
    assert_eq!(sched.nof_binds(), 1);
}

#[test]
fn test_new_procedure_replaces_staged() {
    debug::setup_logging_verbose();
    let config = shared_config();
    let cells = UeCellList::new(config.clone(), 0).unwrap();
    let mut sched = SchedSink::new();
    let mut ctrl = MacController::new(TEST_RNTI, config, &cells, UeSchedCfg::default());
    ctrl.connection_setup(&mut sched, &conn_setup_msg()).unwrap();

    let drbs = vec![drb(1, 3)];
    ctrl.reconfiguration(&mut sched, &drbs, &recfg_msg(&drbs, vec![]), &UeCapabilities::default()).unwrap();
    ctrl.intra_node_handover_command(&mut sched, &drbs, &ho_cmd(2), &UeCapabilities::default()).unwrap();
    assert_eq!(ctrl.pending_proc(), Some(PendingProc::IntraEnbHandover));
    assert_eq!(ctrl.staged_cfg().unwrap().supported_cc_list[0].enb_cc_idx, 1);

    // Handover preparation info without AS config is ignored
    let before = ctrl.applied_cfg().clone();
    ctrl.handover_preparation(&HoPrepInfo::default());
    assert_eq!(ctrl.applied_cfg(), &before);
}
