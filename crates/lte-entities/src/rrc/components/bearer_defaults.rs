use lte_core::Direction;
use lte_sched::BearerCfg;

/// TS 36.331 9.1.1.2 CCCH configuration. SRB1 uses the same profile (9.2.1.1).
pub fn default_control_bearer() -> BearerCfg {
    BearerCfg {
        direction: Direction::Both,
        priority: 1,
        pbr: -1,
        bsd: -1,
        group: 0,
    }
}

/// TS 36.331 9.2.1.2 SRB2
pub fn default_srb2() -> BearerCfg {
    BearerCfg {
        priority: 3,
        ..default_control_bearer()
    }
}

/// Profile for an established DRB without explicit UL-specific parameters
pub fn default_drb() -> BearerCfg {
    BearerCfg {
        direction: Direction::Both,
        priority: 4,
        pbr: 0,
        bsd: 0,
        group: 1,
    }
}
