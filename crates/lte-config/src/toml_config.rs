use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use toml::Value;

use super::stack_config::{CfgCell, CfgCqi, CfgMac, CfgPucchCommon, CfgPusch, SharedConfig, StackConfig};

/// Build `SharedConfig` from a TOML configuration string
pub fn from_toml_str(toml_str: &str) -> Result<SharedConfig, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    // Various sanity checks
    let expected_config_version = "0.1";
    if !root.config_version.eq(expected_config_version) {
        return Err(format!(
            "Unrecognized config_version: {}, expect {}",
            root.config_version, expected_config_version
        )
        .into());
    }
    if !root.extra.is_empty() {
        return Err(format!("Unrecognized top-level fields: {:?}", sorted_keys(&root.extra)).into());
    }
    if let Some(ref mac) = root.mac_cnfg {
        if !mac.extra.is_empty() {
            return Err(format!("Unrecognized fields in mac_cnfg: {:?}", sorted_keys(&mac.extra)).into());
        }
    }
    if let Some(ref cqi) = root.cqi_cfg {
        if !cqi.extra.is_empty() {
            return Err(format!("Unrecognized fields in cqi_cfg: {:?}", sorted_keys(&cqi.extra)).into());
        }
    }
    if let Some(ref pusch) = root.pusch_cfg {
        if !pusch.extra.is_empty() {
            return Err(format!("Unrecognized fields in pusch_cfg: {:?}", sorted_keys(&pusch.extra)).into());
        }
    }
    for (idx, cell) in root.cell_list.iter().enumerate() {
        if !cell.extra.is_empty() {
            return Err(format!("Unrecognized fields in cell_list[{}]: {:?}", idx, sorted_keys(&cell.extra)).into());
        }
        if let Some(ref pucch) = cell.pucch {
            if !pucch.extra.is_empty() {
                return Err(format!("Unrecognized fields in cell_list[{}].pucch: {:?}", idx, sorted_keys(&pucch.extra)).into());
            }
        }
    }

    // Build config from required and optional values
    let mut cfg = StackConfig {
        debug_log: root.debug_log,
        mac: CfgMac::default(),
        cqi: CfgCqi::default(),
        pusch: CfgPusch::default(),
        cells: Vec::with_capacity(root.cell_list.len()),
    };

    if let Some(mac) = root.mac_cnfg {
        apply_mac_patch(&mut cfg.mac, mac);
    }
    if let Some(cqi) = root.cqi_cfg {
        if let Some(v) = cqi.period {
            cfg.cqi.period = v;
        }
    }
    if let Some(pusch) = root.pusch_cfg {
        apply_pusch_patch(&mut cfg.pusch, pusch);
    }
    for cell in root.cell_list {
        cfg.cells.push(build_cell(cell));
    }

    // Report problems as errors here; SharedConfig::from_config would panic on them
    cfg.validate().map_err(|e| format!("Invalid configuration: {}", e))?;
    tracing::debug!("loaded config with {} cells", cfg.cells.len());

    Ok(SharedConfig::from_config(cfg))
}

/// Build `SharedConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<SharedConfig, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `SharedConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<SharedConfig, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    let r = BufReader::new(f);
    let cfg = from_reader(r)?;
    Ok(cfg)
}

fn apply_mac_patch(dst: &mut CfgMac, src: MacCnfgDto) {
    if let Some(v) = src.max_harq_tx {
        dst.max_harq_tx = v;
    }
}

fn apply_pusch_patch(dst: &mut CfgPusch, src: PuschCfgDto) {
    if let Some(v) = src.beta_offset_ack_idx {
        dst.beta_offset_ack_idx = v;
    }
    if let Some(v) = src.beta_offset_ri_idx {
        dst.beta_offset_ri_idx = v;
    }
    if let Some(v) = src.beta_offset_cqi_idx {
        dst.beta_offset_cqi_idx = v;
    }
}

fn build_cell(src: CellDto) -> CfgCell {
    let mut pucch = CfgPucchCommon::default();
    if let Some(p) = src.pucch {
        if let Some(v) = p.delta_pucch_shift {
            pucch.delta_pucch_shift = v;
        }
        if let Some(v) = p.nrb_cqi {
            pucch.nrb_cqi = v;
        }
        if let Some(v) = p.ncs_an {
            pucch.ncs_an = v;
        }
        if let Some(v) = p.n1_pucch_an {
            pucch.n1_pucch_an = v;
        }
    }
    CfgCell {
        pci: src.pci,
        dl_earfcn: src.dl_earfcn,
        pucch,
    }
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&str> {
    let mut v: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    v.sort_unstable();
    v
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,
    debug_log: Option<String>,

    #[serde(default)]
    mac_cnfg: Option<MacCnfgDto>,

    #[serde(default)]
    cqi_cfg: Option<CqiCfgDto>,

    #[serde(default)]
    pusch_cfg: Option<PuschCfgDto>,

    #[serde(default)]
    cell_list: Vec<CellDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Default, Deserialize)]
struct MacCnfgDto {
    pub max_harq_tx: Option<u32>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Default, Deserialize)]
struct CqiCfgDto {
    pub period: Option<u32>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Default, Deserialize)]
struct PuschCfgDto {
    pub beta_offset_ack_idx: Option<u8>,
    pub beta_offset_ri_idx: Option<u8>,
    pub beta_offset_cqi_idx: Option<u8>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct CellDto {
    pub pci: u16,
    pub dl_earfcn: u32,

    #[serde(default)]
    pub pucch: Option<PucchCommonDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Default, Deserialize)]
struct PucchCommonDto {
    pub delta_pucch_shift: Option<u8>,
    pub nrb_cqi: Option<u8>,
    pub ncs_an: Option<u8>,
    pub n1_pucch_an: Option<u16>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}
