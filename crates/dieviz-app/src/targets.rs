//! Activation-target lists
//!
//! Every diagram view exposes a flat, ordered list of activatable unit
//! regions; the cursor walks this list and Enter activates the entry under
//! it. The list is the single source of truth for what is interactive:
//! fused-off TPC slots are never added, so no activation path for them
//! exists anywhere in the application.
//!
//! Order is part of the contract -- the view widgets render their
//! interactive regions in exactly the order built here, matching regions
//! to cursor indices by a running counter.

use crate::state::ViewKind;
use dieviz_core::{gpc_slots, unit_info, Architecture, UnitKey};

/// Number of NVLink ports rendered along the bottom of the die
pub const NVLINK_PORTS: usize = 18;

/// Number of SMSP processing blocks within one SM
pub const SMSPS_PER_SM: usize = 4;

/// One activatable unit region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub key: UnitKey,
    /// Short human label shown in the footer while the cursor rests here
    pub label: String,
}

impl Target {
    fn titled(arch: Architecture, key: UnitKey) -> Self {
        let label = unit_info(arch, key)
            .map(|info| info.title.to_string())
            .unwrap_or_else(|| key.to_string());
        Self { key, label }
    }

    fn labeled(key: UnitKey, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
        }
    }
}

/// The ordered target list for `(architecture, view)`.
///
/// The Specs view is purely informational and has no targets.
pub fn targets(arch: Architecture, view: ViewKind) -> Vec<Target> {
    match view {
        ViewKind::FullDie => full_die_targets(arch),
        ViewKind::ProcessingBlock => processing_block_targets(arch),
        ViewKind::SingleSm => single_sm_targets(arch),
        ViewKind::Specs => Vec::new(),
    }
}

/// Full-die traversal order: host bars, left memory column, GPC rows with
/// the L2 strip between them, right memory column, NVLink hub and ports.
fn full_die_targets(arch: Architecture) -> Vec<Target> {
    let config = arch.die_config();
    let mut list = Vec::with_capacity(config.gpcs * (config.tpcs_per_gpc + 1) + 32);

    list.push(Target::titled(arch, UnitKey::PcieInterface));
    list.push(Target::titled(arch, UnitKey::GigaThreadEngine));

    // Left memory column
    list.push(Target::labeled(UnitKey::NvlinkSwitch, "NVLink Switch"));
    list.push(Target::titled(arch, UnitKey::Hbm3));
    list.push(Target::labeled(UnitKey::MemoryController, "Memory Controllers"));

    for gpc in 0..config.gpcs {
        if gpc == config.gpcs / 2 {
            list.push(Target::labeled(UnitKey::L2Cache, "L2 Cache"));
            list.push(Target::labeled(UnitKey::L2Cache, "L2 Cache"));
        }
        list.push(Target::labeled(UnitKey::Gpc, format!("GPC {gpc}")));
        for slot in gpc_slots(config, gpc) {
            if !slot.disabled {
                list.push(Target::labeled(UnitKey::Tpc, slot.label()));
            }
        }
    }

    // Right memory column
    list.push(Target::labeled(UnitKey::NvlinkSwitch, "NVLink Switch"));
    list.push(Target::titled(arch, UnitKey::Hbm3));
    list.push(Target::labeled(UnitKey::MemoryController, "Memory Controllers"));

    list.push(Target::titled(arch, UnitKey::NvlinkHub));
    for port in 1..=NVLINK_PORTS {
        list.push(Target::labeled(UnitKey::NvlinkPort, format!("Port {port}")));
    }

    list
}

/// SMSP-quadrant traversal order: pipeline front-end top to bottom, then
/// the compute columns left to right, then the footer unit groups.
fn processing_block_targets(arch: Architecture) -> Vec<Target> {
    let mut list = vec![
        Target::titled(arch, UnitKey::L0Cache),
        Target::titled(arch, UnitKey::WarpScheduler),
        Target::titled(arch, UnitKey::DispatchUnit),
        Target::titled(arch, UnitKey::RegisterFile),
        Target::labeled(UnitKey::Int32, "INT32"),
        Target::labeled(UnitKey::Fp32, "FP32"),
        Target::labeled(UnitKey::Fp32, "FP32"),
        Target::labeled(UnitKey::Fp64, "FP64"),
        Target::titled(arch, UnitKey::TensorCore),
    ];
    // Tensor memory is a Blackwell-only block under the tensor core column
    if arch == Architecture::Blackwell {
        list.push(Target::titled(arch, UnitKey::Tmem));
    }
    list.push(Target::labeled(UnitKey::LdSt, "LD/ST Units"));
    list.push(Target::titled(arch, UnitKey::Sfu));
    list
}

/// Single-SM traversal order: the shared L1 instruction cache, the four
/// SMSP blocks (each front-end, compute columns, footer), then the SM
/// footer sections. Depicts one generic SM; disablement does not apply.
fn single_sm_targets(arch: Architecture) -> Vec<Target> {
    let mut list = vec![Target::titled(arch, UnitKey::SmspL1Cache)];

    for smsp in 0..SMSPS_PER_SM {
        list.push(Target::labeled(UnitKey::L0Cache, format!("SMSP {smsp} · L0 Cache")));
        list.push(Target::labeled(UnitKey::WarpScheduler, format!("SMSP {smsp} · Warp Scheduler")));
        list.push(Target::labeled(UnitKey::DispatchUnit, format!("SMSP {smsp} · Dispatch")));
        list.push(Target::labeled(UnitKey::RegisterFile, format!("SMSP {smsp} · Register File")));
        list.push(Target::labeled(UnitKey::Int32, format!("SMSP {smsp} · INT32")));
        list.push(Target::labeled(UnitKey::Fp32, format!("SMSP {smsp} · FP32")));
        list.push(Target::labeled(UnitKey::Fp64, format!("SMSP {smsp} · FP64")));
        list.push(Target::labeled(UnitKey::TensorCore, format!("SMSP {smsp} · Tensor Core")));
        list.push(Target::labeled(UnitKey::LdSt, format!("SMSP {smsp} · LD/ST")));
        list.push(Target::labeled(UnitKey::Sfu, format!("SMSP {smsp} · SFU")));
    }

    list.push(Target::titled(arch, UnitKey::Tma));
    list.push(Target::titled(arch, UnitKey::SharedMemory));
    for tex in 1..=4 {
        list.push(Target::labeled(UnitKey::TextureUnit, format!("TEX Unit {tex}")));
    }
    list
}
