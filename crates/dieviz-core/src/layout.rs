//! Die layout generation
//!
//! Every view that draws the compute complex consumes this module, so the
//! SM numbering and the disabled-TPC policy live in exactly one place.
//!
//! A die is a grid of GPCs (graphics processing clusters); each GPC holds
//! a fixed number of TPC slots; each TPC slot carries two SMs. Yield
//! harvesting is modeled by a hand-picked set of GPC indices whose *last*
//! TPC slot is fused off. The set is chosen so the active-SM total matches
//! the published figure for the part (H100: 144 slots − 12 fused = 132).

/// Fixed layout parameters for one compute die.
///
/// All values are compile-time constants per architecture variant; the
/// generator is total over them and has no error paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieConfig {
    /// Number of top-level GPCs on the die
    pub gpcs: usize,

    /// Number of TPC slots per GPC
    pub tpcs_per_gpc: usize,

    /// Number of SMs per TPC slot
    pub sms_per_tpc: u32,

    /// GPC indices whose last TPC slot is fused off
    pub disabled_gpcs: &'static [usize],

    /// Number of compute dies per package (1 for monolithic parts)
    pub dies_per_package: u32,
}

/// Hopper H100 die: 8 GPCs × 9 TPCs × 2 SMs = 144 slots, 132 active.
pub const HOPPER_DIE: DieConfig = DieConfig {
    gpcs: 8,
    tpcs_per_gpc: 9,
    sms_per_tpc: 2,
    disabled_gpcs: &[0, 1, 2, 4, 5, 6],
    dies_per_package: 1,
};

/// Blackwell B200 compute die: 6 GPCs × 11 TPCs × 2 SMs = 132 SMs,
/// fully enabled; two dies per package.
pub const BLACKWELL_DIE: DieConfig = DieConfig {
    gpcs: 6,
    tpcs_per_gpc: 11,
    sms_per_tpc: 2,
    disabled_gpcs: &[],
    dies_per_package: 2,
};

impl DieConfig {
    /// Total SM slots on one die, enabled or not
    pub fn total_sms(&self) -> u32 {
        (self.gpcs * self.tpcs_per_gpc) as u32 * self.sms_per_tpc
    }

    /// SMs lost to fused-off TPC slots on one die
    pub fn disabled_sms(&self) -> u32 {
        self.disabled_gpcs.len() as u32 * self.sms_per_tpc
    }

    /// Usable SMs on one die
    pub fn active_sms(&self) -> u32 {
        self.total_sms() - self.disabled_sms()
    }

    /// Usable SMs across the whole package
    pub fn package_active_sms(&self) -> u32 {
        self.active_sms() * self.dies_per_package
    }

    /// Whether the given GPC carries a fused-off TPC slot
    pub fn gpc_has_disabled_slot(&self, gpc_index: usize) -> bool {
        self.disabled_gpcs.contains(&gpc_index)
    }
}

/// One TPC slot within a GPC, with its SM identifiers resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TpcSlot {
    /// Slot position within the GPC, `0..tpcs_per_gpc`
    pub tpc_index: usize,

    /// First SM id in this slot (die-wide numbering)
    pub first_sm: u32,

    /// Second SM id in this slot
    pub second_sm: u32,

    /// Fused off per the disabled-GPC policy
    pub disabled: bool,
}

impl TpcSlot {
    /// Short label such as `"TPC (SM 16 & 17)"` used for hover/selection text
    pub fn label(&self) -> String {
        format!("TPC (SM {} & {})", self.first_sm, self.second_sm)
    }
}

/// Generate the ordered TPC slot sequence for one GPC.
///
/// SM ids form a die-wide running counter: GPC `g` starts at
/// `g × tpcs_per_gpc × sms_per_tpc` and each slot consumes `sms_per_tpc`
/// ids. Only the last slot of a disabled GPC is ever marked disabled.
///
/// `gpc_index` must be in `0..config.gpcs`; the constants in this module
/// are the only callers' source of configs, so the function is total.
pub fn gpc_slots(config: &DieConfig, gpc_index: usize) -> Vec<TpcSlot> {
    debug_assert!(gpc_index < config.gpcs);

    let has_disabled = config.gpc_has_disabled_slot(gpc_index);
    let mut next_sm = gpc_index as u32 * config.tpcs_per_gpc as u32 * config.sms_per_tpc;

    (0..config.tpcs_per_gpc)
        .map(|tpc_index| {
            let first_sm = next_sm;
            next_sm += config.sms_per_tpc;
            TpcSlot {
                tpc_index,
                first_sm,
                second_sm: first_sm + 1,
                disabled: has_disabled && tpc_index == config.tpcs_per_gpc - 1,
            }
        })
        .collect()
}
