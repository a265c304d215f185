//! Per-variant unit catalogs
//!
//! The catalog maps a closed [`UnitKey`] enumeration to hand-authored
//! descriptor records. Content differs per architecture variant (the
//! Blackwell catalog describes 5th-gen tensor cores, HBM3e, TMEM, ...),
//! so each variant carries its own table. A key with no entry in the
//! active variant's table resolves to `None`; the caller decides whether
//! that is a diagnostic or simply "nothing to show".

mod blackwell;
mod hopper;

use crate::arch::Architecture;

/// Closed enumeration of every activatable hardware unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKey {
    L0Cache,
    WarpScheduler,
    DispatchUnit,
    RegisterFile,
    Int32,
    Fp32,
    Fp64,
    TensorCore,
    Tmem,
    Sfu,
    LdSt,
    SmspL1Cache,
    Tma,
    SharedMemory,
    TextureUnit,
    PcieInterface,
    GigaThreadEngine,
    NvlinkSwitch,
    MemoryController,
    Hbm3,
    Gpc,
    Tpc,
    Sm,
    L2Cache,
    NvlinkHub,
    NvlinkPort,
}

impl UnitKey {
    /// All keys, in declaration order. Used by exhaustiveness tests.
    pub const ALL: &'static [UnitKey] = &[
        UnitKey::L0Cache,
        UnitKey::WarpScheduler,
        UnitKey::DispatchUnit,
        UnitKey::RegisterFile,
        UnitKey::Int32,
        UnitKey::Fp32,
        UnitKey::Fp64,
        UnitKey::TensorCore,
        UnitKey::Tmem,
        UnitKey::Sfu,
        UnitKey::LdSt,
        UnitKey::SmspL1Cache,
        UnitKey::Tma,
        UnitKey::SharedMemory,
        UnitKey::TextureUnit,
        UnitKey::PcieInterface,
        UnitKey::GigaThreadEngine,
        UnitKey::NvlinkSwitch,
        UnitKey::MemoryController,
        UnitKey::Hbm3,
        UnitKey::Gpc,
        UnitKey::Tpc,
        UnitKey::Sm,
        UnitKey::L2Cache,
        UnitKey::NvlinkHub,
        UnitKey::NvlinkPort,
    ];

    /// Stable kebab-case identifier, used in diagnostics and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKey::L0Cache => "l0-cache",
            UnitKey::WarpScheduler => "warp-scheduler",
            UnitKey::DispatchUnit => "dispatch-unit",
            UnitKey::RegisterFile => "register-file",
            UnitKey::Int32 => "int32",
            UnitKey::Fp32 => "fp32",
            UnitKey::Fp64 => "fp64",
            UnitKey::TensorCore => "tensor-core",
            UnitKey::Tmem => "tmem",
            UnitKey::Sfu => "sfu",
            UnitKey::LdSt => "ldst",
            UnitKey::SmspL1Cache => "smsp-l1-cache",
            UnitKey::Tma => "tma",
            UnitKey::SharedMemory => "shared-memory",
            UnitKey::TextureUnit => "texture-unit",
            UnitKey::PcieInterface => "pcie-interface",
            UnitKey::GigaThreadEngine => "gigathread-engine",
            UnitKey::NvlinkSwitch => "nvlink-switch",
            UnitKey::MemoryController => "memory-controller",
            UnitKey::Hbm3 => "hbm3",
            UnitKey::Gpc => "gpc",
            UnitKey::Tpc => "tpc",
            UnitKey::Sm => "sm",
            UnitKey::L2Cache => "l2-cache",
            UnitKey::NvlinkHub => "nvlink-hub",
            UnitKey::NvlinkPort => "nvlink-port",
        }
    }
}

impl std::fmt::Display for UnitKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled group of bullet facts within a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSection {
    pub title: &'static str,
    pub content: &'static [&'static str],
}

/// One key/value row of the descriptor's technical-specification grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSpec {
    pub label: &'static str,
    pub value: &'static str,
}

/// Authored descriptive content for one hardware-unit type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitInfo {
    /// Display name
    pub title: &'static str,

    /// One-line summary shown under the title
    pub description: &'static str,

    /// Ordered bullet-fact groups
    pub sections: &'static [UnitSection],

    /// Ordered key/value technical facts
    pub specs: &'static [UnitSpec],
}

/// Look up the descriptor for a unit under the given architecture.
///
/// Returns `None` when the variant's catalog has no entry for the key
/// (e.g. [`UnitKey::Tmem`] under Hopper, which predates tensor memory).
pub fn unit_info(arch: Architecture, key: UnitKey) -> Option<&'static UnitInfo> {
    match arch {
        Architecture::Hopper => hopper::lookup(key),
        Architecture::Blackwell => blackwell::lookup(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blackwell_catalog_is_complete() {
        for &key in UnitKey::ALL {
            assert!(
                unit_info(Architecture::Blackwell, key).is_some(),
                "missing Blackwell entry for {key}"
            );
        }
    }

    #[test]
    fn test_hopper_catalog_misses_only_tmem() {
        for &key in UnitKey::ALL {
            let info = unit_info(Architecture::Hopper, key);
            if key == UnitKey::Tmem {
                assert!(info.is_none(), "Hopper should not describe TMEM");
            } else {
                assert!(info.is_some(), "missing Hopper entry for {key}");
            }
        }
    }

    #[test]
    fn test_descriptors_are_fully_populated() {
        for arch in [Architecture::Hopper, Architecture::Blackwell] {
            for &key in UnitKey::ALL {
                let Some(info) = unit_info(arch, key) else {
                    continue;
                };
                assert!(!info.title.is_empty());
                assert!(!info.description.is_empty());
                assert!(!info.sections.is_empty(), "{key} has no sections");
                assert!(!info.specs.is_empty(), "{key} has no specs");
                for section in info.sections {
                    assert!(!section.content.is_empty(), "{key} has an empty section");
                }
            }
        }
    }

    #[test]
    fn test_lookup_is_stable() {
        let a = unit_info(Architecture::Hopper, UnitKey::TensorCore).unwrap();
        let b = unit_info(Architecture::Hopper, UnitKey::TensorCore).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_variants_disagree_where_silicon_differs() {
        let hopper = unit_info(Architecture::Hopper, UnitKey::TensorCore).unwrap();
        let blackwell = unit_info(Architecture::Blackwell, UnitKey::TensorCore).unwrap();
        assert_eq!(hopper.title, "4th Generation Tensor Core");
        assert_eq!(blackwell.title, "5th Generation Tensor Core");

        let hopper_l2 = unit_info(Architecture::Hopper, UnitKey::L2Cache).unwrap();
        let blackwell_l2 = unit_info(Architecture::Blackwell, UnitKey::L2Cache).unwrap();
        assert!(hopper_l2.specs.iter().any(|s| s.value == "50 MB"));
        assert!(blackwell_l2.specs.iter().any(|s| s.value == "126 MB"));
    }

    #[test]
    fn test_key_identifiers_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for &key in UnitKey::ALL {
            assert!(seen.insert(key.as_str()), "duplicate id {key}");
        }
    }
}
