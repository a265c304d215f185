//! Static specification sheets
//!
//! Hand-authored reference values for the Specifications view. These are
//! published figures, not computed from any model; the layout generator is
//! deliberately not consulted here.

use crate::arch::Architecture;

/// One stat tile: headline value with a qualifying detail line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieStat {
    pub label: &'static str,
    pub value: &'static str,
    pub detail: &'static str,
}

/// One row of the key-architectural-features list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieFeature {
    pub title: &'static str,
    pub details: &'static str,
}

const HOPPER_STATS: &[DieStat] = &[
    DieStat { label: "Streaming Multiprocessors", value: "132", detail: "8 GPCs × 8-9 SMs" },
    DieStat { label: "CUDA Cores", value: "16,896", detail: "128 FP32/INT32 per SM" },
    DieStat { label: "Tensor Cores", value: "528", detail: "4th Generation" },
    DieStat { label: "FP64 Performance", value: "67 TFLOPS", detail: "Double Precision" },
    DieStat { label: "FP32 Performance", value: "67 TFLOPS", detail: "Single Precision" },
    DieStat { label: "Tensor Performance", value: "3,958 TFLOPS", detail: "FP8 with Sparsity" },
    DieStat { label: "Memory Bandwidth", value: "3.35 TB/s", detail: "HBM3" },
    DieStat { label: "L2 Cache", value: "50 MB", detail: "Unified" },
    DieStat { label: "NVLink Bandwidth", value: "900 GB/s", detail: "Bidirectional" },
    DieStat { label: "TDP", value: "700W", detail: "SXM5 Form Factor" },
    DieStat { label: "Manufacturing Process", value: "TSMC 4N", detail: "Custom 4nm" },
    DieStat { label: "Transistor Count", value: "80 Billion", detail: "" },
];

const BLACKWELL_STATS: &[DieStat] = &[
    DieStat { label: "Streaming Multiprocessors", value: "~264", detail: "Dual-Die Architecture" },
    DieStat { label: "CUDA Cores", value: "~33,792", detail: "128 per SM" },
    DieStat { label: "Tensor Cores", value: "~1,056", detail: "5th Gen (FP4/FP6)" },
    DieStat { label: "FP64 Performance", value: "45 TFLOPS", detail: "HPC Optimized" },
    DieStat { label: "AI Performance", value: "20 PFLOPS", detail: "FP4 Tensor Core" },
    DieStat { label: "Memory Capacity", value: "192 GB", detail: "HBM3e" },
    DieStat { label: "Memory Bandwidth", value: "8.0 TB/s", detail: "HBM3e" },
    DieStat { label: "L2 Cache", value: "126 MB", detail: "Distributed Coherent" },
    DieStat { label: "Chip-to-Chip", value: "10 TB/s", detail: "NV-HBI" },
    DieStat { label: "NVLink Bandwidth", value: "1.8 TB/s", detail: "5th Gen Bidirectional" },
    DieStat { label: "Manufacturing Process", value: "TSMC 4NP", detail: "Refined 4nm" },
    DieStat { label: "Transistor Count", value: "208 Billion", detail: "Multi-Die" },
];

const HOPPER_FEATURES: &[DieFeature] = &[
    DieFeature {
        title: "Transformer Engine",
        details: "Accelerates AI training with mixed precision (FP8) and dynamic range management.",
    },
    DieFeature {
        title: "2nd Gen MIG",
        details: "Multi-Instance GPU technology allows partitioning into 7 isolated instances for optimal utilization.",
    },
    DieFeature {
        title: "Confidential Computing",
        details: "Hardware-based TEE secures data and code during processing (inference/training).",
    },
    DieFeature {
        title: "4th Gen NVLink",
        details: "High-speed interconnect enables scaling to thousands of GPUs with linear performance growth.",
    },
];

const BLACKWELL_FEATURES: &[DieFeature] = &[
    DieFeature {
        title: "Blackwell Tensor Core",
        details: "5th Gen Tensor Cores with FP4/FP6 precision support, doubling performance for inference.",
    },
    DieFeature {
        title: "Dual-Die Architecture",
        details: "Two compute dies connected by 10 TB/s NV-HBI, presenting as a single unified GPU.",
    },
    DieFeature {
        title: "Tensor Memory (TMEM)",
        details: "Dedicated on-chip memory for Tensor Cores to increase bandwidth and reduce L1 pollution.",
    },
    DieFeature {
        title: "Second-Gen Transformer Engine",
        details: "Automatically handles FP4 precision for massive LLM inference acceleration.",
    },
];

/// Stat tiles for the given variant
pub fn die_stats(arch: Architecture) -> &'static [DieStat] {
    match arch {
        Architecture::Hopper => HOPPER_STATS,
        Architecture::Blackwell => BLACKWELL_STATS,
    }
}

/// Feature rows for the given variant
pub fn die_features(arch: Architecture) -> &'static [DieFeature] {
    match arch {
        Architecture::Hopper => HOPPER_FEATURES,
        Architecture::Blackwell => BLACKWELL_FEATURES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheets_are_fully_populated() {
        for arch in [Architecture::Hopper, Architecture::Blackwell] {
            assert_eq!(die_stats(arch).len(), 12);
            assert_eq!(die_features(arch).len(), 4);
            for stat in die_stats(arch) {
                assert!(!stat.label.is_empty());
                assert!(!stat.value.is_empty());
            }
        }
    }

    #[test]
    fn test_l2_figures_differ_per_variant() {
        let l2 = |arch| {
            die_stats(arch)
                .iter()
                .find(|s| s.label == "L2 Cache")
                .map(|s| s.value)
                .unwrap()
        };
        assert_eq!(l2(Architecture::Hopper), "50 MB");
        assert_eq!(l2(Architecture::Blackwell), "126 MB");
    }
}
