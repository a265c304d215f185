//! Blackwell (B200) unit descriptors

use super::{UnitInfo, UnitKey, UnitSection, UnitSpec};

/// Blackwell catalog lookup. Every key resolves on this architecture.
pub(super) fn lookup(key: UnitKey) -> Option<&'static UnitInfo> {
    match key {
        UnitKey::L0Cache => Some(&UnitInfo {
            title: "L0 Instruction Cache",
            description: "The fastest instruction cache in the GPU memory hierarchy",
            sections: &[
                UnitSection {
                    title: "Functionality",
                    content: &[
                        "Stores recently fetched instructions for immediate reuse",
                        "Reduces instruction fetch latency to ~1 cycle",
                        "Per-warp cache organization for optimal efficiency",
                        "Direct interface with Warp Scheduler",
                    ],
                },
                UnitSection {
                    title: "Performance Benefits",
                    content: &[
                        "Eliminates memory bandwidth bottlenecks for instruction fetch",
                        "Enables rapid warp switching and context changes",
                        "Critical for maintaining high SM utilization",
                        "Supports up to 64 concurrent warps per SM",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Latency", value: "~1 cycle" },
                UnitSpec { label: "Scope", value: "Per SM" },
                UnitSpec { label: "Organization", value: "Per-warp" },
            ],
        }),
        UnitKey::WarpScheduler => Some(&UnitInfo {
            title: "Warp Scheduler",
            description: "Advanced instruction scheduling unit for managing thread warps",
            sections: &[
                UnitSection {
                    title: "Core Responsibilities",
                    content: &[
                        "Manages up to 64 concurrent warps per SM (16 per SMSP)",
                        "Selects ready warps for instruction issue each cycle",
                        "Handles warp-level branching and divergence",
                        "Optimizes instruction-level parallelism",
                    ],
                },
                UnitSection {
                    title: "B200 Enhancements",
                    content: &[
                        "Increased warp tracking capacity (16 per SMSP vs 12 in H100)",
                        "Higher occupancy potential to hide HBM3e latency",
                        "Improved latency hiding for massive 192GB memory pool",
                        "Critical for keeping 5th Gen Tensor Cores fed",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Max Warps", value: "64 per SM" },
                UnitSpec { label: "Per SMSP", value: "16 Warps" },
                UnitSpec { label: "Issue Rate", value: "32 threads/cycle" },
            ],
        }),
        UnitKey::DispatchUnit => Some(&UnitInfo {
            title: "Dispatch Unit",
            description: "High-throughput instruction dispatch and issue unit",
            sections: &[
                UnitSection {
                    title: "Dispatch Operations",
                    content: &[
                        "Issues up to 2 instructions per warp per cycle",
                        "Handles instruction decoding and operand fetch",
                        "Manages register file port allocation",
                        "Coordinates with execution units",
                    ],
                },
                UnitSection {
                    title: "Performance Features",
                    content: &[
                        "Dual-issue capability for instruction-level parallelism",
                        "Out-of-order execution support within warps",
                        "Dynamic operand forwarding",
                        "Pipeline optimization for maximum throughput",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Dispatch Rate", value: "32 threads/cycle" },
                UnitSpec { label: "Instructions/Cycle", value: "2 per warp" },
                UnitSpec { label: "Pipeline Depth", value: "Multiple stages" },
            ],
        }),
        UnitKey::RegisterFile => Some(&UnitInfo {
            title: "Register File",
            description: "Large, fast register storage for thread data",
            sections: &[
                UnitSection {
                    title: "Storage Architecture",
                    content: &[
                        "65,536 × 32-bit registers per SM",
                        "Divided among active warps and threads",
                        "Supports register-level parallelism",
                        "Multi-banked for concurrent access",
                    ],
                },
                UnitSection {
                    title: "B200 Considerations",
                    content: &[
                        "Same 256KB total size as H100",
                        "Higher pressure due to increased warp count (64 vs 48)",
                        "Requires careful register usage to achieve full occupancy",
                        "Critical resource for hiding memory latency",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Total Registers", value: "65,536 × 32-bit" },
                UnitSpec { label: "Per SMSP", value: "64 KB" },
                UnitSpec { label: "Access Latency", value: "1 cycle" },
            ],
        }),
        UnitKey::Int32 => Some(&UnitInfo {
            title: "INT32 Execution Units",
            description: "Integer arithmetic and logic processing units",
            sections: &[
                UnitSection {
                    title: "Computational Capabilities",
                    content: &[
                        "32-bit integer arithmetic operations",
                        "Logical operations (AND, OR, XOR, NOT)",
                        "Bit manipulation and shift operations",
                        "Comparison and branch instructions",
                    ],
                },
                UnitSection {
                    title: "AI/ML Applications",
                    content: &[
                        "Index calculations and address generation",
                        "Loop control and counter operations",
                        "Quantized integer inference (INT8, INT16)",
                        "Memory access pattern calculations",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Precision", value: "32-bit integer" },
                UnitSpec { label: "Throughput", value: "1 operation/cycle" },
                UnitSpec { label: "Units per SM", value: "64 total" },
            ],
        }),
        UnitKey::Fp32 => Some(&UnitInfo {
            title: "FP32 Execution Units",
            description: "Single-precision floating-point arithmetic processors",
            sections: &[
                UnitSection {
                    title: "Floating-Point Operations",
                    content: &[
                        "IEEE 754 compliant single-precision arithmetic",
                        "Add, multiply, multiply-add operations",
                        "Transcendental functions (exp, log, trig)",
                        "Division and square root operations",
                    ],
                },
                UnitSection {
                    title: "Scientific Computing",
                    content: &[
                        "General-purpose scientific computing",
                        "Graphics and rendering calculations",
                        "Traditional machine learning training",
                        "Signal processing applications",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Precision", value: "32-bit IEEE 754" },
                UnitSpec { label: "Throughput", value: "1 operation/cycle" },
                UnitSpec { label: "Units per SM", value: "64 total" },
            ],
        }),
        UnitKey::Fp64 => Some(&UnitInfo {
            title: "FP64 Execution Units",
            description: "Double-precision floating-point arithmetic processors",
            sections: &[
                UnitSection {
                    title: "High-Precision Computing",
                    content: &[
                        "IEEE 754 compliant double-precision arithmetic",
                        "Extended range and precision for scientific accuracy",
                        "Complex numerical simulations",
                        "Financial and engineering calculations",
                    ],
                },
                UnitSection {
                    title: "B200 Context",
                    content: &[
                        "Maintains strong FP64 support for HPC",
                        "Prioritizes silicon area for Tensor Cores (FP4/FP8)",
                        "45 TFLOPS HPC performance vs 20 PFLOPS AI performance",
                        "Essential for scientific workloads",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Precision", value: "64-bit IEEE 754" },
                UnitSpec { label: "Throughput", value: "1 operation/cycle" },
                UnitSpec { label: "Units per SM", value: "16 total" },
            ],
        }),
        UnitKey::TensorCore => Some(&UnitInfo {
            title: "5th Generation Tensor Core",
            description: "Specialized matrix multiplication acceleration units with FP4 support",
            sections: &[
                UnitSection {
                    title: "Blackwell Innovations",
                    content: &[
                        "Introduces native FP4 and FP6 precision support",
                        "Doubles performance over Hopper H100",
                        "Micro-tensor scaling support",
                        "Optimized for massive LLM inference",
                    ],
                },
                UnitSection {
                    title: "Matrix Operations",
                    content: &[
                        "Accelerated matrix multiply-accumulate operations",
                        "Support for mixed-precision computing",
                        "FP4, FP6, FP8, FP16, BF16, TF32, FP64 precision support",
                        "Sparsity acceleration for AI workloads",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Generation", value: "5th Gen" },
                UnitSpec { label: "New Precisions", value: "FP4, FP6" },
                UnitSpec { label: "Performance", value: "2x H100" },
            ],
        }),
        UnitKey::Tmem => Some(&UnitInfo {
            title: "Tensor Memory (TMEM)",
            description: "Dedicated on-chip memory for Tensor Cores",
            sections: &[
                UnitSection {
                    title: "Architecture",
                    content: &[
                        "Dedicated scratchpad memory residing within the SM",
                        "Distinct from L1 Cache and Shared Memory",
                        "Allows Tensor Cores to fetch matrix tiles efficiently",
                        "Prevents pollution of general-purpose L1 cache",
                    ],
                },
                UnitSection {
                    title: "Impact",
                    content: &[
                        "Significantly increases effective bandwidth for matrix multiplies",
                        "Reduces contention for Shared Memory",
                        "Enables sustained high utilization of 5th Gen Tensor Cores",
                        "Key enabler for FP4/FP6 inference performance",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Type", value: "Dedicated Scratchpad" },
                UnitSpec { label: "Location", value: "In-SM" },
                UnitSpec { label: "Benefit", value: "Bandwidth Isolation" },
            ],
        }),
        UnitKey::Sfu => Some(&UnitInfo {
            title: "Special Function Unit (SFU)",
            description: "Specialized mathematical function processor",
            sections: &[
                UnitSection {
                    title: "Mathematical Functions",
                    content: &[
                        "Transcendental functions (sin, cos, exp, log)",
                        "Reciprocal and reciprocal square-root",
                        "Power and root operations",
                        "Hardware-accelerated approximations",
                    ],
                },
                UnitSection {
                    title: "Applications",
                    content: &[
                        "Graphics rendering calculations",
                        "Scientific computing functions",
                        "Neural network activation functions",
                        "Signal processing algorithms",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Function Types", value: "Transcendental" },
                UnitSpec { label: "Precision", value: "Single-precision" },
                UnitSpec { label: "Units per SM", value: "4" },
            ],
        }),
        UnitKey::LdSt => Some(&UnitInfo {
            title: "Load/Store Units",
            description: "Memory access and data movement units",
            sections: &[
                UnitSection {
                    title: "Memory Operations",
                    content: &[
                        "Load and store operations to/from memory",
                        "Address calculation and generation",
                        "Cache coherency management",
                        "Memory access pattern optimization",
                    ],
                },
                UnitSection {
                    title: "Data Movement",
                    content: &[
                        "Shared memory access coordination",
                        "Global memory request handling",
                        "Memory latency hiding techniques",
                        "Vectorized memory operations",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Function", value: "Memory access" },
                UnitSpec { label: "Units per SM", value: "16" },
                UnitSpec { label: "Bandwidth", value: "High throughput" },
            ],
        }),
        UnitKey::SmspL1Cache => Some(&UnitInfo {
            title: "SMSP L1 Instruction Cache",
            description: "Shared instruction cache for 4-SM cluster",
            sections: &[
                UnitSection {
                    title: "Shared Architecture",
                    content: &[
                        "Shared among 4 Streaming Multiprocessors",
                        "Reduces instruction duplication across SMs",
                        "Improved cache hit rates for shared code",
                        "Coordinated instruction prefetching",
                    ],
                },
                UnitSection {
                    title: "Efficiency Benefits",
                    content: &[
                        "Lower memory bandwidth requirements",
                        "Reduced instruction fetch latency",
                        "Better utilization of cache resources",
                        "Optimized for multi-SM workloads",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Scope", value: "4 SM cluster" },
                UnitSpec { label: "Organization", value: "Shared" },
                UnitSpec { label: "Efficiency", value: "High utilization" },
            ],
        }),
        UnitKey::Tma => Some(&UnitInfo {
            title: "Tensor Memory Accelerator",
            description: "Specialized memory engine for tensor operations",
            sections: &[
                UnitSection {
                    title: "Tensor Operations",
                    content: &[
                        "Hardware-accelerated tensor reshaping",
                        "Broadcast and gather operations",
                        "Tensor transpose and permutation",
                        "Memory layout optimization",
                    ],
                },
                UnitSection {
                    title: "Performance Benefits",
                    content: &[
                        "Reduces memory traffic for tensor operations",
                        "Accelerates data preprocessing",
                        "Optimizes memory access patterns",
                        "Supports complex tensor manipulations",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Function", value: "Tensor memory ops" },
                UnitSpec { label: "Acceleration", value: "Hardware" },
                UnitSpec { label: "Use Cases", value: "AI/ML workloads" },
            ],
        }),
        UnitKey::SharedMemory => Some(&UnitInfo {
            title: "L1 Data Cache / Shared Memory",
            description: "Configurable on-chip memory for data sharing",
            sections: &[
                UnitSection {
                    title: "Memory Organization",
                    content: &[
                        "256 KB total per SM (configurable split)",
                        "L1 cache and shared memory can be dynamically partitioned",
                        "Software-managed shared memory for programmer control",
                        "Hardware-managed L1 cache for automatic caching",
                    ],
                },
                UnitSection {
                    title: "Programming Model",
                    content: &[
                        "__shared__ memory for inter-thread communication",
                        "Low-latency data sharing within thread blocks",
                        "Barrier synchronization support",
                        "Banked architecture for parallel access",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Total Size", value: "256 KB" },
                UnitSpec { label: "Configurable", value: "L1/Shared split" },
                UnitSpec { label: "Latency", value: "~30 cycles" },
            ],
        }),
        UnitKey::TextureUnit => Some(&UnitInfo {
            title: "Texture Units",
            description: "Specialized texture sampling and filtering units",
            sections: &[
                UnitSection {
                    title: "Texture Operations",
                    content: &[
                        "Hardware-accelerated texture sampling",
                        "Bilinear and trilinear filtering",
                        "Mipmap generation and sampling",
                        "Texture coordinate calculations",
                    ],
                },
                UnitSection {
                    title: "Modern Applications",
                    content: &[
                        "Graphics rendering and visualization",
                        "Spatial data interpolation in scientific computing",
                        "Memory access pattern optimization",
                        "Data structure acceleration",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Function", value: "Texture sampling" },
                UnitSpec { label: "Units per SM", value: "4" },
                UnitSpec { label: "Filtering", value: "Hardware accelerated" },
            ],
        }),
        UnitKey::PcieInterface => Some(&UnitInfo {
            title: "PCI Express Host Interface",
            description: "High-speed external communication interface for GPU connectivity",
            sections: &[
                UnitSection {
                    title: "Interface Capabilities",
                    content: &[
                        "High-speed interface for host communication",
                        "Backward compatible with previous PCIe generations",
                        "Supports multiple GPU configurations via NVLink",
                        "Enables high-speed data transfer between CPU and GPU",
                    ],
                },
                UnitSection {
                    title: "System Integration",
                    content: &[
                        "Primary communication channel with host system",
                        "Handles command submission and data retrieval",
                        "Supports peer-to-peer GPU communication",
                        "Critical for multi-GPU scaling and clustering",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Generation", value: "PCIe Gen 6 (Likely)" },
                UnitSpec { label: "Lanes", value: "x16" },
                UnitSpec { label: "Bandwidth", value: "High Speed" },
            ],
        }),
        UnitKey::GigaThreadEngine => Some(&UnitInfo {
            title: "GigaThread Engine",
            description: "Advanced thread scheduling and workload distribution system",
            sections: &[
                UnitSection {
                    title: "Thread Management",
                    content: &[
                        "Manages thousands of concurrent thread blocks across all SMs",
                        "Intelligent work distribution for optimal GPU utilization",
                        "Dynamic load balancing between Streaming Multiprocessors",
                        "Handles context switching and task prioritization",
                    ],
                },
                UnitSection {
                    title: "Dual-Die Scaling",
                    content: &[
                        "Orchestrates work across two compute dies",
                        "Maximizes parallel execution across ~264 SMs",
                        "Reduces idle time and improves throughput",
                        "Adaptive scheduling based on workload characteristics",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "SM Support", value: "~264 SMs" },
                UnitSpec { label: "Thread Capacity", value: "Massive" },
                UnitSpec { label: "Load Balancing", value: "Cross-Die" },
            ],
        }),
        UnitKey::NvlinkSwitch => Some(&UnitInfo {
            title: "NVLink Switch Fabric",
            description: "High-bandwidth GPU-to-GPU interconnect technology",
            sections: &[
                UnitSection {
                    title: "Interconnect Architecture",
                    content: &[
                        "Next-generation NVLink providing massive bandwidth",
                        "Direct GPU-to-GPU communication bypassing PCIe",
                        "Supports multi-GPU connectivity in single node",
                        "Enables coherent memory access across multiple GPUs",
                    ],
                },
                UnitSection {
                    title: "Multi-GPU Benefits",
                    content: &[
                        "Essential for large model training and inference",
                        "Enables memory pooling and scaling",
                        "Reduces communication overhead in distributed computing",
                        "Critical for HPC and AI workloads",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Generation", value: "5th Gen" },
                UnitSpec { label: "Bandwidth", value: "1.8 TB/s (GB200)" },
                UnitSpec { label: "Topology", value: "Switch Fabric" },
            ],
        }),
        UnitKey::MemoryController => Some(&UnitInfo {
            title: "Memory Controller",
            description: "High-speed memory interface controller for HBM3e subsystem",
            sections: &[
                UnitSection {
                    title: "Memory Management",
                    content: &[
                        "Controls HBM3e memory stacks with 8 TB/s total bandwidth",
                        "Handles memory requests from all SMs and cache slices",
                        "Implements advanced memory scheduling and arbitration",
                        "Supports error correction and memory reliability features",
                    ],
                },
                UnitSection {
                    title: "Dual-Die Integration",
                    content: &[
                        "Each die has its own memory controllers",
                        "Aggregates to a massive bus width across the package",
                        "Ensures minimal latency penalty via chip-to-chip interconnect",
                        "Critical for feeding data to ~264 SMs efficiently",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Memory Type", value: "HBM3e" },
                UnitSpec { label: "Total Bandwidth", value: "8.0 TB/s" },
                UnitSpec { label: "Bus Width", value: "8192-bit" },
            ],
        }),
        UnitKey::Hbm3 => Some(&UnitInfo {
            title: "HBM3e Memory",
            description: "High-Bandwidth Memory 3e (Extended) for massive data throughput",
            sections: &[
                UnitSection {
                    title: "Memory Technology",
                    content: &[
                        "192 GB HBM3e memory capacity",
                        "8.0 TB/s aggregate memory bandwidth",
                        "8 stacks (4 per die) of 24GB HBM3e dies",
                        "Drastically increases \"fast memory\" pool",
                    ],
                },
                UnitSection {
                    title: "AI/ML Impact",
                    content: &[
                        "Relieves memory bottlenecks in LLM inference (KV cache)",
                        "Enables training of massive models with billions of parameters",
                        "Supports high-throughput inference workloads",
                        "Critical for large language models and generative AI",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Total Capacity", value: "192 GB" },
                UnitSpec { label: "Bandwidth", value: "8.0 TB/s" },
                UnitSpec { label: "Generation", value: "HBM3e" },
            ],
        }),
        UnitKey::Gpc => Some(&UnitInfo {
            title: "Graphics Processing Cluster (GPC)",
            description: "Major organizational unit containing multiple SMs and shared resources",
            sections: &[
                UnitSection {
                    title: "Cluster Architecture",
                    content: &[
                        "Contains multiple Streaming Multiprocessors per GPC",
                        "Shared raster engines and polymorph engines",
                        "Dedicated L2 cache slice and crossbar interface",
                        "Independent work distribution and scheduling",
                    ],
                },
                UnitSection {
                    title: "Resource Management",
                    content: &[
                        "Manages execution resources within cluster",
                        "Handles work distribution to constituent SMs",
                        "Provides shared graphics and compute resources",
                        "Optimizes resource utilization and power efficiency",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "SMs per GPC", value: "Varies" },
                UnitSpec { label: "Total GPCs", value: "Multiple" },
                UnitSpec { label: "Shared Resources", value: "Raster/Polymorph engines" },
            ],
        }),
        UnitKey::Tpc => Some(&UnitInfo {
            title: "Texture Processing Cluster (TPC)",
            description: "Contains 2 Streaming Multiprocessors with shared texture resources",
            sections: &[
                UnitSection {
                    title: "TPC Organization",
                    content: &[
                        "Contains 2 Streaming Multiprocessors (2×SM)",
                        "Shared texture units and L1 cache",
                        "Dedicated rasterization and render output units",
                        "Optimized for graphics and compute workloads",
                    ],
                },
                UnitSection {
                    title: "Functionality",
                    content: &[
                        "Handles both graphics and compute tasks",
                        "Provides texture sampling and filtering capabilities",
                        "Supports advanced rendering techniques",
                        "Balances workload between constituent SMs",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "SMs per TPC", value: "2" },
                UnitSpec { label: "Total TPCs", value: "Many" },
                UnitSpec { label: "Shared Resources", value: "Texture units, L1 cache" },
            ],
        }),
        UnitKey::Sm => Some(&UnitInfo {
            title: "Streaming Multiprocessor (SM)",
            description: "The fundamental compute unit of the GPU (Blackwell)",
            sections: &[UnitSection {
                title: "Architecture",
                content: &[
                    "128 CUDA Cores (FP32/INT32)",
                    "4 Tensor Cores (5th Gen)",
                    "Dedicated Tensor Memory (TMEM)",
                    "Highly configurable shared memory/L1 cache",
                ],
            }],
            specs: &[
                UnitSpec { label: "CUDA Cores", value: "128" },
                UnitSpec { label: "Tensor Cores", value: "4 (5th Gen)" },
                UnitSpec { label: "Register File", value: "64K 32-bit" },
            ],
        }),
        UnitKey::L2Cache => Some(&UnitInfo {
            title: "L2 Cache Slice",
            description: "Massive unified L2 cache providing high-bandwidth data sharing",
            sections: &[
                UnitSection {
                    title: "Cache Architecture",
                    content: &[
                        "126 MB total L2 cache (vs 50MB in H100)",
                        "Physically distributed across two dies but fully coherent",
                        "~10+ TB/s internal bandwidth",
                        "Supports both data and instruction caching",
                    ],
                },
                UnitSection {
                    title: "Performance Benefits",
                    content: &[
                        "Massive increase to reduce HBM trips",
                        "Minimizes data movement energy costs",
                        "L2 Cache Residency Control for pinning critical data",
                        "Scales to match increased SM count",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Total Size", value: "126 MB" },
                UnitSpec { label: "Architecture", value: "Shared (Distributed)" },
                UnitSpec { label: "Bandwidth", value: "~10+ TB/s" },
            ],
        }),
        UnitKey::NvlinkHub => Some(&UnitInfo {
            title: "High-Speed NVLink Hub",
            description: "Central hub managing NVLink interconnect communications",
            sections: &[
                UnitSection {
                    title: "Hub Operations",
                    content: &[
                        "Manages massive NVLink interconnect bandwidth",
                        "Routes data between multiple GPUs efficiently",
                        "Handles NVLink topology and connection management",
                        "Provides coherent memory access across GPUs",
                    ],
                },
                UnitSection {
                    title: "Multi-GPU Coordination",
                    content: &[
                        "Enables seamless GPU-to-GPU communication",
                        "Manages memory consistency across GPU cluster",
                        "Optimizes data placement and access patterns",
                        "Critical for large-scale AI training workloads",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Total Bandwidth", value: "High" },
                UnitSpec { label: "Connected GPUs", value: "Up to 8/16" },
                UnitSpec { label: "Topology", value: "Mesh/Hub" },
            ],
        }),
        UnitKey::NvlinkPort => Some(&UnitInfo {
            title: "NVLink Port",
            description: "Individual high-speed connection point for GPU interconnect",
            sections: &[
                UnitSection {
                    title: "Port Specifications",
                    content: &[
                        "Individual NVLink connection providing high bandwidth",
                        "Part of multi-port NVLink interconnect system",
                        "Supports bidirectional data transfer",
                        "Hot-plug capable and error-resilient",
                    ],
                },
                UnitSection {
                    title: "Connection Management",
                    content: &[
                        "Establishes and maintains GPU-to-GPU links",
                        "Handles link training and error recovery",
                        "Provides quality of service for different traffic types",
                        "Essential for scaling multi-GPU configurations",
                    ],
                },
            ],
            specs: &[
                UnitSpec { label: "Generation", value: "NVLink 5.0" },
                UnitSpec { label: "Total Ports", value: "Many" },
                UnitSpec { label: "Direction", value: "Bidirectional" },
            ],
        }),
    }
}
