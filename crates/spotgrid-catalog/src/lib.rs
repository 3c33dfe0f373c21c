//! SpotGrid machine shape catalog.
//!
//! Static display metadata (vCPUs, memory) for the machine types the
//! dashboard offers. The advisor engine never reads this — it only needs
//! the shape identifier string — but the API and CLI surfaces use it to
//! describe shapes to users and to populate pickers.

use serde::Serialize;
use spotgrid_advisor::{ResourceFamily, classify};

/// Display metadata for one machine type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MachineShape {
    pub name: &'static str,
    pub vcpus: u32,
    pub memory_gb: f64,
    pub description: &'static str,
}

const CATALOG: &[MachineShape] = &[
    // General purpose
    MachineShape { name: "e2-micro", vcpus: 2, memory_gb: 1.0, description: "Cost-optimized, shared core" },
    MachineShape { name: "e2-small", vcpus: 2, memory_gb: 2.0, description: "Cost-optimized, shared core" },
    MachineShape { name: "e2-medium", vcpus: 2, memory_gb: 4.0, description: "Cost-optimized, shared core" },
    MachineShape { name: "e2-standard-2", vcpus: 2, memory_gb: 8.0, description: "Cost-optimized general purpose" },
    MachineShape { name: "e2-standard-4", vcpus: 4, memory_gb: 16.0, description: "Cost-optimized general purpose" },
    MachineShape { name: "e2-standard-8", vcpus: 8, memory_gb: 32.0, description: "Cost-optimized general purpose" },
    MachineShape { name: "e2-standard-16", vcpus: 16, memory_gb: 64.0, description: "Cost-optimized general purpose" },
    MachineShape { name: "n1-standard-4", vcpus: 4, memory_gb: 15.0, description: "First-gen general purpose" },
    MachineShape { name: "n2-standard-4", vcpus: 4, memory_gb: 16.0, description: "Balanced general purpose" },
    MachineShape { name: "n2-standard-8", vcpus: 8, memory_gb: 32.0, description: "Balanced general purpose" },
    MachineShape { name: "n2d-standard-4", vcpus: 4, memory_gb: 16.0, description: "AMD general purpose" },
    MachineShape { name: "n4-standard-4", vcpus: 4, memory_gb: 16.0, description: "Latest-gen general purpose" },
    MachineShape { name: "n4-standard-8", vcpus: 8, memory_gb: 32.0, description: "Latest-gen general purpose" },
    MachineShape { name: "t2d-standard-4", vcpus: 4, memory_gb: 16.0, description: "Scale-out general purpose" },
    // Compute optimized
    MachineShape { name: "c2-standard-8", vcpus: 8, memory_gb: 32.0, description: "Compute optimized" },
    MachineShape { name: "c2-standard-16", vcpus: 16, memory_gb: 64.0, description: "Compute optimized" },
    MachineShape { name: "c2d-standard-8", vcpus: 8, memory_gb: 32.0, description: "AMD compute optimized" },
    MachineShape { name: "c3-standard-8", vcpus: 8, memory_gb: 32.0, description: "Compute optimized" },
    MachineShape { name: "c4-standard-8", vcpus: 8, memory_gb: 30.0, description: "Latest-gen compute optimized" },
    MachineShape { name: "c4-standard-16", vcpus: 16, memory_gb: 60.0, description: "Latest-gen compute optimized" },
    MachineShape { name: "h3-standard-88", vcpus: 88, memory_gb: 352.0, description: "HPC compute optimized" },
    // Memory optimized
    MachineShape { name: "m1-megamem-96", vcpus: 96, memory_gb: 1433.6, description: "Memory optimized" },
    MachineShape { name: "m2-ultramem-208", vcpus: 208, memory_gb: 5888.0, description: "Memory optimized, ultra" },
    MachineShape { name: "m3-megamem-64", vcpus: 64, memory_gb: 976.0, description: "Memory optimized" },
    MachineShape { name: "m4-megamem-28", vcpus: 28, memory_gb: 372.0, description: "Latest-gen memory optimized" },
    // Accelerator optimized
    MachineShape { name: "a2-highgpu-1g", vcpus: 12, memory_gb: 85.0, description: "1× A100 40GB" },
    MachineShape { name: "a2-highgpu-2g", vcpus: 24, memory_gb: 170.0, description: "2× A100 40GB" },
    MachineShape { name: "a2-highgpu-4g", vcpus: 48, memory_gb: 340.0, description: "4× A100 40GB" },
    MachineShape { name: "a2-highgpu-8g", vcpus: 96, memory_gb: 680.0, description: "8× A100 40GB" },
    MachineShape { name: "a3-highgpu-8g", vcpus: 208, memory_gb: 1872.0, description: "8× H100 80GB" },
    MachineShape { name: "g2-standard-4", vcpus: 4, memory_gb: 16.0, description: "1× L4 24GB" },
    MachineShape { name: "g2-standard-8", vcpus: 8, memory_gb: 32.0, description: "1× L4 24GB" },
    // Storage optimized
    MachineShape { name: "z3-highmem-88", vcpus: 88, memory_gb: 704.0, description: "Storage optimized, local SSD" },
    MachineShape { name: "z3-highmem-176", vcpus: 176, memory_gb: 1408.0, description: "Storage optimized, local SSD" },
];

/// All known shapes, grouped by family in declaration order.
pub fn all() -> &'static [MachineShape] {
    CATALOG
}

/// Look up a shape by exact name.
pub fn lookup(name: &str) -> Option<&'static MachineShape> {
    CATALOG.iter().find(|s| s.name == name)
}

/// Shapes belonging to one resource family, per the advisor's classifier.
pub fn by_family(family: ResourceFamily) -> impl Iterator<Item = &'static MachineShape> {
    CATALOG.iter().filter(move |s| classify(s.name).family == family)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_shape() {
        let shape = lookup("e2-medium").unwrap();
        assert_eq!(shape.vcpus, 2);
        assert_eq!(shape.memory_gb, 4.0);
    }

    #[test]
    fn lookup_unknown_shape() {
        assert!(lookup("quantum-9000").is_none());
    }

    #[test]
    fn catalog_names_are_unique() {
        for (i, shape) in CATALOG.iter().enumerate() {
            assert!(
                !CATALOG[..i].iter().any(|other| other.name == shape.name),
                "duplicate catalog entry: {}",
                shape.name
            );
        }
    }

    #[test]
    fn family_filter_agrees_with_classifier() {
        let gpus: Vec<&str> = by_family(ResourceFamily::AcceleratorOptimized)
            .map(|s| s.name)
            .collect();
        assert!(gpus.contains(&"a2-highgpu-1g"));
        assert!(gpus.contains(&"g2-standard-4"));
        assert!(!gpus.contains(&"e2-medium"));
    }

    #[test]
    fn every_family_is_represented() {
        for family in [
            ResourceFamily::GeneralPurpose,
            ResourceFamily::ComputeOptimized,
            ResourceFamily::MemoryOptimized,
            ResourceFamily::AcceleratorOptimized,
            ResourceFamily::StorageOptimized,
        ] {
            assert!(by_family(family).next().is_some(), "{family:?} has no shapes");
        }
    }
}
