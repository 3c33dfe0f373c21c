//! Machine shape classification.
//!
//! Derives a coarse resource family and a generation tier from a machine
//! type name like `n2-standard-4` or `a2-highgpu-1g`, keyed on the series
//! prefix before the first `-`. Classification is total: unrecognized
//! series fall back to general purpose / legacy rather than failing.

use crate::types::{Generation, ResourceFamily, ShapeClass};

/// GPU/accelerator series.
const ACCELERATOR_SERIES: &[&str] = &["a2", "a3", "a4", "g2", "g4"];

/// Memory-dense series.
const MEMORY_SERIES: &[&str] = &["m1", "m2", "m3", "m4", "x4"];

/// Compute-dense series.
const COMPUTE_SERIES: &[&str] = &["c2", "c2d", "c3", "c3d", "c4", "c4a", "c4d", "h3"];

/// Storage-dense series.
const STORAGE_SERIES: &[&str] = &["z3"];

/// Latest-generation series, penalized for scarcity.
const MODERN_SERIES: &[&str] = &["c4", "c4a", "c4d", "n4", "m4", "x4", "a4", "g4"];

/// Classify a machine shape by its series prefix, case-insensitive.
pub fn classify(shape_id: &str) -> ShapeClass {
    let series = shape_id
        .split('-')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    let series = series.as_str();

    let family = if ACCELERATOR_SERIES.contains(&series) {
        ResourceFamily::AcceleratorOptimized
    } else if MEMORY_SERIES.contains(&series) {
        ResourceFamily::MemoryOptimized
    } else if COMPUTE_SERIES.contains(&series) {
        ResourceFamily::ComputeOptimized
    } else if STORAGE_SERIES.contains(&series) {
        ResourceFamily::StorageOptimized
    } else {
        ResourceFamily::GeneralPurpose
    };

    let generation = if MODERN_SERIES.contains(&series) {
        Generation::Modern
    } else {
        Generation::Legacy
    };

    ShapeClass { family, generation }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family_of(shape: &str) -> ResourceFamily {
        classify(shape).family
    }

    #[test]
    fn general_purpose_series() {
        assert_eq!(family_of("e2-medium"), ResourceFamily::GeneralPurpose);
        assert_eq!(family_of("n1-standard-4"), ResourceFamily::GeneralPurpose);
        assert_eq!(family_of("n2-standard-8"), ResourceFamily::GeneralPurpose);
        assert_eq!(family_of("t2d-standard-4"), ResourceFamily::GeneralPurpose);
    }

    #[test]
    fn compute_optimized_series() {
        assert_eq!(family_of("c2-standard-8"), ResourceFamily::ComputeOptimized);
        assert_eq!(family_of("c3-standard-8"), ResourceFamily::ComputeOptimized);
        assert_eq!(family_of("h3-standard-88"), ResourceFamily::ComputeOptimized);
    }

    #[test]
    fn memory_optimized_series() {
        assert_eq!(family_of("m1-megamem-96"), ResourceFamily::MemoryOptimized);
        assert_eq!(family_of("m3-megamem-64"), ResourceFamily::MemoryOptimized);
    }

    #[test]
    fn accelerator_series() {
        assert_eq!(family_of("a2-highgpu-1g"), ResourceFamily::AcceleratorOptimized);
        assert_eq!(family_of("a3-highgpu-8g"), ResourceFamily::AcceleratorOptimized);
        assert_eq!(family_of("g2-standard-4"), ResourceFamily::AcceleratorOptimized);
    }

    #[test]
    fn storage_series() {
        assert_eq!(family_of("z3-highmem-88"), ResourceFamily::StorageOptimized);
    }

    #[test]
    fn generation_tiers() {
        assert_eq!(classify("c4-standard-8").generation, Generation::Modern);
        assert_eq!(classify("n4-standard-4").generation, Generation::Modern);
        assert_eq!(classify("m4-megamem-28").generation, Generation::Modern);
        assert_eq!(classify("c2-standard-8").generation, Generation::Legacy);
        assert_eq!(classify("e2-medium").generation, Generation::Legacy);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(family_of("A2-HIGHGPU-1G"), ResourceFamily::AcceleratorOptimized);
        assert_eq!(classify("C4-Standard-8").generation, Generation::Modern);
    }

    #[test]
    fn unrecognized_input_is_general_purpose_legacy() {
        for shape in ["", "-", "quantum-9000", "custom-2-4096", "zz9"] {
            let class = classify(shape);
            assert_eq!(class.family, ResourceFamily::GeneralPurpose, "shape {shape:?}");
            assert_eq!(class.generation, Generation::Legacy, "shape {shape:?}");
        }
    }
}
