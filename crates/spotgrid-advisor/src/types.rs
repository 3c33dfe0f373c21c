//! Domain types for capacity advice requests and responses.
//!
//! All of these are request-scoped value objects: constructed fresh per
//! call, serializable to JSON for the API and CLI surfaces, and never
//! mutated in place by the engine.

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Region identifier (e.g. `us-central1`).
pub type Region = String;

/// Zone identifier, unique within its region (e.g. `us-central1-a`).
pub type Zone = String;

// ── Classification ─────────────────────────────────────────────────

/// Coarse resource family derived from a machine shape's series prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceFamily {
    GeneralPurpose,
    ComputeOptimized,
    MemoryOptimized,
    AcceleratorOptimized,
    StorageOptimized,
}

impl ResourceFamily {
    /// Human-readable label for display surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceFamily::GeneralPurpose => "General purpose",
            ResourceFamily::ComputeOptimized => "Compute optimized",
            ResourceFamily::MemoryOptimized => "Memory optimized",
            ResourceFamily::AcceleratorOptimized => "Accelerator optimized",
            ResourceFamily::StorageOptimized => "Storage optimized",
        }
    }

    /// Stable identifier fed into the pool hash. Must never change once
    /// shipped — scores are keyed on it.
    pub fn tag(&self) -> &'static str {
        match self {
            ResourceFamily::GeneralPurpose => "general_purpose",
            ResourceFamily::ComputeOptimized => "compute_optimized",
            ResourceFamily::MemoryOptimized => "memory_optimized",
            ResourceFamily::AcceleratorOptimized => "accelerator_optimized",
            ResourceFamily::StorageOptimized => "storage_optimized",
        }
    }
}

/// Generation tier of a machine series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Generation {
    Legacy,
    Modern,
}

/// Result of classifying a machine shape. Immutable for the life of a
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeClass {
    pub family: ResourceFamily,
    pub generation: Generation,
}

// ── Request ────────────────────────────────────────────────────────

/// How the requested instances should be distributed across zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionStrategy {
    /// Any single zone is acceptable; produce one option per zone.
    Any,
    /// Caller wants exactly one zone; scored identically to `Any`.
    SingleZone,
    /// Split the request evenly across all zones of the region.
    Balanced,
}

impl std::str::FromStr for DistributionStrategy {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(DistributionStrategy::Any),
            "single-zone" | "single_zone" => Ok(DistributionStrategy::SingleZone),
            "balanced" => Ok(DistributionStrategy::Balanced),
            other => Err(AdvisorError::UnknownStrategy(other.to_string())),
        }
    }
}

/// A capacity advice request.
///
/// `total_count` is unsigned: a negative count is unrepresentable rather
/// than checked at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceRequest {
    pub region: Region,
    pub machine_type: String,
    pub total_count: u32,
    pub strategy: DistributionStrategy,
}

// ── Scores ─────────────────────────────────────────────────────────

/// Per-zone metric pair, both in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneMetric {
    /// Modeled probability the placement can be fulfilled.
    pub obtainability: f64,
    /// Modeled probability the placement persists without preemption.
    pub uptime: f64,
}

impl ZoneMetric {
    /// Expand into the named score list carried by a recommendation.
    pub fn as_scores(&self) -> Vec<Score> {
        vec![
            Score {
                name: ScoreName::Obtainability,
                value: self.obtainability,
            },
            Score {
                name: ScoreName::Uptime,
                value: self.uptime,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreName {
    Obtainability,
    Uptime,
}

/// A named score attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub name: ScoreName,
    pub value: f64,
}

// ── Response ───────────────────────────────────────────────────────

/// Provisioning model for every emitted shard. The advisor only deals in
/// preemptible capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProvisioningModel {
    #[default]
    Spot,
}

/// Instances placed in one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shard {
    pub location: Zone,
    pub machine_type: String,
    pub count: u32,
    pub provisioning_model: ProvisioningModel,
}

/// One placement option: a score pair plus one shard (single-zone) or
/// one shard per zone (balanced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub scores: Vec<Score>,
    pub shards: Vec<Shard>,
}

impl Recommendation {
    pub fn score(&self, name: ScoreName) -> Option<f64> {
        self.scores.iter().find(|s| s.name == name).map(|s| s.value)
    }

    pub fn obtainability(&self) -> f64 {
        self.score(ScoreName::Obtainability).unwrap_or(0.0)
    }

    pub fn uptime(&self) -> f64 {
        self.score(ScoreName::Uptime).unwrap_or(0.0)
    }

    /// Total instance count across all shards.
    pub fn total_count(&self) -> u32 {
        self.shards.iter().map(|s| s.count).sum()
    }
}

/// The full advice response, ordered by descending obtainability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityAdvisorResponse {
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_parses_known_spellings() {
        assert_eq!("any".parse::<DistributionStrategy>().unwrap(), DistributionStrategy::Any);
        assert_eq!(
            "single-zone".parse::<DistributionStrategy>().unwrap(),
            DistributionStrategy::SingleZone
        );
        assert_eq!(
            "Balanced".parse::<DistributionStrategy>().unwrap(),
            DistributionStrategy::Balanced
        );
    }

    #[test]
    fn strategy_rejects_unknown_spelling() {
        let err = "round-robin".parse::<DistributionStrategy>().unwrap_err();
        assert!(matches!(err, AdvisorError::UnknownStrategy(_)));
    }

    #[test]
    fn shard_serializes_camel_case_with_spot_model() {
        let shard = Shard {
            location: "us-central1-a".to_string(),
            machine_type: "e2-medium".to_string(),
            count: 3,
            provisioning_model: ProvisioningModel::default(),
        };
        let json = serde_json::to_value(&shard).unwrap();
        assert_eq!(json["machineType"], "e2-medium");
        assert_eq!(json["provisioningModel"], "SPOT");
    }

    #[test]
    fn score_names_serialize_lowercase() {
        let json = serde_json::to_value(ScoreName::Obtainability).unwrap();
        assert_eq!(json, "obtainability");
    }

    #[test]
    fn recommendation_score_lookup() {
        let rec = Recommendation {
            scores: ZoneMetric {
                obtainability: 0.8,
                uptime: 0.9,
            }
            .as_scores(),
            shards: Vec::new(),
        };
        assert_eq!(rec.obtainability(), 0.8);
        assert_eq!(rec.uptime(), 0.9);
    }
}
