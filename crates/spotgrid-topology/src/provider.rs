//! Region → zone topology table.
//!
//! Region and zone order are stable: lookups return zones exactly as
//! declared, because that order feeds the option numbering shown to
//! users and the tie-breaking in the advisor's ranking.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TopologyError, TopologyResult};

/// Built-in region table. Zone order within a region is part of the
/// contract, not an implementation detail.
const BUILTIN_REGIONS: &[(&str, &[&str])] = &[
    ("us-central1", &["us-central1-a", "us-central1-b", "us-central1-c", "us-central1-f"]),
    ("us-east1", &["us-east1-b", "us-east1-c", "us-east1-d"]),
    ("us-east4", &["us-east4-a", "us-east4-b", "us-east4-c"]),
    ("us-west1", &["us-west1-a", "us-west1-b", "us-west1-c"]),
    ("europe-west1", &["europe-west1-b", "europe-west1-c", "europe-west1-d"]),
    ("europe-west4", &["europe-west4-a", "europe-west4-b", "europe-west4-c"]),
    ("asia-east1", &["asia-east1-a", "asia-east1-b", "asia-east1-c"]),
    ("asia-southeast1", &["asia-southeast1-a", "asia-southeast1-b", "asia-southeast1-c"]),
    ("australia-southeast1", &["australia-southeast1-a", "australia-southeast1-b", "australia-southeast1-c"]),
    ("southamerica-east1", &["southamerica-east1-a", "southamerica-east1-b", "southamerica-east1-c"]),
];

/// One region and its ordered zone list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionZones {
    pub name: String,
    pub zones: Vec<String>,
}

/// TOML topology file shape:
///
/// ```toml
/// [[region]]
/// name = "on-prem-east"
/// zones = ["on-prem-east-1", "on-prem-east-2"]
/// ```
#[derive(Debug, Deserialize)]
struct TopologyFile {
    #[serde(default)]
    region: Vec<RegionZones>,
}

/// Ordered region → zone table.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    regions: Vec<RegionZones>,
}

impl Topology {
    /// The built-in table of well-known regions.
    pub fn builtin() -> Self {
        let regions = BUILTIN_REGIONS
            .iter()
            .map(|(name, zones)| RegionZones {
                name: name.to_string(),
                zones: zones.iter().map(|z| z.to_string()).collect(),
            })
            .collect();
        Topology { regions }
    }

    /// Built-in table overlaid with regions from a TOML file. File
    /// entries replace same-named built-in regions and append new ones.
    pub fn from_file(path: impl AsRef<Path>) -> TopologyResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let overrides = parse_regions(&content)?;
        debug!(
            path = %path.as_ref().display(),
            regions = overrides.len(),
            "loaded topology overrides"
        );
        Ok(Self::builtin().with_overrides(overrides))
    }

    /// Parse a standalone TOML document into a topology with no built-in
    /// regions.
    pub fn from_toml_str(content: &str) -> TopologyResult<Self> {
        Ok(Topology {
            regions: parse_regions(content)?,
        })
    }

    /// Overlay regions onto this table, replacing by name.
    pub fn with_overrides(mut self, overrides: Vec<RegionZones>) -> Self {
        for region in overrides {
            match self.regions.iter_mut().find(|r| r.name == region.name) {
                Some(existing) => *existing = region,
                None => self.regions.push(region),
            }
        }
        self
    }

    /// Ordered zone list for a region, if known.
    pub fn zones(&self, region: &str) -> Option<&[String]> {
        self.regions
            .iter()
            .find(|r| r.name == region)
            .map(|r| r.zones.as_slice())
    }

    /// Like [`Topology::zones`] but surfacing unknown regions as errors.
    pub fn require_zones(&self, region: &str) -> TopologyResult<&[String]> {
        self.zones(region)
            .ok_or_else(|| TopologyError::UnknownRegion(region.to_string()))
    }

    /// All regions in declaration order.
    pub fn regions(&self) -> impl Iterator<Item = &RegionZones> {
        self.regions.iter()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

fn parse_regions(content: &str) -> TopologyResult<Vec<RegionZones>> {
    let file: TopologyFile = toml::from_str(content)?;
    for region in &file.region {
        if region.zones.is_empty() {
            return Err(TopologyError::EmptyRegion(region.name.clone()));
        }
    }
    Ok(file.region)
}
