use spotgrid_advisor::ResourceFamily;
use spotgrid_catalog::MachineShape;
use spotgrid_topology::Topology;

pub fn regions(topology: &Topology, format: &str) -> anyhow::Result<()> {
    match format {
        "json" => {
            let regions: Vec<_> = topology.regions().collect();
            println!("{}", serde_json::to_string_pretty(&regions)?);
        }
        _ => {
            for region in topology.regions() {
                println!("{:<24} {} zones: {}", region.name, region.zones.len(), region.zones.join(", "));
            }
        }
    }
    Ok(())
}

pub fn shapes(family: Option<&str>, format: &str) -> anyhow::Result<()> {
    let shapes: Vec<&MachineShape> = match family {
        Some(f) => spotgrid_catalog::by_family(parse_family(f)?).collect(),
        None => spotgrid_catalog::all().iter().collect(),
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&shapes)?),
        _ => {
            for shape in shapes {
                println!(
                    "{:<18} {:>4} vCPU {:>8.1} GB  {}",
                    shape.name, shape.vcpus, shape.memory_gb, shape.description
                );
            }
        }
    }
    Ok(())
}

fn parse_family(s: &str) -> anyhow::Result<ResourceFamily> {
    match s.to_ascii_lowercase().as_str() {
        "general" | "general-purpose" => Ok(ResourceFamily::GeneralPurpose),
        "compute" => Ok(ResourceFamily::ComputeOptimized),
        "memory" => Ok(ResourceFamily::MemoryOptimized),
        "accelerator" | "gpu" => Ok(ResourceFamily::AcceleratorOptimized),
        "storage" => Ok(ResourceFamily::StorageOptimized),
        other => anyhow::bail!("unknown family: {other}"),
    }
}
