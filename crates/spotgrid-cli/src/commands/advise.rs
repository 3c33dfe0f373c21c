use spotgrid_advisor::{AdviceRequest, CapacityAdvisorResponse, DistributionStrategy};
use spotgrid_topology::Topology;

pub fn run(
    topology: &Topology,
    region: &str,
    machine_type: &str,
    count: u32,
    strategy: &str,
    format: &str,
) -> anyhow::Result<()> {
    let strategy: DistributionStrategy = strategy.parse()?;
    let zones = topology.require_zones(region)?;

    let request = AdviceRequest {
        region: region.to_string(),
        machine_type: machine_type.to_string(),
        total_count: count,
        strategy,
    };
    let response = spotgrid_advisor::advise(&request, zones)?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&response)?),
        _ => render_text(&response, region, machine_type, count),
    }
    Ok(())
}

fn render_text(response: &CapacityAdvisorResponse, region: &str, machine_type: &str, count: u32) {
    println!("{count} × {machine_type} (SPOT) in {region}:");
    for (idx, rec) in response.recommendations.iter().enumerate() {
        println!(
            "Option {}: obtainability {:5.1}%  uptime {:5.1}%",
            idx + 1,
            rec.obtainability() * 100.0,
            rec.uptime() * 100.0,
        );
        for shard in &rec.shards {
            println!("    {:>4} × {} in {}", shard.count, shard.machine_type, shard.location);
        }
    }
}
