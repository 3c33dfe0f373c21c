use std::sync::Arc;

use tracing::info;

use spotgrid_api::{ApiState, build_router};
use spotgrid_topology::Topology;

pub async fn run(topology: Topology, addr: &str) -> anyhow::Result<()> {
    let state = ApiState {
        topology: Arc::new(topology),
    };
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "spotgrid API listening");
    axum::serve(listener, router).await?;
    Ok(())
}
