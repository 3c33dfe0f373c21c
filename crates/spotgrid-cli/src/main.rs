use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "spotgrid",
    about = "SpotGrid — SPOT capacity obtainability advisor",
    version,
    propagate_version = true,
)]
struct Cli {
    /// Topology override file (TOML). Defaults to the built-in region table.
    #[arg(long, global = true)]
    topology: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score SPOT capacity for a machine type in a region.
    ///
    /// Compare mode (any / single-zone) ranks every zone of the region;
    /// balanced mode splits the request evenly across all zones.
    Advise {
        /// Region to score (e.g. us-central1)
        #[arg(short, long)]
        region: String,
        /// Machine type (e.g. e2-medium, a2-highgpu-1g)
        #[arg(short, long)]
        machine_type: String,
        /// Number of instances requested
        #[arg(short, long, default_value_t = 1)]
        count: u32,
        /// Distribution strategy: any, single-zone, or balanced
        #[arg(short, long, default_value = "any")]
        strategy: String,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// List known regions and their zones
    Regions {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// List known machine types
    Shapes {
        /// Filter by family: general, compute, memory, accelerator, storage
        #[arg(long)]
        family: Option<String>,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Serve the REST API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spotgrid=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let topology = commands::load_topology(cli.topology.as_deref())?;

    match cli.command {
        Commands::Advise {
            region,
            machine_type,
            count,
            strategy,
            format,
        } => commands::advise::run(&topology, &region, &machine_type, count, &strategy, &format),
        Commands::Regions { format } => commands::list::regions(&topology, &format),
        Commands::Shapes { family, format } => commands::list::shapes(family.as_deref(), &format),
        Commands::Serve { addr } => commands::serve::run(topology, &addr).await,
    }
}
