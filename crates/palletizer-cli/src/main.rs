use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use palletizer::units::{grams_to_pounds, inches_to_mm, mm_to_inches, pounds_to_grams};
use palletizer::{CallContext, ClientConfig, PackingConstraints, PackingRequest, PalletizerClient};
use tracing::{info, warn};

/// Command-line client for the Palletizer packing API.
///
/// `PALLETIZER_API_URL` and `PALLETIZER_TIMEOUT_SECS` set the defaults that
/// `--endpoint` and `--timeout-secs` override.
#[derive(Debug, Parser)]
#[command(name = "palletizer", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Send a packing request and print the response JSON.
    Pack(PackArgs),
    /// Print the standard pallet presets.
    Presets,
    /// Convert a value between imperial and wire units.
    Convert {
        value: f64,
        #[arg(value_enum)]
        conversion: Conversion,
    },
}

#[derive(Debug, clap::Args)]
struct PackArgs {
    /// Request JSON file; stdin when omitted or "-".
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// API base URL.
    #[arg(long)]
    endpoint: Option<String>,

    /// Whole-request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Replace the request's support percentage (0-100).
    #[arg(long)]
    support_percentage: Option<f64>,

    /// Replace the request's constraints with a standard pallet.
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Pretty-print the response.
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// 40 x 72 x 48 in, 1500 lb
    Standard,
    /// 40 x 48 x 48 in, 1500 lb
    #[value(name = "40x48")]
    Pallet4048,
}

impl Preset {
    fn constraints(self) -> PackingConstraints {
        match self {
            Self::Standard => PackingConstraints::standard_pallet(),
            Self::Pallet4048 => PackingConstraints::standard_pallet_40x48(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Conversion {
    InToMm,
    MmToIn,
    LbToG,
    GToLb,
}

impl Conversion {
    fn apply(self, value: f64) -> f64 {
        match self {
            Self::InToMm => inches_to_mm(value),
            Self::MmToIn => mm_to_inches(value),
            Self::LbToG => pounds_to_grams(value),
            Self::GToLb => grams_to_pounds(value),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Pack(args) => run_pack(args).await,
        Command::Presets => {
            let presets = serde_json::json!({
                "standard": PackingConstraints::standard_pallet(),
                "40x48": PackingConstraints::standard_pallet_40x48(),
            });
            println!("{}", serde_json::to_string_pretty(&presets)?);
            Ok(())
        }
        Command::Convert { value, conversion } => {
            println!("{}", conversion.apply(value));
            Ok(())
        }
    }
}

async fn run_pack(args: PackArgs) -> Result<()> {
    let env_config = ClientConfig::from_env().context("Invalid environment configuration")?;
    let config = apply_flags(env_config, &args)?;
    let request = load_request(args.input.as_deref())
        .and_then(|r| apply_overrides(r, &args))?;

    let client = PalletizerClient::from_config(&config).context("Failed to build API client")?;
    info!(
        endpoint = %client.base_url(),
        carton_types = request.cartons.len(),
        cartons = request.total_quantity(),
        "Submitting packing request"
    );

    let ctx = CallContext::new();
    let token = ctx.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling request");
            token.cancel();
        }
    });

    let response = client
        .pack(&ctx, &request)
        .await
        .context("Packing request failed")?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{rendered}");

    info!(
        pallets = response.summary.total_pallets,
        packed = response.summary.total_cartons_packed,
        placed = response.placed_carton_count(),
        utilization = response.summary.average_utilization,
        computation_ms = response.summary.computation_time_ms,
        "Packing complete"
    );

    if let Some(err) = response.soft_error() {
        bail!("Service reported an error: {err}");
    }
    Ok(())
}

/// Layer command-line flags over a base configuration.
fn apply_flags(mut config: ClientConfig, args: &PackArgs) -> Result<ClientConfig> {
    if let Some(ref endpoint) = args.endpoint {
        config = config.with_base_url(endpoint.clone());
    }
    if let Some(secs) = args.timeout_secs {
        if secs == 0 {
            bail!("--timeout-secs must be greater than zero");
        }
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

fn load_request(input: Option<&Path>) -> Result<PackingRequest> {
    let raw = match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("Request is not a valid packing request")
}

fn apply_overrides(mut request: PackingRequest, args: &PackArgs) -> Result<PackingRequest> {
    if let Some(pct) = args.support_percentage {
        if !(0.0..=100.0).contains(&pct) {
            bail!("--support-percentage must be within 0-100, got {pct}");
        }
        request.packing_options.support_percentage = pct;
    }
    if let Some(preset) = args.preset {
        request.packing_constraints = preset.constraints();
    }
    Ok(request)
}
