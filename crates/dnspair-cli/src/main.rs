// # dnspair - paired DNS record CLI
//
// Thin front end over dnspair-core: parses arguments, loads the TOML
// configuration, wires up gateways and the zone-ID cache, runs one engine
// operation, and renders the ordered report. No record logic lives here.
//
// ## Configuration
//
// A TOML file (default `dnspair.toml` in the working directory) declares
// zones, providers, and record defaults:
//
// ```toml
// [zone."example.com"]
// providers = ["cloudflare"]
//
// [zone."2.0.192.in-addr.arpa"]
// providers = ["cloudflare"]
//
// [provider.cloudflare]
// type = "cloudflare"
//
// [provider.cloudflare.api]
// email = "ops@example.com"
// key = "..."
// ```
//
// ## Example
//
// ```bash
// dnspair host -f host1.example.com -4 192.0.2.5 -6 2001:db8::1
// dnspair tenant -i crm-1042 -4 192.0.2.0/28 --target4 ptr.example.com
// ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use dnspair_core::{
    FileZoneCache, HostInput, OutcomeStatus, PairConfig, PairEngine, ProviderConfig,
    RecordGateway, Report, TenantInput, ZoneIdCache,
};
use dnspair_provider_cloudflare::CloudflareGateway;

/// Exit codes for the different termination scenarios
///
/// - 0: all records submitted successfully
/// - 1: configuration or synthesis/routing error, nothing submitted
/// - 2: batch dispatched, but one or more records failed
#[derive(Debug, Clone, Copy)]
enum CliExitCode {
    Success = 0,
    ConfigError = 1,
    RecordFailure = 2,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

#[derive(Parser)]
#[command(name = "dnspair")]
#[command(version)]
#[command(about = "Create paired forward and reverse DNS records from one command")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long, value_name = "FILE", default_value = "dnspair.toml", global = true)]
    config: PathBuf,

    /// Zone-ID cache file (defaults to the system temp directory)
    #[arg(long, value_name = "FILE", global = true)]
    cache: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add forward A/AAAA and reverse PTR records for one host
    Host {
        /// Fully qualified hostname
        #[arg(short = 'f', long)]
        fqdn: String,

        /// IPv4 address
        #[arg(short = '4', long = "ipv4-address", value_name = "ADDR")]
        ipv4: Option<String>,

        /// IPv6 address
        #[arg(short = '6', long = "ipv6-address", value_name = "ADDR")]
        ipv6: Option<String>,
    },

    /// Bulk-add PTR records for a tenant prefix assignment
    Tenant {
        /// Tenant identifier prepended to the IPv4 PTR target
        #[arg(short = 'i', long = "tenant-id")]
        tenant_id: Option<String>,

        /// IPv4 prefix assignment (finer than /24)
        #[arg(short = '4', long = "ipv4-prefix", value_name = "PREFIX")]
        prefix4: Option<String>,

        /// IPv6 prefix assignment (nibble-aligned /32../56, or /128)
        #[arg(short = '6', long = "ipv6-prefix", value_name = "PREFIX")]
        prefix6: Option<String>,

        /// PTR target hostname for the IPv4 block
        #[arg(long = "target4", value_name = "FQDN")]
        target4: Option<String>,

        /// PTR target hostname for the IPv6 block
        #[arg(long = "target6", value_name = "FQDN")]
        target6: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        other => {
            eprintln!("Invalid log level: {}", other);
            return CliExitCode::ConfigError.into();
        }
    };
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return CliExitCode::ConfigError.into();
    }

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {}", e);
            return CliExitCode::ConfigError.into();
        }
    };

    match rt.block_on(run(cli)) {
        Ok(report) => {
            render_report(&report);
            if report.is_all_success() {
                CliExitCode::Success.into()
            } else {
                CliExitCode::RecordFailure.into()
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            CliExitCode::ConfigError.into()
        }
    }
}

async fn run(cli: Cli) -> Result<Report> {
    let config = load_config(&cli.config)?;

    let cache_path = cli.cache.unwrap_or_else(default_cache_path);
    let cache: Arc<dyn ZoneIdCache> = Arc::new(
        FileZoneCache::new(&cache_path)
            .await
            .with_context(|| format!("Failed to open zone cache {}", cache_path.display()))?,
    );

    let gateways = build_gateways(&config, &cache)?;
    let engine = PairEngine::new(config, gateways)?;

    let report = match cli.command {
        Command::Host { fqdn, ipv4, ipv6 } => {
            engine.add_host(&HostInput { fqdn, ipv4, ipv6 }).await?
        }
        Command::Tenant {
            tenant_id,
            prefix4,
            prefix6,
            target4,
            target6,
        } => {
            engine
                .tenant_reverse(&TenantInput {
                    tenant_id,
                    prefix4,
                    prefix6,
                    target4,
                    target6,
                })
                .await?
        }
    };

    Ok(report)
}

/// Load and parse the TOML configuration file
fn load_config(path: &Path) -> Result<PairConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Config file {} not found or unreadable", path.display()))?;
    let config: PairConfig = toml::from_str(&content)
        .with_context(|| format!("Config file {} is not valid TOML", path.display()))?;
    Ok(config)
}

/// Build one gateway per configured provider
///
/// Dispatch over the closed provider set happens here: a new provider
/// variant gets a new match arm and a new gateway crate.
fn build_gateways(
    config: &PairConfig,
    cache: &Arc<dyn ZoneIdCache>,
) -> Result<BTreeMap<String, Arc<dyn RecordGateway>>> {
    let mut gateways: BTreeMap<String, Arc<dyn RecordGateway>> = BTreeMap::new();
    for (name, provider) in &config.provider {
        let gateway: Arc<dyn RecordGateway> = match provider {
            ProviderConfig::Cloudflare { api } => {
                Arc::new(CloudflareGateway::new(api, cache.clone())
                    .with_context(|| format!("Failed to initialize provider {}", name))?)
            }
        };
        gateways.insert(name.clone(), gateway);
    }
    Ok(gateways)
}

fn default_cache_path() -> PathBuf {
    std::env::temp_dir().join("dnspair-zones.json")
}

/// Render the ordered report, one line per record, errors indented
fn render_report(report: &Report) {
    if report.is_empty() {
        println!("No records were added");
        return;
    }

    for result in report {
        match result.status {
            OutcomeStatus::Success => {
                println!(
                    "Added {} record for {} pointing to {} via {}",
                    result.record_type, result.record_name, result.record_target, result.provider
                );
            }
            OutcomeStatus::Failure => {
                println!(
                    "Failed {} record for {} pointing to {} via {}",
                    result.record_type, result.record_name, result.record_target, result.provider
                );
                for error in &result.errors {
                    println!("    {}", error);
                }
            }
        }
    }

    println!(
        "{} record(s) succeeded, {} failed",
        report.succeeded(),
        report.failed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CONFIG: &str = r#"
        [zone."example.com"]
        providers = ["cloudflare"]

        [zone."2.0.192.in-addr.arpa"]
        providers = ["cloudflare"]

        [provider.cloudflare]
        type = "cloudflare"

        [provider.cloudflare.api]
        email = "ops@example.com"
        key = "test-key"
    "#;

    #[test]
    fn sample_config_parses_and_validates() {
        let config: PairConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.zone.len(), 2);
        assert_eq!(config.provider.len(), 1);
        assert_eq!(config.defaults.ttl, 1);
        assert!(config.validate().is_ok());

        match &config.provider["cloudflare"] {
            ProviderConfig::Cloudflare { api } => {
                assert_eq!(api.email, "ops@example.com");
                assert!(api.baseurl.starts_with("https://api.cloudflare.com"));
            }
        }
    }

    #[test]
    fn load_config_reports_missing_file_with_path() {
        let err = load_config(Path::new("/nonexistent/dnspair.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/dnspair.toml"));
    }

    #[test]
    fn gateways_are_built_for_every_provider() {
        let config: PairConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        let cache: Arc<dyn ZoneIdCache> = Arc::new(dnspair_core::MemoryZoneCache::new());
        let gateways = build_gateways(&config, &cache).unwrap();
        assert_eq!(gateways.len(), 1);
        assert!(gateways.contains_key("cloudflare"));
    }
}
