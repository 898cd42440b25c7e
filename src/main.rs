use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use npm_deps::analyzer::DependencyAnalyzer;
use npm_deps::config::{self, AnalyzerConfig, ConfigError, DEFAULT_CONFIG_FILE};
use npm_deps::registries::NpmRegistry;
use npm_deps::{logging, report};

#[derive(Parser)]
#[command(name = "npm-deps")]
#[command(version, about = "List the direct dependencies of an npm package")]
struct Cli {
    /// Path to the JSON configuration file
    #[arg(default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Registry base URL (overrides `registry_url` in the configuration)
    #[arg(long, env = "NPM_DEPS_REGISTRY_URL")]
    registry_url: Option<String>,

    /// Request timeout in milliseconds (overrides `timeout_ms`)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to the data directory instead of stderr
    #[arg(long)]
    log_file: bool,

    /// Emit stderr logs as JSON lines
    #[arg(long, conflicts_with = "log_file")]
    log_json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let log_path = cli.log_file.then(config::log_path);
    let _guard = logging::init(cli.verbose, log_path.as_deref(), cli.log_json)?;

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(ConfigError::NotFound(path)) => {
            eprintln!("Error: configuration file '{}' not found", path.display());
            eprintln!("Create it with the following content:");
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&AnalyzerConfig::example())?
            );
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("{}", report::render_config(&config));

    let package_name = config.package_name.clone().unwrap_or_default();
    let registry = NpmRegistry::with_timeout(
        &config.registry_url,
        Duration::from_millis(config.timeout_ms),
    );
    let analyzer = DependencyAnalyzer::new(Arc::new(registry));

    if !package_name.is_empty() {
        println!("Analyzing dependencies of package: {}", package_name);
        println!("{}", "=".repeat(50));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match runtime.block_on(analyzer.analyze(&package_name)) {
        Ok(dependencies) => {
            print!("{}", report::render_dependencies(&package_name, &dependencies));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn load_config(cli: &Cli) -> Result<AnalyzerConfig, ConfigError> {
    let mut config = config::read(&cli.config)?;

    if let Some(registry_url) = &cli.registry_url {
        config.registry_url = registry_url.clone();
        config.mark_displayed("registry_url");
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
        config.mark_displayed("timeout_ms");
    }

    config.validate()?;
    Ok(config)
}
