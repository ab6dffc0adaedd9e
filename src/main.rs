use std::env;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};
use wallet_app_config::config::{AppConfig, BuildEnv, ConfigError, OutputFormat, render};
use wallet_app_config::provider::ProviderSelector;

fn parse_arg(name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    env::args()
        .skip(1)
        .find_map(|arg| arg.strip_prefix(&prefix).map(str::to_string))
}

fn has_flag(name: &str) -> bool {
    env::args().skip(1).any(|arg| arg == name)
}

fn init_tracing(log_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level.unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the rendered config
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let build_env = match parse_arg("--env-file") {
        Some(path) => BuildEnv::from_env_file(&path)?,
        None => BuildEnv::from_process_env(),
    };

    info!(
        is_chrome_extension = build_env.is_chrome_extension,
        "Building wallet config"
    );

    AppConfig::load(&build_env)
}

fn main() -> ExitCode {
    init_tracing(parse_arg("--log-level").as_deref());

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to build config");
            return ExitCode::FAILURE;
        }
    };

    if has_flag("--resolve-provider") {
        let selected = ProviderSelector::new(&config.apollo)
            .and_then(|selector| selector.select(&mut rand::thread_rng()));
        return match selected {
            Ok(selected) => {
                info!(index = selected.index, "Provider resolved");
                println!("{}", selected.provider.http);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(error = %e, "Failed to resolve provider");
                ExitCode::FAILURE
            }
        };
    }

    let format = match parse_arg("--format").map(|f| f.parse::<OutputFormat>()) {
        Some(Ok(format)) => format,
        Some(Err(e)) => {
            error!(error = %e, "Invalid --format");
            return ExitCode::FAILURE;
        }
        None => OutputFormat::default(),
    };

    match render(&config, format) {
        Ok(rendered) => {
            println!("{}", rendered);
            info!(
                %format,
                use_pwa = config.use_pwa,
                output_dir = %config.build.output_dir,
                "Config exported"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to export config");
            ExitCode::FAILURE
        }
    }
}
