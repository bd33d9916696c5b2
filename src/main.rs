//! sso-config CLI entry point.

use sso_config::cli::output::{output, ConfigOutput};
use sso_config::cli::Cli;
use sso_config::infrastructure::logging::{self, LogConfig};
use sso_config::ConfigLoader;

fn main() {
    let bootstrap = logging::bootstrap();

    let (cli, flag) = Cli::try_parse_with_flag(std::env::args_os()).unwrap_or_else(|err| err.exit());

    let mut config = ConfigLoader::must_load_with(&flag);
    if let Some(path) = cli.migrations_path {
        config = config.with_migrations_path(path);
    }

    drop(bootstrap);
    if let Err(err) = logging::init(&LogConfig::for_env(&config.env)) {
        eprintln!("warning: {err:#}");
    }

    let (path, source) = flag.resolve_from_env();
    tracing::info!(
        env = %config.env,
        grpc_port = config.grpc.port,
        ?source,
        "configuration loaded"
    );

    output(
        &ConfigOutput {
            config_path: path.display().to_string(),
            config: &config,
        },
        cli.json,
    );
}
