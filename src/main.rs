use clap::Parser;
use env_logger::{Builder, Env};
use quadtile::cli::{Cli, run};

fn init_logger(log_level: Option<&str>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = log_level {
        builder.parse_filters(level);
    }
    builder.format_timestamp_millis().init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_logger(config.log_level.as_deref());

    let failed = run(&cli.command, &config, std::io::stdout().lock())?;
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
