use clap::Parser;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;

use mixer::cli::{Cli, Commands};
use mixer::config::{StaticConfig, get_config, init_config};
use mixer::system::init_logging;
use mixer::{AssetOptions, Mix, TagRegistry};

fn main() {
    if let Err(e) = run() {
        match e.downcast_ref::<mixer::MixError>() {
            Some(mix_error) => eprintln!("{}", mix_error.format_colored()),
            None => eprintln!("[ERROR] {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Config => print!("{}", StaticConfig::generate_sample_config()),
        Commands::Resolve { paths } => {
            let (mix, _guard) = load_mix(cli.config.as_deref())?;
            for path in paths {
                match mix.resolve(&path) {
                    Some(resolved) => println!("{}", resolved),
                    None => println!("<unresolved>"),
                }
            }
        }
        Commands::Render { paths, defer } => {
            let (mix, _guard) = load_mix(cli.config.as_deref())?;
            let mut registry = TagRegistry::new();
            let options = AssetOptions::default();
            for path in &paths {
                if defer {
                    mix.defer(path, &options, &mut registry);
                } else {
                    mix.mix(path, &options, &mut registry);
                }
            }
            for html in [registry.render_head(), registry.render_body()] {
                if !html.is_empty() {
                    println!("{}", html);
                }
            }
        }
    }

    Ok(())
}

/// Load configuration, start logging and build the resolver. The guard
/// must outlive all logging.
fn load_mix(config_path: Option<&str>) -> anyhow::Result<(Mix, WorkerGuard)> {
    init_config(config_path);
    let config = get_config();
    let guard = init_logging(&config.logging)?;
    let mix = Mix::from_config(&config)?;
    debug!("Hot mode: {}", mix.is_hot());
    Ok((mix, guard))
}
