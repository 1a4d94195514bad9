mod cli;
mod cli_help;

use clap::Parser;
use codebench::benchmark::{self, BenchmarkRequest, RunOptions};
use codebench::config::{Config, print_languages};
use codebench::score::{self, RunSource};

use cli::{Cli, Commands, GlobalArgs};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    if let Err(err) = dispatch(&cli.global, cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn load_config(global: &GlobalArgs) -> codebench::Result<Config> {
    let mut config = Config::load(global.config.as_deref())?;
    if let Some(dir) = &global.datasets {
        config.dataset_dir = dir.clone();
    }
    Ok(config)
}

fn dispatch(global: &GlobalArgs, command: Commands) -> codebench::Result<()> {
    let config = load_config(global)?;

    match command {
        Commands::Benchmark {
            language,
            uloc,
            topics,
            no_core,
            show_cases,
            save,
            safe_default,
            json,
        } => {
            let request = BenchmarkRequest {
                uloc,
                language,
                topics,
                is_core: !no_core,
            };
            let opts = RunOptions {
                json,
                show_cases,
                save: save.as_deref(),
                safe_default,
            };
            benchmark::run(config, &request, &opts)
        }
        Commands::Score {
            language,
            measurement,
            topics,
            run,
            safe_default,
            json,
        } => {
            let source = match &run {
                Some(path) => RunSource::Saved {
                    path,
                    language: &language,
                },
                None => RunSource::Generate {
                    language: &language,
                    topics: &topics,
                    safe_default,
                },
            };
            score::run(config, &measurement, source, json)
        }
        Commands::Languages { json } => print_languages(&config, json),
    }
}
