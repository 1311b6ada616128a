use std::{path::PathBuf, thread};

use clap::{Parser, Subcommand};
use search_visualiser_core::{
    generate_optional, parse_array, parse_target, random_array, random_target, AlgorithmCategory,
    AlgorithmRegistry, AppConfig, ManualClock, PlaybackController, Value, VisualiserError,
};
use tracing_subscriber::EnvFilter;

mod render;

fn main() -> search_visualiser_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Trace { data, json } => run_trace(&config, &data, json),
        Commands::Play {
            data,
            random,
            speed,
        } => run_play(&config, &data, random, speed),
        Commands::Algorithms { category } => run_algorithms(category.as_deref()),
    }
}

fn run_trace(config: &AppConfig, data: &DataArgs, json: bool) -> search_visualiser_core::Result<()> {
    let (array, target) = resolve_data(config, data)?;
    tracing::info!(len = array.len(), ?target, "generating trace");

    let steps = generate_optional(&array, target);
    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
    } else {
        for step in &steps {
            println!("{}", render::describe_step(step, target));
        }
        let mut ctrl: PlaybackController = PlaybackController::default();
        ctrl.set_data(array, target);
        ctrl.seek(ctrl.total_steps());
        println!("{}", render::outcome_line(&ctrl.view()));
    }
    Ok(())
}

fn run_play(
    config: &AppConfig,
    data: &DataArgs,
    random: bool,
    speed: Option<u64>,
) -> search_visualiser_core::Result<()> {
    let (array, target) = if random {
        let mut rng = rand::thread_rng();
        let array = random_array(&mut rng, config.input.random_len, config.input.random_max);
        let target = random_target(&mut rng, &array);
        (array, target)
    } else {
        resolve_data(config, data)?
    };

    let speed_ms = speed.unwrap_or(config.playback.speed_ms);
    if speed_ms == 0 {
        return Err(VisualiserError::invalid("--speed must be positive"));
    }
    tracing::info!(len = array.len(), ?target, speed_ms, "starting playback");

    let values = array.clone();
    let mut ctrl = PlaybackController::new(ManualClock::new()).with_speed(speed_ms);
    ctrl.subscribe(move |view| println!("{}", render::frame(view, &values)));
    ctrl.set_data(array, target);
    ctrl.play();

    while let Some(wait) = ctrl.time_to_next_tick() {
        thread::sleep(wait);
        ctrl.advance_clock(wait);
    }

    println!("{}", render::outcome_line(&ctrl.view()));
    Ok(())
}

fn run_algorithms(category: Option<&str>) -> search_visualiser_core::Result<()> {
    let registry = AlgorithmRegistry::default();
    let listed: Vec<_> = match category {
        Some(name) => {
            let category = AlgorithmCategory::parse(name)
                .ok_or_else(|| VisualiserError::invalid(format!("unknown category `{name}`")))?;
            registry.by_category(category)
        }
        None => registry.iter().collect(),
    };

    for algorithm in listed {
        println!("{}", render::algorithm_line(algorithm));
    }
    Ok(())
}

fn resolve_data(
    config: &AppConfig,
    data: &DataArgs,
) -> search_visualiser_core::Result<(Vec<Value>, Option<Value>)> {
    let array = match &data.array {
        Some(text) => parse_array(text, config.input.max_len)?,
        None => config.initial.array.clone(),
    };
    let target = match &data.target {
        Some(text) => Some(parse_target(text)?),
        None => config.initial.target,
    };
    Ok((array, target))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Step-by-step linear search visualiser", long_about = None)]
struct Cli {
    /// JSON configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct DataArgs {
    /// Array to search, e.g. "23, 45, 12".
    #[arg(short, long)]
    array: Option<String>,
    /// Value to look for.
    #[arg(short, long, allow_hyphen_values = true)]
    target: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every step of the search at once.
    Trace {
        #[command(flatten)]
        data: DataArgs,
        /// Emit the trace as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Animate the search in the terminal.
    Play {
        #[command(flatten)]
        data: DataArgs,
        /// Search a freshly generated random array instead.
        #[arg(short, long, conflicts_with_all = ["array", "target"])]
        random: bool,
        /// Milliseconds between steps.
        #[arg(short, long)]
        speed: Option<u64>,
    },
    /// List the algorithms that can be visualised.
    Algorithms {
        /// Only show one category (search, sort, graph, tree, other).
        #[arg(long)]
        category: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_initial_data() {
        let cli = Cli::parse_from(["search-visualiser", "trace", "-a", "1 2 3", "-t", "-2"]);
        let Commands::Trace { data, .. } = cli.command else {
            panic!("expected trace command");
        };

        let (array, target) = resolve_data(&AppConfig::default(), &data).unwrap();
        assert_eq!(array, vec![1, 2, 3]);
        assert_eq!(target, Some(-2));
    }

    #[test]
    fn falls_back_to_configured_data() {
        let data = DataArgs {
            array: None,
            target: None,
        };

        let (array, target) = resolve_data(&AppConfig::default(), &data).unwrap();
        assert_eq!(array.len(), 9);
        assert_eq!(target, Some(34));
    }
}
