use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use muster_engine::{content_end_time, evaluate, load_ground_state};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct CliOptions {
    scenario_path: PathBuf,
    /// Query times in seconds. Empty means "evaluate at the content end".
    times: Vec<f32>,
    pretty: bool,
}

fn main() -> ExitCode {
    init_tracing();
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::from(1)
        }
    }
}

fn run_cli() -> Result<(), String> {
    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        return Err(usage_text());
    }
    if args[0] == "-h" || args[0] == "--help" {
        println!("{}", usage_text());
        return Ok(());
    }

    let options = parse_args(&args)?;
    let state = load_ground_state(&options.scenario_path).map_err(|error| error.to_string())?;

    let times = if options.times.is_empty() {
        vec![content_end_time(&state.animation)]
    } else {
        options.times
    };

    for t in times {
        let t = t.max(0.0);
        info!(time = t, "evaluating scenario");
        let result = evaluate(&state, t);
        let rendered = if options.pretty {
            serde_json::to_string_pretty(&result)
        } else {
            serde_json::to_string(&result)
        }
        .map_err(|error| format!("failed to render result: {error}"))?;
        println!("{rendered}");
    }
    Ok(())
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut scenario_path: Option<PathBuf> = None;
    let mut times = Vec::new();
    let mut pretty = false;

    let mut index = 0usize;
    while index < args.len() {
        match args[index].as_str() {
            "--time" => {
                let value = args
                    .get(index + 1)
                    .ok_or_else(|| "missing value for --time".to_string())?;
                let t = value
                    .parse::<f32>()
                    .map_err(|_| format!("invalid --time value '{value}' (expected seconds)"))?;
                if !t.is_finite() {
                    return Err(format!("invalid --time value '{value}' (must be finite)"));
                }
                times.push(t);
                index += 2;
            }
            "--pretty" => {
                pretty = true;
                index += 1;
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option '{other}'\n{}", usage_text()));
            }
            path => {
                if scenario_path.is_some() {
                    return Err(format!("unexpected extra argument '{path}'"));
                }
                scenario_path = Some(PathBuf::from(path));
                index += 1;
            }
        }
    }

    let scenario_path = scenario_path.ok_or_else(|| format!("missing scenario path\n{}", usage_text()))?;
    Ok(CliOptions {
        scenario_path,
        times,
        pretty,
    })
}

fn usage_text() -> String {
    [
        "usage: muster_cli <scenario.json> [--time SECONDS]... [--pretty]",
        "",
        "Evaluates a scenario's timeline and prints the resulting snapshot",
        "as JSON, one line per query time. With no --time, evaluates at the",
        "end of the authored content.",
    ]
    .join("\n")
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
