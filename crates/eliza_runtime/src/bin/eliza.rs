//! ELIZA CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use eliza_runtime::{Repl, SessionConfig};
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    script: Option<PathBuf>,
    seed: Option<u64>,
    no_banner: bool,
    dump_script: bool,
    show_help: bool,
    show_version: bool,
    verbose: u8,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--no-banner" => config.no_banner = true,
            "--dump-script" => config.dump_script = true,
            "-v" | "--verbose" => config.verbose = config.verbose.saturating_add(1),
            "-vv" => config.verbose = config.verbose.saturating_add(2),
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    return Err("--seed requires a value".into());
                }
                config.seed = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {}", args[i]))?,
                );
            }
            "-s" | "--script" => {
                i += 1;
                if i >= args.len() {
                    return Err("--script requires a path".into());
                }
                config.script = Some(PathBuf::from(&args[i]));
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("eliza {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(cli.verbose);

    let mut config = SessionConfig::default().with_banner(!cli.no_banner);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(script) = cli.script {
        config = config.with_script_path(script);
    }

    if cli.dump_script {
        println!("{}", config.load_script()?.to_json_pretty()?);
        return Ok(());
    }

    let mut repl = Repl::new(config)?;
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mELIZA\x1b[0m - Pattern-matching Rogerian therapist

\x1b[1mUSAGE:\x1b[0m
    eliza [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -s, --script PATH    Use a JSON script instead of the built-in DOCTOR script
    --seed N             Seed response selection (reproducible sessions)
    --no-banner          Skip the welcome banner
    --dump-script        Print the active script as JSON and exit
    -v, --verbose        More logging on stderr (repeat for debug/trace)

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG             Log filter when no -v flag is given (default: warn)

\x1b[1mEXAMPLES:\x1b[0m
    eliza                            Start a session
    eliza --seed 42                  Start a reproducible session
    eliza --dump-script > my.json    Export DOCTOR for editing
    eliza -s my.json -v              Talk using an edited script

\x1b[1mIN SESSION:\x1b[0m
    quit                 Say goodbye and exit
    Ctrl+D               Exit
    Ctrl+C               Cancel current input"
    );
}
