use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use tracing::debug;

use jsonlang::{
    diagnostics::Result, runtime::DEFAULT_MAX_CALL_DEPTH, Backend, BackendConfig, Interpreter,
    InterpreterConfig, Value,
};

#[derive(Parser)]
#[command(author, version, about = "Interpreter for JSON-encoded programs")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend descriptor mapping operation names to implementations
    #[arg(long, global = true, env = "JSONLANG_STDLIB", default_value = "stdlib.json")]
    stdlib: PathBuf,

    /// Maximum nesting of user-function calls
    #[arg(long, global = true, env = "JSONLANG_MAX_CALL_DEPTH", default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Enable verbose logging (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run a program file and print the value `main` produced
    Run { program: PathBuf },
    /// Call one backend operation with the given arguments
    Test {
        operation: String,
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Show the backend and the operations it provides
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let backend = Backend::from_config(&BackendConfig {
        descriptor: Some(cli.stdlib),
    });
    match cli.command {
        Command::Run { program } => {
            let config = InterpreterConfig {
                max_call_depth: cli.max_call_depth,
            };
            let mut interpreter = Interpreter::with_config(backend, config);
            let result = interpreter.run_path(&program)?;
            println!("result: {result}");
        }
        Command::Test { operation, args } => {
            let args: Vec<Value> = args.iter().map(|arg| coerce_argument(arg)).collect();
            debug!(operation = %operation, "testing backend operation");
            let result = backend.execute(&operation, &args);
            println!("function: {operation}");
            println!("args: {args:?}");
            println!("result: {result}");
        }
        Command::List => {
            println!("{} backend v{}", backend.name(), backend.version());
            println!("operations:");
            let mut names: Vec<&str> = backend.operation_names().collect();
            names.sort_unstable();
            for name in names {
                println!("  - {name}");
            }
        }
    }
    Ok(())
}

/// Command-line arguments are numbers when they parse as one.
fn coerce_argument(arg: &str) -> Value {
    match arg.parse::<f64>() {
        Ok(number) => Value::number(number),
        Err(_) => Value::string(arg),
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            EnvFilter::new(match verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            })
        }
    });

    let formatter = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter)
        .init();
}
