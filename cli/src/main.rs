use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use remote_shims_compiler::{dump_parsed_file, generate_shims, parse_file, ShimConfig, ShimError};

#[derive(Parser)]
#[command(name = "rshim")]
#[command(about = "Generate worker proxy shims from wasm-bindgen TypeScript declarations", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shims from a `.d.ts` file
    Generate {
        /// Input `.d.ts` file
        #[arg(short, long)]
        input: PathBuf,

        /// Output `.ts` file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON config overriding base class, dispatch names and builtin types
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the parsed declarations and the type registry as JSON
    Parse {
        /// Input `.d.ts` file
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the category each type resolves to within a `.d.ts` file
    Classify {
        /// Input `.d.ts` file
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Type names to classify; lists the whole registry when empty
        types: Vec<String>,
    },
}

fn load_config(path: Option<&Path>) -> Result<ShimConfig, ShimError> {
    match path {
        Some(p) => ShimConfig::load(p),
        None    => Ok(ShimConfig::default()),
    }
}

fn main() -> Result<(), ShimError> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match &cli.command {
        Commands::Generate { input, output, config } => {
            let config = load_config(config.as_deref())?;
            let text = fs::read_to_string(input)?;
            let (shims, report) = generate_shims(&text, &config);
            log::info!(
                "{}: {} classes, {} functions, {} methods, {} skipped, {} constructors, {} lines passed through",
                input.display(),
                report.classes,
                report.functions,
                report.methods,
                report.skipped,
                report.constructors,
                report.passthrough
            );
            if let Some(out_path) = output {
                fs::write(out_path, &shims)?;
                eprintln!("Generated {} → {}", input.display(), out_path.display());
            } else {
                print!("{}", shims);
            }
            Ok(())
        }

        Commands::Parse { input, config } => {
            let config = load_config(config.as_deref())?;
            let text = fs::read_to_string(input)?;
            let parsed = parse_file(&text, &config);
            println!("{}", dump_parsed_file(&parsed)?);
            Ok(())
        }

        Commands::Classify { input, config, types } => {
            let config = load_config(config.as_deref())?;
            let text = fs::read_to_string(input)?;
            let parsed = parse_file(&text, &config);
            if types.is_empty() {
                for (name, category) in parsed.registry.iter() {
                    println!("{}\t{}", name, category.tag());
                }
            } else {
                for name in types {
                    println!("{}\t{}", name, parsed.registry.category_of(name).tag());
                }
            }
            Ok(())
        }
    }
}
