use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use clap::Subcommand;
use js2sql::ddl::compile;
use std::time::Instant;

#[derive(clap::Parser)]
#[command(name = "js2sql")]
#[command(about = "Compile JSON Schema documents into SQL create table statements", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a create table statement from a JSON Schema file.
    Compile(CompileCommand),
}

#[derive(clap::Args)]
struct CompileCommand {
    /// Path to the JSON Schema file.
    #[arg(value_name = "SCHEMA_FILE")]
    schema: PathBuf,
    /// Table name used in the generated statement.
    #[arg(short, long, default_value = "test")]
    table: String,
    /// Output file path (defaults to stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let now = Instant::now();

    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Compile(compile_command) => {
            let data = std::fs::read(&compile_command.schema).map_err(|_| {
                anyhow!(
                    "Failed to read schema file {}",
                    compile_command.schema.display()
                )
            })?;
            let sql = compile(&data, &compile_command.table)?;
            match &compile_command.output {
                Some(output) => {
                    std::fs::write(output, format!("{}\n", sql))
                        .map_err(|_| anyhow!("Failed to write output file {}", output.display()))?
                }
                None => println!("{}", sql),
            }
        }
    }

    let elapsed = now.elapsed();
    log::info!("Elapsed: {:.2?}", elapsed);

    Ok(())
}
