use clap::{Parser, Subcommand};
use std::path::PathBuf;
use varsheet::cli;

#[derive(Parser)]
#[command(name = "varsheet")]
#[command(about = "Manage two-table variable workbooks: sample, parse, load, submit.")]
#[command(long_about = "Varsheet - variable-sheet workbook toolkit

Convert between xlsx workbooks and variable/value row tables.

COMMANDS:
  sample  - Generate the randomized demo workbook (Configuracion + Sistema)
  parse   - Parse an xlsx file and print its variable rows
  load    - Fetch an xlsx document over HTTP and print its rows
  submit  - Parse a workbook and POST its rows to an endpoint as JSON
  serve   - Run the HTTP API server

EXAMPLES:
  varsheet sample                                  # writes datos_ejemplo.xlsx
  varsheet parse datos.xlsx                        # print both sheets
  varsheet load http://localhost:3000/datos.xlsx   # fetch and parse
  varsheet submit datos.xlsx --endpoint https://httpbin.org/post
  varsheet serve --port 8080")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the randomized sample workbook
    Sample {
        /// Output path for the xlsx file
        #[arg(default_value = "datos_ejemplo.xlsx")]
        output: PathBuf,
    },

    /// Parse an xlsx file and print its variable rows
    Parse {
        /// Path to the xlsx file
        file: PathBuf,
    },

    /// Fetch an xlsx document over HTTP and print its rows
    Load {
        /// URL of the xlsx document
        url: String,
    },

    /// Parse a workbook and POST its rows to an endpoint as JSON
    Submit {
        /// Path to the xlsx file
        file: PathBuf,

        /// Endpoint to POST {sheet1, sheet2, timestamp} to
        #[arg(short, long)]
        endpoint: String,
    },

    /// Run the HTTP API server
    Serve {
        /// Host to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sample { output } => cli::sample(output)?,
        Commands::Parse { file } => cli::parse(file)?,
        Commands::Load { url } => cli::load(url).await?,
        Commands::Submit { file, endpoint } => cli::submit(file, endpoint).await?,
        Commands::Serve { host, port } => cli::serve(host, port).await?,
    }

    Ok(())
}
