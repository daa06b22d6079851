use crate::api::server::{run_api_server, ApiConfig};
use crate::error::VarsheetResult;
use crate::excel;
use crate::loader;
use crate::submit as submission;
use crate::types::{VariableRow, WorkbookData};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// Execute the sample command: generate the demo workbook and save it.
pub fn sample(output: PathBuf) -> VarsheetResult<()> {
    println!("{}", "📊 Varsheet - Generating sample workbook".bold().green());
    println!("   Output: {}", output.display());
    println!();

    excel::write_sample(&output)?;

    println!(
        "{}",
        "✅ Sample workbook written (Configuracion + Sistema, 5 variables each)".green()
    );
    Ok(())
}

/// Execute the parse command: read an xlsx file and print its variable rows.
pub fn parse(file: PathBuf) -> VarsheetResult<()> {
    println!("{}", "📊 Varsheet - Parsing workbook".bold().green());
    println!("   File: {}", file.display());
    println!();

    let bytes = fs::read(&file)?;
    let workbook = excel::parse_workbook(&bytes)?;

    print_workbook(&workbook);
    Ok(())
}

/// Execute the load command: fetch a workbook over HTTP and print its rows.
pub async fn load(url: String) -> VarsheetResult<()> {
    println!("{}", "📊 Varsheet - Loading workbook".bold().green());
    println!("   URL: {}", url);
    println!();

    let workbook = loader::load_from(&url).await?;

    print_workbook(&workbook);
    Ok(())
}

/// Execute the submit command: parse a workbook file and POST its rows.
pub async fn submit(file: PathBuf, endpoint: String) -> VarsheetResult<()> {
    println!("{}", "📊 Varsheet - Submitting variables".bold().green());
    println!("   File: {}", file.display());
    println!("   Endpoint: {}", endpoint);
    println!();

    let bytes = fs::read(&file)?;
    let workbook = excel::parse_workbook(&bytes)?;

    let receipt = submission::submit(&endpoint, &workbook.sheet1, &workbook.sheet2).await?;

    println!(
        "{}",
        format!(
            "✅ Submitted {} variables (HTTP {})",
            workbook.total_variables(),
            receipt.status
        )
        .green()
    );
    Ok(())
}

/// Execute the serve command: run the API server until shutdown.
pub async fn serve(host: String, port: u16) -> anyhow::Result<()> {
    run_api_server(ApiConfig { host, port }).await
}

/// Print both sheets of a parsed workbook.
fn print_workbook(workbook: &WorkbookData) {
    println!("{}", "✅ Workbook parsed:".bold().green());
    print_sheet("Hoja 1", &workbook.sheet1);
    print_sheet("Hoja 2", &workbook.sheet2);
    println!(
        "   {} variables total",
        workbook.total_variables().to_string().bold()
    );
}

fn print_sheet(title: &str, rows: &[VariableRow]) {
    println!("   📋 {} ({} rows)", title.bright_blue().bold(), rows.len());
    for row in rows {
        println!(
            "      {} = {}",
            row.variable.cyan(),
            row.valor.to_display().bold()
        );
    }
}
