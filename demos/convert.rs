use ljk_report::ConverterBuilder;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ljk_report=info".into()),
        )
        .init();

    // Check if a file path was provided as a command-line argument
    let args: Vec<String> = env::args().collect();
    let file_path = match args.get(1) {
        Some(path) => path.clone(),
        None => {
            println!("Using example response from demos/sample_respon.xml\n");
            println!("Usage: cargo run --example convert [path/to/respon.xml]\n");
            "demos/sample_respon.xml".to_string()
        }
    };

    let builder = ConverterBuilder::new().filename(&file_path);
    let output = builder
        .output_filename()
        .unwrap_or_else(|| "respon_output.xlsx".to_string());

    let report = builder.report()?;
    println!("Institution: {}", report.header.institution_name.as_deref().unwrap_or("N/A"));
    println!("Subject:     {}", report.summary.name.as_deref().unwrap_or("N/A"));
    println!("Accounts:    {}\n", report.accounts.len());

    for (sheet, ledger) in report.sheet_names().iter().skip(3).zip(&report.ledgers) {
        let closing = ledger.transactions.last().map(|t| t.balance.to_string());
        println!(
            "  {} | {} | {} transactions | running balance {}",
            sheet,
            ledger.account_number.as_deref().unwrap_or("N/A"),
            ledger.transactions.len(),
            closing.as_deref().unwrap_or("-"),
        );
    }

    std::fs::write(&output, report.to_workbook()?)?;
    println!("\nWrote {}", output);

    Ok(())
}
