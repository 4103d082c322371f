use clap::{ArgGroup, Parser};
use miette::{IntoDiagnostic, Result};
use promptpay_qr::payload;
use promptpay_qr::reader::RequestReader;
use promptpay_qr::writer::PayloadWriter;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(group = ArgGroup::new("source").required(true).args(["input", "phone"]))]
struct Cli {
    /// Input CSV file with `phone, amount` request rows
    input: Option<PathBuf>,

    /// Encode a single phone number instead of reading a CSV
    #[arg(long)]
    phone: Option<String>,

    /// Amount in Baht; the amount tag is omitted when absent or zero
    #[arg(long, requires = "phone", allow_hyphen_values = true)]
    amount: Option<Decimal>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(phone) = &cli.phone {
        let encoded = payload::build(phone, cli.amount).into_diagnostic()?;
        println!("{encoded}");
        return Ok(());
    }

    if let Some(path) = cli.input {
        encode_batch(path)?;
    }

    Ok(())
}

/// Encodes every row of the input CSV, one payload per row. Rows that fail
/// to parse or encode are reported and skipped so one bad request doesn't
/// sink the batch.
fn encode_batch(path: PathBuf) -> Result<()> {
    let file = File::open(path).into_diagnostic()?;
    let reader = RequestReader::new(file);

    let stdout = io::stdout();
    let mut writer = PayloadWriter::new(stdout.lock());

    for request in reader.requests() {
        match request {
            Ok(request) => match payload::build(&request.phone, request.amount) {
                Ok(encoded) => writer
                    .write_result(&request, &encoded)
                    .into_diagnostic()?,
                Err(e) => {
                    eprintln!("Error encoding request: {}", e);
                }
            },
            Err(e) => {
                eprintln!("Error reading request: {}", e);
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
