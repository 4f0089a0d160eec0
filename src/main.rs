use kneeboard::{DocumentError, DocumentKind};
use std::env;
use std::fs;

/// A simple CLI to generate a kneeboard PDF from a JSON record.
fn main() -> Result<(), DocumentError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Generates print-ready kneeboard PDFs from JSON records.");
        eprintln!();
        eprintln!(
            "Usage: {} <document> <path/to/record.json> <path/to/output.pdf>",
            args[0]
        );
        eprintln!();
        eprintln!("Documents:");
        eprintln!("  speeds | speeds-combo          airspeed strip + briefing page");
        eprintln!("  emergency | emergency-combo    emergency procedures booklet");
        eprintln!("  endorsement                    one 2\"x4\" endorsement label");
        eprintln!("  endorsement-avery:N            label slot N (1-10) on an Avery sheet");
        eprintln!("  weight-balance                 weight and balance form");
        eprintln!("  flight-plan                    VFR navigation log");
        std::process::exit(1);
    }

    let kind = DocumentKind::parse(&args[1])?;
    let json = fs::read_to_string(&args[2])?;

    let bytes = kneeboard::generate(kind, &json)?;
    fs::write(&args[3], &bytes)?;

    println!("Wrote {} ({} bytes)", args[3], bytes.len());
    Ok(())
}
