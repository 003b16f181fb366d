//! Thin CLI demonstration over the `bahr_scansion` library. Not the
//! interactive console loop or HTML report renderer named out of scope
//! in spec.md §1 — just `analyze`/`align` printed to standard output.

use bahr_scansion::{analyze, align};
use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Simple,
    Detailed,
}

#[derive(Parser, Debug)]
#[command(
    name = "bahr-scan",
    about = "Scan a classical Arabic verse against the canonical meter corpus"
)]
struct Args {
    /// The verse to analyze, two hemistichs separated by "***"
    text: String,

    /// Also run the foot aligner against this meter's first match
    #[arg(long)]
    meter: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Simple)]
    format: Format,
}

fn main() {
    let args = Args::parse();
    let result = analyze(&args.text);

    println!("rewritten: {}", result.rewritten);

    if result.is_empty() {
        println!("no matching meter found");
        return;
    }

    match args.format {
        Format::Simple => {
            for (name, _) in &result.matches {
                println!("match: {name}");
            }
        }
        Format::Detailed => {
            for (name, line) in &result.matches {
                println!("match: {name}");
                println!("  canonical line: {line}");
            }
        }
    }

    if let Some(meter) = &args.meter {
        let Some(line) = result.line_for(meter) else {
            eprintln!("no match for meter '{meter}'");
            return;
        };
        let alignment = align(meter, line);
        if alignment.pairs.is_empty() {
            println!("no weight registered for meter '{meter}'");
            return;
        }
        println!("alignment for {meter}:");
        for pair in &alignment.pairs {
            let annotation = match &pair.annotation {
                bahr_scansion::Annotation::Modification(name) => name.clone(),
                bahr_scansion::Annotation::RemainedOnOriginal => "(remained on original)".to_string(),
            };
            println!(
                "  {} -> {}  [{}]",
                pair.canonical_foot, pair.realized_foot, annotation
            );
        }
    }
}
