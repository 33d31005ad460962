//! CLI entrypoint for the strtoolkit harness.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use strtoolkit_harness::fixtures::{self, FixtureSet};
use strtoolkit_harness::report::ConformanceReport;
use strtoolkit_harness::runner::TestRunner;

/// Exercising and conformance tooling for strtoolkit.
#[derive(Debug, Parser)]
#[command(name = "strtoolkit-harness")]
#[command(about = "Exercising and conformance harness for strtoolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Invoke a handful of operations on literal sample strings and print
    /// the results.
    Demo,
    /// Verify the core library against a fixture set.
    Verify {
        /// Fixture JSON file (the builtin set when omitted).
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Output report path (markdown). Printed to stdout when omitted.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Optional output path for the machine-readable JSON report.
        #[arg(long)]
        json: Option<PathBuf>,
        /// Fixed timestamp string for deterministic report generation.
        #[arg(long, default_value = "unspecified")]
        timestamp: String,
    },
    /// Write the builtin fixture set to disk.
    EmitFixtures {
        /// Output path for fixture JSON.
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match cli.command {
        Command::Demo => {
            demo();
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify {
            fixture,
            report,
            json,
            timestamp,
        } => {
            let (set, campaign) = match fixture {
                Some(path) => (FixtureSet::from_file(&path)?, path.display().to_string()),
                None => (fixtures::builtin_set(), "builtin".to_string()),
            };
            let results = TestRunner::new(&campaign).run(&set);
            let conformance = ConformanceReport::new(campaign, timestamp, results);

            let markdown = conformance.render_markdown();
            match report {
                Some(path) => std::fs::write(path, &markdown)?,
                None => print!("{markdown}"),
            }
            if let Some(path) = json {
                std::fs::write(path, conformance.to_json()?)?;
            }

            if conformance.all_passed() {
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!(
                    "verification failed: {} of {} cases",
                    conformance.total - conformance.passed,
                    conformance.total
                );
                Ok(ExitCode::FAILURE)
            }
        }
        Command::EmitFixtures { output } => {
            std::fs::write(output, fixtures::builtin_set().to_json()?)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Renders the logical content of a fixed buffer for display.
fn text(buf: &[u8]) -> String {
    let len = strtoolkit_core::strlen(buf);
    String::from_utf8_lossy(&buf[..len]).into_owned()
}

fn demo() {
    use strtoolkit_core::{
        ByteString, strcat, strchr, strcpy, streq, strlen, strncpy, strneq, strrev, strupr,
    };

    println!("strlen(\"Hello\") = {}", strlen(b"Hello\0"));
    println!(
        "streq(\"Hello\", \"Hello\") = {}",
        streq(b"Hello\0", b"Hello\0")
    );
    println!(
        "streq(\"Hello!\", \"Hell!\") = {}",
        streq(b"Hello!\0", b"Hell!\0")
    );
    println!(
        "strneq(\"Hello\", \"Help\", 3) = {}",
        strneq(b"Hello\0", b"Help\0", 3)
    );

    let mut buf = [0u8; 20];
    strcpy(&mut buf, b"Hello\0");
    println!("strcpy -> \"{}\"", text(&buf));
    strcat(&mut buf, b" World\0");
    println!("strcat(\" World\") -> \"{}\"", text(&buf));

    let mut bounded = [0u8; 8];
    strncpy(&mut bounded, b"HelloWorld\0", 5);
    println!("strncpy(\"HelloWorld\", 5) -> \"{}\"", text(&bounded));

    println!("strchr(\"Hello\", 'e') = {:?}", strchr(b"Hello\0", b'e'));

    let mut rev = *b"Hello\0";
    strrev(&mut rev);
    println!("strrev(\"Hello\") -> \"{}\"", text(&rev));

    let mut upper = *b"Hello World!\0";
    strupr(&mut upper);
    println!("strupr(\"Hello World!\") -> \"{}\"", text(&upper));

    let mut grown = ByteString::new();
    grown.assign(&ByteString::from("Hello!"));
    grown.append(&ByteString::from(" Goodbye!"));
    println!(
        "ByteString assign+append -> \"{}\" (len {})",
        String::from_utf8_lossy(grown.as_bytes()),
        grown.len()
    );
}
