use clap::Parser;
use color_eyre::Report;
use std::{fs::File, io::Write, path::PathBuf};
use tracing::debug;
use vnum::{config::Config, printer::Printer, Number, Sequence};

/// Print recursive numbers, one leaf per line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number literal to print, such as `[1i, 2d, 3f]`. Runs the built-in demo when omitted
    literal: Option<String>,

    /// Read the number from a JSON file instead
    #[arg(long, conflicts_with = "literal")]
    from_json: Option<PathBuf>,

    /// Import printer configuration from a JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit JSON instead of one line per leaf
    #[arg(long, default_value_t = false)]
    json: bool,
}

pub fn main() -> color_eyre::Result<()> {
    let _ = color_eyre::install();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(Report::msg)?;

    let cli: Cli = Cli::parse();
    let config: Config = match cli.config {
        Some(path) => serde_json::from_reader(File::open(path)?)?,
        None => Config::default(),
    };
    debug!(?config, "printer configuration");

    let number: Number;
    if let Some(literal) = cli.literal {
        number = literal.parse()?;
    } else if let Some(json) = cli.from_json {
        number = serde_json::from_reader(File::open(json)?)?;
    } else {
        let mut printer = Printer::with_config(std::io::stdout().lock(), config);
        return demo(&mut printer);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&number)?);
    } else {
        Printer::with_config(std::io::stdout().lock(), config).print(&number)?;
    }

    return Ok(());
}

/// Prints one number while reassigning it through every alternative.
fn demo<W: Write>(printer: &mut Printer<W>) -> color_eyre::Result<()> {
    let mut number = Number::from(0);
    printer.print(&number)?;

    number = Number::from(5.0f32);
    printer.print(&number)?;

    number = Number::from(33.51f64);
    printer.print(&number)?;

    number = Number::Sequence(Sequence::from([
        Number::from(1),
        Number::from(2.0f64),
        Number::from(3.0f32),
    ]));
    printer.print(&number)?;

    return Ok(());
}

#[test]
fn demo_output() -> color_eyre::Result<()> {
    let mut printer = Printer::new(Vec::new());
    demo(&mut printer)?;
    assert_eq!(
        String::from_utf8(printer.into_inner())?,
        "0i\n5f\n33.51d\n1i\n2d\n3f\n"
    );
    Ok(())
}

#[test]
fn cli_arguments() {
    let cli = Cli::parse_from(["vnum", "--json", "[1i]"]);
    assert_eq!(cli.literal.as_deref(), Some("[1i]"));
    assert!(cli.json);

    assert!(Cli::try_parse_from(["vnum", "1i", "--from-json", "number.json"]).is_err());
}
