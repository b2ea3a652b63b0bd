mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use cnnum::{
    CaseStyle, abbreviate, amount_in_words, fraction_to_chinese, transliterate_both,
};

use crate::logging::init_logging;

const DEMO_VALUE: f64 = 43314.15;

#[derive(Parser)]
#[command(name = "cnnum", version, about = "Chinese numeral conversion tool")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write each digit as a numeral, in both lowercase and uppercase
    Literal {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Write the digits after the decimal point of a value in (0, 1)
    Fraction {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        #[arg(long, value_enum, default_value_t = CaseArg::Lower)]
        case: CaseArg,
    },
    /// Write a renminbi amount in words
    Rmb {
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },
    /// Abbreviate a number with 萬/億/兆 scale words
    Abbrev {
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CaseArg {
    Lower,
    Upper,
}

impl From<CaseArg> for CaseStyle {
    fn from(value: CaseArg) -> Self {
        match value {
            CaseArg::Lower => CaseStyle::Lower,
            CaseArg::Upper => CaseStyle::Upper,
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Output {
    Pair {
        input: String,
        lower: String,
        upper: String,
    },
    Text {
        input: String,
        text: String,
    },
}

impl Output {
    fn text(input: impl ToString, text: String) -> Self {
        Output::Text {
            input: input.to_string(),
            text,
        }
    }

    fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
            return Ok(());
        }
        match self {
            Output::Pair { lower, upper, .. } => {
                println!("{lower}");
                println!("{upper}");
            }
            Output::Text { text, .. } => println!("{text}"),
        }
        Ok(())
    }
}

fn run(command: Option<Commands>) -> Result<Output> {
    let output = match command {
        Some(Commands::Literal { value }) => {
            let (lower, upper) = transliterate_both(value.as_str())?;
            Output::Pair {
                input: value,
                lower,
                upper,
            }
        }
        Some(Commands::Fraction { value, case }) => {
            Output::text(value, fraction_to_chinese(value, case.into())?)
        }
        Some(Commands::Rmb { amount }) => Output::text(amount, amount_in_words(amount)?),
        Some(Commands::Abbrev { value }) => Output::text(value, abbreviate(value)),
        None => Output::text(DEMO_VALUE, abbreviate(DEMO_VALUE)),
    };
    Ok(output)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    run(cli.command)?.print(cli.json)
}
