//! Logic Tool - Command Line Interface
//!
//! Truth tables, normal forms and equivalence checks from the terminal.

use clap::{ArgAction, Parser, Subcommand};
use logic_tool::formula::{to_basic_basis, validate};
use logic_tool::{compare_with_limits, BooleanFunction, ComparisonResult, Limits, LogicError};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "logictool")]
#[command(about = "Truth tables, normal forms and equivalence of boolean functions", long_about = None)]
#[command(version)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Largest number of variables a comparison may enumerate
    #[arg(long = "max-compare-vars", value_name = "N", global = true)]
    max_compare_vars: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a function from its number
    Number {
        /// Number of variables (1-10)
        variables: u32,
        /// Function number: decimal, or binary/hex with a 0b/0x prefix
        #[arg(value_parser = parse_number)]
        number: u64,
        /// Explain how the bits of the number map onto table rows
        #[arg(short, long)]
        explain: bool,
    },
    /// Build a function from a formula
    Formula {
        /// Formula, e.g. "(x1 & !x2) | x3"
        formula: String,
    },
    /// Check two functions for equivalence
    ///
    /// Each operand is a formula, or VARS:NUMBER for a function given by number.
    Compare {
        /// First function
        #[arg(value_parser = parse_operand)]
        first: Operand,
        /// Second function
        #[arg(value_parser = parse_operand)]
        second: Operand,
    },
    /// Rewrite a formula using only negation, conjunction and disjunction
    Basis {
        /// Formula to rewrite
        formula: String,
    },
    /// Tokenize a formula and print its RPN
    Validate {
        /// Formula to check
        formula: String,
    },
}

/// A function on the command line
#[derive(Debug, Clone)]
enum Operand {
    Number { variables: u32, number: u64 },
    Formula(String),
}

impl Operand {
    fn build(&self, limits: &Limits) -> Result<BooleanFunction, LogicError> {
        match self {
            Operand::Number { variables, number } => {
                BooleanFunction::from_number_with_limits(*variables, *number, limits)
            }
            Operand::Formula(formula) => BooleanFunction::from_formula_with_limits(formula, limits),
        }
    }
}

fn parse_number(text: &str) -> Result<u64, String> {
    let text = text.trim().replace('_', "");
    let parsed = if let Some(bits) = text.strip_prefix("0b") {
        u64::from_str_radix(bits, 2)
    } else if let Some(hex) = text.strip_prefix("0x") {
        u64::from_str_radix(hex, 16)
    } else {
        text.parse()
    };
    parsed.map_err(|e| format!("invalid function number '{}': {}", text, e))
}

fn parse_operand(text: &str) -> Result<Operand, String> {
    if let Some((variables, number)) = text.split_once(':') {
        let variables = variables
            .trim()
            .parse()
            .map_err(|e| format!("invalid variable count '{}': {}", variables, e))?;
        let number = parse_number(number)?;
        return Ok(Operand::Number { variables, number });
    }
    Ok(Operand::Formula(text.to_string()))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialise logging: {}", e);
    }
}

fn print_function(function: &BooleanFunction) {
    let names: Vec<&str> = function.variable_names().iter().map(|n| n.as_ref()).collect();
    println!("{} | f", names.join(" "));
    for row in function.truth_table() {
        let cells: Vec<String> = row
            .values()
            .map(|(name, value)| format!("{:>width$}", u8::from(value), width = name.len()))
            .collect();
        println!("{} | {}", cells.join(" "), u8::from(row.result()));
    }

    println!();
    println!("DNF: {}", function.dnf());
    println!("KNF: {}", function.knf());
    println!("{}", function.metrics());
    println!("Complexity: {}", function.complexity());

    let warning = function.complexity_warning();
    if !warning.is_empty() {
        eprintln!("{}", warning);
    }
}

fn build_or_exit(result: Result<BooleanFunction, LogicError>) -> BooleanFunction {
    match result {
        Ok(function) => function,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut limits = Limits::default();
    if let Some(max) = args.max_compare_vars {
        limits.max_comparison_variables = max;
    }

    match args.command {
        Command::Number {
            variables,
            number,
            explain,
        } => {
            let function = build_or_exit(BooleanFunction::from_number_with_limits(
                variables, number, &limits,
            ));
            if explain {
                print!("{}", function.describe_binary_mapping());
                println!();
            }
            print_function(&function);
        }
        Command::Formula { formula } => {
            let function = build_or_exit(BooleanFunction::from_formula_with_limits(
                &formula, &limits,
            ));
            print_function(&function);
        }
        Command::Compare { first, second } => {
            let f1 = build_or_exit(first.build(&limits));
            let f2 = build_or_exit(second.build(&limits));
            let result = compare_with_limits(&f1, &f2, &limits);
            println!("{}", result);
            if let ComparisonResult::Error { .. } = result {
                process::exit(1);
            }
        }
        Command::Basis { formula } => match to_basic_basis(&formula) {
            Ok(rewritten) => println!("{}", rewritten),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Command::Validate { formula } => {
            let result = validate(&formula);
            println!("{}", result);
            if !result.is_success() {
                process::exit(1);
            }
            for token in result.tokens() {
                println!("  {}", token);
            }
        }
    }
}
