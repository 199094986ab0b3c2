//! # binarith command line
//!
//! Argument definitions and the two interactive sessions. `main.rs` only
//! parses arguments, installs logging and reports errors.

pub mod session;

use std::fmt;
use std::io::{BufRead, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "binarith", version, about = "Two's-complement binary arithmetic")]
pub struct Cli {
    /// Bit width of every value
    #[arg(long, value_enum, default_value = "32", global = true)]
    pub width: Width,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply + - or * to two integers and show every bit pattern
    Arith(ArithArgs),
    /// Evaluate a postfix expression such as "5 3 2 * +"
    Postfix(PostfixArgs),
}

/// Values left out are prompted for on standard input.
#[derive(Debug, Clone, Default, Args)]
pub struct ArithArgs {
    /// First operand
    #[arg(allow_negative_numbers = true)]
    pub lhs: Option<String>,
    /// Second operand
    #[arg(allow_negative_numbers = true)]
    pub rhs: Option<String>,
    /// Operator: + - or *
    #[arg(allow_hyphen_values = true)]
    pub op: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct PostfixArgs {
    /// Expression words; read from standard input when empty
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub expression: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Width {
    #[value(name = "8")]
    W8,
    #[value(name = "16")]
    W16,
    #[default]
    #[value(name = "32")]
    W32,
}

impl Width {
    pub const fn bits(self) -> usize {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Log filter for a `-v` count
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Run the selected mode at the selected width.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, output: &mut W) -> anyhow::Result<()> {
    match (&cli.command, cli.width) {
        (Command::Arith(args), Width::W8) => session::run_arith::<8, _, _>(args, input, output),
        (Command::Arith(args), Width::W16) => session::run_arith::<16, _, _>(args, input, output),
        (Command::Arith(args), Width::W32) => session::run_arith::<32, _, _>(args, input, output),
        (Command::Postfix(args), Width::W8) => session::run_postfix::<8, _, _>(args, input, output),
        (Command::Postfix(args), Width::W16) => session::run_postfix::<16, _, _>(args, input, output),
        (Command::Postfix(args), Width::W32) => session::run_postfix::<32, _, _>(args, input, output),
    }
}
