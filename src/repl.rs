use std::io::{BufRead, Write};
use std::str::FromStr;

use configuration::Display;
use core_types::{CalcError, Operation};

use crate::render;
use crate::session::Session;

const PROMPT: &str = "abacus> ";

const HELP: &str = "\
Operations (angles in degrees):
  add a b | subtract a b | multiply a b | divide a b
  power base exp | sqrt x | mod a b | abs x
  sin deg | cos deg | tan deg | log x | ln x | fact n
Other commands:
  stats v1 v2 ...   descriptive statistics of a sample
  history [n]       list the most recent calculations
  clear             clear the history
  help              show this message
  exit | quit       leave";

/// One parsed line of REPL input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Calculate { op: Operation, operands: Vec<f64> },
    Statistics(Vec<f64>),
    History(Option<usize>),
    Clear,
    Help,
    Exit,
    Empty,
}

impl FromStr for Command {
    type Err = CalcError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let Some(head) = tokens.next() else {
            return Ok(Command::Empty);
        };
        let rest: Vec<&str> = tokens.collect();

        let command = match head.to_ascii_lowercase().as_str() {
            "exit" | "quit" => Command::Exit,
            "help" | "?" => Command::Help,
            "clear" => Command::Clear,
            "history" => match rest.as_slice() {
                [] => Command::History(None),
                [n] => Command::History(Some(parse_count(n)?)),
                _ => {
                    return Err(CalcError::InvalidInput(
                        "history takes at most one argument".to_string(),
                    ));
                }
            },
            "stats" => Command::Statistics(parse_numbers(&rest)?),
            _ => Command::Calculate {
                op: head.parse()?,
                operands: parse_numbers(&rest)?,
            },
        };
        Ok(command)
    }
}

/// Parses every token as an `f64`. Non-finite spellings such as `inf` are accepted
/// here and rejected by the engine.
pub fn parse_numbers(tokens: &[&str]) -> Result<Vec<f64>, CalcError> {
    tokens
        .iter()
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                CalcError::InvalidInput(format!("Invalid number format: '{token}'"))
            })
        })
        .collect()
}

fn parse_count(token: &str) -> Result<usize, CalcError> {
    match token.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CalcError::InvalidInput(format!(
            "history count must be a positive integer, got '{token}'"
        ))),
    }
}

/// The interactive request loop.
///
/// Results go to `out`; failures go to `err` and the loop re-prompts. The loop ends on
/// `exit`, `quit` or end of input.
pub struct Repl<'a> {
    session: &'a mut Session,
    display: &'a Display,
}

impl<'a> Repl<'a> {
    pub fn new(session: &'a mut Session, display: &'a Display) -> Self {
        Self { session, display }
    }

    pub fn run<R, W, E>(&mut self, input: R, out: &mut W, err: &mut E) -> std::io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        tracing::info!("Interactive session started");
        writeln!(out, "Abacus interactive calculator. Type 'help' for commands.")?;

        let mut lines = input.lines();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let Some(line) = lines.next().transpose()? else {
                break;
            };

            match line.parse::<Command>() {
                Ok(Command::Exit) => break,
                Ok(command) => {
                    if let Err(e) = self.execute(command, out) {
                        writeln!(err, "Error: {e}")?;
                    }
                }
                Err(e) => writeln!(err, "Error: {e}")?,
            }
        }

        tracing::info!(
            calculations = self.session.history().len(),
            "Interactive session ended"
        );
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<(), ReplError> {
        let display = self.display;
        match command {
            Command::Calculate { op, operands } => {
                let calc = self.session.calculate(op, &operands)?;
                writeln!(
                    out,
                    "{}",
                    render::format_result(&calc.label, calc.result, display.result_precision)
                )?;
            }
            Command::Statistics(values) => {
                let report = self.session.analyze(&values)?;
                writeln!(
                    out,
                    "{}",
                    render::statistics_table(&report, display.statistics_precision)
                )?;
            }
            Command::History(limit) => {
                let log = self.session.history();
                if log.is_empty() {
                    writeln!(out, "No calculations in history yet.")?;
                } else {
                    let limit = limit.unwrap_or(display.history_limit);
                    writeln!(
                        out,
                        "{}",
                        render::history_table(log, limit, display.result_precision)
                    )?;
                    writeln!(out, "{}", render::history_footer(log, limit))?;
                }
            }
            Command::Clear => {
                self.session.clear_history();
                writeln!(out, "History cleared.")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Exit | Command::Empty => {}
        }
        Ok(())
    }
}

/// Why a single REPL request failed.
#[derive(Debug, thiserror::Error)]
enum ReplError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
