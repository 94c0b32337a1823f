use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// The catalogue of calculations the engine can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    #[cfg_attr(feature = "clap", value(name = "sqrt"))]
    SquareRoot,
    #[cfg_attr(feature = "clap", value(name = "mod"))]
    Modulo,
    #[cfg_attr(feature = "clap", value(name = "abs"))]
    Absolute,
    #[cfg_attr(feature = "clap", value(name = "sin"))]
    Sine,
    #[cfg_attr(feature = "clap", value(name = "cos"))]
    Cosine,
    #[cfg_attr(feature = "clap", value(name = "tan"))]
    Tangent,
    #[cfg_attr(feature = "clap", value(name = "log"))]
    Logarithm,
    #[cfg_attr(feature = "clap", value(name = "ln"))]
    NaturalLog,
    #[cfg_attr(feature = "clap", value(name = "fact"))]
    Factorial,
}

impl Operation {
    pub const ALL: [Operation; 14] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::SquareRoot,
        Operation::Modulo,
        Operation::Absolute,
        Operation::Sine,
        Operation::Cosine,
        Operation::Tangent,
        Operation::Logarithm,
        Operation::NaturalLog,
        Operation::Factorial,
    ];

    /// Number of operands the operation consumes.
    pub fn arity(&self) -> usize {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power
            | Operation::Modulo => 2,
            _ => 1,
        }
    }

    /// The short keyword accepted on the command line and in the REPL.
    pub fn keyword(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::SquareRoot => "sqrt",
            Operation::Modulo => "mod",
            Operation::Absolute => "abs",
            Operation::Sine => "sin",
            Operation::Cosine => "cos",
            Operation::Tangent => "tan",
            Operation::Logarithm => "log",
            Operation::NaturalLog => "ln",
            Operation::Factorial => "fact",
        }
    }

    /// Builds the human-readable history label for one invocation, e.g. `"2 + 3"`
    /// or `"sin(30°)"`. Missing operands are rendered as `?`.
    pub fn label(&self, operands: &[f64]) -> String {
        let arg = |i: usize| {
            operands
                .get(i)
                .map(|v| v.to_string())
                .unwrap_or_else(|| "?".to_string())
        };
        let (a, b) = (arg(0), arg(1));
        match self {
            Operation::Add => format!("{a} + {b}"),
            Operation::Subtract => format!("{a} - {b}"),
            Operation::Multiply => format!("{a} × {b}"),
            Operation::Divide => format!("{a} ÷ {b}"),
            Operation::Power => format!("{a} ^ {b}"),
            Operation::SquareRoot => format!("√{a}"),
            Operation::Modulo => format!("{a} mod {b}"),
            Operation::Absolute => format!("|{a}|"),
            Operation::Sine => format!("sin({a}°)"),
            Operation::Cosine => format!("cos({a}°)"),
            Operation::Tangent => format!("tan({a}°)"),
            Operation::Logarithm => format!("log₁₀({a})"),
            Operation::NaturalLog => format!("ln({a})"),
            Operation::Factorial => format!("{a}!"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    /// Accepts the keyword, the full name, or the operator symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Operation::Add,
            "subtract" | "sub" | "-" => Operation::Subtract,
            "multiply" | "mul" | "*" | "x" => Operation::Multiply,
            "divide" | "div" | "/" => Operation::Divide,
            "power" | "pow" | "^" => Operation::Power,
            "sqrt" | "square_root" => Operation::SquareRoot,
            "mod" | "modulo" | "%" => Operation::Modulo,
            "abs" | "absolute" => Operation::Absolute,
            "sin" | "sine" => Operation::Sine,
            "cos" | "cosine" => Operation::Cosine,
            "tan" | "tangent" => Operation::Tangent,
            "log" | "log10" | "logarithm" => Operation::Logarithm,
            "ln" | "natural_log" => Operation::NaturalLog,
            "fact" | "factorial" | "!" => Operation::Factorial,
            other => {
                return Err(CalcError::InvalidInput(format!(
                    "unknown operation '{other}'"
                )));
            }
        };
        Ok(op)
    }
}
