use std::collections::BTreeMap;

use log::debug;
use thiserror::Error;

use crate::error::RationalError;
use crate::range::RationalRange;
use crate::rational::Rational;

const KEYWORDS: [&str; 12] = [
    "let", "add", "sub", "mul", "div", "neg", "normalize", "cmp", "eq", "contains", "sum", "vars",
];

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ExecError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{command}` takes {expected} operand(s), got {actual}")]
    Arity {
        command: &'static str,
        expected: String,
        actual: usize,
    },

    #[error("identifier `{0}` not found")]
    UnknownVariable(String),

    #[error("`{0}` is not a valid variable name")]
    InvalidName(String),

    #[error(transparent)]
    Rational(#[from] RationalError),
}

pub type ExecResult = Result<Option<String>, ExecError>;

/// Evaluates shell commands against a table of named rationals.
#[derive(Clone, Debug, Default)]
pub struct ExecEnv {
    variables: BTreeMap<String, Rational>,
}

impl ExecEnv {
    pub fn new() -> Self {
        ExecEnv {
            variables: BTreeMap::new(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Rational> {
        self.variables.get(name)
    }

    pub fn execute(&mut self, input: &str) -> ExecResult {
        let words: Vec<&str> = input.split_whitespace().collect();
        debug!("executing {:?}", words);

        let (command, args) = match words.split_first() {
            Some((command, args)) => (*command, args),
            None => return Ok(None),
        };

        match command {
            "let" => self.define(args),
            "add" => {
                let [a, b] = self.operands::<2>("add", args)?;
                Ok(Some(Rational::add(&a, &b).to_string()))
            },
            "sub" => {
                let [a, b] = self.operands::<2>("sub", args)?;
                Ok(Some(a.subtract(&b).to_string()))
            },
            "mul" => {
                let [a, b] = self.operands::<2>("mul", args)?;
                Ok(Some(a.multiply(&b).to_string()))
            },
            "div" => {
                let [a, b] = self.operands::<2>("div", args)?;
                Ok(Some(a.divide(&b)?.to_string()))
            },
            "neg" => {
                let [a] = self.operands::<1>("neg", args)?;
                Ok(Some(a.negate().to_string()))
            },
            "normalize" => {
                let [a] = self.operands::<1>("normalize", args)?;
                let a = a.normalize();
                Ok(Some(format!("{}/{}", a.numer(), a.denom())))
            },
            "cmp" => {
                let [a, b] = self.operands::<2>("cmp", args)?;
                let ordering = match a.compare(&b) {
                    std::cmp::Ordering::Less => "less",
                    std::cmp::Ordering::Equal => "equal",
                    std::cmp::Ordering::Greater => "greater",
                };
                Ok(Some(ordering.to_string()))
            },
            "eq" => {
                let [a, b] = self.operands::<2>("eq", args)?;
                Ok(Some((a == b).to_string()))
            },
            "contains" => {
                let [start, end, value] = self.operands::<3>("contains", args)?;
                let range = RationalRange::new(start, end);
                Ok(Some(range.contains(&value).to_string()))
            },
            "sum" => {
                if args.is_empty() {
                    return Err(ExecError::Arity {
                        command: "sum",
                        expected: "at least 1".to_string(),
                        actual: 0,
                    });
                }
                let values = args
                    .iter()
                    .map(|arg| self.resolve(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Some(values.iter().sum::<Rational>().to_string()))
            },
            "vars" => {
                if !args.is_empty() {
                    return Err(ExecError::Arity {
                        command: "vars",
                        expected: "0".to_string(),
                        actual: args.len(),
                    });
                }
                if self.variables.is_empty() {
                    return Ok(None);
                }
                let listing = self
                    .variables
                    .iter()
                    .map(|(name, value)| format!("{} = {}", name, value))
                    .collect::<Vec<_>>()
                    .join("\n");
                Ok(Some(listing))
            },
            _ if words.len() == 1 => Ok(Some(self.resolve(command)?.to_string())),
            _ => Err(ExecError::UnknownCommand(command.to_string())),
        }
    }

    // let <name> = <operand>
    fn define(&mut self, args: &[&str]) -> ExecResult {
        let (name, value) = match args {
            [name, "=", value] => (*name, *value),
            _ => {
                return Err(ExecError::Arity {
                    command: "let",
                    expected: "`<name> = <value>`".to_string(),
                    actual: args.len(),
                })
            },
        };

        if !is_valid_name(name) {
            return Err(ExecError::InvalidName(name.to_string()));
        }

        let value = self.resolve(value)?.normalize();
        debug!("binding {} = {}", name, value);
        self.variables.insert(name.to_string(), value);
        Ok(None)
    }

    fn operands<const N: usize>(&self, command: &'static str, args: &[&str]) -> Result<[Rational; N], ExecError> {
        let arity = |actual: usize| ExecError::Arity {
            command,
            expected: N.to_string(),
            actual,
        };

        if args.len() != N {
            return Err(arity(args.len()));
        }

        let values = args
            .iter()
            .map(|arg| self.resolve(arg))
            .collect::<Result<Vec<_>, _>>()?;

        <[Rational; N]>::try_from(values).map_err(|values| arity(values.len()))
    }

    fn resolve(&self, word: &str) -> Result<Rational, ExecError> {
        if is_valid_name(word) {
            return self
                .lookup(word)
                .cloned()
                .ok_or_else(|| ExecError::UnknownVariable(word.to_string()));
        }

        Ok(word.parse::<Rational>()?)
    }
}

fn is_valid_name(word: &str) -> bool {
    let mut chars = word.chars();
    let starts_well = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');

    starts_well
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    fn run(env: &mut ExecEnv, input: &str) -> Option<String> {
        env.execute(input).unwrap()
    }

    #[test]
    fn arithmetic_commands() {
        let mut env = ExecEnv::new();
        assert_eq!(run(&mut env, "add 1/2 1/3"), Some("5/6".to_string()));
        assert_eq!(run(&mut env, "sub 1/2 1/3"), Some("1/6".to_string()));
        assert_eq!(run(&mut env, "mul 2/3 3/4"), Some("1/2".to_string()));
        assert_eq!(run(&mut env, "div 1/2 1/3"), Some("3/2".to_string()));
        assert_eq!(run(&mut env, "neg -2/4"), Some("1/2".to_string()));
        assert_eq!(run(&mut env, "sum 1/2 1/3 1/6"), Some("1".to_string()));
    }

    #[test]
    fn bare_operand_prints_normalized() {
        let mut env = ExecEnv::new();
        assert_eq!(run(&mut env, "117/1098"), Some("13/122".to_string()));
        assert_eq!(run(&mut env, "  4/-2 "), Some("-2".to_string()));
        assert_eq!(run(&mut env, "normalize 4/-2"), Some("-2/1".to_string()));
        assert_eq!(run(&mut env, ""), None);
    }

    #[test]
    fn comparisons() {
        let mut env = ExecEnv::new();
        assert_eq!(run(&mut env, "cmp 1/2 2/4"), Some("equal".to_string()));
        assert_eq!(run(&mut env, "cmp 1/-2 1/3"), Some("less".to_string()));
        assert_eq!(run(&mut env, "cmp 1/2 1/3"), Some("greater".to_string()));
        assert_eq!(run(&mut env, "eq -1/2 1/-2"), Some("true".to_string()));
        assert_eq!(run(&mut env, "contains 1/3 2/3 1/2"), Some("true".to_string()));
        assert_eq!(run(&mut env, "contains 2/3 1/3 1/2"), Some("false".to_string()));
    }

    #[test]
    fn variables() {
        let mut env = ExecEnv::new();
        assert_eq!(run(&mut env, "let x = 2/4"), None);
        assert_eq!(run(&mut env, "let _y2 = x"), None);
        assert_eq!(run(&mut env, "add x _y2"), Some("1".to_string()));
        assert_eq!(run(&mut env, "x"), Some("1/2".to_string()));
        assert_eq!(run(&mut env, "vars"), Some("_y2 = 1/2\nx = 1/2".to_string()));

        // rebinding replaces the value
        assert_eq!(run(&mut env, "let x = 3"), None);
        assert_eq!(env.lookup("x"), Some(&Rational::from(3)));
    }

    #[test]
    fn errors() {
        let mut env = ExecEnv::new();
        assert_eq!(
            env.execute("pow 1 2"),
            Err(ExecError::UnknownCommand("pow".to_string())),
        );
        assert_eq!(
            env.execute("add 1"),
            Err(ExecError::Arity { command: "add", expected: "2".to_string(), actual: 1 }),
        );
        // argument count is checked before any operand is resolved
        assert_eq!(
            env.execute("add 1 2 zz"),
            Err(ExecError::Arity { command: "add", expected: "2".to_string(), actual: 3 }),
        );
        assert_eq!(
            env.execute("contains zz 1"),
            Err(ExecError::Arity { command: "contains", expected: "3".to_string(), actual: 2 }),
        );
        assert_eq!(
            env.execute("sum"),
            Err(ExecError::Arity { command: "sum", expected: "at least 1".to_string(), actual: 0 }),
        );
        assert_eq!(
            env.execute("neg z"),
            Err(ExecError::UnknownVariable("z".to_string())),
        );
        assert_eq!(
            env.execute("let add = 1"),
            Err(ExecError::InvalidName("add".to_string())),
        );
        assert_eq!(
            env.execute("let 1x = 1"),
            Err(ExecError::InvalidName("1x".to_string())),
        );
        assert_eq!(
            env.execute("div 1 0/3"),
            Err(ExecError::Rational(RationalError::DivisionByZero)),
        );
        assert_eq!(
            env.execute("1/0"),
            Err(ExecError::Rational(RationalError::Parse {
                input: "1/0".to_string(),
                kind: ParseErrorKind::ZeroDenominator,
            })),
        );
    }
}
