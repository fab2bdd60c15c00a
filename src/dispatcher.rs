use log::debug;

use crate::prelude::*;

#[derive(Debug, Default)]
pub struct Dispatcher {
    pub env: ExecEnv,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DispatchResult {
    Success(Option<String>),
    Failure(String),
}

impl Dispatcher {
    pub fn new() -> Self {
        Dispatcher {
            env: ExecEnv::new(),
        }
    }

    pub fn dispatch(&mut self, input: &str) -> DispatchResult {
        let line = input.trim();
        debug!("dispatching {:?}", line);

        if line.is_empty() || line.starts_with("//") {
            return DispatchResult::Success(None);
        }

        match self.env.execute(line) {
            Ok(message) => DispatchResult::Success(message),
            Err(e) => DispatchResult::Failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session() {
        let mut dispatcher = Dispatcher::new();

        let inputs = [
            ("// exact sums", DispatchResult::Success(None)),
            ("", DispatchResult::Success(None)),
            ("let a = 1/10", DispatchResult::Success(None)),
            ("sum a a a a a a a a a a", DispatchResult::Success(Some("1".to_string()))),
            ("let b = -2/4", DispatchResult::Success(None)),
            ("contains b a 0", DispatchResult::Success(Some("true".to_string()))),
            ("cmp a b", DispatchResult::Success(Some("greater".to_string()))),
        ];

        for (input, expected) in inputs {
            assert_eq!(dispatcher.dispatch(input), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn failures_carry_messages() {
        let mut dispatcher = Dispatcher::new();

        assert_eq!(
            dispatcher.dispatch("div 1/2 0"),
            DispatchResult::Failure("division by zero".to_string()),
        );
        assert_eq!(
            dispatcher.dispatch("1/x"),
            DispatchResult::Failure("cannot parse \"1/x\" as a rational: invalid denominator".to_string()),
        );
        assert_eq!(
            dispatcher.dispatch("frobnicate 1 2"),
            DispatchResult::Failure("unknown command `frobnicate`".to_string()),
        );
    }
}
