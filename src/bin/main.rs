use log::debug;
use rustyline::DefaultEditor;
use rational_repl::prelude::*;

const PROMPT: &str = ">> ";

fn main() {
    let mut dispatcher = Dispatcher::new();

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("cannot start line editor: {}", e);
            std::process::exit(1);
        },
    };

    loop {
        let command = rl.readline(PROMPT);

        match command {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        debug!("cannot record history entry: {}", e);
                    }
                }

                match dispatcher.dispatch(&line) {
                    DispatchResult::Success(Some(message)) => println!("{}", message),
                    DispatchResult::Success(None) => {},
                    DispatchResult::Failure(message) => eprintln!("error: {}", message),
                }
            },
            Err(_) => break,
        };
    }
}
