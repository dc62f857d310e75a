use crate::error::ConsoleError;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;

/// Where prompts are answered and feedback is shown.
pub trait Console {
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError>;
    fn say(&mut self, message: &str);
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub words: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let typed = line.to_lowercase();
        let candidates = self
            .words
            .iter()
            .filter(|w| w.to_lowercase().starts_with(&typed))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect();

        Ok((0, candidates))
    }
}

/// The interactive terminal, with line editing and completion of city names.
pub struct TerminalConsole {
    editor: Editor<CompleteHelper, DefaultHistory>,
}

impl TerminalConsole {
    pub fn new(words: Vec<String>) -> Result<Self, ConsoleError> {
        let config = rustyline::Config::builder()
            .history_ignore_space(true)
            .completion_type(rustyline::CompletionType::List)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(CompleteHelper { words }));
        Ok(TerminalConsole { editor })
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        // rustyline only draws the last line of a prompt
        let (before, last) = match prompt.rfind('\n') {
            Some(i) => (&prompt[..=i], &prompt[i + 1..]),
            None => ("", prompt),
        };
        if !before.is_empty() {
            print!("{}", before);
            let _ = std::io::stdout().flush();
        }
        match self.editor.readline(last) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    self.editor.add_history_entry(trimmed)?;
                }
                Ok(line)
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                Err(ConsoleError::Closed)
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                Err(ConsoleError::Closed)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn say(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Replays canned answers and records everything shown.
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedConsole {
    answers: std::collections::VecDeque<String>,
    pub transcript: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> ScriptedConsole {
        ScriptedConsole {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            transcript: vec![],
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.transcript.push(prompt.to_string());
        self.answers.pop_front().ok_or(ConsoleError::Closed)
    }

    fn say(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }
}
