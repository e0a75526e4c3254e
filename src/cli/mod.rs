//! Interactive shell: a readline loop over the command pipeline.

use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::logic::Logic;
use crate::Result;

const PROMPT: &str = "tac> ";

/// Run the interactive loop until exit or end-of-input.
///
/// Each line goes through [`Logic::execute`]; feedback prints to stdout,
/// errors to stderr, and the loop continues after errors. Line history gets
/// every non-empty line (rustyline skips consecutive duplicates).
pub fn run(logic: &mut Logic) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    editor.set_history_ignore_dups(true)?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                match logic.execute(line) {
                    Ok(result) => {
                        println!("{}", result.feedback);
                        if result.exit {
                            break;
                        }
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C clears the pending line.
                continue;
            }
            Err(ReadlineError::Eof) => {
                debug!("end of input");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
