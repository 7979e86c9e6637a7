//! Interactive read-eval-print loop.

use colored::*;
use log::{info, warn};
use rustyline::error::ReadlineError;
use rustyline::Editor;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use super::helper::ReplHelper;
use crate::error::Error;
use crate::value::printer::write_leaf;
use crate::value::Value;


pub const VERSION_BANNER: &str = "simplysp version 0.0.0.0.1";
pub const EXIT_HINT: &str = "Press Ctrl+c to Exit";

/// Everything the loop needs that is decided before it starts.
#[derive(Clone, Debug)]
pub struct ReplOptions {
    pub prompt: String,
    pub history: Option<PathBuf>,
    pub color: bool,
    pub banner: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            prompt: "simplysp> ".to_string(),
            history: None,
            color: true,
            banner: true,
        }
    }
}


pub struct Repl {
    editor: Editor<ReplHelper>,
    options: ReplOptions,
}

impl Repl {
    pub fn new(options: ReplOptions) -> Repl {
        let mut editor = Editor::<ReplHelper>::new();
        editor.set_helper(Some(ReplHelper::new()));

        if let Some(path) = &options.history {
            if let Err(err) = editor.load_history(path) {
                info!("No history loaded from {}: {}", path.to_string_lossy(), err);
            }
        }

        Repl { editor, options }
    }

    /// Loops until Ctrl-C, Ctrl-D or a terminal I/O error, then saves history
    /// if configured.
    pub fn run(&mut self) -> Result<(), Error> {
        if self.options.banner {
            println!("{}", VERSION_BANNER);
            println!("{}", EXIT_HINT);
            println!();
        }

        loop {
            match self.editor.readline(&self.options.prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str());
                    }
                    println!("{}", respond(crate::STDIN, &line, self.options.color));
                }
                Err(err) => {
                    match &err {
                        ReadlineError::Interrupted => println!("^C"),
                        ReadlineError::Eof => println!("^D"),
                        _ => {
                            println!("[Readline Error]: {:?}", err);
                            println!();
                        }
                    }
                    if ends_session(&err) {
                        break;
                    }
                }
            }
        }

        if let Some(path) = &self.options.history {
            self.editor.save_history(path)?;
        }
        Ok(())
    }
}

/// Whether the loop should stop after err.
fn ends_session(err: &ReadlineError) -> bool {
    matches!(
        err,
        ReadlineError::Interrupted | ReadlineError::Eof | ReadlineError::Io(_)
    )
}


/// Evaluates each non-blank line of the file at path, printing a transcript.
pub fn run_file<P: AsRef<Path>>(path: P, color: bool) -> Result<(), Error> {
    let path = path.as_ref();
    let filename = path.to_string_lossy();
    let contents = fs::read_to_string(path)?;

    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        println!("> {}", line);
        println!("{}", respond(&filename, line, color));
        println!();
    }
    Ok(())
}

/// Text printed in reply to one line: the result, or the parse error.
pub fn respond(filename: &str, line: &str, color: bool) -> String {
    match crate::evaluate_named(filename, line) {
        Ok(value) => render(&value, color),
        Err(err) => err.to_string(),
    }
}

/// Renders value, optionally coloring parens by depth and Errors red.
pub fn render(value: &Value, color: bool) -> String {
    fn paren_color(depth: usize) -> (u8, u8, u8) {
        match depth % 6 {
            0 => (0, 255, 204),
            1 => (204, 51, 0),
            2 => (153, 255, 102),
            3 => (153, 102, 255),
            4 => (255, 255, 102),
            _ => (255, 179, 179),
        }
    }

    let mut out = String::new();
    let written = value.write_list(
        &mut out,
        0,
        &mut |writer, leaf, _depth| {
            if color && leaf.is_error() {
                write!(writer, "{}", leaf.to_string().as_str().red())
            } else {
                write_leaf(writer, leaf)
            }
        },
        &mut |writer, paren, depth| {
            if color {
                let (r, g, b) = paren_color(depth);
                write!(writer, "{}", paren.truecolor(r, g, b))
            } else {
                writer.write_str(paren)
            }
        },
    );
    if let Err(err) = written {
        warn!("render error: {:?}", err);
    }
    out
}


#[cfg(test)]
#[path = "./session_test.rs"]
mod session_test;
