use rustyline::completion::{Candidate, Completer};
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hint, Hinter};
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

use crate::builtins::Operator;
use crate::grammar::Tokenizer;


// Rustyline Helper for Repl.
pub struct ReplHelper;

pub struct ReplCandidate {
    operator: Operator,
}

impl ReplHelper {
    pub fn new() -> Self {
        Self
    }

    /// Operators whose name starts with prefix.
    pub fn candidates(&self, prefix: &str) -> Vec<ReplCandidate> {
        Operator::ALL
            .iter()
            .filter(|op| op.name().starts_with(prefix))
            .map(|&operator| ReplCandidate { operator })
            .collect()
    }

    /// Byte range of the symbol-like word surrounding pos.
    pub fn word_bounds(&self, line: &str, pos: usize) -> (usize, usize) {
        let mut start: usize = 0;
        let mut end: usize = line.len();
        for (i, c) in line.char_indices() {
            if c != '+' && c != '-' && c != '*' && c != '/' {
                if i < pos {
                    start = i + c.len_utf8();
                } else {
                    end = i;
                    break;
                }
            }
        }
        (start, end)
    }

    /// Whether input still has an unclosed '('.
    ///
    /// Malformed input counts as complete so that the error is reported
    /// instead of waiting for more lines.
    pub fn is_incomplete(&self, input: &str) -> bool {
        let mut tokenizer = Tokenizer::new();
        tokenizer.tokenize(input).is_ok()
            && !tokenizer.unmatched_close()
            && tokenizer.depth() > 0
    }
}

impl Default for ReplHelper {
    fn default() -> Self {
        Self::new()
    }
}


impl Completer for ReplHelper {
    type Candidate = ReplCandidate;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, _end) = self.word_bounds(line, pos);
        Ok((start, self.candidates(&line[start..pos])))
    }
}

impl Validator for ReplHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        if self.is_incomplete(ctx.input()) {
            Ok(ValidationResult::Incomplete)
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}


impl Helper for ReplHelper {}
impl Hinter for ReplHelper {
    type Hint = ReplCandidate;
}
impl Highlighter for ReplHelper {}


impl Candidate for ReplCandidate {
    fn display(&self) -> &str {
        self.operator.name()
    }

    fn replacement(&self) -> &str {
        self.operator.name()
    }
}

impl Hint for ReplCandidate {
    fn display(&self) -> &str {
        self.operator.name()
    }

    fn completion(&self) -> Option<&str> {
        Some(self.operator.name())
    }
}


#[cfg(test)]
#[path = "./helper_test.rs"]
mod helper_test;
