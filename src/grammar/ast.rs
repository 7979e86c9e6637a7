//! Generic parse tree handed from the grammar to the reader.
//!
//! Nodes are classified only by their tag string; see `tag` for the set
//! produced by this grammar.

use std::fmt;

use derive_getters::Getters;


pub mod tag {
    /// Top-level rule.
    pub const ROOT: &str = ">";
    pub const NUMBER: &str = "expr|number|regex";
    pub const SYMBOL: &str = "expr|symbol|char";
    /// Parenthesized group.
    pub const SEXPR: &str = "expr|sexpr|>";
    /// Literal `(` or `)`.
    pub const CHAR: &str = "char";
    /// Start/end of input anchors.
    pub const REGEX: &str = "regex";
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct AstNode {
    tag: String,
    contents: String,
    line: usize,
    col: usize,
    children: Vec<AstNode>,
}

impl AstNode {
    pub fn leaf<T: AsRef<str>, C: AsRef<str>>(tag: T, contents: C, line: usize, col: usize) -> Self {
        Self {
            tag: tag.as_ref().to_string(),
            contents: contents.as_ref().to_string(),
            line,
            col,
            children: Vec::new(),
        }
    }

    pub fn branch<T: AsRef<str>>(tag: T, line: usize, col: usize) -> Self {
        Self::leaf(tag, "", line, col)
    }

    pub fn push(&mut self, child: AstNode) {
        self.children.push(child);
    }

    pub fn children_num(&self) -> usize {
        self.children.len()
    }

    fn fmt_depth(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{}{} {}:{}", "  ".repeat(depth), self.tag, self.line, self.col)?;
        if !self.contents.is_empty() {
            write!(f, " '{}'", self.contents)?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.fmt_depth(f, depth + 1)?;
        }
        Ok(())
    }
}


/// Indented tree dump, one node per line.
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_depth(f, 0)
    }
}
