//! Target Emitters
//!
//! These emitters implement the TargetEmitter port from the domain layer.
//! They turn a `ResolvedClass` into accessor class source for one language.

pub mod java;
pub mod php;

pub use java::JavaEmitter;
pub use php::PhpEmitter;

use crate::domain::ports::TargetEmitter;
use crate::domain::value_objects::Target;

/// Get all available emitters
pub fn all_emitters() -> Vec<Box<dyn TargetEmitter>> {
    Target::ALL.iter().map(|t| get_emitter(*t)).collect()
}

/// Get the emitter for a specific target
pub fn get_emitter(target: Target) -> Box<dyn TargetEmitter> {
    match target {
        Target::Java => Box::new(JavaEmitter::new()),
        Target::Php => Box::new(PhpEmitter::new()),
    }
}

/// Line-oriented source builder shared by the emitters
pub(crate) struct SourceWriter<'a> {
    out: String,
    indent: &'a str,
}

impl<'a> SourceWriter<'a> {
    pub(crate) fn new(indent: &'a str) -> Self {
        Self {
            out: String::new(),
            indent,
        }
    }

    /// Emit `text` at nesting `level`
    pub(crate) fn line(&mut self, level: usize, text: &str) {
        if text.is_empty() {
            self.out.push('\n');
            return;
        }
        for _ in 0..level {
            self.out.push_str(self.indent);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Header text, verbatim, followed by one blank line
    pub(crate) fn header(&mut self, header: Option<&str>) {
        if let Some(header) = header {
            self.out.push_str(header.trim_end_matches(['\n', '\r']));
            self.out.push_str("\n\n");
        }
    }

    /// `/** ... */` block, one ` * ` line per entry
    pub(crate) fn doc(&mut self, level: usize, lines: &[String]) {
        self.line(level, "/**");
        for line in lines.iter().flat_map(|l| l.lines()) {
            let line = escape_doc(line.trim_end());
            if line.is_empty() {
                self.line(level, " *");
            } else {
                self.line(level, &format!(" * {}", line));
            }
        }
        self.line(level, " */");
    }

    /// Single-line `/** text */` when possible, a block otherwise
    pub(crate) fn doc_compact(&mut self, level: usize, lines: &[String]) {
        match lines {
            [only] if !only.contains('\n') => {
                self.line(level, &format!("/** {} */", escape_doc(only.trim())))
            }
            _ => self.doc(level, lines),
        }
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

/// Keep free text from closing the comment it is embedded in
fn escape_doc(text: &str) -> String {
    text.replace("*/", "*\\/")
}

/// Package segments split on `.`, `/`, `\` and spaces, empty ones dropped
pub(crate) fn package_segments(package: &str) -> impl Iterator<Item = &str> {
    package
        .split(['.', '/', '\\', ' '])
        .filter(|segment| !segment.is_empty())
}
