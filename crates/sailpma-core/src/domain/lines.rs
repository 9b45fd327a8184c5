//! Line-oriented view of a text file.
//!
//! Target files are treated as opaque ordered lists of lines — no YAML or
//! PHP parsing happens anywhere in this crate. Mutation is a splice: new
//! text is appended to an existing line with an embedded `\n`, and
//! [`LineSequence::to_text`] turns the embedded breaks back into real lines.

/// An ordered sequence of text lines with terminators stripped.
///
/// Remembers whether the source text ended with a newline so a read →
/// mutate → write round trip does not silently drop the final terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSequence {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl LineSequence {
    /// Split `text` into lines, stripping terminators.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(String::from).collect(),
            trailing_newline: text.ends_with('\n'),
        }
    }

    /// Borrow the underlying lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the sequence holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Splice `text` in after the line at `index` by appending it to that
    /// line with an embedded line break.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds. Callers obtain `index` from the
    /// anchor locator, which guarantees a valid position.
    pub fn append_to(&mut self, index: usize, text: &str) {
        let line = &mut self.lines[index];
        line.push('\n');
        line.push_str(text);
    }

    /// Exact-match membership test, used to detect an already-injected
    /// service block.
    pub fn contains_line(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line == needle)
    }

    /// Join the lines back into file content.
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        if self.trailing_newline {
            text.push('\n');
        }
        text
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
