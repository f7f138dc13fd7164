//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use deadcode_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::cpp()
///     .include("DeadCodeTrick.h")
///     .blank()
///     .braced("bool Anchor()", |b| b.line("return true;"))
///     .build();
///
/// assert_eq!(
///     code,
///     "#include \"DeadCodeTrick.h\"\n\nbool Anchor()\n{\n    return true;\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn cpp() -> Self {
        Self::new(Indent::CPP)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a quoted `#include` directive.
    pub fn include(self, path: &str) -> Self {
        self.line(&format!("#include \"{}\"", path))
    }

    /// Add an Allman-style brace block: header, `{`, indented body, `}`.
    pub fn braced<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).line("{").indent();
        f(builder).dedent().line("}")
    }

    /// Add a namespace block.
    ///
    /// Namespace bodies are not indented and the closing brace carries a
    /// `// namespace` comment.
    pub fn namespace<F>(self, name: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(&format!("namespace {}", name)).line("{");
        f(builder).line(&format!("}} // namespace {}", name))
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Consume the builder and return the code without its final newline.
    pub fn build_unterminated(self) -> String {
        let mut code = self.buffer;
        if code.ends_with('\n') {
            code.pop();
        }
        code
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::cpp()
    }
}
