//! Indentation-aware text buffer for emitted Objective-C source.

const INDENT: &str = "  ";

/// Accumulates emitted lines, tracking the current brace depth.
pub(crate) struct CodeWriter {
  buf: String,
  depth: usize,
}

impl CodeWriter {
  pub(crate) fn new() -> Self {
    Self {
      buf: String::new(),
      depth: 0,
    }
  }

  /// Writes one line at the current depth.
  pub(crate) fn emit(&mut self, line: &str) {
    for _ in 0..self.depth {
      self.buf.push_str(INDENT);
    }
    self.buf.push_str(line);
    self.buf.push('\n');
  }

  pub(crate) fn blank(&mut self) {
    self.buf.push('\n');
  }

  /// Emits `{open} {` ... `}`, running `body` one level deeper.
  pub(crate) fn block(&mut self, open: &str, body: impl FnOnce(&mut Self)) {
    self.block_with_close(open, "}", body);
  }

  /// As `block`, but with a caller-supplied closing line. Used for
  /// constructs like `typedef NS_ENUM(...) { ... };`.
  pub(crate) fn block_with_close(&mut self, open: &str, close: &str, body: impl FnOnce(&mut Self)) {
    self.emit(&format!("{open} {{"));
    self.depth += 1;
    body(self);
    self.depth -= 1;
    self.emit(close);
  }

  pub(crate) fn finish(self) -> String {
    self.buf
  }
}
