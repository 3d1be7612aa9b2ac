/// The command line, re-joined, with a caret under the offending position.
///
/// The `offset` counts characters across the tokens *without* the joining spaces.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(offset: usize, tokens: &[&str]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self.tokens.join(" ");
        let total: usize = self.tokens.iter().map(|token| token.chars().count()).sum();
        // Each space that precedes the offset shifts the caret by one.
        let mut spaces = 0;
        let mut seen = 0;

        for token in self.tokens.iter().take(self.tokens.len().saturating_sub(1)) {
            seen += token.chars().count();

            if seen <= self.offset {
                spaces += 1;
            }
        }

        let column = std::cmp::min(self.offset, total.saturating_sub(1)) + spaces;
        write!(f, "{line}\n{:column$}^", "")
    }
}
