//! URL path tokenizer.
//!
//! Splits a relative URL into its `/`-separated path segments. Blank
//! segments produced by leading, trailing or repeated separators are
//! skipped, so `"/Patient//123/"` yields `Patient` then `123`.

/// A cursor over the path segments of a URL.
///
/// Supports looking at the next segment without consuming it, which is what
/// the relative URL rewriter needs to classify the leading segment.
#[derive(Debug, Clone)]
pub struct UrlPathTokenizer<'a> {
    tokens: Vec<&'a str>,
    position: usize,
}

impl<'a> UrlPathTokenizer<'a> {
    /// Tokenizes the given path.
    pub fn new(path: &'a str) -> Self {
        let tokens = path.split('/').filter(|s| !s.is_empty()).collect();
        Self {
            tokens,
            position: 0,
        }
    }

    /// Returns `true` if there are unconsumed segments.
    pub fn has_more_tokens(&self) -> bool {
        self.position < self.tokens.len()
    }

    /// Returns the next segment without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.position).copied()
    }

    /// Consumes and returns the next segment.
    pub fn next_token(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    /// Returns the number of unconsumed segments.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }
}

impl<'a> Iterator for UrlPathTokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_has_no_tokens() {
        for path in ["", "/", "//", "///"] {
            let tokenizer = UrlPathTokenizer::new(path);
            assert!(!tokenizer.has_more_tokens(), "path {:?}", path);
            assert_eq!(tokenizer.peek(), None);
        }
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut tokenizer = UrlPathTokenizer::new("Patient/123");
        assert_eq!(tokenizer.peek(), Some("Patient"));
        assert_eq!(tokenizer.peek(), Some("Patient"));
        assert_eq!(tokenizer.next_token(), Some("Patient"));
        assert_eq!(tokenizer.peek(), Some("123"));
    }

    #[test]
    fn test_blank_segments_are_skipped() {
        let tokens: Vec<_> = UrlPathTokenizer::new("/Patient//123/").collect();
        assert_eq!(tokens, vec!["Patient", "123"]);
    }

    #[test]
    fn test_remaining() {
        let mut tokenizer = UrlPathTokenizer::new("clinic1/Patient/123/_history/2");
        assert_eq!(tokenizer.remaining(), 5);
        tokenizer.next_token();
        assert_eq!(tokenizer.remaining(), 4);
        assert_eq!(tokenizer.size_hint(), (4, Some(4)));
    }

    #[test]
    fn test_exhausted_tokenizer() {
        let mut tokenizer = UrlPathTokenizer::new("metadata");
        assert_eq!(tokenizer.next_token(), Some("metadata"));
        assert!(!tokenizer.has_more_tokens());
        assert_eq!(tokenizer.next_token(), None);
    }

    #[test]
    fn test_query_string_stays_on_segment() {
        let mut tokenizer = UrlPathTokenizer::new("Patient?name=smith");
        assert_eq!(tokenizer.peek(), Some("Patient?name=smith"));
    }
}
