use super::SyntaxError;

const DEFAULT_OTAG: &str = "{{";
const DEFAULT_CTAG: &str = "}}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagKind {
    Section,
    Inverted,
    Close,
    Comment,
    Partial,
    /// `{{name}}`, HTML escaped on render.
    Variable,
    /// `{{{name}}}` or `{{&name}}`.
    Unescaped,
}

impl TagKind {
    fn from_sigil(sigil: char) -> Option<Result<Self, SyntaxError>> {
        let kind = match sigil {
            '#' => TagKind::Section,
            '^' => TagKind::Inverted,
            '/' => TagKind::Close,
            '!' => TagKind::Comment,
            '>' => TagKind::Partial,
            '{' | '&' => TagKind::Unescaped,
            '<' | '$' => return Some(Err(SyntaxError::UnsupportedTag(sigil))),
            _ => return None,
        };
        Some(Ok(kind))
    }

    /// Tags that may sit alone on a line without producing output for it.
    fn is_standalone(self) -> bool {
        !matches!(self, TagKind::Variable | TagKind::Unescaped)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tag {
    pub kind: TagKind,
    pub name: String,
    pub otag: String,
    pub ctag: String,
    /// UTF-16 offset: start of the tag for closers, end of the tag otherwise.
    pub offset: usize,
    /// Leading whitespace of a standalone partial.
    pub indent: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Text(String),
    Newline,
    Tag(Tag),
}

struct Scanner<'a> {
    text: &'a str,
    tokens: Vec<Token>,
    buf: String,
    seen_tag: bool,
    line_start: usize,
    otag: String,
    ctag: String,
}

/// Splits `text` into tokens, dropping lines that hold only standalone tags and whitespace.
pub(crate) fn scan(text: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut scanner = Scanner {
        text,
        tokens: Vec::new(),
        buf: String::new(),
        seen_tag: false,
        line_start: 0,
        otag: DEFAULT_OTAG.to_string(),
        ctag: DEFAULT_CTAG.to_string(),
    };
    scanner.run()?;
    Ok(scanner.tokens)
}

impl Scanner<'_> {
    fn run(&mut self) -> Result<(), SyntaxError> {
        let mut i = 0;
        while let Some(c) = self.text[i..].chars().next() {
            if self.text[i..].starts_with(self.otag.as_str()) {
                self.add_buf();
                i = self.scan_tag(i)?;
            } else if c == '\n' {
                self.filter_line(false);
                i += 1;
            } else {
                self.buf.push(c);
                i += c.len_utf8();
            }
        }
        self.filter_line(true);
        Ok(())
    }

    /// Scans the tag opening at byte `start` and returns the byte index just after it.
    fn scan_tag(&mut self, start: usize) -> Result<usize, SyntaxError> {
        let mut i = start + self.otag.len();
        self.seen_tag = true;

        let sigil = self.text[i..].chars().next();
        if sigil == Some('=') {
            return self.change_delimiters(start, i + 1);
        }
        let kind = match sigil.and_then(TagKind::from_sigil) {
            Some(kind) => {
                i += 1;
                kind?
            }
            None => TagKind::Variable,
        };
        let triple = sigil == Some('{');

        let close = self.text[i..]
            .find(self.ctag.as_str())
            .map(|pos| i + pos)
            .ok_or(SyntaxError::UnclosedTag { offset: utf16_offset(self.text, start) })?;
        let mut name = self.text[i..close].trim().to_string();
        let mut end = close + self.ctag.len();
        let offset = match kind {
            TagKind::Close => utf16_offset(self.text, start),
            _ => utf16_offset(self.text, end),
        };

        if triple {
            if self.ctag == DEFAULT_CTAG {
                if !self.text[end..].starts_with('}') {
                    return Err(SyntaxError::UnclosedTag {
                        offset: utf16_offset(self.text, start),
                    });
                }
                end += 1;
            } else if let Some(stripped) = name.strip_suffix('}') {
                name = stripped.trim_end().to_string();
            }
        }

        self.tokens.push(Token::Tag(Tag {
            kind,
            name,
            otag: self.otag.clone(),
            ctag: self.ctag.clone(),
            offset,
            indent: String::new(),
        }));
        Ok(end)
    }

    /// Handles `{{=<% %>=}}`; `body` is the byte index just after the first `=`.
    fn change_delimiters(&mut self, start: usize, body: usize) -> Result<usize, SyntaxError> {
        let closer = format!("={}", self.ctag);
        let close = self.text[body..]
            .find(closer.as_str())
            .map(|pos| body + pos)
            .ok_or(SyntaxError::UnclosedDelimiterChange {
                offset: utf16_offset(self.text, start),
            })?;

        let spec = &self.text[body..close];
        let delimiters: Vec<&str> = spec.split_whitespace().collect();
        if delimiters.len() != 2 || delimiters.iter().any(|d| d.contains('=')) {
            return Err(SyntaxError::InvalidDelimiters(spec.trim().to_string()));
        }
        self.otag = delimiters[0].to_string();
        self.ctag = delimiters[1].to_string();
        Ok(close + closer.len())
    }

    fn add_buf(&mut self) {
        if !self.buf.is_empty() {
            self.tokens.push(Token::Text(std::mem::take(&mut self.buf)));
        }
    }

    fn line_is_whitespace(&self) -> bool {
        self.tokens[self.line_start..].iter().all(|token| match token {
            Token::Tag(tag) => tag.kind.is_standalone(),
            Token::Text(text) => text.chars().all(char::is_whitespace),
            Token::Newline => true,
        })
    }

    /// Closes the current line. A line holding only standalone tags loses its
    /// whitespace and its newline; the whitespace becomes the indent of a partial.
    fn filter_line(&mut self, at_end: bool) {
        self.add_buf();

        if self.seen_tag && self.line_is_whitespace() {
            let line = self.tokens.split_off(self.line_start);
            let mut pending_indent = None;
            for token in line {
                match token {
                    Token::Text(text) => pending_indent = Some(text),
                    Token::Tag(mut tag) => {
                        if let Some(indent) = pending_indent.take() {
                            if tag.kind == TagKind::Partial {
                                tag.indent = indent;
                            }
                        }
                        self.tokens.push(Token::Tag(tag));
                    }
                    Token::Newline => self.tokens.push(Token::Newline),
                }
            }
        } else if !at_end {
            self.tokens.push(Token::Newline);
        }

        self.seen_tag = false;
        self.line_start = self.tokens.len();
    }
}

/// Converts a byte index of `text` into the UTF-16 offset used by the JavaScript runtime.
fn utf16_offset(text: &str, byte_index: usize) -> usize {
    text[..byte_index].encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(kind: TagKind, name: &str, offset: usize) -> Token {
        Token::Tag(Tag {
            kind,
            name: name.to_string(),
            otag: "{{".to_string(),
            ctag: "}}".to_string(),
            offset,
            indent: String::new(),
        })
    }

    #[test]
    fn scans_text_and_variables() {
        let tokens = scan("Hello {{ name }}!").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Text("Hello ".into()),
                tag(TagKind::Variable, "name", 16),
                Token::Text("!".into()),
            ]
        );
    }

    #[test]
    fn keeps_newlines_of_content_lines() {
        let tokens = scan("a\nb").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Text("a".into()), Token::Newline, Token::Text("b".into())]
        );
    }

    #[test]
    fn drops_standalone_section_lines() {
        let tokens = scan("  {{#items}}\n{{.}}\n  {{/items}}\n").unwrap();
        let kinds: Vec<_> = tokens
            .iter()
            .map(|token| match token {
                Token::Tag(tag) => format!("{:?}", tag.kind),
                Token::Text(text) => format!("text:{text}"),
                Token::Newline => "nl".to_string(),
            })
            .collect();
        assert_eq!(kinds, vec!["Section", "Variable", "nl", "Close"]);
    }

    #[test]
    fn standalone_partial_records_indent() {
        let tokens = scan("  {{> row}}\n").unwrap();
        match &tokens[..] {
            [Token::Tag(tag)] => {
                assert_eq!(tag.kind, TagKind::Partial);
                assert_eq!(tag.name, "row");
                assert_eq!(tag.indent, "  ");
            }
            other => panic!("unexpected tokens: {other:?}"),
        }
    }

    #[test]
    fn triple_mustache_is_unescaped() {
        let tokens = scan("{{{html}}}x").unwrap();
        assert_eq!(tokens[1], Token::Text("x".into()));
        match &tokens[0] {
            Token::Tag(tag) => {
                assert_eq!(tag.kind, TagKind::Unescaped);
                assert_eq!(tag.name, "html");
            }
            other => panic!("unexpected token: {other:?}"),
        }
    }

    #[test]
    fn changes_delimiters() {
        let tokens = scan("{{=<% %>=}}<% name %>{{ kept }}").unwrap();
        match &tokens[0] {
            Token::Tag(tag) => {
                assert_eq!(tag.name, "name");
                assert_eq!(tag.otag, "<%");
                assert_eq!(tag.ctag, "%>");
            }
            other => panic!("unexpected token: {other:?}"),
        }
        assert_eq!(tokens[1], Token::Text("{{ kept }}".into()));
    }

    #[test]
    fn close_tag_offset_points_at_its_start() {
        let tokens = scan("{{#a}}é{{/a}}").unwrap();
        match &tokens[2] {
            Token::Tag(tag) => {
                assert_eq!(tag.kind, TagKind::Close);
                assert_eq!(tag.offset, 7);
            }
            other => panic!("unexpected token: {other:?}"),
        }
    }

    #[test]
    fn unclosed_tag_is_an_error() {
        assert_eq!(scan("Hello {{name"), Err(SyntaxError::UnclosedTag { offset: 6 }));
    }

    #[test]
    fn unsupported_tags_are_rejected() {
        assert_eq!(scan("{{<parent}}{{/parent}}"), Err(SyntaxError::UnsupportedTag('<')));
    }

    #[test]
    fn invalid_delimiters_are_rejected() {
        assert!(matches!(scan("{{=<%=}}"), Err(SyntaxError::InvalidDelimiters(_))));
    }
}
