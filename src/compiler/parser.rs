use super::scanner::{Tag, TagKind, Token};
use super::SyntaxError;
use std::iter::Peekable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    Text(String),
    /// `last` is set when no indentation must follow the newline.
    Newline { last: bool },
    Variable { name: String, escaped: bool },
    Partial { name: String, indent: String },
    Section {
        name: String,
        inverted: bool,
        nodes: Vec<Node>,
        /// UTF-16 range of the raw section body, handed to lambdas.
        start: usize,
        end: usize,
        delimiters: String,
    },
}

/// Nests the flat token list into a tree of sections.
pub(crate) fn parse(tokens: Vec<Token>) -> Result<Vec<Node>, SyntaxError> {
    let mut tokens = tokens.into_iter().peekable();
    let (nodes, _) = build_tree(&mut tokens, None)?;
    Ok(nodes)
}

/// Collects nodes until the closer of `opener`, returning them with the closer's offset.
fn build_tree<I>(tokens: &mut Peekable<I>, opener: Option<&Tag>) -> Result<(Vec<Node>, usize), SyntaxError>
where
    I: Iterator<Item = Token>,
{
    let mut nodes = Vec::new();

    while let Some(token) = tokens.next() {
        let tag = match token {
            Token::Text(text) => {
                nodes.push(Node::Text(text));
                continue;
            }
            Token::Newline => {
                let last = matches!(tokens.peek(), None | Some(Token::Newline));
                nodes.push(Node::Newline { last });
                continue;
            }
            Token::Tag(tag) => tag,
        };

        match tag.kind {
            TagKind::Section | TagKind::Inverted => {
                let (children, end) = build_tree(tokens, Some(&tag))?;
                nodes.push(Node::Section {
                    inverted: tag.kind == TagKind::Inverted,
                    nodes: children,
                    start: tag.offset,
                    end,
                    delimiters: format!("{} {}", tag.otag, tag.ctag),
                    name: tag.name,
                });
            }
            TagKind::Close => {
                return match opener {
                    None => Err(SyntaxError::ClosingWithoutOpener(tag.name)),
                    Some(open) if open.name != tag.name => Err(SyntaxError::NestingError {
                        opened: open.name.clone(),
                        closed: tag.name,
                    }),
                    Some(_) => Ok((nodes, tag.offset)),
                };
            }
            TagKind::Comment => {}
            TagKind::Partial => nodes.push(Node::Partial { name: tag.name, indent: tag.indent }),
            TagKind::Variable => nodes.push(Node::Variable { name: tag.name, escaped: true }),
            TagKind::Unescaped => nodes.push(Node::Variable { name: tag.name, escaped: false }),
        }
    }

    match opener {
        Some(open) => Err(SyntaxError::MissingClosingTag(open.name.clone())),
        None => Ok((nodes, 0)),
    }
}
