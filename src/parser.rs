//! Recursive-descent parser over the token stream.
//!
//! Grammar:
//!
//! ```text
//! value   := dict | list | string | generic | "true" | "false" | "null"
//! dict    := "{" [ pair ("," pair)* ] "}"
//! list    := "[" [ value ("," value)* ] "]"
//! pair    := (string | label) "=" value
//! ```
//!
//! Each production is selected by its leading token, so parsing is a single
//! deterministic pass with one token of lookahead and no backtracking. A free
//! token is a label when it sits in key position (always a string) and a
//! generic when it sits in value position (subject to promotion); the literal
//! spellings `true`, `false` and `null` win over the generic production.
//!
//! The separator between key and value is `=`, never `:`. Input that uses
//! `:` is JSON, not this notation, and is rejected.

use crate::lexer::{Lexer, Spanned, Token};
use crate::promote::promote;
use crate::{Error, Map, ParseOptions, Result, Value};

pub(crate) struct Parser<'a> {
    lexer: Lexer<'a>,
    peeked: Option<Option<Spanned<'a>>>,
    depth: usize,
    max_depth: usize,
}

/// Parses one complete record, rejecting trailing input after the top-level
/// value.
pub(crate) fn parse_str(input: &str, options: &ParseOptions) -> Result<Value> {
    let mut parser = Parser::new(input, options.max_depth);
    let value = parser.parse_value()?;
    if let Some(extra) = parser.next_token()? {
        return Err(Error::syntax(
            extra.line,
            extra.col,
            format!("unexpected {} after end of value", extra.token),
        ));
    }
    Ok(value)
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, max_depth: usize) -> Self {
        Parser {
            lexer: Lexer::new(input),
            peeked: None,
            depth: 0,
            max_depth,
        }
    }

    fn next_token(&mut self) -> Result<Option<Spanned<'a>>> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.lexer.next_token(),
        }
    }

    fn peek_token(&mut self) -> Result<Option<Spanned<'a>>> {
        if self.peeked.is_none() {
            self.peeked = Some(self.lexer.next_token()?);
        }
        Ok(self.peeked.unwrap_or(None))
    }

    fn eof(&self, expected: &str) -> Error {
        let (line, col) = self.lexer.location();
        Error::unexpected_eof(line, col, expected)
    }

    fn parse_value(&mut self) -> Result<Value> {
        let spanned = self.next_token()?.ok_or_else(|| self.eof("a value"))?;
        match spanned.token {
            Token::LBrace => self.parse_dict(&spanned),
            Token::LBracket => self.parse_list(&spanned),
            Token::Quoted(s) => Ok(Value::String(s.to_string())),
            Token::Free("true") => Ok(Value::Bool(true)),
            Token::Free("false") => Ok(Value::Bool(false)),
            Token::Free("null") => Ok(Value::Null),
            Token::Free(s) => Ok(promote(s)),
            other => Err(Error::syntax(
                spanned.line,
                spanned.col,
                format!("expected a value, found {}", other),
            )),
        }
    }

    fn enter(&mut self, open: &Spanned<'a>) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(Error::syntax(
                open.line,
                open.col,
                format!("nesting depth exceeds limit of {}", self.max_depth),
            ));
        }
        Ok(())
    }

    fn parse_dict(&mut self, open: &Spanned<'a>) -> Result<Value> {
        self.enter(open)?;
        let mut map = Map::new();

        match self.peek_token()? {
            Some(Spanned {
                token: Token::RBrace,
                ..
            }) => {
                self.next_token()?;
                self.depth -= 1;
                return Ok(Value::Dict(map));
            }
            Some(_) => {}
            None => return Err(self.eof("a key or '}'")),
        }

        loop {
            let (key, value) = self.parse_pair()?;
            // Duplicate keys: last occurrence wins
            map.insert(key, value);

            let spanned = self
                .next_token()?
                .ok_or_else(|| self.eof("',' or '}'"))?;
            match spanned.token {
                Token::RBrace => break,
                Token::Comma => {}
                other => {
                    return Err(Error::syntax(
                        spanned.line,
                        spanned.col,
                        format!("expected ',' or '}}' after pair, found {}", other),
                    ))
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Dict(map))
    }

    fn parse_pair(&mut self) -> Result<(String, Value)> {
        let spanned = self.next_token()?.ok_or_else(|| self.eof("a key"))?;
        let key = match spanned.token {
            Token::Quoted(s) => s.to_string(),
            // Labels are coerced to strings; no promotion, no keyword match
            Token::Free(s) => s.to_string(),
            other => {
                return Err(Error::syntax(
                    spanned.line,
                    spanned.col,
                    format!("expected a key, found {}", other),
                ))
            }
        };

        let spanned = self
            .next_token()?
            .ok_or_else(|| self.eof("'=' after key"))?;
        if spanned.token != Token::Equals {
            return Err(Error::syntax(
                spanned.line,
                spanned.col,
                format!("expected '=' after key, found {}", spanned.token),
            ));
        }

        let value = self.parse_value()?;
        Ok((key, value))
    }

    fn parse_list(&mut self, open: &Spanned<'a>) -> Result<Value> {
        self.enter(open)?;
        let mut items = Vec::new();

        match self.peek_token()? {
            Some(Spanned {
                token: Token::RBracket,
                ..
            }) => {
                self.next_token()?;
                self.depth -= 1;
                return Ok(Value::List(items));
            }
            Some(_) => {}
            None => return Err(self.eof("a value or ']'")),
        }

        loop {
            items.push(self.parse_value()?);

            let spanned = self
                .next_token()?
                .ok_or_else(|| self.eof("',' or ']'"))?;
            match spanned.token {
                Token::RBracket => break,
                Token::Comma => {}
                other => {
                    return Err(Error::syntax(
                        spanned.line,
                        spanned.col,
                        format!("expected ',' or ']' after element, found {}", other),
                    ))
                }
            }
        }

        self.depth -= 1;
        Ok(Value::List(items))
    }
}
