//! Tokenizer for the record notation.
//!
//! Three token classes come out of the lexer: the structural delimiters
//! `{ } [ ] , =`, quoted strings, and free tokens. Free tokens are maximal
//! runs containing none of the structural characters; whitespace inside a
//! run is part of the token, whitespace at either end of it is not. That
//! asymmetry is what lets `label with spaces` or `Kitchen 1` survive as
//! single tokens while `{ a = 1 }` still means the same as `{a=1}`.
//!
//! Quoted strings run from `"` to the next unescaped `"`. A `\"` pair is
//! consumed as two characters of content; no de-escaping is performed, the
//! backslash stays in the token text.

use crate::{Error, Result};
use std::fmt;

/// One lexed token, borrowing its text from the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token<'a> {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Equals,
    /// Content between the outer quotes, escape sequences left intact.
    Quoted(&'a str),
    /// Free token with boundary whitespace already trimmed.
    Free(&'a str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LBrace => write!(f, "'{{'"),
            Token::RBrace => write!(f, "'}}'"),
            Token::LBracket => write!(f, "'['"),
            Token::RBracket => write!(f, "']'"),
            Token::Comma => write!(f, "','"),
            Token::Equals => write!(f, "'='"),
            Token::Quoted(s) => write!(f, "string \"{}\"", s),
            Token::Free(s) => write!(f, "token `{}`", s),
        }
    }
}

/// A token plus the line/column where it starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Spanned<'a> {
    pub token: Token<'a>,
    pub line: usize,
    pub col: usize,
}

const fn is_structural(ch: char) -> bool {
    matches!(ch, '{' | '}' | '[' | ']' | ',' | '=')
}

pub(crate) struct Lexer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Line/column of the next unconsumed character.
    pub(crate) fn location(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.input[self.position..].chars().next()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Produces the next token, or `None` at end of input.
    pub(crate) fn next_token(&mut self) -> Result<Option<Spanned<'a>>> {
        self.skip_whitespace();

        let (line, col) = (self.line, self.column);
        let Some(ch) = self.peek_char() else {
            return Ok(None);
        };

        let token = match ch {
            '{' | '}' | '[' | ']' | ',' | '=' => {
                self.next_char();
                match ch {
                    '{' => Token::LBrace,
                    '}' => Token::RBrace,
                    '[' => Token::LBracket,
                    ']' => Token::RBracket,
                    ',' => Token::Comma,
                    _ => Token::Equals,
                }
            }
            '"' => self.lex_quoted(line, col)?,
            _ => self.lex_free(),
        };

        Ok(Some(Spanned { token, line, col }))
    }

    fn lex_quoted(&mut self, line: usize, col: usize) -> Result<Token<'a>> {
        self.next_char(); // opening quote
        let start = self.position;

        while let Some(ch) = self.next_char() {
            match ch {
                '"' => {
                    let end = self.position - '"'.len_utf8();
                    return Ok(Token::Quoted(&self.input[start..end]));
                }
                // An escaped quote does not terminate; both characters stay
                // in the content as-is.
                '\\' => {
                    self.next_char();
                }
                _ => {}
            }
        }

        Err(Error::unexpected_eof(
            line,
            col,
            "closing '\"' for string opened here",
        ))
    }

    fn lex_free(&mut self) -> Token<'a> {
        // Maximal run without structural characters; interior quotes and
        // whitespace are part of the token.
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if is_structural(ch) {
                break;
            }
            self.next_char();
        }
        // Leading whitespace was consumed by skip_whitespace; only the
        // trailing edge needs trimming.
        Token::Free(self.input[start..self.position].trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token<'_>> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        while let Some(spanned) = lexer.next_token().unwrap() {
            out.push(spanned.token);
        }
        out
    }

    #[test]
    fn test_structural_tokens() {
        assert_eq!(
            tokens("{ } [ ] , ="),
            vec![
                Token::LBrace,
                Token::RBrace,
                Token::LBracket,
                Token::RBracket,
                Token::Comma,
                Token::Equals,
            ]
        );
    }

    #[test]
    fn test_free_token_boundary_trim() {
        assert_eq!(tokens("  abc  "), vec![Token::Free("abc")]);
        assert_eq!(
            tokens("{ key = value }"),
            vec![
                Token::LBrace,
                Token::Free("key"),
                Token::Equals,
                Token::Free("value"),
                Token::RBrace,
            ]
        );
    }

    #[test]
    fn test_free_token_interior_whitespace_preserved() {
        assert_eq!(
            tokens("label with spaces=3.14"),
            vec![
                Token::Free("label with spaces"),
                Token::Equals,
                Token::Free("3.14"),
            ]
        );
        assert_eq!(
            tokens("  this is some string with spaces but without quotes  "),
            vec![Token::Free(
                "this is some string with spaces but without quotes"
            )]
        );
    }

    #[test]
    fn test_free_token_interior_quote() {
        // A quote not at the start of the run is just a character
        assert_eq!(tokens("it's a 5\" screen"), vec![Token::Free("it's a 5\" screen")]);
    }

    #[test]
    fn test_free_token_path_like() {
        assert_eq!(
            tokens("orcatech_data/json/home_2001/nyce-w-6975_26288.json"),
            vec![Token::Free("orcatech_data/json/home_2001/nyce-w-6975_26288.json")]
        );
    }

    #[test]
    fn test_quoted_string() {
        assert_eq!(tokens(r#""hello world""#), vec![Token::Quoted("hello world")]);
        assert_eq!(tokens(r#"  ""  "#), vec![Token::Quoted("")]);
    }

    #[test]
    fn test_quoted_escaped_quote_kept_literal() {
        assert_eq!(
            tokens(r#""And Bob is \" my uncle""#),
            vec![Token::Quoted(r#"And Bob is \" my uncle"#)]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let mut lexer = Lexer::new(r#"  "no end"#);
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.position(), Some((1, 3)));
    }

    #[test]
    fn test_token_positions() {
        let mut lexer = Lexer::new("{a=1,\n b=2}");
        let mut spans = Vec::new();
        while let Some(spanned) = lexer.next_token().unwrap() {
            spans.push((spanned.line, spanned.col));
        }
        assert_eq!(
            spans,
            vec![
                (1, 1), // {
                (1, 2), // a
                (1, 3), // =
                (1, 4), // 1
                (1, 5), // ,
                (2, 2), // b
                (2, 3), // =
                (2, 4), // 2
                (2, 5), // }
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokens(""), Vec::<Token<'_>>::new());
        assert_eq!(tokens("   \n\t "), Vec::<Token<'_>>::new());
    }
}
