/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

//! Parser for template expressions.
//!
//! ```text
//! tree     := '[' '['? expr ']'
//! expr     := primary postfix*
//! primary  := string | integer | ident '(' (expr (',' expr)*)? ')'
//! postfix  := '.' ident | '[' expr ']'
//! string   := '\'' ( [^'] | '\'\'' )* '\''
//! ```
//!
//! Whitespace is allowed between tokens. Spans are byte offsets into the
//! original input, including the enclosing brackets.

use crate::TemplateError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub length: usize,
}

impl Span {
    fn between(start: usize, end: usize) -> Span {
        Span {
            start,
            length: end - start,
        }
    }

    fn end(&self) -> usize {
        self.start + self.length
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub span: Span,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Accessor {
    // .name
    Property(Identifier),
    // ['name'] or [0]
    Index(Box<Expression>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    StringLiteral {
        span: Span,
        // unquoted, with '' collapsed to '
        value: String,
    },
    IntegerLiteral {
        span: Span,
        value: i64,
    },
    FunctionCall {
        span: Span,
        name: Identifier,
        args: Vec<Expression>,
    },
    PropertyAccess {
        span: Span,
        base: Box<Expression>,
        accessor: Accessor,
    },
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::StringLiteral { span, .. }
            | Expression::IntegerLiteral { span, .. }
            | Expression::FunctionCall { span, .. }
            | Expression::PropertyAccess { span, .. } => *span,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxTree {
    pub span: Span,
    pub expression: Expression,
}

/// Returns true when the input should be evaluated as an expression.
/// `[[` escapes a literal string that starts with `[`.
pub fn is_expression(input: &str) -> bool {
    input.len() >= 2 && input.starts_with('[') && input.ends_with(']') && !input.starts_with("[[")
}

/// Strips the escape from a `[[...` literal.
pub fn unescape_literal(input: &str) -> &str {
    match input.strip_prefix("[[") {
        Some(_) => &input[1..],
        None => input,
    }
}

pub fn parse(input: &str) -> Result<SyntaxTree, TemplateError> {
    let mut parser = Parser { input, pos: 0 };
    parser.parse_tree().map_err(|message| TemplateError::Parse {
        input: input.to_string(),
        message,
    })
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn parse_tree(&mut self) -> Result<SyntaxTree, String> {
        if self.input.is_empty() {
            return Err("expression is empty".to_string());
        }
        self.expect('[')?;
        // '[[' form
        if self.peek() == Some('[') {
            self.pos += 1;
        }

        self.skip_whitespace();
        let expression = self.parse_expression()?;
        self.skip_whitespace();
        self.expect(']')?;

        if self.pos != self.input.len() {
            return Err(format!("unexpected trailing text at offset {}", self.pos));
        }

        Ok(SyntaxTree {
            span: Span::between(0, self.pos),
            expression,
        })
    }

    fn parse_expression(&mut self) -> Result<Expression, String> {
        let mut expression = self.parse_primary()?;

        loop {
            let checkpoint = self.pos;
            self.skip_whitespace();
            match self.peek() {
                Some('.') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    let identifier = self.parse_identifier()?;
                    let span = Span::between(expression.span().start, identifier.span.end());
                    expression = Expression::PropertyAccess {
                        span,
                        base: Box::new(expression),
                        accessor: Accessor::Property(identifier),
                    };
                }
                Some('[') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    let index = self.parse_expression()?;
                    self.skip_whitespace();
                    self.expect(']')?;
                    let span = Span::between(expression.span().start, self.pos);
                    expression = Expression::PropertyAccess {
                        span,
                        base: Box::new(expression),
                        accessor: Accessor::Index(Box::new(index)),
                    };
                }
                _ => {
                    self.pos = checkpoint;
                    return Ok(expression);
                }
            }
        }
    }

    fn parse_primary(&mut self) -> Result<Expression, String> {
        match self.peek() {
            Some('\'') => self.parse_string(),
            Some(c) if c.is_ascii_digit() || c == '-' => self.parse_integer(),
            Some(c) if is_identifier_start(c) => self.parse_function_call(),
            Some(c) => Err(format!("unexpected character '{}' at offset {}", c, self.pos)),
            None => Err("unexpected end of expression".to_string()),
        }
    }

    fn parse_string(&mut self) -> Result<Expression, String> {
        let start = self.pos;
        self.expect('\'')?;

        let mut value = String::new();
        loop {
            match self.peek() {
                Some('\'') => {
                    self.pos += 1;
                    if self.peek() == Some('\'') {
                        value.push('\'');
                        self.pos += 1;
                    } else {
                        break;
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.pos += c.len_utf8();
                }
                None => return Err(format!("unterminated string starting at offset {start}")),
            }
        }

        Ok(Expression::StringLiteral {
            span: Span::between(start, self.pos),
            value,
        })
    }

    fn parse_integer(&mut self) -> Result<Expression, String> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.pos += 1;
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }

        let text = &self.input[start..self.pos];
        let value = text
            .parse::<i64>()
            .map_err(|e| format!("invalid integer '{text}': {e}"))?;

        Ok(Expression::IntegerLiteral {
            span: Span::between(start, self.pos),
            value,
        })
    }

    fn parse_function_call(&mut self) -> Result<Expression, String> {
        let name = self.parse_identifier()?;
        self.skip_whitespace();
        self.expect('(')?;

        let mut args = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(')') {
            self.pos += 1;
        } else {
            loop {
                self.skip_whitespace();
                args.push(self.parse_expression()?);
                self.skip_whitespace();
                match self.peek() {
                    Some(',') => self.pos += 1,
                    Some(')') => {
                        self.pos += 1;
                        break;
                    }
                    Some(c) => {
                        return Err(format!(
                            "expected ',' or ')' but found '{}' at offset {}",
                            c, self.pos
                        ));
                    }
                    None => return Err(format!("unterminated call to '{}'", name.text)),
                }
            }
        }

        Ok(Expression::FunctionCall {
            span: Span::between(name.span.start, self.pos),
            name,
            args,
        })
    }

    fn parse_identifier(&mut self) -> Result<Identifier, String> {
        let start = self.pos;
        match self.peek() {
            Some(c) if is_identifier_start(c) => self.pos += 1,
            Some(c) => {
                return Err(format!(
                    "expected identifier but found '{}' at offset {}",
                    c, self.pos
                ));
            }
            None => return Err("expected identifier but found end of expression".to_string()),
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.pos += 1;
        }

        Ok(Identifier {
            span: Span::between(start, self.pos),
            text: self.input[start..self.pos].to_string(),
        })
    }

    fn expect(&mut self, expected: char) -> Result<(), String> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(c) => Err(format!(
                "expected '{}' but found '{}' at offset {}",
                expected, c, self.pos
            )),
            None => Err(format!("expected '{expected}' but found end of expression")),
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(input: &str) -> Expression {
        parse(input)
            .unwrap_or_else(|e| panic!("expected {input} to parse: {e}"))
            .expression
    }

    #[test]
    fn parses_nested_calls_with_property_access() {
        let input = "[reference(resourceId('Applications.Core/containers', 'backend')).bindings.web]";
        let tree = parse(input).expect("should parse");

        assert_eq!(tree.span, Span { start: 0, length: input.len() });
        let Expression::PropertyAccess { base, accessor, .. } = tree.expression else {
            panic!("expected property access at the root");
        };
        assert!(matches!(accessor, Accessor::Property(ref id) if id.text == "web"));

        let Expression::PropertyAccess { base, accessor, .. } = *base else {
            panic!("expected nested property access");
        };
        assert!(matches!(accessor, Accessor::Property(ref id) if id.text == "bindings"));

        let Expression::FunctionCall { name, args, span } = *base else {
            panic!("expected function call");
        };
        assert_eq!(name.text, "reference");
        assert_eq!(span.start, 1);
        assert_eq!(args.len(), 1);
        let Expression::FunctionCall { name, args, .. } = &args[0] else {
            panic!("expected inner function call");
        };
        assert_eq!(name.text, "resourceId");
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn parses_empty_string_literal() {
        let expression = parse_ok("['']");
        assert_eq!(
            expression,
            Expression::StringLiteral {
                span: Span { start: 1, length: 2 },
                value: String::new(),
            }
        );
    }

    #[test]
    fn parses_escaped_quote() {
        let expression = parse_ok("['it''s']");
        assert!(matches!(expression, Expression::StringLiteral { value, .. } if value == "it's"));
    }

    #[test]
    fn parses_double_bracket_form() {
        let expression = parse_ok("[['']");
        assert_eq!(expression.span(), Span { start: 2, length: 2 });
    }

    #[test]
    fn parses_calls_with_whitespace() {
        for input in ["[test()]", "[test ( )]", "[test ('foo' ,   'bar')]"] {
            assert!(matches!(parse_ok(input), Expression::FunctionCall { .. }), "{input}");
        }
    }

    #[test]
    fn parses_index_access() {
        let expression = parse_ok("[parameters('ports')[0]['name']]");
        let Expression::PropertyAccess { accessor, .. } = expression else {
            panic!("expected property access");
        };
        assert!(matches!(
            accessor,
            Accessor::Index(ref e) if matches!(**e, Expression::StringLiteral { ref value, .. } if value == "name")
        ));
    }

    #[test]
    fn rejects_invalid_expressions() {
        for input in [
            "",
            "foo",
            "[[[reference()]",
            "[[reference()]]",
            "reference()]",
            "reference()",
            "[reference()]foo",
            "[test (]",
            "[test ('foo',]",
            "[test ('foo' ,'bar',)]",
            "[test]",
            "[test().]",
        ] {
            assert!(parse(input).is_err(), "parsing {input:?} should not have succeeded");
        }
    }

    #[test]
    fn detects_expressions() {
        assert!(is_expression("[variables('a')]"));
        assert!(!is_expression("[[variables('a')]"));
        assert!(!is_expression("plain"));
        assert_eq!(unescape_literal("[[literal]"), "[literal]");
        assert_eq!(unescape_literal("plain"), "plain");
    }
}
