/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! CIF data blocks: tag/value pairs and loops
//!
//! Only the subset of CIF 1.1 syntax needed to read structures is handled:
//! `data_` blocks, `loop_` tables, quoted strings, `#` comments and
//! `;`-delimited text fields.

use super::errors::{InputError, Result};
use std::collections::HashMap;

/// A `loop_` table; tags are stored lower-cased
#[derive(Debug, Clone, Default)]
pub struct CifLoop {
    /// Column tags
    pub tags: Vec<String>,
    /// Row values, one entry per tag
    pub rows: Vec<Vec<String>>,
}

impl CifLoop {
    /// Column index of a tag (case-insensitive)
    pub fn column(&self, tag: &str) -> Option<usize> {
        let tag = tag.to_lowercase();
        self.tags.iter().position(|t| *t == tag)
    }

    /// Whether the loop contains a tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.column(tag).is_some()
    }
}

/// A single `data_` block
#[derive(Debug, Clone, Default)]
pub struct CifBlock {
    /// Block name (text after `data_`)
    pub name: String,
    /// Single-valued tags, lower-cased
    pub values: HashMap<String, String>,
    /// Loops in file order
    pub loops: Vec<CifLoop>,
}

impl CifBlock {
    /// Value of a single-valued tag (case-insensitive)
    pub fn value(&self, tag: &str) -> Option<&str> {
        self.values.get(&tag.to_lowercase()).map(String::as_str)
    }

    /// First loop containing any of the given tags
    pub fn find_loop(&self, tags: &[&str]) -> Option<&CifLoop> {
        self.loops
            .iter()
            .find(|l| tags.iter().any(|tag| l.has_tag(tag)))
    }
}

/// A lexical token; quoted strings are never tags or keywords
#[derive(Debug, Clone, PartialEq)]
struct Token {
    text: String,
    quoted: bool,
}

/// Split a line into tokens, honouring quotes and trailing comments
fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        if c == '#' {
            break;
        }

        if c == '\'' || c == '"' {
            // A quote closes only when followed by whitespace or end of line
            let start = i + 1;
            let mut end = start;
            while end < chars.len()
                && !(chars[end] == c && (end + 1 == chars.len() || chars[end + 1].is_whitespace()))
            {
                end += 1;
            }
            tokens.push(Token {
                text: chars[start..end.min(chars.len())].iter().collect(),
                quoted: true,
            });
            i = end + 1;
        } else {
            let start = i;
            while i < chars.len() && !chars[i].is_whitespace() {
                i += 1;
            }
            tokens.push(Token {
                text: chars[start..i].iter().collect(),
                quoted: false,
            });
        }
    }

    tokens
}

/// Incremental block builder driven token by token
#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<CifBlock>,
    current: Option<CifBlock>,
    pending_tag: Option<String>,
    open_loop: Option<CifLoop>,
    loop_in_header: bool,
    row: Vec<String>,
}

impl BlockBuilder {
    fn block(&mut self) -> &mut CifBlock {
        self.current.get_or_insert_with(CifBlock::default)
    }

    fn close_loop(&mut self, line: usize) -> Result<()> {
        if let Some(open) = self.open_loop.take() {
            if !self.row.is_empty() {
                return Err(InputError::ParseError {
                    line,
                    message: format!(
                        "loop with {} tags ends with an incomplete row of {} values",
                        open.tags.len(),
                        self.row.len()
                    ),
                });
            }
            if !open.tags.is_empty() {
                self.block().loops.push(open);
            }
        }
        self.loop_in_header = false;
        Ok(())
    }

    fn close_block(&mut self, line: usize) -> Result<()> {
        self.close_loop(line)?;
        if let Some(tag) = self.pending_tag.take() {
            return Err(InputError::ParseError {
                line,
                message: format!("tag {} has no value", tag),
            });
        }
        if let Some(block) = self.current.take() {
            self.blocks.push(block);
        }
        Ok(())
    }

    fn push_value(&mut self, value: String, line: usize) -> Result<()> {
        if let Some(tag) = self.pending_tag.take() {
            self.block().values.insert(tag, value);
            return Ok(());
        }

        let Some(open) = self.open_loop.as_mut() else {
            return Err(InputError::ParseError {
                line,
                message: format!("value '{}' outside of a tag or loop", value),
            });
        };
        if open.tags.is_empty() {
            return Err(InputError::ParseError {
                line,
                message: "loop_ without tags".to_string(),
            });
        }

        self.loop_in_header = false;
        self.row.push(value);
        if self.row.len() == open.tags.len() {
            open.rows.push(std::mem::take(&mut self.row));
        }
        Ok(())
    }

    fn push_token(&mut self, token: Token, line: usize) -> Result<()> {
        if token.quoted {
            return self.push_value(token.text, line);
        }

        let lower = token.text.to_lowercase();
        if lower.starts_with("data_") {
            self.close_block(line)?;
            self.current = Some(CifBlock {
                name: token.text["data_".len()..].to_string(),
                ..Default::default()
            });
        } else if lower == "loop_" {
            self.close_loop(line)?;
            self.open_loop = Some(CifLoop::default());
            self.loop_in_header = true;
        } else if lower.starts_with('_') {
            if let Some(tag) = &self.pending_tag {
                return Err(InputError::ParseError {
                    line,
                    message: format!("tag {} has no value", tag),
                });
            }
            if self.loop_in_header {
                if let Some(open) = self.open_loop.as_mut() {
                    open.tags.push(lower);
                }
            } else {
                self.close_loop(line)?;
                self.pending_tag = Some(lower);
            }
        } else {
            self.push_value(token.text, line)?;
        }
        Ok(())
    }
}

/// Parse CIF text into its data blocks
pub fn parse_blocks(content: &str) -> Result<Vec<CifBlock>> {
    let mut builder = BlockBuilder::default();
    let mut lines = content.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let line_number = index + 1;

        if let Some(first) = line.strip_prefix(';') {
            // Text field: runs until a line starting with ';'
            let mut text = first.to_string();
            let mut closed = false;
            for (_, next) in lines.by_ref() {
                if next.starts_with(';') {
                    closed = true;
                    break;
                }
                text.push('\n');
                text.push_str(next);
            }
            if !closed {
                return Err(InputError::ParseError {
                    line: line_number,
                    message: "unterminated text field".to_string(),
                });
            }
            builder.push_value(text.trim().to_string(), line_number)?;
            continue;
        }

        for token in tokenize(line) {
            builder.push_token(token, line_number)?;
        }
    }

    let last_line = content.lines().count();
    builder.close_block(last_line)?;
    Ok(builder.blocks)
}
