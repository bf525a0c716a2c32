// src/provision/env_file.rs
//! Lossless model of a line-oriented KEY=VALUE environment file
//!
//! Provisioning must rewrite exactly one entry and leave every other
//! byte of the file alone, so each line keeps its original text until
//! it is explicitly modified.

#[derive(Debug, Clone)]
enum Line {
    /// A KEY=VALUE entry; `raw` is the original text until modified
    Entry {
        key: String,
        value: String,
        raw: String,
    },
    /// Comment, blank line, or anything else we do not interpret
    Raw(String),
}

#[derive(Debug, Clone)]
pub struct EnvFile {
    lines: Vec<Line>,
    trailing_newline: bool,
}

impl EnvFile {
    pub fn parse(contents: &str) -> Self {
        let trailing_newline = contents.is_empty() || contents.ends_with('\n');
        let lines = contents
            .lines()
            .map(|line| {
                let trimmed = line.trim_start();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    return Line::Raw(line.to_string());
                }
                match line.split_once('=') {
                    Some((key, value)) => Line::Entry {
                        key: key.trim().to_string(),
                        value: value.trim().to_string(),
                        raw: line.to_string(),
                    },
                    None => Line::Raw(line.to_string()),
                }
            })
            .collect();

        Self {
            lines,
            trailing_newline,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Entry { key: k, value, .. } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Replace an existing entry in place, or append a new one
    pub fn set(&mut self, key: &str, value: &str) {
        for line in &mut self.lines {
            if let Line::Entry { key: k, value: v, raw } = line {
                if k == key {
                    *v = value.to_string();
                    *raw = format!("{key}={value}");
                    return;
                }
            }
        }
        self.lines.push(Line::Entry {
            key: key.to_string(),
            value: value.to_string(),
            raw: format!("{key}={value}"),
        });
        // An appended entry always terminates with a newline
        self.trailing_newline = true;
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            match line {
                Line::Entry { raw, .. } | Line::Raw(raw) => out.push_str(raw),
            }
        }
        if self.trailing_newline && !self.lines.is_empty() {
            out.push('\n');
        }
        out
    }
}
