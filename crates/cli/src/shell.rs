use ordset::{Bucket, Cursor, OrdSet};
use std::io::{self, Write};

/// Whether the read loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Command interpreter over one set. Every command runs against the current
/// bucket; the cursor belongs to that bucket and is reset by `USE`.
pub struct Shell<'a> {
    set: &'a OrdSet,
    bucket: Bucket<'a>,
    cursor: Cursor<'a>,
}

impl<'a> Shell<'a> {
    pub fn new(set: &'a OrdSet, bucket: &str) -> Self {
        let bucket = set.bucket(bucket);
        let cursor = bucket.cursor();
        Self {
            set,
            bucket,
            cursor,
        }
    }

    pub fn bucket_name(&self) -> &str {
        self.bucket.name()
    }

    /// Runs one input line, writing the response to `out`.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Ok(Flow::Continue);
        };

        match cmd.to_uppercase().as_str() {
            "PUT" => match parts.next() {
                Some(k) => {
                    if self.bucket.put(k) {
                        writeln!(out, "OK")?;
                    } else {
                        writeln!(out, "EXISTS")?;
                    }
                }
                None => writeln!(out, "ERR usage: PUT key")?,
            },
            "HAS" => match parts.next() {
                Some(k) => writeln!(out, "{}", self.bucket.has(k))?,
                None => writeln!(out, "ERR usage: HAS key")?,
            },
            "DEL" => match parts.next() {
                Some(k) => {
                    if self.bucket.delete(k) {
                        writeln!(out, "OK")?;
                    } else {
                        writeln!(out, "(nil)")?;
                    }
                }
                None => writeln!(out, "ERR usage: DEL key")?,
            },
            "KEYS" => {
                let keys = self.bucket.keys();
                if keys.is_empty() {
                    writeln!(out, "(empty)")?;
                } else {
                    for k in &keys {
                        writeln!(out, "{}", k)?;
                    }
                    writeln!(out, "({} keys)", keys.len())?;
                }
            }
            "USE" => {
                let name = parts.next().unwrap_or("");
                self.bucket = self.set.bucket(name);
                self.cursor = self.bucket.cursor();
                tracing::debug!(bucket = name, "switched bucket");
                writeln!(out, "OK")?;
            }
            "LAST" => print_key(out, self.cursor.last())?,
            "PREV" => print_key(out, self.cursor.prev())?,
            "STATS" => writeln!(out, "{:?}", self.set)?,
            "EXIT" | "QUIT" => {
                writeln!(out, "bye")?;
                return Ok(Flow::Exit);
            }
            other => writeln!(out, "unknown command: {}", other)?,
        }

        Ok(Flow::Continue)
    }
}

fn print_key<W: Write>(out: &mut W, key: Option<String>) -> io::Result<()> {
    match key {
        Some(k) => writeln!(out, "{}", k),
        None => writeln!(out, "(nil)"),
    }
}
