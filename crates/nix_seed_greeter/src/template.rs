/* 📖 # Why a positional `%N%` template instead of `format!`?

`format!` needs its template at compile time. The greeting template is data carried by
`GreeterConfig`, so it is parsed at runtime into literal and placeholder segments.
Placeholders are positional and one-based (`%1%`, `%2%`, ...), `%%` is a literal percent sign.
Parsing happens once, rendering only walks the segments.
*/

use nix_seed_base::{SeedError, SeedResult, bail};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// One-based argument index
    Placeholder(usize),
}

/// A parsed message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl MessageTemplate {
    /// Parse a template string.
    ///
    /// Fails with `ErrorKind::Template` on an unterminated directive or an
    /// index that is not a positive integer.
    pub fn parse(source: &str) -> SeedResult<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find('%') {
            literal.push_str(&rest[..start]);
            let directive_offset = offset + start;
            let after = &rest[start + 1..];
            let Some(end) = after.find('%') else {
                return Err(Box::new(SeedError::template(
                    source,
                    directive_offset,
                    "unterminated directive",
                )));
            };
            let directive = &after[..end];
            if directive.is_empty() {
                literal.push('%');
            } else {
                let index = parse_index(directive).ok_or_else(|| {
                    Box::new(SeedError::template(
                        source,
                        directive_offset,
                        format!("invalid placeholder index '{}'", directive),
                    ))
                })?;
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(index));
            }
            let consumed = start + 1 + end + 1;
            rest = &rest[consumed..];
            offset += consumed;
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The template text as it was parsed.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Highest placeholder index referenced by the template, `0` if there is none.
    pub fn placeholder_count(&self) -> usize {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(index) => Some(*index),
                Segment::Literal(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Substitute `args` into the template.
    ///
    /// Exactly `placeholder_count()` arguments must be supplied.
    pub fn render(&self, args: &[&str]) -> SeedResult<String> {
        let expected = self.placeholder_count();
        if args.len() < expected {
            bail!(
                "Too few arguments for template '{}': expected {}, got {}",
                self.source,
                expected,
                args.len()
            );
        }
        if args.len() > expected {
            bail!(
                "Too many arguments for template '{}': expected {}, got {}",
                self.source,
                expected,
                args.len()
            );
        }

        let capacity = self.source.len() + args.iter().map(|arg| arg.len()).sum::<usize>();
        let mut rendered = String::with_capacity(capacity);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Placeholder(index) => rendered.push_str(args[index - 1]),
            }
        }
        Ok(rendered)
    }
}

fn parse_index(directive: &str) -> Option<usize> {
    if !directive.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    directive.parse::<usize>().ok().filter(|index| *index > 0)
}
