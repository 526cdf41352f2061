//! Ordered document tree and its JSON text form.
//!
//! Strings are escaped with a minimal rule: a newline becomes `\n`, a double quote or a backslash
//! is prefixed with a backslash, and every other byte is written as is. The rule is applied by
//! wrapping a `serde_json` formatter, so keys and values are escaped the same way.
use std::io;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::ser::{CharEscape, CompactFormatter, Formatter, PrettyFormatter};

use crate::error::Result;

/// A document node. Object keys keep their insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Int(i64),
    Double(f64),
    Float(f32),
    Text(String),
    List(Vec<Node>),
    Object(Vec<(String, Node)>),
}

impl Serialize for Node {
    fn serialize<S>(&self, s: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Null => s.serialize_unit(),
            Node::Int(v) => s.serialize_i64(*v),
            Node::Double(v) => s.serialize_f64(*v),
            Node::Float(v) => s.serialize_f32(*v),
            Node::Text(v) => s.serialize_str(v),
            Node::List(items) => {
                let mut seq = s.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Object(entries) => {
                let mut map = s.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

/// Escape `s` for inclusion between double quotes.
///
/// Only newline, double quote and backslash are escaped. This is the reference form of the rule:
/// the serializer's formatter writes the same bytes for every string and key it emits.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }

    out
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Compact,
    /// Two space indentation.
    Pretty,
}

/// Forwards layout to the wrapped formatter and overrides string escapes.
struct Escaping<F>(F);

impl<F: Formatter> Formatter for Escaping<F> {
    fn write_char_escape<W>(&mut self, w: &mut W, char_escape: CharEscape) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        use CharEscape::*;

        match char_escape {
            Quote => w.write_all(b"\\\""),
            ReverseSolidus => w.write_all(b"\\\\"),
            LineFeed => w.write_all(b"\\n"),
            Solidus => w.write_all(b"/"),
            Backspace => w.write_all(b"\x08"),
            FormFeed => w.write_all(b"\x0c"),
            CarriageReturn => w.write_all(b"\r"),
            Tab => w.write_all(b"\t"),
            AsciiControl(b) => w.write_all(&[b]),
        }
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.0.begin_array(w)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.0.end_array(w)
    }

    fn begin_array_value<W: ?Sized + io::Write>(&mut self, w: &mut W, first: bool) -> io::Result<()> {
        self.0.begin_array_value(w, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.0.end_array_value(w)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.0.begin_object(w)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.0.end_object(w)
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, w: &mut W, first: bool) -> io::Result<()> {
        self.0.begin_object_key(w, first)
    }

    fn end_object_key<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.0.end_object_key(w)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.0.begin_object_value(w)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.0.end_object_value(w)
    }
}

fn write_with<W, F>(w: W, node: &Node, f: F) -> Result<()>
where
    W: io::Write,
    F: Formatter,
{
    let mut ser = serde_json::Serializer::with_formatter(w, Escaping(f));
    node.serialize(&mut ser)?;
    Ok(())
}

pub fn to_writer<W: io::Write>(w: W, node: &Node, style: Style) -> Result<()> {
    match style {
        Style::Compact => write_with(w, node, CompactFormatter),
        Style::Pretty => write_with(w, node, PrettyFormatter::new()),
    }
}

pub fn to_string(node: &Node, style: Style) -> Result<String> {
    let mut buf = Vec::new();
    to_writer(&mut buf, node, style)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
