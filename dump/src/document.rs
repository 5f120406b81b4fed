//! Indentation-aware json text assembly
use std::fmt::{Display, Write};

const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Object,
    Array,
}

#[derive(Debug)]
struct Frame {
    container: Container,
    nb_items: usize,
}

/// Accumulates a json document one token at a time.
///
/// Objects and arrays are opened and closed explicitly; separators and indentation are handled by
/// the builder. Unbalanced or misplaced calls are programming errors and panic.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    buffer: String,
    stack: Vec<Frame>,
    pending_key: bool,
    has_root: bool,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_object(&mut self) -> &mut Self {
        self.open(Container::Object, '{')
    }

    pub fn end_object(&mut self) -> &mut Self {
        self.close(Container::Object, '}')
    }

    pub fn begin_array(&mut self) -> &mut Self {
        self.open(Container::Array, '[')
    }

    pub fn end_array(&mut self) -> &mut Self {
        self.close(Container::Array, ']')
    }

    /// Starts a member of the current object; the next call must provide its value.
    pub fn key(&mut self, name: &str) -> &mut Self {
        assert!(!self.pending_key, "key {name:?} follows a key with no value");
        let depth = self.stack.len();
        let first = match self.stack.last_mut() {
            Some(frame) if frame.container == Container::Object => {
                frame.nb_items += 1;
                frame.nb_items == 1
            }
            _ => panic!("key {name:?} outside of an object"),
        };
        self.new_line(first, depth);
        self.buffer.push('"');
        escape_json_string(name, &mut self.buffer);
        self.buffer.push_str("\": ");
        self.pending_key = true;
        self
    }

    pub fn string_value(&mut self, value: &str) -> &mut Self {
        self.begin_value();
        self.buffer.push('"');
        escape_json_string(value, &mut self.buffer);
        self.buffer.push('"');
        self
    }

    /// Numbers and booleans, written with their `Display` form.
    pub fn literal_value<T: Display>(&mut self, value: T) -> &mut Self {
        self.raw_line(&value.to_string())
    }

    /// Writes already-rendered json text in value position, verbatim.
    pub fn raw_line(&mut self, text: &str) -> &mut Self {
        self.begin_value();
        self.buffer.push_str(text);
        self
    }

    /// Returns the finished document.
    pub fn serialize(self) -> String {
        assert!(
            self.stack.is_empty(),
            "document has {} unclosed containers",
            self.stack.len()
        );
        assert!(!self.pending_key, "document ends with a key with no value");
        let mut text = self.buffer;
        text.push('\n');
        text
    }

    fn open(&mut self, container: Container, token: char) -> &mut Self {
        self.begin_value();
        self.buffer.push(token);
        self.stack.push(Frame {
            container,
            nb_items: 0,
        });
        self
    }

    fn close(&mut self, container: Container, token: char) -> &mut Self {
        assert!(!self.pending_key, "closing {container:?} after a key with no value");
        let frame = match self.stack.pop() {
            Some(frame) if frame.container == container => frame,
            Some(frame) => panic!("closing {container:?} while {:?} is open", frame.container),
            None => panic!("closing {container:?} with nothing open"),
        };
        if frame.nb_items > 0 {
            self.buffer.push('\n');
            self.indent(self.stack.len());
        }
        self.buffer.push(token);
        self
    }

    fn begin_value(&mut self) {
        if self.pending_key {
            self.pending_key = false;
            return;
        }
        let depth = self.stack.len();
        let first = match self.stack.last_mut() {
            None => {
                assert!(!self.has_root, "document already has a root value");
                self.has_root = true;
                return;
            }
            Some(frame) if frame.container == Container::Array => {
                frame.nb_items += 1;
                frame.nb_items == 1
            }
            Some(_) => panic!("object member written without a key"),
        };
        self.new_line(first, depth);
    }

    fn new_line(&mut self, first: bool, depth: usize) {
        if !first {
            self.buffer.push(',');
        }
        self.buffer.push('\n');
        self.indent(depth);
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.buffer.push_str(INDENT);
        }
    }
}

/// Appends `input` to `out` with json string escapes applied.
pub fn escape_json_string(input: &str, out: &mut String) {
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '/' => out.push_str("\\/"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if u32::from(c) < 0x20 => {
                // writing to a String cannot fail
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
}
