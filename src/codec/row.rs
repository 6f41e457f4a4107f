use std::collections::HashMap;
use std::hash::Hash;

// Marker sequences the exporter substitutes for characters that would
// collide with the field and record delimiters. Must match the writer side
// of the export pipeline byte for byte.
const NEWLINE_MARK: &str = ";l/~";
const COMMA_MARK: &str = ":l/~";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    UnexpectedEnd,
    InvalidNumber { kind: &'static str, raw: String },
    InvalidBool { raw: String },
    InvalidEnum { name: &'static str, value: i32 },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::UnexpectedEnd => write!(f, "read past end of row"),
            DecodeError::InvalidNumber { kind, raw } => {
                write!(f, "invalid {} field '{}'", kind, raw)
            }
            DecodeError::InvalidBool { raw } => write!(f, "invalid bool field '{}'", raw),
            DecodeError::InvalidEnum { name, value } => {
                write!(f, "no {} variant with value {}", name, value)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Constructs a value by consuming its fields, in declared order, from the
/// reader. Implementations must consume exactly the fields belonging to the
/// type and leave the reader at the next unread field.
pub trait RowDecode: Sized {
    fn decode(reader: &mut RowReader<'_>) -> Result<Self, DecodeError>;
}

/// An enumeration carried on the wire as its underlying integer value.
pub trait FieldEnum: Sized + Copy {
    const NAME: &'static str;

    fn from_value(value: i32) -> Option<Self>;

    fn value(self) -> i32;
}

#[derive(Debug, Clone)]
pub struct RowReader<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> RowReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub fn remaining(&self) -> &'a str {
        &self.text[self.pos.min(self.text.len())..]
    }

    pub fn read_raw(&mut self) -> Result<&'a str, DecodeError> {
        // Consuming the final field advances one past the end of the text;
        // position == length still reads a trailing empty field.
        if self.pos > self.text.len() {
            return Err(DecodeError::UnexpectedEnd);
        }
        let rest = &self.text[self.pos..];
        let (field, advance) = match rest.find(',') {
            Some(idx) => (&rest[..idx], idx + 1),
            None => (rest, rest.len() + 1),
        };
        self.pos += advance;
        Ok(field)
    }

    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        self.parse_field("i32")
    }

    pub fn read_i64(&mut self) -> Result<i64, DecodeError> {
        self.parse_field("i64")
    }

    pub fn read_f32(&mut self) -> Result<f32, DecodeError> {
        self.parse_field("f32")
    }

    pub fn read_f64(&mut self) -> Result<f64, DecodeError> {
        self.parse_field("f64")
    }

    pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
        let raw = self.read_raw()?;
        if raw.eq_ignore_ascii_case("true") {
            return Ok(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return Ok(false);
        }
        Err(DecodeError::InvalidBool {
            raw: raw.to_string(),
        })
    }

    pub fn read_string(&mut self) -> Result<String, DecodeError> {
        let raw = self.read_raw()?;
        Ok(raw.replace(NEWLINE_MARK, "\n").replace(COMMA_MARK, ","))
    }

    pub fn read_enum<E: FieldEnum>(&mut self) -> Result<E, DecodeError> {
        let value = self.read_i32()?;
        E::from_value(value).ok_or(DecodeError::InvalidEnum {
            name: E::NAME,
            value,
        })
    }

    pub fn read_seq<T, F>(&mut self, mut element: F) -> Result<Vec<T>, DecodeError>
    where
        F: FnMut(&mut Self) -> Result<T, DecodeError>,
    {
        let len = self.read_len()?;
        // A declared length can exceed what the line actually holds; cap
        // the preallocation by the remaining text.
        let mut items = Vec::with_capacity(len.min(self.remaining().len() + 1));
        for _ in 0..len {
            items.push(element(self)?);
        }
        Ok(items)
    }

    pub fn read_map<K, V, FK, FV>(
        &mut self,
        mut key: FK,
        mut value: FV,
    ) -> Result<HashMap<K, V>, DecodeError>
    where
        K: Eq + Hash,
        FK: FnMut(&mut Self) -> Result<K, DecodeError>,
        FV: FnMut(&mut Self) -> Result<V, DecodeError>,
    {
        let pairs = self.read_seq(|reader| {
            let k = key(reader)?;
            let v = value(reader)?;
            Ok((k, v))
        })?;
        Ok(pairs.into_iter().collect())
    }

    pub fn read_record<R: RowDecode>(&mut self) -> Result<R, DecodeError> {
        R::decode(self)
    }

    fn read_len(&mut self) -> Result<usize, DecodeError> {
        let raw = self.read_raw()?;
        let len = raw.trim().parse::<u32>().map_err(|_| DecodeError::InvalidNumber {
            kind: "length",
            raw: raw.to_string(),
        })?;
        Ok(len as usize)
    }

    fn parse_field<T: std::str::FromStr>(
        &mut self,
        kind: &'static str,
    ) -> Result<T, DecodeError> {
        let raw = self.read_raw()?;
        raw.trim()
            .parse::<T>()
            .map_err(|_| DecodeError::InvalidNumber {
                kind,
                raw: raw.to_string(),
            })
    }
}

#[derive(Debug, Default, Clone)]
pub struct RowWriter {
    line: String,
    fields: usize,
}

impl RowWriter {
    pub fn new() -> Self {
        Self {
            line: String::new(),
            fields: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.line
    }

    pub fn into_string(self) -> String {
        self.line
    }

    pub fn write_raw(&mut self, field: &str) {
        if self.fields > 0 {
            self.line.push(',');
        }
        self.line.push_str(field);
        self.fields += 1;
    }

    pub fn write_i32(&mut self, value: i32) {
        self.write_raw(&value.to_string());
    }

    pub fn write_i64(&mut self, value: i64) {
        self.write_raw(&value.to_string());
    }

    pub fn write_f32(&mut self, value: f32) {
        self.write_raw(&value.to_string());
    }

    pub fn write_f64(&mut self, value: f64) {
        self.write_raw(&value.to_string());
    }

    pub fn write_bool(&mut self, value: bool) {
        self.write_raw(if value { "true" } else { "false" });
    }

    pub fn write_string(&mut self, value: &str) {
        let escaped = value.replace('\n', NEWLINE_MARK).replace(',', COMMA_MARK);
        self.write_raw(&escaped);
    }

    pub fn write_enum<E: FieldEnum>(&mut self, value: E) {
        self.write_i32(value.value());
    }

    pub fn write_len(&mut self, len: usize) {
        self.write_raw(&len.to_string());
    }

    pub fn write_seq<T, F>(&mut self, items: &[T], mut element: F)
    where
        F: FnMut(&mut Self, &T),
    {
        self.write_len(items.len());
        for item in items {
            element(self, item);
        }
    }
}
