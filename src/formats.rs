//! Support for reading and writing GFA lines.
//!
//! The GFA format is a text-based format for representing sequence graphs.
//! See [the specification](https://github.com/GFA-spec/GFA-spec/blob/master/GFA1.md) for details.
//! Chunks store a subset of the format:
//!
//! * Segment lines: `S<TAB>id<TAB>sequence[<TAB>tag]*`, where the sequence
//!   may be the placeholder `*` and each tag is a `TAG:TYPE:VALUE` field.
//! * Link lines: `L<TAB>from<TAB>±<TAB>to<TAB>±<TAB>overlap`, where the
//!   overlap is either `*` or an integer followed by `M`.
//!
//! [`SegmentLine`] and [`LinkLine`] parse these records, and
//! [`write_gfa_segment`] / [`write_gfa_link`] render resident nodes and
//! adjacency entries back into the same grammar.

use crate::graph::{AdjEntry, Node, Side};

use std::fmt::{self, Display};
use std::io::{self, Write};


//-----------------------------------------------------------------------------

/// A typed auxiliary field attached to a segment line.
///
/// The field corresponds to a `TAG:TYPE:VALUE` string with a two-character
/// tag name and a single-character type. The value is kept verbatim so that
/// parsed fields round-trip to identical output.
///
/// # Examples
///
/// ```
/// use gfa_chunk::formats::TypedField;
///
/// let field = TypedField::parse("SN:Z:chr1").unwrap();
/// assert_eq!(field.tag(), [b'S', b'N']);
/// assert_eq!(field.value_type(), b'Z');
/// assert_eq!(field.value(), "chr1");
/// assert_eq!(field.to_string(), "SN:Z:chr1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypedField {
    tag: [u8; 2],
    value_type: u8,
    value: String,
}

impl TypedField {
    /// Parses the field from a `TAG:TYPE:VALUE` string.
    pub fn parse(field: &str) -> Result<Self, String> {
        let bytes = field.as_bytes();
        if bytes.len() < 5 || bytes[2] != b':' || bytes[4] != b':' {
            return Err(format!("Invalid typed field: {}", field));
        }
        Ok(TypedField {
            tag: [bytes[0], bytes[1]],
            value_type: bytes[3],
            value: field[5..].to_string(),
        })
    }

    /// Returns the tag of the field.
    pub fn tag(&self) -> [u8; 2] {
        self.tag
    }

    /// Returns the type character of the field.
    pub fn value_type(&self) -> u8 {
        self.value_type
    }

    /// Returns the value of the field as it appeared in the input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for TypedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f, "{}{}:{}:{}",
            self.tag[0] as char, self.tag[1] as char, self.value_type as char, self.value
        )
    }
}

//-----------------------------------------------------------------------------

/// A parsed GFA segment line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentLine {
    /// Name of the segment.
    pub id: String,
    /// Sequence, possibly the placeholder `*`.
    pub sequence: String,
    /// Auxiliary fields in input order.
    pub tags: Vec<TypedField>,
}

impl SegmentLine {
    /// Parses a segment line.
    ///
    /// Returns an error if the line is not a segment line with at least a
    /// name and a sequence, or if an auxiliary field is malformed.
    pub fn parse(line: &str) -> Result<Self, String> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 3 || fields[0] != "S" {
            return Err(format!("Invalid segment line: {}", line));
        }
        let mut tags: Vec<TypedField> = Vec::new();
        for field in fields[3..].iter() {
            tags.push(TypedField::parse(field)?);
        }
        Ok(SegmentLine {
            id: fields[1].to_string(),
            sequence: fields[2].to_string(),
            tags,
        })
    }
}

//-----------------------------------------------------------------------------

/// A parsed GFA link line.
///
/// The orientation characters are stored as flags: `-` on the first segment
/// means the link attaches to its start (`from_start`), and `-` on the second
/// segment means the link attaches to its end (`to_end`). A `*` overlap is
/// treated as 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkLine {
    /// Name of the first segment.
    pub from: String,
    /// `true` if the link attaches to the start of the first segment.
    pub from_start: bool,
    /// Name of the second segment.
    pub to: String,
    /// `true` if the link attaches to the end of the second segment.
    pub to_end: bool,
    /// Overlap length in bases.
    pub overlap: usize,
}

impl LinkLine {
    /// Parses a link line.
    ///
    /// Returns an error if the line is not a link line with two oriented
    /// segment names, or if the overlap is neither `*` nor `<int>M`.
    pub fn parse(line: &str) -> Result<Self, String> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 5 || fields[0] != "L" {
            return Err(format!("Invalid link line: {}", line));
        }
        let from_start = Self::parse_orientation(fields[2], line)?;
        let to_end = Self::parse_orientation(fields[4], line)?;
        let overlap = if fields.len() > 5 { Self::parse_overlap(fields[5], line)? } else { 0 };
        Ok(LinkLine {
            from: fields[1].to_string(),
            from_start,
            to: fields[3].to_string(),
            to_end,
            overlap,
        })
    }

    // Maps an orientation character to an attachment flag.
    fn parse_orientation(field: &str, line: &str) -> Result<bool, String> {
        match field {
            "+" => Ok(false),
            "-" => Ok(true),
            _ => Err(format!("Invalid orientation {} on link line: {}", field, line)),
        }
    }

    fn parse_overlap(field: &str, line: &str) -> Result<usize, String> {
        if field == "*" {
            return Ok(0);
        }
        let digits = field.strip_suffix('M').ok_or_else(|| {
            format!("Invalid overlap {} on link line: {}", field, line)
        })?;
        digits.parse::<usize>().map_err(|x| {
            format!("Invalid overlap {} on link line: {}", field, x)
        })
    }
}

//-----------------------------------------------------------------------------

/// Writes the segment line for a resident node.
///
/// An empty sequence is written as the placeholder `*`. Auxiliary fields are
/// written in their original order.
pub fn write_gfa_segment<T: Write>(node: &Node, output: &mut T) -> io::Result<()> {
    output.write_all(b"S\t")?;
    output.write_all(node.id().as_bytes())?;
    output.write_all(b"\t")?;
    if node.sequence().is_empty() {
        output.write_all(b"*")?;
    } else {
        output.write_all(node.sequence().as_bytes())?;
    }
    for tag in node.tags().iter() {
        output.write_all(b"\t")?;
        output.write_all(tag.to_string().as_bytes())?;
    }
    output.write_all(b"\n")?;
    Ok(())
}

/// Writes the link line for an adjacency entry of a node.
///
/// `from_side` is the side of the node the edge attaches to, and the entry
/// records the neighbor and the side of the neighbor. The orientations are
/// the inverse of the parsing flags: start-side attachment is `-` for the
/// first segment and `-` for the second means end-side attachment.
pub fn write_gfa_link<T: Write>(
    from_id: &str,
    from_side: Side,
    entry: &AdjEntry,
    output: &mut T
) -> io::Result<()> {
    output.write_all(b"L\t")?;
    output.write_all(from_id.as_bytes())?;
    match from_side {
        Side::Start => output.write_all(b"\t-\t")?,
        Side::End => output.write_all(b"\t+\t")?,
    }
    output.write_all(entry.neighbor.as_bytes())?;
    match entry.side {
        Side::Start => output.write_all(b"\t+\t")?,
        Side::End => output.write_all(b"\t-\t")?,
    }
    output.write_all(entry.overlap.to_string().as_bytes())?;
    output.write_all(b"M\n")?;
    Ok(())
}

//-----------------------------------------------------------------------------
