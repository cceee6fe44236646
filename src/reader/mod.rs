/*
** This file is a part of mlreader (streaming markup tokenizer)
** Copyright (C) 2000-2025 Gurer Ozen
**
** mlreader is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

mod error;
mod location;
mod node;
mod scratch;

pub use error::ReadError;
pub(crate) use error::XmlError;
pub use location::Location;
pub use node::NodeKind;

use crate::entities;
use crate::source::ByteSource;
use scratch::Scratch;

/// Pull tokenizer for XML-like markup with a fixed size value buffer.
///
/// Each [advance()](Reader::advance) call pulls as many bytes as needed
/// from the bound [ByteSource] to produce exactly one node. The node is
/// inspected with [kind()](Reader::kind) and [value()](Reader::value).
/// Values are decoded into a buffer of `N` bytes inside the reader; a
/// value which does not fit produces a
/// [ReadError::Overflow] node instead of being truncated.
///
/// The reader never allocates. It keeps no stack of open elements and
/// does not check that end tags match start tags.
///
/// After an error node or [NodeKind::EndOfInput] the reader stops:
/// further `advance()` calls return false and leave the state alone.
///
/// # Examples
///
/// ```
/// use mlreader::{NodeKind, Reader, SliceSource};
///
/// let mut reader: Reader<_, 32> = Reader::with_source(SliceSource::new(b"<svg width='24'/>"));
///
/// let mut nodes = Vec::new();
/// while reader.advance() {
///     nodes.push((reader.kind(), reader.value_str().map(str::to_string)));
/// }
/// assert_eq!(
///     nodes,
///     [
///         (NodeKind::ElementOpen, Some("svg".to_string())),
///         (NodeKind::AttributeName, Some("width".to_string())),
///         (NodeKind::AttributeValue, Some("24".to_string())),
///         (NodeKind::AttributeClose, None),
///         (NodeKind::ElementClose, None),
///         (NodeKind::EndOfInput, None),
///     ]
/// );
/// ```
///
/// Errors arrive as nodes too:
/// ```
/// use mlreader::{NodeKind, ReadError, Reader, SliceSource};
///
/// let mut reader: Reader<_, 4> = Reader::with_source(SliceSource::new(b"<toolong/>"));
/// assert!(reader.advance());
/// assert_eq!(reader.kind(), NodeKind::Error(ReadError::Overflow));
/// println!("{} at {}", reader.error_description().unwrap(), reader.location());
/// assert!(!reader.advance());
/// ```
pub struct Reader<S, const N: usize> {
    source: Option<S>,
    phase: Phase,
    kind: NodeKind,
    has_value: bool,
    scratch: Scratch<N>,
    pending: Option<u8>,
    location: Location,
    error: Option<XmlError>,
}

/// Where the next advance() call resumes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Content,
    Markup,
    TagAttributes,
    AttributeValue,
    AttributeEnd,
    CommentBody,
    CommentEnd,
    PiBody,
    PiEnd,
    NotationBody,
    NotationEnd,
    EndOfInput,
    Stopped,
}

macro_rules! whitespace {
    () => {
        b' ' | b'\t' | b'\r' | b'\n'
    };
}

fn is_name_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_' || c == b':' || c >= 0x80
}

fn is_name_byte(c: u8) -> bool {
    !matches!(
        c,
        whitespace!() | b'<' | b'>' | b'/' | b'=' | b'?' | b'!' | b'&' | b'"' | b'\''
    )
}

const CDATA_START: &[u8] = b"CDATA[";

impl<S: ByteSource, const N: usize> Reader<S, N> {
    /// Creates a reader without a source.
    ///
    /// [advance()](Reader::advance) returns false until a source is bound
    /// with [set()](Reader::set).
    pub const fn new() -> Self {
        Reader {
            source: None,
            phase: Phase::Content,
            kind: NodeKind::StartOfDocument,
            has_value: false,
            scratch: Scratch::new(),
            pending: None,
            location: Location::new(),
            error: None,
        }
    }

    pub fn with_source(source: S) -> Self {
        let mut reader = Self::new();
        reader.source = Some(source);
        reader
    }

    /// Binds a new source and resets the reader to the start of a document.
    ///
    /// Any node in progress is discarded. The previously bound source is
    /// returned.
    pub fn set(&mut self, source: S) -> Option<S> {
        self.reset();
        self.source.replace(source)
    }

    /// Unbinds and returns the source, resetting the reader.
    ///
    /// The reader may hold one byte it pulled to find the end of a name
    /// but has not used yet. That byte is dropped here, so the returned
    /// source is positioned after it.
    pub fn take_source(&mut self) -> Option<S> {
        self.reset();
        self.source.take()
    }

    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    pub fn source_mut(&mut self) -> Option<&mut S> {
        self.source.as_mut()
    }

    /// Consumes the reader and returns its source.
    ///
    /// As with [take_source()](Reader::take_source), a byte pulled ahead
    /// and not yet used is lost.
    pub fn into_source(self) -> Option<S> {
        self.source
    }

    fn reset(&mut self) {
        self.phase = Phase::Content;
        self.kind = NodeKind::StartOfDocument;
        self.has_value = false;
        self.scratch.clear();
        self.pending = None;
        self.location = Location::new();
        self.error = None;
    }

    /// Size of the value buffer in bytes.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Kind of the current node.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Value of the current node, or `None` if the node kind has no value.
    ///
    /// The bytes are decoded but not checked for UTF-8 validity; raw input
    /// bytes are passed through as they are. The returned slice borrows the
    /// reader, so it has to be dropped before the next advance().
    pub fn value(&self) -> Option<&[u8]> {
        self.has_value.then(|| self.scratch.as_slice())
    }

    /// Value of the current node if it has one and it is valid UTF-8.
    pub fn value_str(&self) -> Option<&str> {
        self.value().and_then(|v| core::str::from_utf8(v).ok())
    }

    /// Position of the last byte pulled from the source.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Human readable reason of the current error node.
    pub fn error_description(&self) -> Option<&'static str> {
        self.error.map(XmlError::description)
    }

    /// Reads the next node.
    ///
    /// Returns false without doing anything if there is no bound source
    /// or if the reader has already produced an error node or
    /// [NodeKind::EndOfInput].
    pub fn advance(&mut self) -> bool {
        if self.phase == Phase::Stopped || self.source.is_none() {
            return false;
        }
        self.scratch.clear();
        self.has_value = false;
        match self.step() {
            Ok(kind) => {
                if kind == NodeKind::EndOfInput {
                    self.phase = Phase::Stopped;
                }
                self.kind = kind;
            }
            Err(err) => {
                self.scratch.clear();
                self.has_value = false;
                self.phase = Phase::Stopped;
                self.kind = NodeKind::Error(err.kind());
                self.error = Some(err);
            }
        }
        true
    }

    fn step(&mut self) -> Result<NodeKind, XmlError> {
        loop {
            let node = match self.phase {
                Phase::Content => self.content()?,
                Phase::Markup => self.markup()?,
                Phase::TagAttributes => self.tag_attributes()?,
                Phase::AttributeValue => Some(self.attribute_value()?),
                Phase::AttributeEnd => {
                    self.phase = Phase::TagAttributes;
                    Some(NodeKind::AttributeClose)
                }
                Phase::CommentBody => Some(self.comment_body()?),
                Phase::CommentEnd => {
                    self.phase = Phase::Content;
                    Some(NodeKind::CommentClose)
                }
                Phase::PiBody => Some(self.pi_body()?),
                Phase::PiEnd => {
                    self.phase = Phase::Content;
                    Some(NodeKind::PiClose)
                }
                Phase::NotationBody => Some(self.notation_body()?),
                Phase::NotationEnd => {
                    self.phase = Phase::Content;
                    Some(NodeKind::NotationClose)
                }
                Phase::EndOfInput | Phase::Stopped => Some(NodeKind::EndOfInput),
            };
            if let Some(kind) = node {
                return Ok(kind);
            }
        }
    }

    fn next(&mut self) -> Option<u8> {
        if let Some(c) = self.pending.take() {
            return Some(c);
        }
        let c = self.source.as_mut()?.next_byte()?;
        self.location.consume(c);
        Some(c)
    }

    fn unread(&mut self, c: u8) {
        self.pending = Some(c);
    }

    fn require(&mut self, eof: XmlError) -> Result<u8, XmlError> {
        self.next().ok_or(eof)
    }

    fn skip_whitespace(&mut self, eof: XmlError) -> Result<u8, XmlError> {
        loop {
            match self.require(eof)? {
                whitespace!() => (),
                c => return Ok(c),
            }
        }
    }

    fn valued(&mut self, kind: NodeKind) -> Result<NodeKind, XmlError> {
        self.has_value = true;
        Ok(kind)
    }

    /// Appends name bytes to the buffer and returns the byte which ended
    /// the name. That byte is left unread for the caller.
    fn read_name(&mut self, eof: XmlError) -> Result<u8, XmlError> {
        loop {
            let c = self.require(eof)?;
            if !is_name_byte(c) {
                self.unread(c);
                return Ok(c);
            }
            self.scratch.push(c)?;
        }
    }

    fn reference(&mut self) -> Result<(), XmlError> {
        let mut body = [0u8; entities::MAX_REFERENCE_LEN];
        let mut len = 0;
        loop {
            let c = self.require(XmlError::EofInReference)?;
            if c == b';' {
                break;
            }
            if !entities::is_reference_byte(c) {
                return Err(XmlError::ReferenceMissingEnd);
            }
            if len == body.len() {
                return Err(XmlError::ReferenceTooLong);
            }
            body[len] = c;
            len += 1;
        }
        let decoded = entities::decode(&body[..len])?;
        self.scratch.extend(decoded.as_bytes())?;
        Ok(())
    }

    fn content(&mut self) -> Result<Option<NodeKind>, XmlError> {
        loop {
            match self.next() {
                None => {
                    if self.scratch.is_empty() {
                        return Ok(Some(NodeKind::EndOfInput));
                    }
                    self.phase = Phase::EndOfInput;
                    return self.valued(NodeKind::Text).map(Some);
                }
                Some(b'<') => {
                    self.phase = Phase::Markup;
                    if self.scratch.is_empty() {
                        return Ok(None);
                    }
                    return self.valued(NodeKind::Text).map(Some);
                }
                Some(b'&') => self.reference()?,
                Some(c) => self.scratch.push(c)?,
            }
        }
    }

    fn markup(&mut self) -> Result<Option<NodeKind>, XmlError> {
        match self.require(XmlError::EofInMarkup)? {
            b'/' => self.close_tag().map(Some),
            b'?' => self.pi_open().map(Some),
            b'!' => self.declaration(),
            c if is_name_start(c) => {
                self.scratch.push(c)?;
                self.start_tag().map(Some)
            }
            _ => Err(XmlError::MarkupUnrecognized),
        }
    }

    fn declaration(&mut self) -> Result<Option<NodeKind>, XmlError> {
        match self.require(XmlError::EofInMarkup)? {
            b'-' => {
                if self.require(XmlError::EofInComment)? != b'-' {
                    return Err(XmlError::CommentMissingDash);
                }
                self.phase = Phase::CommentBody;
                Ok(Some(NodeKind::CommentOpen))
            }
            b'[' => self.cdata_section().map(Some),
            c @ b'A'..=b'Z' => {
                self.scratch.push(c)?;
                self.notation_open().map(Some)
            }
            _ => Err(XmlError::MarkupUnrecognized),
        }
    }

    fn start_tag(&mut self) -> Result<NodeKind, XmlError> {
        match self.read_name(XmlError::EofInTag)? {
            whitespace!() | b'/' | b'>' => {
                self.phase = Phase::TagAttributes;
                self.valued(NodeKind::ElementOpen)
            }
            _ => Err(XmlError::TagBadName),
        }
    }

    fn tag_attributes(&mut self) -> Result<Option<NodeKind>, XmlError> {
        match self.skip_whitespace(XmlError::EofInTag)? {
            b'/' => {
                if self.require(XmlError::EofInTag)? != b'>' {
                    return Err(XmlError::TagEmptyTagMissingEnd);
                }
                self.phase = Phase::Content;
                Ok(Some(NodeKind::ElementClose))
            }
            b'>' => {
                self.phase = Phase::Content;
                Ok(None)
            }
            c if is_name_start(c) => {
                self.scratch.push(c)?;
                match self.read_name(XmlError::EofInTag)? {
                    whitespace!() | b'=' => {
                        self.phase = Phase::AttributeValue;
                        self.valued(NodeKind::AttributeName).map(Some)
                    }
                    _ => Err(XmlError::TagAttributeBadName),
                }
            }
            _ => Err(XmlError::TagAttributeBadName),
        }
    }

    fn attribute_value(&mut self) -> Result<NodeKind, XmlError> {
        if self.skip_whitespace(XmlError::EofInTag)? != b'=' {
            return Err(XmlError::TagAttributeWithoutEqual);
        }
        let quote = match self.skip_whitespace(XmlError::EofInTag)? {
            c @ (b'"' | b'\'') => c,
            _ => return Err(XmlError::TagAttributeWithoutQuote),
        };
        loop {
            match self.require(XmlError::EofInAttributeValue)? {
                c if c == quote => break,
                b'&' => self.reference()?,
                b'<' => return Err(XmlError::TagAttributeBadValue),
                c => self.scratch.push(c)?,
            }
        }
        self.phase = Phase::AttributeEnd;
        self.valued(NodeKind::AttributeValue)
    }

    fn close_tag(&mut self) -> Result<NodeKind, XmlError> {
        self.read_name(XmlError::EofInCloseTag)?;
        if self.scratch.is_empty() {
            return Err(XmlError::CloseTagEmptyName);
        }
        if self.skip_whitespace(XmlError::EofInCloseTag)? != b'>' {
            return Err(XmlError::CloseTagBadEnd);
        }
        self.phase = Phase::Content;
        self.valued(NodeKind::ElementClose)
    }

    fn comment_body(&mut self) -> Result<NodeKind, XmlError> {
        let mut dashes = 0;
        loop {
            let c = self.require(XmlError::EofInComment)?;
            match (dashes, c) {
                (2, b'>') => break,
                (2, _) => return Err(XmlError::CommentDoubleDash),
                (_, b'-') => dashes += 1,
                (1, _) => {
                    self.scratch.extend(&[b'-', c])?;
                    dashes = 0;
                }
                _ => self.scratch.push(c)?,
            }
        }
        self.phase = Phase::CommentEnd;
        self.valued(NodeKind::CommentBody)
    }

    fn cdata_section(&mut self) -> Result<NodeKind, XmlError> {
        for &expected in CDATA_START {
            if self.require(XmlError::EofInCdata)? != expected {
                return Err(XmlError::CdataSectionBadStart);
            }
        }
        let mut brackets = 0;
        loop {
            match self.require(XmlError::EofInCdata)? {
                b']' if brackets == 2 => self.scratch.push(b']')?,
                b']' => brackets += 1,
                b'>' if brackets == 2 => break,
                c => {
                    for _ in 0..brackets {
                        self.scratch.push(b']')?;
                    }
                    brackets = 0;
                    self.scratch.push(c)?;
                }
            }
        }
        self.phase = Phase::Content;
        self.valued(NodeKind::Text)
    }

    fn pi_open(&mut self) -> Result<NodeKind, XmlError> {
        let c = self.read_name(XmlError::EofInPi)?;
        if self.scratch.is_empty() {
            return Err(XmlError::PiEmptyTarget);
        }
        match c {
            whitespace!() | b'?' => {
                self.phase = Phase::PiBody;
                self.valued(NodeKind::PiOpen)
            }
            _ => Err(XmlError::PiBadTarget),
        }
    }

    fn pi_body(&mut self) -> Result<NodeKind, XmlError> {
        let mut c = self.skip_whitespace(XmlError::EofInPi)?;
        let mut question = false;
        loop {
            match c {
                b'>' if question => break,
                b'?' => {
                    if question {
                        self.scratch.push(b'?')?;
                    }
                    question = true;
                }
                _ => {
                    if question {
                        self.scratch.push(b'?')?;
                        question = false;
                    }
                    self.scratch.push(c)?;
                }
            }
            c = self.require(XmlError::EofInPi)?;
        }
        self.scratch.trim_end_whitespace();
        self.phase = Phase::PiEnd;
        self.valued(NodeKind::PiBody)
    }

    fn notation_open(&mut self) -> Result<NodeKind, XmlError> {
        loop {
            match self.require(XmlError::EofInNotation)? {
                c @ b'A'..=b'Z' => self.scratch.push(c)?,
                c @ (whitespace!() | b'>') => {
                    self.unread(c);
                    break;
                }
                _ => return Err(XmlError::NotationBadKeyword),
            }
        }
        self.phase = Phase::NotationBody;
        self.valued(NodeKind::NotationOpen)
    }

    fn notation_body(&mut self) -> Result<NodeKind, XmlError> {
        let mut c = self.skip_whitespace(XmlError::EofInNotation)?;
        let mut depth = 0usize;
        let mut quote = None;
        loop {
            match quote {
                Some(q) => {
                    if c == q {
                        quote = None;
                    }
                }
                None => match c {
                    b'>' if depth == 0 => break,
                    b'"' | b'\'' => quote = Some(c),
                    b'[' => depth += 1,
                    b']' => depth = depth.saturating_sub(1),
                    _ => (),
                },
            }
            self.scratch.push(c)?;
            c = self.require(XmlError::EofInNotation)?;
        }
        self.scratch.trim_end_whitespace();
        self.phase = Phase::NotationEnd;
        self.valued(NodeKind::NotationBody)
    }
}

impl<S: ByteSource, const N: usize> Default for Reader<S, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, const N: usize> core::fmt::Debug for Reader<S, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Reader")
            .field("kind", &self.kind)
            .field("phase", &self.phase)
            .field("location", &self.location)
            .field("capacity", &N)
            .finish()
    }
}


#[cfg(doctest)]
mod nocompile;
