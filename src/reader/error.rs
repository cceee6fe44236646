/*
** This file is a part of mlreader (streaming markup tokenizer)
** Copyright (C) 2000-2025 Gurer Ozen
**
** mlreader is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use core::fmt::Display;

/// Category of the error which stopped the [Reader](super::Reader).
///
/// Errors are delivered as [NodeKind::Error](super::NodeKind::Error) nodes.
/// The categories are kept few so callers can branch on them; the
/// exact reason is available as text via
/// [error_description()](super::Reader::error_description), and the
/// position via [location()](super::Reader::location).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ReadError {
    /// Input ended inside a tag, quoted value, comment, processing
    /// instruction, notation, CDATA section or reference.
    PrematureEof,

    /// A `&...;` reference is unknown, malformed, or not terminated.
    InvalidReference,

    /// An end tag is malformed. End tag names are never compared with
    /// start tag names, so this is purely a syntax problem.
    InvalidCloseTag,

    /// The decoded value does not fit into the scratch buffer.
    Overflow,

    /// Any other malformed markup.
    Syntax,
}

impl Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::PrematureEof => write!(f, "unexpected end of input"),
            ReadError::InvalidReference => write!(f, "invalid entity reference"),
            ReadError::InvalidCloseTag => write!(f, "invalid close tag"),
            ReadError::Overflow => write!(f, "value too long for buffer"),
            ReadError::Syntax => write!(f, "invalid markup syntax"),
        }
    }
}

impl core::error::Error for ReadError {}

/// Signals that the scratch buffer has no room left.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct BufferFull;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum XmlError {
    EofInMarkup,
    EofInTag,
    EofInAttributeValue,
    EofInCloseTag,
    EofInComment,
    EofInCdata,
    EofInPi,
    EofInNotation,
    EofInReference,
    ReferenceUnknownEntity,
    ReferenceMissingEnd,
    ReferenceTooLong,
    ReferenceEmptyNumber,
    ReferenceInvalidDecimal,
    ReferenceInvalidHex,
    ReferenceInvalidChar,
    CloseTagEmptyName,
    CloseTagBadEnd,
    BufferFull,
    MarkupUnrecognized,
    TagBadName,
    TagEmptyTagMissingEnd,
    TagAttributeBadName,
    TagAttributeWithoutEqual,
    TagAttributeWithoutQuote,
    TagAttributeBadValue,
    CommentMissingDash,
    CommentDoubleDash,
    CdataSectionBadStart,
    PiEmptyTarget,
    PiBadTarget,
    NotationBadKeyword,
}

impl XmlError {
    pub(crate) fn kind(self) -> ReadError {
        match self {
            XmlError::EofInMarkup
            | XmlError::EofInTag
            | XmlError::EofInAttributeValue
            | XmlError::EofInCloseTag
            | XmlError::EofInComment
            | XmlError::EofInCdata
            | XmlError::EofInPi
            | XmlError::EofInNotation => ReadError::PrematureEof,
            XmlError::EofInReference
            | XmlError::ReferenceUnknownEntity
            | XmlError::ReferenceMissingEnd
            | XmlError::ReferenceTooLong
            | XmlError::ReferenceEmptyNumber
            | XmlError::ReferenceInvalidDecimal
            | XmlError::ReferenceInvalidHex
            | XmlError::ReferenceInvalidChar => ReadError::InvalidReference,
            XmlError::CloseTagEmptyName | XmlError::CloseTagBadEnd => ReadError::InvalidCloseTag,
            XmlError::BufferFull => ReadError::Overflow,
            _ => ReadError::Syntax,
        }
    }

    pub(crate) fn description(self) -> &'static str {
        match self {
            XmlError::EofInMarkup => "Input ended right after '<'",
            XmlError::EofInTag => "Input ended inside a start tag",
            XmlError::EofInAttributeValue => "Input ended inside a quoted attribute value",
            XmlError::EofInCloseTag => "Input ended inside an end tag",
            XmlError::EofInComment => "Input ended inside a comment",
            XmlError::EofInCdata => "Input ended inside a character data section",
            XmlError::EofInPi => "Input ended inside a processing instruction",
            XmlError::EofInNotation => "Input ended inside a notation",
            XmlError::EofInReference => "Input ended before the reference was closed with ';'",
            XmlError::ReferenceUnknownEntity => "Only predefined entity references are supported",
            XmlError::ReferenceMissingEnd => "Reference must end with ';'",
            XmlError::ReferenceTooLong => "Reference is too long",
            XmlError::ReferenceEmptyNumber => "Character reference has no digits",
            XmlError::ReferenceInvalidDecimal => "Non digit in decimal character reference",
            XmlError::ReferenceInvalidHex => "Non hex digit in hexadecimal character reference",
            XmlError::ReferenceInvalidChar => "Character reference is not a valid XML character",
            XmlError::CloseTagEmptyName => "End tag has no name",
            XmlError::CloseTagBadEnd => "End tag must end with '>' after the name",
            XmlError::BufferFull => "Value does not fit into the buffer",
            XmlError::MarkupUnrecognized => "Markup is not a tag, comment, CDATA section, notation or PI",
            XmlError::TagBadName => "Tag name contains an invalid character",
            XmlError::TagEmptyTagMissingEnd => "Empty element tags must end after the '/'",
            XmlError::TagAttributeBadName => "Tag attribute name contains an invalid character",
            XmlError::TagAttributeWithoutEqual => "Tag attributes must have '=' before the value",
            XmlError::TagAttributeWithoutQuote => {
                "Tag attribute value must be in double or single quotes"
            }
            XmlError::TagAttributeBadValue => {
                "Tag attribute value cannot have '<' character without a reference"
            }
            XmlError::CommentMissingDash => "Comment tag should start with double dash",
            XmlError::CommentDoubleDash => "Comment tag should end after double dash",
            XmlError::CdataSectionBadStart => "Character data sections must start with '[CDATA['",
            XmlError::PiEmptyTarget => "Processing instruction has no target name",
            XmlError::PiBadTarget => "Processing instruction target contains an invalid character",
            XmlError::NotationBadKeyword => "Notation keyword must be uppercase letters",
        }
    }
}

impl From<BufferFull> for XmlError {
    fn from(_: BufferFull) -> Self {
        XmlError::BufferFull
    }
}
