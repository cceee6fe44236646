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

use super::ReadError;

/// Kind of the node produced by the last [advance()](super::Reader::advance) call.
///
/// The comments list the value each kind carries in
/// [value()](super::Reader::value). Kinds without a value always return `None`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    /// Nothing has been read yet. No value.
    StartOfDocument,

    /// Start of a tag. Value is the tag name.
    ///
    /// Attribute nodes of the tag follow this node.
    ElementOpen,

    /// End of an element.
    ///
    /// For an end tag like `</a>` the value is the name as written. For an
    /// empty element tag like `<a/>` there is no value. Names are not
    /// checked against the open elements.
    ElementClose,

    /// Attribute name. Value is the name.
    AttributeName,

    /// Attribute value with the references decoded. Value is the text.
    AttributeValue,

    /// End of an attribute. No value.
    AttributeClose,

    /// Start of a comment. No value.
    CommentOpen,

    /// Raw comment text between `<!--` and `-->`.
    CommentBody,

    /// End of a comment. No value.
    CommentClose,

    /// Start of a processing instruction. Value is the target name.
    PiOpen,

    /// Processing instruction text, trimmed of surrounding whitespace.
    PiBody,

    /// End of a processing instruction. No value.
    PiClose,

    /// Start of a notation like `<!DOCTYPE`. Value is the keyword.
    NotationOpen,

    /// Notation text up to the closing `>`, trimmed of surrounding whitespace.
    NotationBody,

    /// End of a notation. No value.
    NotationClose,

    /// Character data with the references decoded, or the literal
    /// content of a CDATA section.
    Text,

    /// Input is finished. No value, and the reader is stopped.
    EndOfInput,

    /// Input is malformed. No value, and the reader is stopped.
    Error(ReadError),
}

impl NodeKind {
    pub fn is_error(&self) -> bool {
        matches!(self, NodeKind::Error(_))
    }

    pub fn error(&self) -> Option<ReadError> {
        match self {
            NodeKind::Error(err) => Some(*err),
            _ => None,
        }
    }

    /// Returns true if no more nodes will follow this one.
    pub fn is_terminal(&self) -> bool {
        matches!(self, NodeKind::EndOfInput | NodeKind::Error(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::StartOfDocument => "start-of-document",
            NodeKind::ElementOpen => "element-open",
            NodeKind::ElementClose => "element-close",
            NodeKind::AttributeName => "attribute-name",
            NodeKind::AttributeValue => "attribute-value",
            NodeKind::AttributeClose => "attribute-close",
            NodeKind::CommentOpen => "comment-open",
            NodeKind::CommentBody => "comment-body",
            NodeKind::CommentClose => "comment-close",
            NodeKind::PiOpen => "pi-open",
            NodeKind::PiBody => "pi-body",
            NodeKind::PiClose => "pi-close",
            NodeKind::NotationOpen => "notation-open",
            NodeKind::NotationBody => "notation-body",
            NodeKind::NotationClose => "notation-close",
            NodeKind::Text => "text",
            NodeKind::EndOfInput => "end-of-input",
            NodeKind::Error(ReadError::PrematureEof) => "error-eof",
            NodeKind::Error(ReadError::InvalidReference) => "error-reference",
            NodeKind::Error(ReadError::InvalidCloseTag) => "error-close-tag",
            NodeKind::Error(ReadError::Overflow) => "error-overflow",
            NodeKind::Error(ReadError::Syntax) => "error-syntax",
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
