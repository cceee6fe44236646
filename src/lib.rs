/*
** This file is a part of mlreader (streaming markup tokenizer)
** Copyright (C) 2000-2025 Gurer Ozen
**
** mlreader is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

//! Allocation free pull tokenizer for XML-like markup.
//!
//! A [Reader] draws bytes one at a time from a [ByteSource] and turns
//! them into a stream of lexical nodes: element tags, attributes, text,
//! comments, processing instructions, notations (DOCTYPE and friends)
//! and CDATA sections. Node values are decoded into a scratch buffer of
//! `N` bytes owned by the reader, so the memory use is fixed at compile
//! time and nothing is allocated while parsing.
//!
//! The reader does not build a tree and does not check that end tags
//! match their start tags. Errors are reported as node kinds and stop
//! the reader for good.
//!
//! ```
//! use mlreader::{NodeKind, Reader, SliceSource};
//!
//! let mut reader: Reader<_, 64> = Reader::with_source(SliceSource::new(b"<a href='x'>hi</a>"));
//! let mut names = Vec::new();
//! while reader.advance() {
//!     match reader.kind() {
//!         NodeKind::ElementOpen => names.push(reader.value_str().unwrap().to_string()),
//!         NodeKind::Error(err) => panic!("bad markup: {}", err),
//!         _ => (),
//!     }
//! }
//! assert_eq!(names, ["a"]);
//! assert_eq!(reader.kind(), NodeKind::EndOfInput);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod entities;
mod reader;
mod source;

pub use reader::Location;
pub use reader::NodeKind;
pub use reader::ReadError;
pub use reader::Reader;

pub use source::ByteSource;
#[cfg(feature = "std")]
pub use source::ReadSource;
pub use source::SliceSource;
