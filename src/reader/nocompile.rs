/*
** This file is a part of mlreader (streaming markup tokenizer)
** Copyright (C) 2000-2025 Gurer Ozen
**
** mlreader is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

/// # Must not compile tests
///
/// Node value cannot be kept across the next advance:
/// ```compile_fail
/// use mlreader::{Reader, SliceSource};
/// let mut reader: Reader<SliceSource<'_>, 16> = Reader::with_source(SliceSource::new(b"<a/>"));
/// reader.advance();
/// let name = reader.value();
/// reader.advance();
/// println!("{:?}", name);
/// ```
///
/// Node value cannot outlive the reader:
/// ```compile_fail
/// use mlreader::{Reader, SliceSource};
/// let name: Option<&[u8]>;
/// {
///     let mut reader: Reader<SliceSource<'_>, 16> = Reader::with_source(SliceSource::new(b"<a/>"));
///     reader.advance();
///     name = reader.value();
/// }
/// println!("{:?}", name);
/// ```
///
/// Rebinding the source invalidates the value too:
/// ```compile_fail
/// use mlreader::{Reader, SliceSource};
/// let mut reader: Reader<SliceSource<'_>, 16> = Reader::with_source(SliceSource::new(b"<a/>"));
/// reader.advance();
/// let name = reader.value_str();
/// reader.set(SliceSource::new(b"<b/>"));
/// println!("{:?}", name);
/// ```
///
/// Reader cannot outlive the bytes of its slice source:
/// ```compile_fail
/// use mlreader::{Reader, SliceSource};
/// let mut reader: Reader<SliceSource<'_>, 16>;
/// {
///     let bytes = b"<root/>".to_vec();
///     reader = Reader::with_source(SliceSource::new(&bytes));
/// }
/// reader.advance();
/// ```
struct MustNotCompileTests;
