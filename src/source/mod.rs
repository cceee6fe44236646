/*
** This file is a part of mlreader (streaming markup tokenizer)
** Copyright (C) 2000-2025 Gurer Ozen
**
** mlreader is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

#[cfg(feature = "std")]
mod read;

#[cfg(feature = "std")]
pub use read::ReadSource;

/// A sequential, single pass supply of input bytes.
///
/// The [Reader](crate::Reader) pulls one byte at a time and never asks
/// to rewind. Returning `None` means the input is exhausted; the reader
/// treats it as final and will not call again within the same node.
pub trait ByteSource {
    /// Returns the next input byte, or `None` at the end of data.
    fn next_byte(&mut self) -> Option<u8>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn next_byte(&mut self) -> Option<u8> {
        (**self).next_byte()
    }
}

/// Byte source over an in-memory slice.
#[derive(Clone, Debug)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub const fn new(bytes: &'a [u8]) -> Self {
        SliceSource { bytes, pos: 0 }
    }

    /// Number of bytes handed out so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes which have not been read yet.
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    fn next_byte(&mut self) -> Option<u8> {
        let c = *self.bytes.get(self.pos)?;
        self.pos += 1;
        Some(c)
    }
}

impl<'a> From<&'a [u8]> for SliceSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        SliceSource::new(bytes)
    }
}

impl<'a> From<&'a str> for SliceSource<'a> {
    fn from(s: &'a str) -> Self {
        SliceSource::new(s.as_bytes())
    }
}
