/*
** This file is a part of mlreader (streaming markup tokenizer)
** Copyright (C) 2000-2025 Gurer Ozen
**
** mlreader is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use std::io::ErrorKind;
use std::io::Read;

use super::ByteSource;

const CHUNK_SIZE: usize = 512;

/// Byte source on top of any [Read] implementation.
///
/// Bytes are pulled from the inner reader in small chunks kept inside
/// this struct, so there is no allocation. An I/O error ends the input
/// like a normal end of file would; the error itself is kept and can be
/// inspected with [take_error()](ReadSource::take_error) afterwards to
/// tell a truncated document from a broken stream.
///
/// ```
/// use mlreader::{NodeKind, ReadSource, Reader};
///
/// let file: &[u8] = b"<doc/>";
/// let mut reader: Reader<_, 32> = Reader::with_source(ReadSource::new(file));
/// assert!(reader.advance());
/// assert_eq!(reader.kind(), NodeKind::ElementOpen);
/// assert_eq!(reader.value(), Some(&b"doc"[..]));
/// ```
pub struct ReadSource<R> {
    inner: R,
    chunk: [u8; CHUNK_SIZE],
    pos: usize,
    len: usize,
    finished: bool,
    error: Option<std::io::Error>,
}

impl<R: Read> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        ReadSource {
            inner,
            chunk: [0; CHUNK_SIZE],
            pos: 0,
            len: 0,
            finished: false,
            error: None,
        }
    }

    /// Returns the I/O error which ended the input, if there was one.
    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill(&mut self) -> bool {
        loop {
            match self.inner.read(&mut self.chunk) {
                Ok(0) => {
                    self.finished = true;
                    return false;
                }
                Ok(n) => {
                    self.pos = 0;
                    self.len = n;
                    return true;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    self.error = Some(e);
                    return false;
                }
            }
        }
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn next_byte(&mut self) -> Option<u8> {
        if self.pos == self.len && (self.finished || !self.fill()) {
            return None;
        }
        let c = self.chunk[self.pos];
        self.pos += 1;
        Some(c)
    }
}

impl<R> std::fmt::Debug for ReadSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadSource")
            .field("buffered", &(self.len - self.pos))
            .field("finished", &self.finished)
            .field("error", &self.error)
            .finish()
    }
}
