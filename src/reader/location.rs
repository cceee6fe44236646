/*
** This file is a part of mlreader (streaming markup tokenizer)
** Copyright (C) 2000-2025 Gurer Ozen
**
** mlreader is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use core::fmt;

/// Position of the reader in its input.
///
/// Returned by [location()](crate::Reader::location). Every byte is
/// counted when it is pulled from the source. The reader sometimes pulls
/// one byte ahead to find where a name ends and hands it back to itself;
/// such a byte is still counted only once, so `bytes` always equals the
/// number of bytes taken from the source.
///
/// Lines start from one. The column is the number of bytes on the
/// current line up to and including the last pulled byte, which makes
/// an error location point at the offending byte.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Location {
    /// Bytes pulled from the source.
    pub bytes: usize,
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub const fn new() -> Self {
        Location {
            bytes: 0,
            line: 1,
            column: 0,
        }
    }

    pub(super) fn consume(&mut self, c: u8) {
        self.bytes += 1;
        match c {
            b'\n' => {
                self.line += 1;
                self.column = 0;
            }
            _ => self.column += 1,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (byte {})",
            self.line, self.column, self.bytes
        )
    }
}
