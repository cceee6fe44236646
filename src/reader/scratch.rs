/*
** This file is a part of mlreader (streaming markup tokenizer)
** Copyright (C) 2000-2025 Gurer Ozen
**
** mlreader is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use super::error::BufferFull;

/// Fixed size value buffer of the reader.
///
/// Writes check the remaining room first and fail without touching the
/// buffer, so a value is never truncated silently.
pub(super) struct Scratch<const N: usize> {
    data: [u8; N],
    len: usize,
}

impl<const N: usize> Scratch<N> {
    pub(super) const fn new() -> Self {
        Scratch {
            data: [0; N],
            len: 0,
        }
    }

    pub(super) fn clear(&mut self) {
        self.len = 0;
    }

    pub(super) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(super) fn push(&mut self, c: u8) -> Result<(), BufferFull> {
        if self.len >= N {
            return Err(BufferFull);
        }
        self.data[self.len] = c;
        self.len += 1;
        Ok(())
    }

    pub(super) fn extend(&mut self, bytes: &[u8]) -> Result<(), BufferFull> {
        if bytes.len() > N - self.len {
            return Err(BufferFull);
        }
        self.data[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        Ok(())
    }

    pub(super) fn trim_end_whitespace(&mut self) {
        while self.len > 0 && self.data[self.len - 1].is_ascii_whitespace() {
            self.len -= 1;
        }
    }

    pub(super) fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }
}
