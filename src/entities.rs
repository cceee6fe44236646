/*
** This file is a part of mlreader (streaming markup tokenizer)
** Copyright (C) 2000-2025 Gurer Ozen
**
** mlreader is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use crate::reader::XmlError;

/// Longest accepted reference body between the `&` and the `;`.
///
/// Enough for every predefined entity and for any valid character
/// reference like `#x10FFFF` or `#1114111`.
pub(crate) const MAX_REFERENCE_LEN: usize = 8;

/// Characters allowed in a reference body before the `;`.
pub(crate) fn is_reference_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'#'
}

fn predefined(name: &[u8]) -> Option<u8> {
    match name {
        b"amp" => Some(b'&'),
        b"lt" => Some(b'<'),
        b"gt" => Some(b'>'),
        b"quot" => Some(b'"'),
        b"apos" => Some(b'\''),
        _ => None,
    }
}

fn is_valid_xml_char(c: u32) -> bool {
    matches!(c, 0x09 | 0x0a | 0x0d | 0x20..=0xd7ff | 0xe000..=0xfffd | 0x10000..=0x10ffff)
}

/// UTF-8 bytes of a decoded reference.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Decoded {
    buf: [u8; 4],
    len: usize,
}

impl Decoded {
    fn from_char(c: char) -> Self {
        let mut buf = [0; 4];
        let len = c.encode_utf8(&mut buf).len();
        Decoded { buf, len }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

fn numeric(digits: &[u8], radix: u32, bad_digit: XmlError) -> Result<Decoded, XmlError> {
    if digits.is_empty() {
        return Err(XmlError::ReferenceEmptyNumber);
    }
    let mut value: u32 = 0;
    for &c in digits {
        let digit = char::from(c).to_digit(radix).ok_or(bad_digit)?;
        value = value
            .checked_mul(radix)
            .and_then(|v| v.checked_add(digit))
            .ok_or(XmlError::ReferenceInvalidChar)?;
    }
    if !is_valid_xml_char(value) {
        return Err(XmlError::ReferenceInvalidChar);
    }
    char::from_u32(value)
        .map(Decoded::from_char)
        .ok_or(XmlError::ReferenceInvalidChar)
}

/// Decodes a reference body, which is the text between `&` and `;`.
pub(crate) fn decode(body: &[u8]) -> Result<Decoded, XmlError> {
    match body {
        [b'#', b'x', hex @ ..] => numeric(hex, 16, XmlError::ReferenceInvalidHex),
        [b'#', decimal @ ..] => numeric(decimal, 10, XmlError::ReferenceInvalidDecimal),
        name => predefined(name)
            .map(|c| Decoded::from_char(char::from(c)))
            .ok_or(XmlError::ReferenceUnknownEntity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(body: &str) -> Vec<u8> {
        decode(body.as_bytes()).unwrap().as_bytes().to_vec()
    }

    #[test]
    fn predefined_entities() {
        assert_eq!(decoded("amp"), b"&");
        assert_eq!(decoded("lt"), b"<");
        assert_eq!(decoded("gt"), b">");
        assert_eq!(decoded("quot"), b"\"");
        assert_eq!(decoded("apos"), b"'");
        assert_eq!(decode(b"nbsp"), Err(XmlError::ReferenceUnknownEntity));
        assert_eq!(decode(b"AMP"), Err(XmlError::ReferenceUnknownEntity));
        assert_eq!(decode(b""), Err(XmlError::ReferenceUnknownEntity));
    }

    #[test]
    fn character_references() {
        assert_eq!(decoded("#65"), b"A");
        assert_eq!(decoded("#x3B"), b";");
        assert_eq!(decoded("#x3b"), b";");
        assert_eq!(decoded("#x90"), "\u{90}".as_bytes());
        assert_eq!(decoded("#x900"), "\u{900}".as_bytes());
        assert_eq!(decoded("#x10abc"), "\u{10abc}".as_bytes());
        assert_eq!(decoded("#1114111"), "\u{10ffff}".as_bytes());
    }

    #[test]
    fn bad_character_references() {
        assert_eq!(decode(b"#"), Err(XmlError::ReferenceEmptyNumber));
        assert_eq!(decode(b"#x"), Err(XmlError::ReferenceEmptyNumber));
        assert_eq!(decode(b"#1a"), Err(XmlError::ReferenceInvalidDecimal));
        assert_eq!(decode(b"#Xaa"), Err(XmlError::ReferenceInvalidDecimal));
        assert_eq!(decode(b"#xa5g"), Err(XmlError::ReferenceInvalidHex));
        assert_eq!(decode(b"#8"), Err(XmlError::ReferenceInvalidChar));
        assert_eq!(decode(b"#0"), Err(XmlError::ReferenceInvalidChar));
        assert_eq!(decode(b"#xD800"), Err(XmlError::ReferenceInvalidChar));
        assert_eq!(decode(b"#xDfFf"), Err(XmlError::ReferenceInvalidChar));
        assert_eq!(decode(b"#xfFfE"), Err(XmlError::ReferenceInvalidChar));
        assert_eq!(decode(b"#x110000"), Err(XmlError::ReferenceInvalidChar));
        assert_eq!(decode(b"#xFFFFFFFFF"), Err(XmlError::ReferenceInvalidChar));
    }

    #[test]
    fn reference_bytes() {
        assert!(is_reference_byte(b'#'));
        assert!(is_reference_byte(b'x'));
        assert!(is_reference_byte(b'9'));
        assert!(!is_reference_byte(b';'));
        assert!(!is_reference_byte(b' '));
        assert!(!is_reference_byte(b'<'));
    }
}
