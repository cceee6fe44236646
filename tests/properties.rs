/*
** This file is a part of mlreader (streaming markup tokenizer)
** Copyright (C) 2000-2025 Gurer Ozen
**
** mlreader is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

#![cfg(feature = "std")]

use std::io::Cursor;

use proptest::prelude::*;

use mlreader::ByteSource;
use mlreader::NodeKind;
use mlreader::ReadSource;
use mlreader::Reader;
use mlreader::SliceSource;

// Bytes biased toward markup so most inputs get past the first '<'.
fn markup_bytes() -> impl Strategy<Value = Vec<u8>> {
    let byte = prop_oneof![
        4 => prop::sample::select(b"<>/?!-[]&;#x='\" \nabAB01".to_vec()),
        1 => any::<u8>(),
    ];
    prop::collection::vec(byte, 0..96)
}

fn collect<const N: usize>(source: impl ByteSource) -> Vec<(NodeKind, Option<Vec<u8>>)> {
    let mut reader: Reader<_, N> = Reader::with_source(source);
    let mut nodes = Vec::new();
    while reader.advance() {
        nodes.push((reader.kind(), reader.value().map(<[u8]>::to_vec)));
    }
    nodes
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;")
}

proptest! {
    #[test]
    fn stream_always_ends(input in markup_bytes()) {
        let mut reader: Reader<_, 8> = Reader::with_source(SliceSource::new(&input));
        let limit = 4 * input.len() + 8;
        let mut steps = 0;
        let mut last_bytes = 0;
        while reader.advance() {
            steps += 1;
            prop_assert!(steps <= limit);
            let kind = reader.kind();
            if let Some(value) = reader.value() {
                prop_assert!(value.len() <= 8);
            }
            if kind.is_error() {
                prop_assert!(reader.value().is_none());
                prop_assert!(reader.error_description().is_some());
            }
            let bytes = reader.location().bytes;
            prop_assert!(bytes >= last_bytes);
            prop_assert!(bytes <= input.len());
            last_bytes = bytes;
        }
        prop_assert!(reader.kind().is_terminal());
        let terminal = reader.kind();
        prop_assert!(!reader.advance());
        prop_assert_eq!(reader.kind(), terminal);
    }

    #[test]
    fn sources_agree(input in markup_bytes()) {
        let from_slice = collect::<16>(SliceSource::new(&input));
        let from_read = collect::<16>(ReadSource::new(Cursor::new(input.clone())));
        prop_assert_eq!(from_slice, from_read);
    }

    #[test]
    fn escaped_text_is_restored(text in ".{1,100}") {
        let doc = format!("<p>{}</p>", escape_text(&text));
        let nodes = collect::<1024>(SliceSource::from(doc.as_str()));
        prop_assert_eq!(nodes.len(), 4);
        prop_assert_eq!(nodes[1].0, NodeKind::Text);
        prop_assert_eq!(nodes[1].1.as_deref(), Some(text.as_bytes()));
        prop_assert_eq!(nodes[3].0, NodeKind::EndOfInput);
    }

    #[test]
    fn escaped_attribute_is_restored(value in ".{0,100}") {
        let escaped = escape_text(&value).replace('"', "&quot;");
        let doc = format!("<p v=\"{}\"/>", escaped);
        let nodes = collect::<1024>(SliceSource::from(doc.as_str()));
        prop_assert_eq!(nodes[2].0, NodeKind::AttributeValue);
        prop_assert_eq!(nodes[2].1.as_deref(), Some(value.as_bytes()));
        prop_assert_eq!(nodes[4].0, NodeKind::ElementClose);
        prop_assert_eq!(nodes[4].1.as_deref(), None);
    }

    #[test]
    fn cdata_is_literal(text in "[a-z&;<> \\]]{1,32}") {
        prop_assume!(!text.contains("]]>"));
        let doc = format!("<![CDATA[{}]]>", text);
        let nodes = collect::<64>(SliceSource::from(doc.as_str()));
        prop_assert_eq!(nodes.len(), 2);
        prop_assert_eq!(nodes[0].0, NodeKind::Text);
        prop_assert_eq!(nodes[0].1.as_deref(), Some(text.as_bytes()));
    }

    #[test]
    fn close_tags_carry_names(name in "[a-zA-Z_][a-zA-Z0-9_.:-]{0,15}") {
        let doc = format!("<{0}/><{0}></{0} >", name);
        let nodes = collect::<16>(SliceSource::from(doc.as_str()));
        let name = Some(name.into_bytes());
        prop_assert_eq!(
            nodes,
            vec![
                (NodeKind::ElementOpen, name.clone()),
                (NodeKind::ElementClose, None),
                (NodeKind::ElementOpen, name.clone()),
                (NodeKind::ElementClose, name),
                (NodeKind::EndOfInput, None),
            ]
        );
    }
}
