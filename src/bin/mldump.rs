/*
** This file is a part of mlreader (streaming markup tokenizer)
** Copyright (C) 2000-2025 Gurer Ozen
**
** mlreader is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::io::stdin;
use std::io::stdout;
use std::process::ExitCode;

use mlreader::NodeKind;
use mlreader::ReadSource;
use mlreader::Reader;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const VALUE_CAPACITY: usize = 4096;

fn print_version() {
    println!("mldump (mlreader) v{}", VERSION);
}

fn print_usage() {
    println!(
        concat!(
            "Usage: mldump [OPTIONS] [FILE.xml...]\n",
            "This tool prints the markup nodes of documents, one per line.\n",
            "Options:\n",
            "  -q, --quiet    Do not print nodes, only report errors\n",
            "  -s, --stat     Node counts\n",
            "  -h, --help     Display this help message and exit\n",
            "  -v, --version  Display the version and exit\n",
            "Values longer than {} bytes are reported as errors."
        ),
        VALUE_CAPACITY
    );
}

struct Dumper {
    quiet: bool,
    do_stats: bool,
    counts: HashMap<&'static str, usize>,
    reader: Reader<ReadSource<Box<dyn Read>>, VALUE_CAPACITY>,
}

impl Dumper {
    fn new(quiet: bool, do_stats: bool) -> Self {
        Dumper {
            quiet,
            do_stats,
            counts: HashMap::new(),
            reader: Reader::new(),
        }
    }

    fn dump(&mut self, out: &mut impl Write) -> std::io::Result<()> {
        while self.reader.advance() {
            let kind = self.reader.kind();
            if kind.is_error() {
                break;
            }
            *self.counts.entry(kind.name()).or_insert(0) += 1;
            if self.quiet || kind == NodeKind::EndOfInput {
                continue;
            }
            match self.reader.value() {
                Some(value) => writeln!(out, "{} {:?}", kind, String::from_utf8_lossy(value))?,
                None => writeln!(out, "{}", kind)?,
            }
        }
        out.flush()
    }

    fn report(&mut self) {
        if self.do_stats {
            let mut counts: Vec<_> = self.counts.drain().collect();
            counts.sort();
            println!("Node counts:");
            for (kind, count) in counts {
                println!("  {}: {}", kind, count);
            }
        }
        self.counts.clear();
    }

    fn dump_file(&mut self, file: &str, is_stream: bool) -> bool {
        let input: Box<dyn Read> = if is_stream {
            Box::new(stdin())
        } else {
            match File::open(file) {
                Ok(f) => Box::new(f),
                Err(e) => {
                    eprintln!("Error reading file '{}': {}", file, e);
                    return false;
                }
            }
        };
        self.reader.set(ReadSource::new(input));

        let mut out = BufWriter::new(stdout().lock());
        if let Err(e) = self.dump(&mut out) {
            eprintln!("Error writing output: {}", e);
            return false;
        }
        if let Some(e) = self.reader.source_mut().and_then(ReadSource::take_error) {
            eprintln!("Error reading file '{}': {}", file, e);
            return false;
        }
        if let NodeKind::Error(err) = self.reader.kind() {
            eprintln!(
                "{} in file '{}' at {}: {}",
                err,
                file,
                self.reader.location(),
                self.reader.error_description().unwrap_or_default()
            );
            return false;
        }
        self.report();
        true
    }
}

fn main() -> ExitCode {
    let mut args = env::args();

    let mut files = Vec::new();
    let mut quiet = false;
    let mut do_stats = false;

    // Skip the first argument (program name)
    args.next();
    for arg in args {
        match arg.as_str() {
            "-q" | "--quiet" => {
                quiet = true;
            }
            "-s" | "--stat" => {
                do_stats = true;
            }
            "-qs" | "-sq" => {
                quiet = true;
                do_stats = true;
            }
            "-h" | "--help" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            "-v" | "--version" => {
                print_version();
                return ExitCode::SUCCESS;
            }
            _ => {
                files.push(arg);
            }
        }
    }

    let mut dumper = Dumper::new(quiet, do_stats);
    if files.is_empty() {
        if !dumper.dump_file("stdin", true) {
            return ExitCode::FAILURE;
        }
    } else {
        for file in files {
            if !dumper.dump_file(&file, false) {
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
