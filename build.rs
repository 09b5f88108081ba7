//! Build script to generate embedded word lists
//!
//! Reads `data/legal-{n}.txt` and `data/pickable-{n}.txt` for every supported
//! word length and generates Rust source with one const table per kind. A
//! missing file yields an empty list for that length.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LENGTHS: std::ops::RangeInclusive<usize> = 3..=7;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("words.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    generate_table(&mut output, "legal", "LEGAL", "Words accepted as guesses, by length");
    generate_table(
        &mut output,
        "pickable",
        "PICKABLE",
        "Words eligible as daily targets, by length",
    );

    println!("cargo:rerun-if-changed=data");
}

fn generate_table(output: &mut fs::File, kind: &str, const_name: &str, doc_comment: &str) {
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(usize, &[&str])] = &[").unwrap();

    for len in LENGTHS {
        let input_path = format!("data/{kind}-{len}.txt");
        println!("cargo:rerun-if-changed={input_path}");

        let Ok(content) = fs::read_to_string(&input_path) else {
            println!("cargo:warning={input_path} not found, length {len} will be empty");
            writeln!(output, "    ({len}, &[]),").unwrap();
            continue;
        };

        writeln!(output, "    ({len}, &[").unwrap();
        for word in content.lines().map(str::trim).filter(|w| !w.is_empty()) {
            writeln!(output, "        {word:?},").unwrap();
        }
        writeln!(output, "    ]),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
