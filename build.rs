//! Build script to embed the dictionary
//!
//! Validates `data/dictionary.txt` and writes it out as a sorted, deduplicated
//! const array so lookups never see a malformed entry.

use std::collections::BTreeSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const SOURCE: &str = "data/dictionary.txt";

/// Shortest word any difficulty tier can ask for
const MIN_LEN: usize = 3;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let content =
        fs::read_to_string(SOURCE).unwrap_or_else(|e| panic!("Failed to read {SOURCE}: {e}"));

    let words = collect_words(&content);
    let target = Path::new(&out_dir).join("dictionary.rs");
    fs::write(&target, render(&words))
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", target.display()));

    println!("cargo:rerun-if-changed={SOURCE}");
}

/// Uppercased words, skipping blanks, `#` comments and words too short to play
fn collect_words(content: &str) -> BTreeSet<String> {
    let mut words = BTreeSet::new();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        assert!(
            line.bytes().all(|b| b.is_ascii_alphabetic()),
            "{SOURCE}:{}: '{line}' is not a plain ASCII word",
            number + 1
        );
        if line.len() >= MIN_LEN {
            words.insert(line.to_ascii_uppercase());
        }
    }
    words
}

fn render(words: &BTreeSet<String>) -> String {
    let mut out = String::from("// Generated from data/dictionary.txt\n\n");
    out.push_str("/// English words accepted by the embedded dictionary oracle\n");
    out.push_str("pub const DICTIONARY: &[&str] = &[\n");
    for word in words {
        let _ = writeln!(out, "    \"{word}\",");
    }
    out.push_str("];\n\n/// Number of words in DICTIONARY\n");
    let _ = writeln!(out, "pub const DICTIONARY_COUNT: usize = {};", words.len());
    out
}
