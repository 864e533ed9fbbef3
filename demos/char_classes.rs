// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! The example builds character classes as sets of Unicode code points, the way a regex engine
//! would, and combines them with set operations.

use int_range_sets::{Interval, RangeSet, range_set};
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn code_point(c: char) -> i64 {
    i64::from(u32::from(c))
}

/// Builds the set of code points covered by the given inclusive character ranges.
fn class(ranges: &[(char, char)]) -> Result<RangeSet, Box<dyn Error>> {
    let ranges = ranges
        .iter()
        .map(|&(start, finish)| Interval::new(code_point(start), code_point(finish)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RangeSet::from_ranges(ranges))
}

/// Renders a set the way it would appear inside a regex character class.
fn render(set: &RangeSet) -> String {
    let to_char = |value: i64| {
        u32::try_from(value)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    };
    let body = set
        .iter()
        .map(|ival| {
            if ival.is_point() {
                to_char(ival.start()).to_string()
            } else {
                format!("{}-{}", to_char(ival.start()), to_char(ival.finish()))
            }
        })
        .collect::<String>();
    format!("[{body}]")
}

fn main() -> Result<(), Box<dyn Error>> {
    // Set `RUST_LOG=int_range_sets=trace` to see every set operation.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Overlapping and out of order input is fine, it gets canonicalized.
    let letters = class(&[('a', 'z'), ('A', 'Z'), ('m', 'q')])?;
    let vowels = class(&[('a', 'a'), ('e', 'e'), ('i', 'i'), ('o', 'o'), ('u', 'u')])?;
    let digits = class(&[('0', '9')])?;
    info!(letters = %render(&letters), vowels = %render(&vowels), "built classes");

    // [A-Za-z] without the lowercase vowels
    let consonants = &letters - &vowels;
    assert!(consonants.contains(code_point('b')));
    assert!(!consonants.contains(code_point('e')));
    println!("consonants:   {}", render(&consonants));

    // \w restricted to ASCII
    let word = &(&letters | &digits) | &class(&[('_', '_')])?;
    println!("word:         {}", render(&word));

    // characters that are word characters or hex digits, but not both
    let hex = class(&[('0', '9'), ('a', 'f'), ('A', 'F')])?;
    let either = &word ^ &hex;
    assert!(either.is_subset(&word));
    println!("word xor hex: {}", render(&either));

    // what vowels and hex digits have in common
    let shared = &vowels & &hex;
    assert_eq!(shared, range_set![[code_point('a')], [code_point('e')]]);
    println!("vowel & hex:  {}", render(&shared));

    println!(
        "{} ranges cover {} word characters",
        word.len(),
        word.total_len()
    );
    Ok(())
}
