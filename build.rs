// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Generates seeded random range lists for the benchmarks.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use rand_distr::{Distribution, Geometric};
use std::{env, fmt::Write as _, fs, path::Path};

/// Produces `n` ranges sorted by start, separated by geometrically distributed gaps.
///
/// A gap of zero makes two ranges touch, so the lists are not canonical as-is.
fn random_ranges(rng: &mut StdRng, n: usize) -> Vec<(i64, i64)> {
    let gaps = Geometric::new(0.1).expect("valid probability");
    let lengths = Geometric::new(0.2).expect("valid probability");
    let mut next = 0_i64;
    (0..n)
        .map(|_| {
            let start = next + gaps.sample(rng) as i64;
            let finish = start + lengths.sample(rng) as i64;
            next = finish + 1;
            (start, finish)
        })
        .collect()
}

fn write_const(code: &mut String, name: &str, ranges: &[(i64, i64)]) {
    writeln!(code, "#[allow(dead_code)]").unwrap();
    writeln!(code, "const {name}: &[(i64, i64)] = &[").unwrap();
    for (start, finish) in ranges {
        writeln!(code, "    ({start}, {finish}),").unwrap();
    }
    writeln!(code, "];").unwrap();
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var_os("OUT_DIR").expect("cargo sets OUT_DIR");
    let mut rng = StdRng::seed_from_u64(0x5eed_1e55);
    let mut code = String::new();
    for (name, n) in [("BIG1", 4096), ("BIG2", 4096), ("SMALL1", 32), ("SMALL2", 32)] {
        write_const(&mut code, name, &random_ranges(&mut rng, n));
    }

    // raw input for canonicalization: overlapping copies of the same region, in random order
    let mut shuffled = random_ranges(&mut rng, 2048);
    shuffled.extend(random_ranges(&mut rng, 2048));
    shuffled.shuffle(&mut rng);
    write_const(&mut code, "SHUFFLED", &shuffled);

    fs::write(Path::new(&out_dir).join("random_ranges.rs"), code)
        .expect("write random_ranges.rs");
}
