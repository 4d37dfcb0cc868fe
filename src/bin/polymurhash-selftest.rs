//! Self-test / vector-generation driver for PolymurHash v1.0.
//!
//! - no arguments: hashes the 100 reference strings and compares against
//!   the fixed reference digests; exits 0 on success, 1 on the first
//!   mismatch (with a diagnostic on stderr naming the input and both
//!   digests).
//! - `gen`: prints `0x<16 hex digits> = "<string>"` for each reference
//!   string to stdout and exits 0.
//! - anything else: usage error on stderr, exit 2.

use std::process::ExitCode;

const SEED: u64 = 0xFEDBCA9876543210;
const TWEAK: u64 = 0xABCDEF0123456789;

include!("../../tests/common/vector_table.rs");

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None => run_selftest(),
        Some("gen") => {
            run_gen();
            ExitCode::SUCCESS
        }
        Some(other) => {
            eprintln!("usage: polymurhash-selftest [gen]");
            eprintln!("unrecognized argument: {other}");
            ExitCode::from(2)
        }
    }
}

fn run_gen() {
    let params = polymurhash::init_params_from_seed(SEED);
    for s in TEST_STRINGS {
        let h = polymurhash::hash(s.as_bytes(), &params, TWEAK);
        println!("{h:#018x} = \"{s}\"");
    }
}

fn run_selftest() -> ExitCode {
    let params = polymurhash::init_params_from_seed(SEED);
    for (s, &expected) in TEST_STRINGS.iter().zip(REFERENCE_VALUES.iter()) {
        let got = polymurhash::hash(s.as_bytes(), &params, TWEAK);
        if got != expected {
            eprintln!("reference test failed for \"{s}\"");
            eprintln!("expected {expected:#018x} got  {got:#018x}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
