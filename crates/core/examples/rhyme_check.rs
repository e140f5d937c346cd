//! Diagnostic: verify a CMU dictionary can be found and rhymes resolve.
//!
//! Run with: cargo run -p quatrain-core --example rhyme_check

use quatrain_core::lexicon::{locate_and_load, search_paths};
use quatrain_core::rhyme::do_they_rhyme;

fn main() {
    println!("=== Quatrain Rhyme Diagnostic ===\n");

    // 1. Find and load the dictionary
    println!("1. Locating pronunciation dictionary...");
    let lexicon = match locate_and_load(None) {
        Ok(lex) => {
            println!("   OK: Dictionary loaded");
            lex
        }
        Err(e) => {
            eprintln!("   FAIL: {}", e);
            eprintln!("\n   Searched locations:");
            for path in search_paths() {
                eprintln!("     {}", path.display());
            }
            eprintln!("\n   Download cmudict.dict and place it in one of these,");
            eprintln!("   or set QUATRAIN_DICT to its path.");
            std::process::exit(1);
        }
    };
    println!(
        "   Words: {}, pronunciations: {}",
        lexicon.len(),
        lexicon.pronunciation_count()
    );

    // 2. Look up a few everyday words
    println!("2. Looking up sample words...");
    for word in ["cat", "moon", "orange"] {
        match lexicon.lookup(word) {
            Some(prons) => {
                let labels: Vec<String> = prons.iter().map(|p| p.to_label()).collect();
                println!("   {}: {}", word, labels.join(" | "));
            }
            None => println!("   {}: NOT FOUND", word),
        }
    }

    // 3. Check known rhyme pairs
    println!("3. Checking rhyme pairs...");
    let cases = [
        ("cat", "hat", true),
        ("moon", "spoon", true),
        ("cat", "dog", false),
        ("glue", "unglue", false),
        ("cat", "cat", false),
    ];
    let mut failures = 0;
    for (w1, w2, expected) in cases {
        let got = do_they_rhyme(w1, w2, &lexicon);
        let mark = if got == expected { "OK" } else { "FAIL" };
        if got != expected {
            failures += 1;
        }
        println!(
            "   {}: {} / {} -> {} (expected {})",
            mark, w1, w2, got, expected
        );
    }

    println!("\n=== Rhyme diagnostic complete ===");
    if failures == 0 {
        println!("All checks passed; the dictionary is usable.");
    } else {
        println!(
            "{} check(s) failed; the dictionary may be truncated or malformed.",
            failures
        );
        std::process::exit(1);
    }
}
