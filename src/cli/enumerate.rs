use std::time::Instant;

use openominoes::{
    generation::{
        unique_expansions, unique_expansions_pairwise, unique_expansions_rayon, Equivalence, Error,
    },
    polyominoes::Shape,
};

use crate::{finish_bar, make_bar, EnumerateOpts};

pub fn enumerate(opts: &EnumerateOpts) {
    let n = opts.n;

    if n < 1 {
        println!("Error: {}", Error::InvalidSize(n));
        std::process::exit(1);
    }

    let equivalence = Equivalence::from(opts.mode);
    let parallel = !opts.no_parallelism;

    if parallel && equivalence == Equivalence::Pairwise {
        println!("no parallel implementation for pairwise similarity, running single threaded");
    }

    let start = Instant::now();

    let mut current = vec![Shape::unit()];
    let mut i = 1;

    while i < n {
        let bar = make_bar(current.len() as u64);
        bar.set_message(format!("Expanding base polyominoes of N = {i}..."));

        let level_start = Instant::now();

        let next = match (equivalence, parallel) {
            (Equivalence::Canonical, true) => unique_expansions_rayon(&bar, current.iter()),
            (Equivalence::Canonical, false) => unique_expansions(&bar, current.iter()),
            (Equivalence::Pairwise, _) => unique_expansions_pairwise(&bar, current.iter()),
        };

        finish_bar(&bar, level_start.elapsed(), next.len(), i + 1);

        current = next;
        i += 1;
    }

    let duration = start.elapsed();

    if opts.render {
        for shape in &current {
            println!("{shape}");
            println!();
        }
    }

    println!("Unique polyominoes found for N = {n}: {}.", current.len());
    println!("Duration: {} ms", duration.as_millis());
}
