//! Tests for grid generation properties.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use word_grid::{
    Coordinate, Direction, GridErrorKind, GridGenerator, SkipReason, generate, is_eligible,
};

fn seeded(seed: u64) -> GridGenerator<StdRng> {
    GridGenerator::with_rng(StdRng::seed_from_u64(seed))
}

fn random_word(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| char::from(b'a' + rng.gen_range(0..26u8)))
        .collect()
}

#[test]
fn test_grid_is_square_and_complete() {
    for size in 1..=12 {
        let grid = generate(size, &["cat", "dog", "horse", "ab"]).unwrap();
        assert_eq!(grid.size(), size);
        let chars = grid.to_chars();
        assert_eq!(chars.len(), size);
        for row in &chars {
            assert_eq!(row.len(), size);
            assert!(row.iter().all(|c| c.is_ascii_uppercase()));
        }
    }
}

#[test]
fn test_zero_size_fails_fast() {
    let err = generate(0, &["cat"]).unwrap_err();
    assert_eq!(err.kind, GridErrorKind::InvalidSize(0));
}

#[test]
fn test_single_word_example() {
    let generation = seeded(11).generate_with_report(5, &["cat"]).unwrap();
    let grid = generation.grid();
    assert_eq!(grid.size(), 5);
    assert!(grid.is_complete());

    let placement = &generation.placements()[0];
    assert_eq!(placement.word(), "CAT");
    assert_eq!(
        grid.read(*placement.start(), *placement.direction(), 3),
        Some("CAT".to_string())
    );
}

#[test]
fn test_word_longer_than_grid_is_skipped() {
    let generation = seeded(12)
        .generate_with_report(4, &["toolong12345"])
        .unwrap();
    assert!(generation.placements().is_empty());
    assert_eq!(*generation.skipped()[0].reason(), SkipReason::TooLong);
    assert!(generation.grid().is_complete());
    assert_eq!(generation.grid().size(), 4);
}

#[test]
fn test_two_letter_word_is_skipped() {
    let generation = seeded(13).generate_with_report(3, &["ab"]).unwrap();
    assert!(generation.placements().is_empty());
    assert_eq!(*generation.skipped()[0].reason(), SkipReason::TooShort);
    assert!(generation.grid().is_complete());
}

#[test]
fn test_word_of_grid_length_is_skipped() {
    let generation = seeded(14).generate_with_report(5, &["horse"]).unwrap();
    assert!(generation.placements().is_empty());
    assert!(!is_eligible("horse", 5));
}

#[test]
fn test_overlapping_words_stay_readable() {
    let words = ["cat", "tea", "ate", "eat", "tee"];
    for seed in 0..50 {
        let generation = seeded(seed).generate_with_report(6, &words).unwrap();
        assert_eq!(generation.placements().len(), words.len(), "seed {seed}");
        for placement in generation.placements() {
            assert_eq!(
                generation.grid().read(
                    *placement.start(),
                    *placement.direction(),
                    placement.word().len()
                ),
                Some(placement.word().clone()),
                "seed {seed}"
            );
        }
    }
}

#[test]
fn test_mixed_case_words_overlap() {
    // Uppercased letters already on the grid match lowercase input.
    let words = ["SEA", "sea", "Sea"];
    let generation = seeded(21).generate_with_report(5, &words).unwrap();
    assert_eq!(generation.placements().len(), 3);
    assert!(generation.placements().iter().all(|p| p.word() == "SEA"));
}

#[test]
fn test_non_alphabetic_word_is_skipped() {
    let generation = seeded(22)
        .generate_with_report(12, &["r2d2", "ice cream", "owl"])
        .unwrap();
    let reasons: Vec<SkipReason> = generation.skipped().iter().map(|s| *s.reason()).collect();
    assert_eq!(
        reasons,
        [SkipReason::NonAlphabetic, SkipReason::NonAlphabetic]
    );
    assert_eq!(generation.placements()[0].word(), "OWL");
}

/// The bound check is strict: a forward run may not reach the last index
/// and a backward run may not reach index 0. Every recorded placement must
/// respect that margin.
#[test]
fn test_strict_bound_margin_is_preserved() {
    for seed in 0..200 {
        let generation = seeded(seed).generate_with_report(5, &["frog"]).unwrap();
        let placement = &generation.placements()[0];
        let start = *placement.start();
        let (dr, dc) = placement.direction().delta();
        let len = placement.word().len();

        for (index, delta) in [(start.row, dr), (start.col, dc)] {
            match delta {
                1 => assert!(index + len < 5, "seed {seed}: {placement:?}"),
                -1 => assert!(index >= len, "seed {seed}: {placement:?}"),
                _ => {}
            }
        }
    }
}

#[test]
fn test_every_direction_gets_used() {
    let mut seen = std::collections::HashSet::new();
    for seed in 0..300 {
        let generation = seeded(seed).generate_with_report(7, &["wolf"]).unwrap();
        seen.insert(*generation.placements()[0].direction());
    }
    assert_eq!(seen.len(), Direction::ALL.len());
}

#[test]
fn test_fuzz_random_sizes_and_words() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for round in 0..300 {
        let size = rng.gen_range(1..=14);
        let count = rng.gen_range(0..=10);
        let words: Vec<String> = (0..count).map(|_| random_word(&mut rng, 16)).collect();

        let generation = seeded(round)
            .generate_with_report(size, &words)
            .unwrap();
        let grid = generation.grid();
        assert_eq!(grid.size(), size);
        assert!(grid.is_complete());
        assert_eq!(
            generation.placements().len() + generation.skipped().len(),
            words.len()
        );

        for placement in generation.placements() {
            assert!(is_eligible(placement.word(), size));
            let len = placement.word().len();
            let end = placement
                .start()
                .step(*placement.direction(), len - 1)
                .expect("placement must stay above zero");
            assert!(end.is_within(size));
            assert!(placement.start().is_within(size));
            assert_eq!(
                grid.read(*placement.start(), *placement.direction(), len),
                Some(placement.word().clone())
            );
        }
    }
}

#[test]
fn test_concurrent_calls_are_independent() {
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| generate(9, &["rust", "crab", "ferris"]).unwrap()))
            .collect();
        for handle in handles {
            let grid = handle.join().unwrap();
            assert_eq!(grid.size(), 9);
            assert!(grid.is_complete());
        }
    });
}

#[test]
fn test_coordinate_enumeration_matches_grid() {
    let grid = generate(6, &["eel"]).unwrap();
    for coord in Coordinate::all(6) {
        assert!(grid.get(coord).is_some());
    }
    assert!(grid.get(Coordinate::new(6, 0)).is_none());
}
