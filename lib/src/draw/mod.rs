mod entry;
mod generator;
mod schedule;

pub use entry::{Entry, EntryError};
pub use generator::{GeneratorError, Numbers, generate};
pub use schedule::{
    Draw, GlobalSeed, compute_next_boundary, derive_seed, format_numbers, now_ms,
    reverse_decimal_digits,
};

#[cfg(test)]
mod tests {
    use super::{
        Draw, Entry, EntryError, GeneratorError, GlobalSeed, compute_next_boundary, derive_seed,
        format_numbers, generate, reverse_decimal_digits,
    };
    use crate::constants::{DEFAULT_MAX_STEPS, MAX_NUMBER, MIN_NUMBER};

    fn assert_well_formed(numbers: &[u8]) {
        assert_eq!(numbers.len(), 6);
        for (i, n) in numbers.iter().enumerate() {
            assert!((MIN_NUMBER..=MAX_NUMBER).contains(n), "{} out of range", n);
            assert!(!numbers[..i].contains(n), "{} repeated", n);
        }
    }

    #[test]
    fn generator_produces_known_sequences() {
        assert_eq!(
            generate(1005, DEFAULT_MAX_STEPS),
            Ok([16, 61, 49, 52, 10, 82])
        );
        assert_eq!(
            generate(123_456_789, DEFAULT_MAX_STEPS),
            Ok([28, 82, 10, 37, 19, 64])
        );
    }

    #[test]
    fn generator_output_is_distinct_and_in_range() {
        let mut produced = 0;
        for seed in (1_000_000_000_000u128..).step_by(7_919).take(5_000) {
            if let Ok(numbers) = generate(seed, DEFAULT_MAX_STEPS) {
                assert_well_formed(&numbers);
                produced += 1;
            }
        }
        assert!(produced > 0);
    }

    #[test]
    fn generator_is_deterministic() {
        for seed in [1005u128, 1_000_000_000_671, 9_994_100_000_671, 5_000_001] {
            assert_eq!(
                generate(seed, DEFAULT_MAX_STEPS),
                generate(seed, DEFAULT_MAX_STEPS)
            );
        }
    }

    #[test]
    fn generator_gives_up_on_collapsing_seed() {
        // 0 stays 0 forever, so only the number 1 ever comes out.
        assert_eq!(
            generate(0, DEFAULT_MAX_STEPS),
            Err(GeneratorError::Degenerate {
                steps: DEFAULT_MAX_STEPS,
                collected: vec![1],
            })
        );
    }

    #[test]
    fn generator_respects_step_cap() {
        // 1005 needs seven steps.
        assert!(generate(1005, 7).is_ok());
        assert!(matches!(
            generate(1005, 6),
            Err(GeneratorError::Degenerate { steps: 6, .. })
        ));
    }

    #[test]
    fn generator_escapes_multiples_of_99_only_through_rounding() {
        // Exact integers would yield 1 forever; rounding the quotient lets
        // a couple of other numbers out before it settles again.
        assert_eq!(
            generate(99 * 10_000_000_000_000, DEFAULT_MAX_STEPS),
            Err(GeneratorError::Degenerate {
                steps: DEFAULT_MAX_STEPS,
                collected: vec![1, 27, 73],
            })
        );
    }

    #[test]
    fn boundary_is_aligned_and_far_enough_ahead() {
        for interval in [1u64, 2, 3, 1_000, 4_999, 5_000] {
            for now in (1_760_000_000_000u64..).step_by(37).take(500) {
                let boundary = compute_next_boundary(now, interval);
                assert_eq!(boundary % interval, 0);
                assert!(boundary > now);
                assert!((boundary - now) * 2 >= interval);
                assert!(boundary - now <= interval + interval / 2);
            }
        }
    }

    #[test]
    fn boundary_skips_slot_closer_than_half_interval() {
        assert_eq!(compute_next_boundary(4_000, 5_000), 10_000);
        assert_eq!(compute_next_boundary(2_500, 5_000), 5_000);
        assert_eq!(compute_next_boundary(5_000, 5_000), 10_000);
        assert_eq!(compute_next_boundary(2_501, 5_000), 10_000);
    }

    #[test]
    fn seed_reverses_sum_digits() {
        assert_eq!(reverse_decimal_digits(1_000_005), 5_000_001);
        assert_eq!(reverse_decimal_digits(120), 21);
        assert_eq!(reverse_decimal_digits(0), 0);
        assert_eq!(derive_seed(1_000_000, GlobalSeed::new(5)), 5_000_001);
        assert_eq!(
            derive_seed(1_760_000_000_000, GlobalSeed::new(1)),
            1_000_000_000_671
        );
    }

    #[test]
    fn derived_seed_reproduces_same_draw() {
        let seed = derive_seed(1_000_000, GlobalSeed::new(5));
        let first = generate(seed, DEFAULT_MAX_STEPS);
        assert_eq!(first, generate(seed, DEFAULT_MAX_STEPS));
        assert_eq!(first, Ok([7, 1, 38, 46, 62, 40]));

        let seed = derive_seed(1_760_000_000_000, GlobalSeed::new(1));
        assert_eq!(
            generate(seed, DEFAULT_MAX_STEPS),
            Ok([79, 13, 43, 28, 10, 46])
        );
    }

    #[test]
    fn consecutive_boundaries_rarely_degenerate() {
        let failures = (0..2_000u64)
            .map(|slot| derive_seed(1_760_000_000_000 + slot * 5_000, GlobalSeed::new(1_234)))
            .filter(|seed| generate(*seed, DEFAULT_MAX_STEPS).is_err())
            .count();
        assert!(failures < 100, "{} of 2000 draws degenerated", failures);
    }

    #[test]
    fn global_seed_stays_within_interval() {
        for _ in 0..100 {
            let seed = GlobalSeed::generate(5_000).value();
            assert!((1..=5_000).contains(&seed));
        }
    }

    #[test]
    fn draw_keeps_both_orders() {
        let draw = Draw::new(10_000, 42, [42, 7, 13, 99, 1, 56]);
        assert_eq!(draw.generation_order(), &[42, 7, 13, 99, 1, 56]);
        assert_eq!(draw.canonical_order(), &[1, 7, 13, 42, 56, 99]);
        assert_eq!(format_numbers(draw.generation_order()), "42-7-13-99-1-56");
    }

    #[test]
    fn entry_accepts_six_distinct_numbers() {
        let entry = Entry::parse("1 2 3 4 5 6").expect("valid entry");
        assert_eq!(entry.numbers(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn entry_is_stored_sorted() {
        let entry = Entry::parse("6 5 4 3 2 1").expect("valid entry");
        assert_eq!(entry.numbers(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(entry.to_string(), "1-2-3-4-5-6");
    }

    #[test]
    fn entry_tolerates_irregular_whitespace() {
        let entry = Entry::parse("  99\t1   50 2 3\r\n4 ").expect("valid entry");
        assert_eq!(entry.numbers(), &[1, 2, 3, 4, 50, 99]);
    }

    #[test]
    fn entry_rejects_collapsed_duplicates() {
        assert_eq!(Entry::parse("1 1 2 3 4 5"), Err(EntryError::WrongCount(5)));
    }

    #[test]
    fn entry_rejects_out_of_range_values() {
        assert_eq!(Entry::parse("100 2 3 4 5 6"), Err(EntryError::WrongCount(5)));
        assert_eq!(Entry::parse("0 -1 2 3 4 5"), Err(EntryError::WrongCount(4)));
    }

    #[test]
    fn entry_rejects_wrong_counts_and_garbage() {
        assert_eq!(Entry::parse(""), Err(EntryError::WrongCount(0)));
        assert_eq!(
            Entry::parse("1 2 3 4 5 6 7"),
            Err(EntryError::WrongCount(7))
        );
        assert_eq!(
            Entry::parse("one 2 3 4 5 6"),
            Err(EntryError::WrongCount(5))
        );
        assert_eq!(
            Entry::parse("1.5 2 3 4 5 6"),
            Err(EntryError::WrongCount(5))
        );
    }
}
