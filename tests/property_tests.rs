use dedupe::utils::parallel::should_parallelize;
use dedupe::DeDup;
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::OnceLock;

// Fixed-size pool so the rayon fold runs even on single-CPU hosts
fn worker_pool() -> &'static rayon::ThreadPool {
    static POOL: OnceLock<rayon::ThreadPool> = OnceLock::new();
    POOL.get_or_init(|| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .expect("failed to build test thread pool")
    })
}

fn distinct(values: &[i32]) -> HashSet<i32> {
    values.iter().copied().collect()
}

proptest! {
    #[test]
    fn all_methods_yield_the_distinct_set(input in prop::collection::vec(-50i32..50, 0..200)) {
        let dedup = DeDup::with_values(input.clone());
        let expected = distinct(&input);

        for output in [
            dedup.dedup_by_simple_looping(),
            dedup.dedup_with_original_order(),
            dedup.dedup_with_distinct_stream(),
        ] {
            prop_assert_eq!(output.len(), expected.len());
            prop_assert_eq!(distinct(&output), expected.clone());
        }
    }

    #[test]
    fn looping_and_ordered_set_agree_exactly(input in prop::collection::vec(any::<i32>(), 0..200)) {
        let dedup = DeDup::with_values(input);
        prop_assert_eq!(dedup.dedup_by_simple_looping(), dedup.dedup_with_original_order());
    }

    #[test]
    fn distinct_input_is_returned_unchanged(set in prop::collection::hash_set(any::<i32>(), 0..100)) {
        let input: Vec<i32> = set.into_iter().collect();
        let dedup = DeDup::with_values(input.clone());

        prop_assert_eq!(dedup.dedup_by_simple_looping(), input.clone());
        prop_assert_eq!(dedup.dedup_with_original_order(), input);
    }

    #[test]
    fn length_shrinks_only_with_duplicates(input in prop::collection::vec(0i32..20, 0..60)) {
        let dedup = DeDup::with_values(input.clone());
        let has_duplicates = distinct(&input).len() < input.len();

        for output in [
            dedup.dedup_by_simple_looping(),
            dedup.dedup_with_original_order(),
            dedup.dedup_with_distinct_stream(),
        ] {
            prop_assert!(output.len() <= input.len());
            prop_assert_eq!(output.len() == input.len(), !has_duplicates);
        }
    }

    #[test]
    fn parallel_stream_matches_sequential(input in prop::collection::vec(-1000i32..1000, 0..2000)) {
        let parallel = DeDup::with_values(input.clone()).with_parallel_threshold(0);
        let sequential = DeDup::with_values(input).with_parallel_threshold(usize::MAX);

        let (took_parallel_path, par) = worker_pool().install(|| {
            (
                should_parallelize(parallel.values().len(), parallel.parallel_threshold()),
                parallel.dedup_with_distinct_stream(),
            )
        });

        prop_assert!(took_parallel_path);
        prop_assert_eq!(par.len(), distinct(&par).len());
        prop_assert_eq!(distinct(&par), distinct(&sequential.dedup_with_distinct_stream()));
    }
}
