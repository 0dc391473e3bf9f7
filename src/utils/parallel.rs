//! Parallel processing utilities

pub fn resolve_threads(threads: usize) -> usize {
    if threads == 0 {
        num_cpus::get()
    } else {
        threads
    }
}

pub fn configure_thread_pool(threads: usize) -> Result<(), rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(resolve_threads(threads))
        .build_global()
}

/// Whether an input of `len` items is worth splitting across workers
pub fn should_parallelize(len: usize, threshold: usize) -> bool {
    len >= threshold && rayon::current_num_threads() > 1
}
