// SPDX-License-Identifier: MIT

use reductions::harness::{run_all, run_timed};
use reductions::report::Report;
use reductions::{sequential_sum, Error, Partition, Reduction, Strategy};
use test_utils::arrays::{one_to, ones, seeded_array};

#[test]
fn test_strategies_match_oracle_on_random_arrays() {
    for (seed, len) in [(1, 0), (2, 1), (3, 999), (4, 65_536), (5, 1_000_003)] {
        let data = seeded_array(seed, len);
        let expected = sequential_sum(&data);
        for threads in [1, 2, 3, 8, 32] {
            let partition = Partition::new(data.len(), threads).unwrap();
            for strategy in Strategy::ALL {
                assert_eq!(
                    strategy.reduce(&data, &partition),
                    expected,
                    "{strategy}: len {len}, {threads} threads"
                );
            }
        }
    }
}

#[test]
fn test_ones_sum_to_length() {
    // 2^22 elements split over 32 workers.
    let data = ones(4_194_304);
    for measurement in run_all(&data, 32).unwrap() {
        assert_eq!(measurement.total, 4_194_304);
    }
}

#[test]
fn test_gauss_sum() {
    let n = 100_000;
    let data = one_to(n);
    let measurement = run_timed(Strategy::Mutex, &data, 6).unwrap();
    assert_eq!(measurement.total, n * (n + 1) / 2);
}

#[test]
fn test_more_threads_than_elements() {
    let data = seeded_array(9, 5);
    let report = Report::new(
        data.len(),
        64,
        sequential_sum(&data),
        run_all(&data, 64).unwrap(),
    );
    assert!(report.all_match());
}

#[test]
fn test_empty_array_with_three_threads() {
    let measurements = run_all(&[], 3).unwrap();
    assert_eq!(measurements.len(), 3);
    assert!(measurements.iter().all(|m| m.total == 0));
}

#[test]
fn test_timed_run_plans_its_own_chunks() {
    let data = seeded_array(11, 1_000);

    // Planning happens inside the timed run, so a bad thread count is
    // reported by the harness itself.
    assert_eq!(
        run_timed(Strategy::Atomic, &data, 0).unwrap_err(),
        Error::ZeroThreads
    );
    assert_eq!(run_all(&data, 0).unwrap_err(), Error::ZeroThreads);

    let measurement = run_timed(Strategy::NonAtomic, &data, 7).unwrap();
    assert_eq!(measurement.total, sequential_sum(&data));
}
