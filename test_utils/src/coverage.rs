// SPDX-License-Identifier: MIT

use reductions::Partition;

/// Counts how many chunks of `partition` contain each index of `[0, len)`.
///
/// A partition that tiles the array yields a vector of ones.
pub fn index_hits(partition: &Partition, len: usize) -> Vec<u32> {
    let mut hits = vec![0u32; len];
    for chunk in partition.chunks() {
        for index in chunk.as_range() {
            hits[index] += 1;
        }
    }
    hits
}

/// Panics with the offending index unless every index of `[0, len)` is
/// covered by exactly one chunk.
pub fn assert_tiles(partition: &Partition, len: usize) {
    for (index, hits) in index_hits(partition, len).into_iter().enumerate() {
        assert_eq!(
            hits,
            1,
            "index {index} covered {hits} times ({} threads, len {len})",
            partition.threads()
        );
    }
    assert!(partition.covers_exactly(len));
}
