// SPDX-License-Identifier: MIT

use reductions::{Chunk, Error, Partition};
use test_utils::coverage::assert_tiles;

#[test]
fn test_partition_tiles_all_lengths() {
    for len in 0..=64 {
        for threads in 1..=12 {
            let partition = Partition::new(len, threads).unwrap();
            assert_eq!(partition.threads(), threads);
            assert_tiles(&partition, len);
        }
    }
}

#[test]
fn test_only_last_chunk_differs_in_size() {
    let partition = Partition::new(1_000_003, 8).unwrap();
    let (last, rest) = partition.chunks().split_last().unwrap();
    assert!(rest.iter().all(|chunk| chunk.len() == 1_000_003 / 8));
    assert_eq!(last.len(), 1_000_003 / 8 + 1_000_003 % 8);
}

#[test]
fn test_single_thread_covers_whole_array() {
    let partition = Partition::new(77, 1).unwrap();
    assert_eq!(partition.chunks(), &[Chunk::new(0, 77)]);
}

#[test]
fn test_zero_threads() {
    assert_eq!(Partition::new(5, 0), Err(Error::ZeroThreads));
}
