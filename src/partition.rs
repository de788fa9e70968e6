// SPDX-License-Identifier: MIT

use crate::error::{Error, Result};
use std::ops::Range;
use tracing::debug;

/// Half-open index range `[begin, end)` into the input array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub begin: usize,
    pub end: usize,
}

impl Chunk {
    pub fn new(begin: usize, end: usize) -> Self {
        Chunk { begin, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_range(&self) -> Range<usize> {
        self.begin..self.end
    }

    /// Borrows the part of `data` this chunk refers to. Chunks that fall
    /// outside `data` yield an empty slice.
    pub fn slice<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        let end = self.end.min(data.len());
        let begin = self.begin.min(end);
        &data[begin..end]
    }
}

/// Splits `total_items` into exactly `num_chunks` contiguous chunks of
/// `total_items / num_chunks` items each, with the last chunk absorbing the
/// remainder of the division.
///
/// When there are more chunks than items every chunk but the last is empty.
#[derive(Debug, Clone)]
pub struct ChunkSplitter {
    /// Total number of items to be split into chunks.
    total_items: usize,
    /// Number of chunks to produce.
    num_chunks: usize,
    /// The index of the next chunk to produce.
    current_chunk_index: usize,
    /// Size of every chunk except the last one.
    chunk_size: usize,
}

impl ChunkSplitter {
    /// Creates a new `ChunkSplitter` dividing `total_items` into `num_chunks`.
    ///
    /// # Errors
    /// [`Error::ZeroThreads`] if `num_chunks` is zero.
    pub fn new(total_items: usize, num_chunks: usize) -> Result<Self> {
        if num_chunks == 0 {
            return Err(Error::ZeroThreads);
        }

        Ok(ChunkSplitter {
            total_items,
            num_chunks,
            current_chunk_index: 0,
            chunk_size: total_items / num_chunks,
        })
    }
}

impl Iterator for ChunkSplitter {
    type Item = Chunk;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current_chunk_index;
        if index == self.num_chunks {
            return None;
        }

        let begin = index * self.chunk_size;
        // The last chunk runs to the end so that no remainder is dropped.
        let end = if index + 1 == self.num_chunks {
            self.total_items
        } else {
            begin + self.chunk_size
        };

        self.current_chunk_index += 1;
        Some(Chunk::new(begin, end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.num_chunks - self.current_chunk_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChunkSplitter {}

/// A validated work plan: one chunk per worker thread, tiling `[0, len)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    len: usize,
    chunks: Vec<Chunk>,
}

impl Partition {
    /// Plans `threads` chunks over an array of `len` elements.
    ///
    /// # Errors
    /// [`Error::ZeroThreads`] when `threads` is zero, [`Error::Coverage`] if
    /// the produced chunks fail to tile the array.
    pub fn new(len: usize, threads: usize) -> Result<Self> {
        let chunks: Vec<Chunk> = ChunkSplitter::new(len, threads)?.collect();
        let partition = Partition { len, chunks };

        // Every index must belong to exactly one chunk.
        if !partition.covers_exactly(len) {
            return Err(Error::Coverage { len });
        }

        debug!(
            len,
            threads,
            chunk_size = len / threads,
            last_chunk = partition.chunks.last().map_or(0, Chunk::len),
            "planned partition"
        );
        Ok(partition)
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Number of worker threads this plan fans out to.
    pub fn threads(&self) -> usize {
        self.chunks.len()
    }

    /// Length of the array this plan was built for.
    ///
    /// The harness logs it next to the thread count.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the chunks are contiguous, non-overlapping, start at 0
    /// and end at `len`, so that every index is summed exactly once.
    pub fn covers_exactly(&self, len: usize) -> bool {
        let mut cursor = 0;
        for chunk in &self.chunks {
            if chunk.begin != cursor || chunk.end < chunk.begin {
                return false;
            }
            cursor = chunk.end;
        }
        cursor == len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let chunks: Vec<Chunk> = ChunkSplitter::new(6, 2).unwrap().collect();
        assert_eq!(chunks, vec![Chunk::new(0, 3), Chunk::new(3, 6)]);
    }

    #[test]
    fn test_last_chunk_absorbs_remainder() {
        let chunks: Vec<Chunk> = ChunkSplitter::new(10, 3).unwrap().collect();
        assert_eq!(
            chunks,
            vec![Chunk::new(0, 3), Chunk::new(3, 6), Chunk::new(6, 10)]
        );
    }

    #[test]
    fn test_more_threads_than_items() {
        let chunks: Vec<Chunk> = ChunkSplitter::new(2, 5).unwrap().collect();
        assert_eq!(chunks.len(), 5);
        assert!(chunks[..4].iter().all(Chunk::is_empty));
        assert_eq!(chunks[4], Chunk::new(0, 2));
    }

    #[test]
    fn test_empty_array() {
        let partition = Partition::new(0, 3).unwrap();
        assert_eq!(partition.threads(), 3);
        assert!(partition.chunks().iter().all(Chunk::is_empty));
        assert!(partition.is_empty());
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert_eq!(ChunkSplitter::new(10, 0).unwrap_err(), Error::ZeroThreads);
        assert_eq!(Partition::new(10, 0).unwrap_err(), Error::ZeroThreads);
    }

    #[test]
    fn test_exact_size() {
        let splitter = ChunkSplitter::new(100, 7).unwrap();
        assert_eq!(splitter.len(), 7);
    }

    #[test]
    fn test_covers_exactly_detects_overlap_and_gaps() {
        let overlapping = Partition {
            len: 6,
            chunks: vec![Chunk::new(0, 4), Chunk::new(3, 6)],
        };
        assert!(!overlapping.covers_exactly(6));

        let gapped = Partition {
            len: 6,
            chunks: vec![Chunk::new(0, 2), Chunk::new(3, 6)],
        };
        assert!(!gapped.covers_exactly(6));

        let short = Partition {
            len: 6,
            chunks: vec![Chunk::new(0, 3), Chunk::new(3, 5)],
        };
        assert!(!short.covers_exactly(6));
    }

    #[test]
    fn test_chunk_slice_clamps_to_data() {
        let data = [1, 2, 3];
        assert_eq!(Chunk::new(1, 3).slice(&data), &[2, 3]);
        assert!(Chunk::new(5, 8).slice(&data).is_empty());
    }
}
