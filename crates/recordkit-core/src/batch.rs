//! Batch splitting and result reassembly.
//!
//! A batched call splits its request list into contiguous, index-tagged
//! chunks, executes the chunks in any order, and restores the original
//! order at reassembly by a stable sort on chunk index. Chunks carry no
//! identity beyond that index and never outlive a single call.

use tracing::warn;

use crate::error::ClientError;

/// Default maximum number of requests per chunk. An engineering bound on
/// body size, not a protocol constant; the wire format imposes no limit.
pub const DEFAULT_CHUNK_LIMIT: usize = 400;

/// A contiguous, order-preserving slice of a batched call's items, tagged
/// with its position in the original split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<T> {
    pub index: usize,
    pub items: Vec<T>,
}

/// Partition `items` into chunks of at most `limit` items each.
///
/// Produces `ceil(items.len() / limit)` chunks; concatenating them in index
/// order reconstructs `items` exactly. `limit` must be positive.
pub fn split<T>(items: Vec<T>, limit: usize) -> Vec<Chunk<T>> {
    assert!(limit > 0, "chunk limit must be positive");

    let mut chunks = Vec::with_capacity(items.len().div_ceil(limit));
    let mut items = items.into_iter();
    loop {
        let chunk: Vec<T> = items.by_ref().take(limit).collect();
        if chunk.is_empty() {
            break;
        }
        chunks.push(Chunk { index: chunks.len(), items: chunk });
    }
    chunks
}

/// Reassemble completed chunks (arbitrary completion order) into one
/// ordered result list.
///
/// Chunks are sorted by index, flattened, and projected through `project`.
/// The output length must equal `expected`; any deviation is a
/// [`ClientError::ProtocolIntegrity`] failure, never a truncated or padded
/// result.
pub fn assemble<R, T>(
    mut completed: Vec<Chunk<R>>,
    expected: usize,
    project: impl FnMut(R) -> T,
) -> Result<Vec<T>, ClientError> {
    completed.sort_by_key(|chunk| chunk.index);

    let output: Vec<T> = completed
        .into_iter()
        .flat_map(|chunk| chunk.items)
        .map(project)
        .collect();

    if output.len() != expected {
        warn!(
            requests = expected,
            responses = output.len(),
            "response count does not match request count"
        );
        return Err(ClientError::ProtocolIntegrity {
            requests: expected,
            responses: output.len(),
        });
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_counts_are_ceil_of_len_over_limit() {
        for (n, limit, want) in [(1usize, 400usize, 1usize), (400, 400, 1), (401, 400, 2), (1000, 400, 3), (5, 1, 5)] {
            let chunks = split((0..n).collect(), limit);
            assert_eq!(chunks.len(), want, "n={n} limit={limit}");
        }
    }

    #[test]
    fn split_is_contiguous_and_order_preserving() {
        let chunks = split((0..1000).collect::<Vec<u32>>(), 400);
        let sizes: Vec<usize> = chunks.iter().map(|c| c.items.len()).collect();
        assert_eq!(sizes, vec![400, 400, 200]);

        let rejoined: Vec<u32> = chunks.into_iter().flat_map(|c| c.items).collect();
        assert_eq!(rejoined, (0..1000).collect::<Vec<u32>>());
    }

    #[test]
    fn split_indices_are_positional() {
        let chunks = split(vec![1, 2, 3, 4, 5], 2);
        let indices: Vec<usize> = chunks.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn assemble_is_completion_order_independent() {
        let in_order = vec![
            Chunk { index: 0, items: vec![0, 1] },
            Chunk { index: 1, items: vec![2, 3] },
            Chunk { index: 2, items: vec![4] },
        ];
        let mut permuted = in_order.clone();
        permuted.rotate_left(2);

        let a = assemble(in_order, 5, |v| v * 10).unwrap();
        let b = assemble(permuted, 5, |v| v * 10).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, vec![0, 10, 20, 30, 40]);
    }

    #[test]
    fn assemble_rejects_short_results() {
        let completed = vec![Chunk { index: 0, items: vec![1, 2, 3] }];
        let err = assemble(completed, 4, |v: i32| v).unwrap_err();
        assert!(matches!(
            err,
            ClientError::ProtocolIntegrity { requests: 4, responses: 3 }
        ));
    }

    #[test]
    fn assemble_rejects_surplus_results() {
        let completed = vec![Chunk { index: 0, items: vec![1, 2, 3] }];
        assert!(assemble(completed, 2, |v: i32| v).is_err());
    }
}
