//! Chunked write saga
//!
//! Bulk imports write in fixed-size chunks and track a high-water-mark of
//! committed chunks. A failure stops the run with the mark intact, so a
//! second `run` resumes after the last committed chunk instead of
//! re-inserting rows that already landed.

use std::future::Future;

use crate::AppResult;

/// Resumable chunked write over a fixed item list
pub struct ChunkedWrite<T> {
    chunks: Vec<Vec<T>>,
    committed: usize,
}

impl<T: Clone> ChunkedWrite<T> {
    pub fn new(items: Vec<T>, chunk_size: usize) -> Self {
        let chunks = items
            .chunks(chunk_size.max(1))
            .map(|c| c.to_vec())
            .collect();
        Self {
            chunks,
            committed: 0,
        }
    }

    /// Total number of chunks
    pub fn total(&self) -> usize {
        self.chunks.len()
    }

    /// Chunks confirmed written so far
    pub fn committed(&self) -> usize {
        self.committed
    }

    /// Write the remaining chunks in order. Stops at the first failure,
    /// leaving the high-water-mark at the last committed chunk.
    pub async fn run<F, Fut>(&mut self, mut write: F) -> AppResult<()>
    where
        F: FnMut(Vec<T>) -> Fut,
        Fut: Future<Output = AppResult<()>>,
    {
        while self.committed < self.chunks.len() {
            let chunk = self.chunks[self.committed].clone();
            write(chunk).await?;
            self.committed += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::AppError;
    use std::sync::Mutex;

    #[tokio::test]
    async fn writes_all_chunks_in_order() {
        let written = Mutex::new(Vec::new());
        let mut saga = ChunkedWrite::new((0..7).collect(), 3);
        assert_eq!(saga.total(), 3);

        saga.run(|chunk| {
            written.lock().unwrap().push(chunk);
            async { Ok(()) }
        })
        .await
        .unwrap();

        assert_eq!(saga.committed(), 3);
        assert_eq!(
            *written.lock().unwrap(),
            vec![vec![0, 1, 2], vec![3, 4, 5], vec![6]]
        );
    }

    #[tokio::test]
    async fn failure_keeps_high_water_mark_and_skips_later_chunks() {
        let attempts = Mutex::new(Vec::new());
        let mut saga = ChunkedWrite::new((0..9).collect::<Vec<i32>>(), 3);

        let result = saga
            .run(|chunk| {
                let first = chunk[0];
                attempts.lock().unwrap().push(first);
                async move {
                    if first == 3 {
                        Err(AppError::remote("timeout"))
                    } else {
                        Ok(())
                    }
                }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(saga.committed(), 1);
        // Third chunk never attempted
        assert_eq!(*attempts.lock().unwrap(), vec![0, 3]);
    }

    #[tokio::test]
    async fn resume_continues_after_last_committed_chunk() {
        let mut saga = ChunkedWrite::new((0..9).collect::<Vec<i32>>(), 3);
        let mut fail_once = true;

        let result = saga
            .run(|chunk| {
                let fail = fail_once && chunk[0] == 3;
                if fail {
                    fail_once = false;
                }
                async move {
                    if fail {
                        Err(AppError::remote("timeout"))
                    } else {
                        Ok(())
                    }
                }
            })
            .await;
        assert!(result.is_err());
        assert_eq!(saga.committed(), 1);

        let resumed = Mutex::new(Vec::new());
        saga.run(|chunk| {
            resumed.lock().unwrap().push(chunk[0]);
            async { Ok(()) }
        })
        .await
        .unwrap();

        assert_eq!(saga.committed(), 3);
        // First chunk is not re-written
        assert_eq!(*resumed.lock().unwrap(), vec![3, 6]);
    }

    #[tokio::test]
    async fn empty_input_commits_nothing() {
        let mut saga: ChunkedWrite<i32> = ChunkedWrite::new(Vec::new(), 50);
        saga.run(|_| async { Ok(()) }).await.unwrap();
        assert_eq!(saga.total(), 0);
        assert_eq!(saga.committed(), 0);
    }
}
