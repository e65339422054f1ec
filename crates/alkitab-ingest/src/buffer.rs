//! The ingestion buffer: accumulate records, flush full batches to the sink.

use alkitab_core::VerseRecord;
use alkitab_sink::{SinkError, VerseSink};

/// Append-only record buffer bound to one sink for one run.
///
/// Reaching `capacity` flushes the buffer as one batch. In dry-run mode a
/// batch is counted as inserted without calling the sink.
pub struct IngestionBuffer<'s, S: VerseSink + ?Sized> {
    sink: &'s mut S,
    table: &'s str,
    capacity: usize,
    dry_run: bool,
    pending: Vec<VerseRecord>,
    inserted: usize,
    batches: usize,
}

impl<'s, S: VerseSink + ?Sized> IngestionBuffer<'s, S> {
    /// A `capacity` of zero is treated as one.
    pub fn new(sink: &'s mut S, table: &'s str, capacity: usize, dry_run: bool) -> Self {
        let capacity = capacity.max(1);
        Self {
            sink,
            table,
            capacity,
            dry_run,
            pending: Vec::with_capacity(capacity),
            inserted: 0,
            batches: 0,
        }
    }

    /// Append a record, flushing if the buffer is now full.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the flush fails.
    pub async fn push(&mut self, record: VerseRecord) -> Result<(), SinkError> {
        self.pending.push(record);
        if self.pending.len() >= self.capacity {
            self.flush().await?;
        }
        Ok(())
    }

    /// Send whatever is buffered as one batch. Does nothing when empty.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the sink rejects the batch; the buffered
    /// records are kept in that case.
    pub async fn flush(&mut self) -> Result<(), SinkError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let count = if self.dry_run {
            tracing::info!(rows = self.pending.len(), "dry run: would insert batch");
            self.pending.len()
        } else {
            let count = self.sink.insert_batch(self.table, &self.pending).await?;
            tracing::debug!(table = self.table, rows = count, "flushed batch");
            count
        };
        self.inserted += count;
        self.batches += 1;
        self.pending.clear();
        Ok(())
    }

    /// Rows inserted (or counted, in dry-run mode) so far.
    pub const fn inserted(&self) -> usize {
        self.inserted
    }

    /// Batches flushed so far.
    pub const fn batches(&self) -> usize {
        self.batches
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingSink, record};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(5, 2, vec![2, 2, 1])]
    #[case(4, 2, vec![2, 2])]
    #[case(3, 10, vec![3])]
    #[case(0, 3, vec![])]
    #[tokio::test]
    async fn batch_partitioning(
        #[case] records: u32,
        #[case] capacity: usize,
        #[case] expected: Vec<usize>,
    ) {
        let mut sink = RecordingSink::default();
        let mut buffer = IngestionBuffer::new(&mut sink, "t", capacity, false);
        for verse in 1..=records {
            buffer.push(record(1, 1, verse)).await.unwrap();
        }
        buffer.flush().await.unwrap();
        assert_eq!(buffer.inserted(), usize::try_from(records).unwrap());
        assert_eq!(sink.batch_sizes(), expected);
    }

    #[tokio::test]
    async fn flushes_at_capacity_and_on_demand() {
        let mut sink = RecordingSink::default();
        let mut buffer = IngestionBuffer::new(&mut sink, "bible_verses", 2, false);
        for verse in 1..=5 {
            buffer.push(record(1, 1, verse)).await.unwrap();
        }
        assert_eq!(buffer.pending(), 1);
        buffer.flush().await.unwrap();
        assert_eq!(buffer.inserted(), 5);
        assert_eq!(buffer.batches(), 3);
        assert_eq!(sink.batch_sizes(), vec![2, 2, 1]);
        assert_eq!(sink.tables, vec!["bible_verses"; 3]);
    }

    #[tokio::test]
    async fn empty_flush_is_a_no_op() {
        let mut sink = RecordingSink::default();
        let mut buffer = IngestionBuffer::new(&mut sink, "t", 10, false);
        buffer.flush().await.unwrap();
        assert_eq!(buffer.batches(), 0);
        assert!(sink.batches.is_empty());
    }

    #[tokio::test]
    async fn dry_run_counts_without_sending() {
        let mut sink = RecordingSink::default();
        let mut buffer = IngestionBuffer::new(&mut sink, "t", 3, true);
        for verse in 1..=7 {
            buffer.push(record(2, 1, verse)).await.unwrap();
        }
        buffer.flush().await.unwrap();
        assert_eq!(buffer.inserted(), 7);
        assert_eq!(buffer.batches(), 3);
        assert!(sink.batches.is_empty());
    }

    #[tokio::test]
    async fn zero_capacity_flushes_every_record() {
        let mut sink = RecordingSink::default();
        let mut buffer = IngestionBuffer::new(&mut sink, "t", 0, false);
        buffer.push(record(1, 1, 1)).await.unwrap();
        buffer.push(record(1, 1, 2)).await.unwrap();
        assert_eq!(sink.batch_sizes(), vec![1, 1]);
    }

    #[tokio::test]
    async fn rejected_batch_keeps_records() {
        let mut sink = RecordingSink::failing_after(1);
        let mut buffer = IngestionBuffer::new(&mut sink, "t", 2, false);
        buffer.push(record(1, 1, 1)).await.unwrap();
        buffer.push(record(1, 1, 2)).await.unwrap();
        buffer.push(record(1, 1, 3)).await.unwrap();
        let err = buffer.push(record(1, 1, 4)).await.unwrap_err();
        assert!(matches!(err, SinkError::Rejected { .. }));
        assert_eq!(buffer.inserted(), 2);
        assert_eq!(buffer.pending(), 2);
    }
}
