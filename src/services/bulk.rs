//! Partial-failure aggregation for bulk operations
//!
//! Used by "delete N records" and "notify N recipients": every item is
//! attempted regardless of the others' failures, with no short-circuit and no
//! rollback of already-succeeded items. All actions are dispatched
//! concurrently and awaited as a set; the caller refreshes the underlying
//! collection exactly once, after the whole batch has settled, never per item.

use crate::domain::types::BulkOperationResult;
use std::future::Future;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Run `action` for every item concurrently and aggregate the outcomes.
///
/// Results are reported in input order so operator-facing failure lists are
/// deterministic; completion order is irrelevant. A panicked task is recorded
/// as a failure for its item rather than poisoning the batch.
pub async fn run_bulk<T, F, Fut, E>(items: Vec<T>, action: F) -> BulkOperationResult<T>
where
    T: Clone + Send + 'static,
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    let total = items.len();
    let mut set = JoinSet::new();

    for (idx, item) in items.iter().enumerate() {
        let fut = action(item.clone());
        set.spawn(async move {
            let outcome = fut.await.map_err(|e| e.to_string());
            (idx, outcome)
        });
    }

    // Collect all outcomes keyed by input index before classifying
    let mut outcomes: Vec<Option<Result<(), String>>> = (0..total).map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((idx, outcome)) => outcomes[idx] = Some(outcome),
            Err(e) => {
                // Task panicked or was cancelled; its slot stays None and is
                // classified as failed below
                warn!(error = %e, "bulk_item_task_failed");
            }
        }
    }

    let mut result = BulkOperationResult::new();
    for (item, outcome) in items.into_iter().zip(outcomes) {
        match outcome {
            Some(Ok(())) => result.succeeded.push(item),
            Some(Err(msg)) => result.failed.push((item, msg)),
            None => result.failed.push((item, "task aborted".to_string())),
        }
    }

    info!(
        total = %total,
        succeeded = %result.succeeded.len(),
        failed = %result.failed.len(),
        "bulk_operation_settled"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_all_succeed() {
        let result = run_bulk(vec![1i64, 2, 3], |_| async { Ok::<(), String>(()) }).await;

        assert_eq!(result.succeeded, vec![1, 2, 3]);
        assert!(result.failed.is_empty());
        assert!(result.all_succeeded());
    }

    #[tokio::test]
    async fn test_partial_failure_attempts_every_item() {
        // Items 2 and 4 fail; the rest must still be attempted and succeed
        let attempted = Arc::new(AtomicUsize::new(0));
        let attempted_clone = Arc::clone(&attempted);

        let result = run_bulk(vec![1i64, 2, 3, 4, 5], move |item| {
            let attempted = Arc::clone(&attempted_clone);
            async move {
                attempted.fetch_add(1, Ordering::SeqCst);
                if item == 2 || item == 4 {
                    Err(format!("record {item} is referenced by a report"))
                } else {
                    Ok(())
                }
            }
        })
        .await;

        assert_eq!(attempted.load(Ordering::SeqCst), 5);
        assert_eq!(result.succeeded.len(), 3);
        assert_eq!(result.failed.len(), 2);
        assert_eq!(result.succeeded, vec![1, 3, 5]);
        assert_eq!(result.failed[0].0, 2);
        assert_eq!(result.failed[1].0, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_aggregate_ready_only_after_all_items_settle() {
        // The single post-batch refresh must not race an in-flight item: by
        // the time the aggregate is returned, every action has settled, even
        // when completions land out of order
        let settled = Arc::new(AtomicUsize::new(0));
        let settled_clone = Arc::clone(&settled);

        let result = run_bulk(vec![5i64, 4, 3, 2, 1], move |item| {
            let settled = Arc::clone(&settled_clone);
            async move {
                // Stagger completions in reverse of dispatch order
                tokio::time::sleep(std::time::Duration::from_millis(item as u64 * 10)).await;
                settled.fetch_add(1, Ordering::SeqCst);
                if item == 2 || item == 4 {
                    Err("gone".to_string())
                } else {
                    Ok(())
                }
            }
        })
        .await;

        assert_eq!(settled.load(Ordering::SeqCst), 5);
        assert_eq!(result.total(), 5);
        assert_eq!(result.succeeded.len(), 3);
        assert_eq!(result.failed.len(), 2);
    }

    #[tokio::test]
    async fn test_failure_messages_preserved() {
        let result = run_bulk(vec!["a".to_string(), "b".to_string()], |item| async move {
            if item == "b" {
                Err("recipient unreachable".to_string())
            } else {
                Ok(())
            }
        })
        .await;

        assert_eq!(result.failed.len(), 1);
        assert_eq!(result.failed[0].1, "recipient unreachable");
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let result = run_bulk(Vec::<i64>::new(), |_| async { Ok::<(), String>(()) }).await;

        assert_eq!(result.total(), 0);
        assert!(result.all_succeeded());
    }
}
