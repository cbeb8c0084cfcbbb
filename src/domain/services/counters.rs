use crate::domain::ports::EventRepository;
use tracing::warn;

/// Best-effort counter adjustment. The guest records are the source of
/// truth; the event counters are a denormalized read-optimization, so a
/// failed adjustment is logged and swallowed rather than surfaced. The
/// caller's guest/token mutation must never be rolled back over it.
pub async fn adjust(repo: &dyn EventRepository, event_id: &str, status: &str, delta: i32) {
    if let Err(e) = repo.adjust_counts(event_id, status, delta).await {
        warn!("Counter update failed for event {} ({} {:+}): {}", event_id, status, delta, e);
    }
}

/// Moves one guest between status buckets: remove from the old one, add to
/// the new one. No-op when the status did not change. The two halves clamp
/// independently, so on an event whose buckets already drifted to zero the
/// decrement is absorbed while the increment still lands, netting
/// guest_count +1. The guest rows remain the source of truth either way.
pub async fn transition(repo: &dyn EventRepository, event_id: &str, from: &str, to: &str) {
    if from == to {
        return;
    }
    adjust(repo, event_id, from, -1).await;
    adjust(repo, event_id, to, 1).await;
}
