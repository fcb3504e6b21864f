//! Fan-out of published frames to subscribers.
//!
//! Subscribing and unsubscribing raise a graph-changed flag; the graph
//! monitor samples and clears it on its poll cycle to drive automatic stream
//! start/stop. The subscriber count itself is never cached, it is recomputed
//! from the channel on every observation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;

use crate::types::Frame;

/// Frames a subscriber may fall behind before it starts losing the oldest.
const SUBSCRIBER_QUEUE_DEPTH: usize = 32;

pub struct FrameHub {
    sender: broadcast::Sender<Arc<Frame>>,
    graph_changed: Arc<AtomicBool>,
}

impl FrameHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(SUBSCRIBER_QUEUE_DEPTH);
        Self {
            sender,
            graph_changed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn subscribe(&self) -> FrameSubscription {
        let rx = self.sender.subscribe();
        self.graph_changed.store(true, Ordering::Release);
        FrameSubscription {
            rx,
            graph_changed: self.graph_changed.clone(),
        }
    }

    /// Live subscriber count, recomputed from the channel.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Broadcast a frame to every current subscriber.
    ///
    /// Fire-and-forget: having no subscribers at the time of the actual send
    /// is not an error. Returns the number of subscribers the send reached.
    pub fn publish(&self, frame: Frame) -> usize {
        self.sender.send(Arc::new(frame)).unwrap_or(0)
    }

    /// Check and clear the graph-changed flag.
    pub fn take_graph_change(&self) -> bool {
        self.graph_changed.swap(false, Ordering::AcqRel)
    }
}

impl Default for FrameHub {
    fn default() -> Self {
        Self::new()
    }
}

/// A live frame subscription. Dropping it unsubscribes and notifies the
/// graph monitor.
pub struct FrameSubscription {
    rx: broadcast::Receiver<Arc<Frame>>,
    graph_changed: Arc<AtomicBool>,
}

impl FrameSubscription {
    /// Receive the next frame, skipping over any lost to lag. Returns `None`
    /// once the hub is gone.
    pub async fn recv(&mut self) -> Option<Arc<Frame>> {
        loop {
            match self.rx.recv().await {
                Ok(frame) => return Some(frame),
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    log::warn!("Slow subscriber lost {} frames", missed);
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Non-blocking receive; `None` when no frame is ready.
    pub fn try_recv(&mut self) -> Option<Arc<Frame>> {
        loop {
            match self.rx.try_recv() {
                Ok(frame) => return Some(frame),
                Err(broadcast::error::TryRecvError::Lagged(missed)) => {
                    log::warn!("Slow subscriber lost {} frames", missed);
                }
                Err(_) => return None,
            }
        }
    }
}

impl Drop for FrameSubscription {
    fn drop(&mut self) {
        self.graph_changed.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use chrono::Utc;

    fn frame(sequence_id: i64) -> Frame {
        Frame {
            sequence_id,
            timestamp: Utc::now(),
            width: 4,
            height: 4,
            pixel_format: "Mono8".into(),
            data: Bytes::from_static(&[0u8; 16]),
        }
    }

    #[test]
    fn subscribe_and_drop_raise_graph_change() {
        let hub = FrameHub::new();
        assert!(!hub.take_graph_change());

        let sub = hub.subscribe();
        assert!(hub.take_graph_change());
        assert!(!hub.take_graph_change());
        assert_eq!(hub.subscriber_count(), 1);

        drop(sub);
        assert!(hub.take_graph_change());
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn publish_without_subscribers_is_not_an_error() {
        let hub = FrameHub::new();
        assert_eq!(hub.publish(frame(1)), 0);
    }

    #[tokio::test]
    async fn published_frames_reach_every_subscriber_in_order() {
        let hub = FrameHub::new();
        let mut first = hub.subscribe();
        let mut second = hub.subscribe();

        hub.publish(frame(1));
        hub.publish(frame(2));

        for sub in [&mut first, &mut second] {
            assert_eq!(sub.recv().await.unwrap().sequence_id, 1);
            assert_eq!(sub.recv().await.unwrap().sequence_id, 2);
        }
    }

    #[tokio::test]
    async fn recv_returns_none_once_hub_is_gone() {
        let hub = FrameHub::new();
        let mut sub = hub.subscribe();
        drop(hub);
        assert!(sub.recv().await.is_none());
    }
}
