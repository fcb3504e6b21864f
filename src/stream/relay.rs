//! Per-frame republication and buffer requeue.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;

use bytes::Bytes;

use crate::device::DeliveredFrame;
use crate::stream::hub::FrameHub;
use crate::types::Frame;

/// Sequence id meaning "no frame seen yet this session".
const SEQUENCE_UNKNOWN: i64 = -1;

/// Handles every frame delivered by the device during one streaming session.
///
/// A fresh relay is installed at each stream start, which resets the
/// last-seen sequence id. The callback context is device-owned; nothing here
/// blocks on subscribers.
pub struct FrameRelay {
    hub: Arc<FrameHub>,
    last_seen: AtomicI64,
    gap_events: AtomicU64,
    missing_frames: AtomicU64,
}

impl FrameRelay {
    pub fn new(hub: Arc<FrameHub>) -> Self {
        Self {
            hub,
            last_seen: AtomicI64::new(SEQUENCE_UNKNOWN),
            gap_events: AtomicU64::new(0),
            missing_frames: AtomicU64::new(0),
        }
    }

    /// Relay one delivered frame: account for sequence gaps, publish to
    /// subscribers, requeue the buffer. The requeue happens regardless of the
    /// publication outcome; a requeue failure costs that slot only and is
    /// never escalated.
    pub fn on_frame(&self, frame: DeliveredFrame) {
        let sequence_id = frame.sequence_id();
        let last_seen = self.last_seen.swap(sequence_id, Ordering::AcqRel);

        if last_seen != SEQUENCE_UNKNOWN {
            let diff = sequence_id - last_seen;
            if diff > 1 {
                log::warn!("{} frames missing", diff - 1);
                self.gap_events.fetch_add(1, Ordering::Relaxed);
                self.missing_frames
                    .fetch_add((diff - 1) as u64, Ordering::Relaxed);
            }
        }

        let published = Frame {
            sequence_id,
            timestamp: frame.timestamp(),
            width: frame.width(),
            height: frame.height(),
            pixel_format: frame.pixel_format().to_string(),
            // Copy before requeue so no subscriber ever aliases the
            // acquisition buffer.
            data: Bytes::copy_from_slice(frame.pixel_data()),
        };
        self.hub.publish(published);

        if let Err(error) = frame.requeue() {
            log::error!("Frame requeue failed: {}", error);
        }
    }

    /// Last sequence id seen this session, if any. Advisory, for diagnostics.
    pub fn last_seen(&self) -> Option<i64> {
        match self.last_seen.load(Ordering::Acquire) {
            SEQUENCE_UNKNOWN => None,
            id => Some(id),
        }
    }

    /// Number of detected discontinuities this session.
    pub fn gap_events(&self) -> u64 {
        self.gap_events.load(Ordering::Relaxed)
    }

    /// Total frames reported missing this session.
    pub fn missing_frames(&self) -> u64 {
        self.missing_frames.load(Ordering::Relaxed)
    }
}
