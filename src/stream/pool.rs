//! Fixed-size ring of acquisition buffers owned by a streaming session.

use std::fmt;
use std::sync::{Arc, Mutex, Weak};

/// Requeue against a pool whose session has already been torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequeueError;

impl fmt::Display for RequeueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "buffer pool detached")
    }
}

impl std::error::Error for RequeueError {}

struct PoolInner {
    slots: Mutex<Vec<Vec<u8>>>,
    buffer_count: usize,
}

/// Ring of `buffer_count` reusable byte buffers.
///
/// The count is fixed at construction and for the lifetime of the streaming
/// session that owns the pool. Buffers cycle idle → filled by the device →
/// delivered → requeued; a buffer lost to a failed requeue degrades that slot
/// only.
#[derive(Clone)]
pub struct FramePool {
    inner: Arc<PoolInner>,
}

impl FramePool {
    pub fn new(buffer_count: usize) -> Self {
        let slots = (0..buffer_count).map(|_| Vec::new()).collect();
        Self {
            inner: Arc::new(PoolInner {
                slots: Mutex::new(slots),
                buffer_count,
            }),
        }
    }

    /// Number of buffers the pool was created with.
    pub fn buffer_count(&self) -> usize {
        self.inner.buffer_count
    }

    /// Buffers currently idle (not on loan to the device or a frame).
    pub fn idle_buffers(&self) -> usize {
        self.inner.slots.lock().expect("lock poisoned").len()
    }

    /// Take an idle buffer, or `None` when every buffer is in flight.
    pub fn acquire(&self) -> Option<PoolBuffer> {
        let data = self.inner.slots.lock().expect("lock poisoned").pop()?;
        Some(PoolBuffer {
            data,
            pool: Arc::downgrade(&self.inner),
        })
    }
}

impl fmt::Debug for FramePool {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FramePool")
            .field("buffer_count", &self.inner.buffer_count)
            .field("idle_buffers", &self.idle_buffers())
            .finish()
    }
}

/// A buffer on loan from a [`FramePool`].
///
/// Holds only a weak reference to the ring, so a pool released by a stream
/// stop is not kept alive by frames still in flight; requeueing into the
/// released ring reports [`RequeueError`] instead.
pub struct PoolBuffer {
    data: Vec<u8>,
    pool: Weak<PoolInner>,
}

impl PoolBuffer {
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Vec<u8> {
        &mut self.data
    }

    /// Return the buffer to its ring.
    pub fn requeue(self) -> Result<(), RequeueError> {
        let inner = self.pool.upgrade().ok_or(RequeueError)?;
        let mut slots = inner.slots.lock().expect("lock poisoned");
        if slots.len() < inner.buffer_count {
            slots.push(self.data);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_hands_out_exactly_buffer_count_buffers() {
        let pool = FramePool::new(3);
        assert_eq!(pool.buffer_count(), 3);
        assert_eq!(pool.idle_buffers(), 3);

        let a = pool.acquire().unwrap();
        let b = pool.acquire().unwrap();
        let c = pool.acquire().unwrap();
        assert!(pool.acquire().is_none());

        a.requeue().unwrap();
        assert_eq!(pool.idle_buffers(), 1);
        b.requeue().unwrap();
        c.requeue().unwrap();
        assert_eq!(pool.idle_buffers(), 3);
    }

    #[test]
    fn requeue_after_pool_release_fails() {
        let pool = FramePool::new(3);
        let buffer = pool.acquire().unwrap();
        drop(pool);

        assert_eq!(buffer.requeue(), Err(RequeueError));
    }

    #[test]
    fn buffers_keep_their_contents_across_requeue() {
        let pool = FramePool::new(3);
        let mut buffer = pool.acquire().unwrap();
        buffer.data_mut().extend_from_slice(&[1, 2, 3]);
        buffer.requeue().unwrap();

        // The ring reuses storage; contents are overwritten by the device.
        let total: usize = std::iter::from_fn(|| pool.acquire())
            .take(3)
            .map(|b| b.data().len())
            .sum();
        assert_eq!(total, 3);
    }
}
