//! Stream control and frame subscription commands.
//!
//! stream_start/stream_stop delegate to the lifecycle controller so they
//! share its transition lock with the graph monitor's automatic requests.

use std::collections::HashMap;
use std::sync::RwLock;

use tauri::command;
use tauri::ipc::Channel;
use uuid::Uuid;

use crate::commands::{blocking, node};
use crate::errors::CameraError;
use crate::types::Frame;

lazy_static::lazy_static! {
    static ref SUBSCRIPTIONS: RwLock<HashMap<String, tokio::task::JoinHandle<()>>> =
        RwLock::new(HashMap::new());
}

/// Explicitly start streaming with the configured buffer count.
#[command]
pub async fn stream_start() -> Result<(), CameraError> {
    let node = node()?;
    blocking(move || node.stream_start()).await
}

/// Stop streaming. Best-effort: reports success once the stream is stopped,
/// even if the device grumbled on the way down.
#[command]
pub async fn stream_stop() -> Result<(), CameraError> {
    let node = node()?;
    blocking(move || {
        node.stream_stop();
        Ok(())
    })
    .await
}

/// Subscribe to live frames, delivered through `on_frame`.
///
/// The first subscriber makes the graph monitor start the stream; dropping
/// the last one (or a closed channel) makes it stop. Returns the
/// subscription id for `stream_unsubscribe`.
#[command]
pub async fn stream_subscribe(on_frame: Channel<Frame>) -> Result<String, CameraError> {
    let node = node()?;
    let mut subscription = node.subscribe();
    let id = Uuid::new_v4().to_string();

    let task_id = id.clone();
    let handle = tokio::spawn(async move {
        while let Some(frame) = subscription.recv().await {
            if on_frame.send((*frame).clone()).is_err() {
                log::debug!("Frame channel for subscriber {} closed", task_id);
                break;
            }
        }
        SUBSCRIPTIONS
            .write()
            .expect("lock poisoned")
            .remove(&task_id);
    });

    SUBSCRIPTIONS
        .write()
        .expect("lock poisoned")
        .insert(id.clone(), handle);
    log::info!("Frame subscriber {} registered", id);
    Ok(id)
}

/// Drop a frame subscription created by `stream_subscribe`.
#[command]
pub async fn stream_unsubscribe(subscription_id: String) -> Result<(), CameraError> {
    let handle = SUBSCRIPTIONS
        .write()
        .expect("lock poisoned")
        .remove(&subscription_id);

    match handle {
        Some(handle) => {
            handle.abort();
            log::info!("Frame subscriber {} removed", subscription_id);
            Ok(())
        }
        None => Err(CameraError::StreamError(format!(
            "No subscription with id {}",
            subscription_id
        ))),
    }
}
