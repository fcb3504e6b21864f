pub mod config;
pub mod features;
pub mod settings;
pub mod status;
pub mod stream;

pub use config::*;
pub use features::*;
pub use settings::*;
pub use status::*;
pub use stream::*;

use std::sync::{Arc, RwLock};

use crate::errors::CameraError;
use crate::node::CameraNode;

lazy_static::lazy_static! {
    static ref NODE: RwLock<Option<Arc<CameraNode>>> = RwLock::new(None);
}

/// Install the process-wide camera node. Called once from plugin setup;
/// a second installation is a startup error.
pub fn install_node(node: Arc<CameraNode>) -> Result<(), CameraError> {
    let mut slot = NODE.write().expect("lock poisoned");
    if slot.is_some() {
        return Err(CameraError::InitializationError(
            "Camera node already initialized".to_string(),
        ));
    }
    *slot = Some(node);
    Ok(())
}

/// Drop the installed node, running its teardown sequence.
pub fn shutdown_node() {
    NODE.write().expect("lock poisoned").take();
}

pub(crate) fn node() -> Result<Arc<CameraNode>, CameraError> {
    NODE.read()
        .expect("lock poisoned")
        .clone()
        .ok_or_else(|| CameraError::InitializationError("Camera node not initialized".to_string()))
}

/// Run a blocking device call off the async runtime.
pub(crate) async fn blocking<T: Send + 'static>(
    call: impl FnOnce() -> Result<T, CameraError> + Send + 'static,
) -> Result<T, CameraError> {
    tokio::task::spawn_blocking(call)
        .await
        .map_err(|e| CameraError::Internal(format!("Task join error: {}", e)))?
}
