use std::sync::Arc;

use crate::store::SensorStore;

/// Shared application state
///
/// The store is held behind its trait so the backing implementation is
/// chosen at the composition root, not here.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SensorStore>,
}
