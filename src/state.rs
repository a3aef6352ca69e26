use std::sync::Arc;

use tahanun_core::{ClassificationEngine, HolidayCatalog};
use tahanun_hebcal::HebcalConverter;

/// Shared application state. The engine (catalog included) is immutable
/// after startup, so handlers share one instance.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ClassificationEngine<HebcalConverter>>,
}

impl AppState {
    pub fn new() -> Self {
        let engine = ClassificationEngine::new(HolidayCatalog::default(), HebcalConverter::new());
        AppState {
            engine: Arc::new(engine),
        }
    }
}
