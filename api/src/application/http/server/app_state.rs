use std::sync::Arc;

use calorielens_core::application::CalorieLensService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CalorieLensService>,
}

impl AppState {
    pub fn new(service: CalorieLensService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
