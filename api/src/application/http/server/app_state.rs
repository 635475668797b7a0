use std::sync::Arc;

use nutriplan_core::application::NutriplanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutriplanService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriplanService) -> Self {
        Self { args, service }
    }
}
