use std::sync::Arc;

use safebite_core::application::SafebiteService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SafebiteService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SafebiteService) -> Self {
        Self { args, service }
    }
}
