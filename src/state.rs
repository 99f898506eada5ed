// src/state.rs
use std::sync::Arc;

use crate::repository::UserRepository;
use crate::services::UserService;

#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
}

impl AppState {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            users: UserService::new(repository),
        }
    }
}
