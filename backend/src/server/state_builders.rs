//! Handler state assembly from server configuration.

use std::sync::Arc;

use actix_web::web;

use super::ServerConfig;
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{MemoryStore, MongoAnalytics, MongoDriverStore, MongoUserStore};

/// Build handler state from the configured document store, falling back to
/// the in-memory adapter when none is attached.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.store {
        Some(store) => HttpState::new(
            Arc::new(MongoUserStore::new(store)),
            Arc::new(MongoDriverStore::new(store)),
            Arc::new(MongoAnalytics::new(store)),
        ),
        None => {
            let memory = Arc::new(MemoryStore::new());
            HttpState::new(memory.clone(), memory.clone(), memory)
        }
    };
    web::Data::new(state)
}
