//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without a live store.

use std::sync::Arc;

use crate::domain::ports::{AnalyticsQuery, DriverStore, UserStore};

/// Dependency bundle injected into every HTTP handler.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserStore>,
    pub drivers: Arc<dyn DriverStore>,
    pub analytics: Arc<dyn AnalyticsQuery>,
}

impl HttpState {
    /// Construct state from port implementations.
    pub fn new(
        users: Arc<dyn UserStore>,
        drivers: Arc<dyn DriverStore>,
        analytics: Arc<dyn AnalyticsQuery>,
    ) -> Self {
        Self {
            users,
            drivers,
            analytics,
        }
    }
}
