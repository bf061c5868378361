//! HTTP server configuration object.

use std::net::SocketAddr;

use crate::outbound::persistence::DocumentStore;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: Option<DocumentStore>,
}

impl ServerConfig {
    /// Construct a configuration binding the given address, with no store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            store: None,
        }
    }

    /// Attach a document store handle for the persistence adapters.
    ///
    /// Without one, handlers run against the in-memory adapter.
    #[must_use]
    pub fn with_store(mut self, store: DocumentStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
