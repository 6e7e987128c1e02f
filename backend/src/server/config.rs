//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) seed_demo_user: bool,
}

impl ServerConfig {
    /// Configuration backed by the in-memory stores with the demo user
    /// seeded.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            seed_demo_user: true,
        }
    }

    /// Attach a database connection pool for the Diesel adapters.
    ///
    /// When provided, the server persists to PostgreSQL instead of the
    /// in-memory stores.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Toggle seeding of the demo user when it is absent from either store.
    #[must_use]
    pub fn with_demo_user(mut self, seed: bool) -> Self {
        self.seed_demo_user = seed;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Whether the server persists to PostgreSQL.
    #[must_use]
    pub fn uses_database(&self) -> bool {
        self.db_pool.is_some()
    }
}
