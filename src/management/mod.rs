mod state;

pub use state::InMemoryStateRegistry;
pub use state::STATE_TOKEN_TTL_SECS;
pub use state::StateStore;
