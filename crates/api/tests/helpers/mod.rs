pub mod client;
pub mod setup;

pub use client::TestClient;
pub use setup::spawn_server;
