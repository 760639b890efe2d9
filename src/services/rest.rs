pub mod endpoints;
pub mod payloads;
pub mod server;
