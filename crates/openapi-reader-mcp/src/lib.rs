pub mod http;
pub mod protocol;
pub mod server;
pub mod tools;
