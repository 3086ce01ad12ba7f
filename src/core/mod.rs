pub mod http;
pub mod resolver;
