pub mod resolver;
pub mod utils;
