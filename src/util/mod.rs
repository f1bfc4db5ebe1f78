mod actors;
mod parse_int;

pub use actors::{join_actors, split_actors};
pub use parse_int::parse_int;
