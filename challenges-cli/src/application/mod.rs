pub mod replay;
pub mod schema;

pub use replay::{load_script, parse_script, replay, ReplayReport};
pub use schema::{write_schemas, SchemaFile};
