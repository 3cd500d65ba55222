pub mod distance;
pub mod error;
pub mod geojson_io;
pub mod kernel;
pub mod nesting;
pub mod reader;
pub mod resolver;
pub mod skeleton;
pub mod tgf;
pub mod utils;
pub mod wasm;

pub use error::{Result, SoupError};
pub use nesting::{NestingNode, NestingRole, PolygonGroup, PolygonId};
pub use resolver::{resolve, Nesting, SoupResolver};
