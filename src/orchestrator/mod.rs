pub mod batch_resolver;

pub use batch_resolver::{resolve_batch, resolve_from_file};
