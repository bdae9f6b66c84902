pub mod list_loader;

pub use list_loader::load_compound_list;
