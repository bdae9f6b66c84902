pub mod loaders;
pub mod pubchem;
pub mod result;

pub use loaders::load_compound_list;
pub use pubchem::{CidResponse, CompoundProperties, IdentifierList, PropertyResponse, PropertyTable};
pub use result::{ResolutionResult, ResolutionStatus, ResultTable};
