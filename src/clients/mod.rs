pub mod pubchem_client;

pub use pubchem_client::PubChemClient;
