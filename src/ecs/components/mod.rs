pub mod body;
pub mod carrier;

pub use body::{BodyTemperature, ChemicalStore, Deceased, MetabolicRate, RestState};
pub use carrier::DiseaseCarrier;
