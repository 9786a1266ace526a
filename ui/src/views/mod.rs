mod site;

pub use site::{LeadStoreHandle, Site};
