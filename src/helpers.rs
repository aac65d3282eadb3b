mod pem;
mod private;
mod public;

pub(crate) use pem::pem_to_key_material;
pub(crate) use private::*;
pub use public::*;
