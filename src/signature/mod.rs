//! Verb signatures.
//!
//! Plugin verbs describe their parameters with an explicit [`Signature`]
//! rather than being reflected at runtime. The [`SignatureInspector`] turns
//! such a descriptor into the ordered [`ParameterSpec`] list the flag grammar
//! is derived from.

mod error;
mod inspector;
mod value;

pub use error::SignatureError;
pub use inspector::{Inspectable, Signature, SignatureInspector};
pub use value::{ParamValue, ParameterSpec};
