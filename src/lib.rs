mod coerce;
mod env;
mod error;
mod lexicon;
mod policy;
mod value;

pub use self::coerce::*;
pub use self::env::*;
pub use self::error::*;
pub use self::lexicon::*;
pub use self::policy::*;
pub use self::value::*;
