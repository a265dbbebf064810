//! Static page content

pub mod profile;
pub mod sections;

pub use profile::*;
pub use sections::Section;
