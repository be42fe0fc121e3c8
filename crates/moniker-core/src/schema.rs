mod inflections;
pub use inflections::Inflections;

mod name;
pub use name::Name;
