pub mod language;
pub mod math;
pub mod text;

pub use language::Language;
