// Reusable library API — the CLI binary is a thin shell over these modules
pub mod errors;
pub mod language;
pub mod locale;
pub mod log;
pub mod ordering;
pub mod pattern;
pub mod solver;
pub mod word_list;
