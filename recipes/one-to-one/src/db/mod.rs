pub mod rank;
pub mod soldier;
