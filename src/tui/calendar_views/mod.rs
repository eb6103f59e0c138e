pub mod legend;
pub mod month;
