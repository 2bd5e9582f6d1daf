pub mod area;
pub mod facility;
