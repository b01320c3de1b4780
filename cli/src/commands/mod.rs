pub mod banner;
pub mod upcase;
