pub mod parse;
pub mod profiles;
pub mod serve;
