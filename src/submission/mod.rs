pub mod decode;
pub mod parser;
