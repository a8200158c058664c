pub mod board;
pub mod decode;
