pub mod grade;
pub mod init;
pub mod parse;
pub mod sample;
pub mod validate;
