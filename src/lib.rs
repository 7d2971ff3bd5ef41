pub mod assembler;
pub mod ast;
pub mod catalog;
pub mod config;
pub mod encoder;
pub mod error;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod tokenizer;

#[cfg(test)]
mod encoder_tests;
#[cfg(test)]
mod parser_tests;
