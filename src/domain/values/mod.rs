pub mod category;
pub mod lexicon;
pub mod source_config;
