pub mod document_builder;
pub mod file_selector;
