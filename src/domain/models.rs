#[derive(Debug, Clone)]
pub struct SelectionCriteria {
    pub include_scenes: bool,
    pub include_tests: bool,
    pub include_addons: bool,
    pub max_size_kb: u64,
}

#[derive(Debug, Clone)]
pub struct DocumentRecord {
    pub index: usize,
    pub source: String,
    pub content: String,
}

#[derive(Debug)]
pub struct ContextDocument {
    pub records: Vec<DocumentRecord>,
}
