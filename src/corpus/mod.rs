// Corpus ingestion — tokenizing documents and counting word/document
// frequencies per label.

pub mod ingest;
pub mod tokenize;
