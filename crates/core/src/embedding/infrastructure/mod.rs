pub mod embedding_extractor;
