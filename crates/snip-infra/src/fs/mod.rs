pub mod buffer_file;
pub mod document_repo;

pub use buffer_file::FileHistoryBuffer;
pub use document_repo::FileDocumentRepository;
