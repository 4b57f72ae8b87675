mod http_document_fetcher;

pub use http_document_fetcher::HttpDocumentFetcher;
