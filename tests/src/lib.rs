//! Cross-crate tests: nmap XML on disk through the reader, classifier and aggregator.

mod classification;
mod fixtures;
