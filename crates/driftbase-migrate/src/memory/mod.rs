mod history_source;

pub use history_source::InMemoryHistorySource;
