//! Food catalogue and diary module

mod service;

pub use service::DiaryService;
