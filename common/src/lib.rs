//! Name AI Common Library
//!
//! Web(WASM)フロントエンドで使用する型とユーティリティ

pub mod csv;
pub mod error;
pub mod flow;
pub mod types;

pub use csv::{CsvRow, CsvTable};
pub use error::{Error, Result};
pub use flow::{Flow, FlowState, Ticket};
pub use types::{AnalyzeRequest, CsvAnalysis, NameAnalysis};
