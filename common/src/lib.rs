//! Book Catalog Common Library
//!
//! CLIとWeb(WASM)で共有される型・デコード・表示状態

pub mod types;
pub mod error;
pub mod config;
pub mod schema;
pub mod account;
pub mod rpc;
pub mod decoder;
pub mod title;
pub mod card;
pub mod catalog;
pub mod presentation;

pub use types::{BookDisplay, RawBookAccount, RawBookFields, TimestampValue, WideInt};
pub use error::{Error, Result};
pub use config::RpcConfig;
pub use schema::ProgramSchema;
pub use rpc::{build_program_accounts_request, parse_program_accounts_response};
pub use decoder::{decode_record, format_publication_date, timestamp_to_seconds, to_date_string};
pub use title::{split_title, TitleParts};
pub use card::{CardEvent, CardFace, CardFlips};
pub use catalog::{BookSource, Catalog, RefreshTicket, ViewState};
pub use presentation::{CardView, Presentation, Tag, TagKind};
