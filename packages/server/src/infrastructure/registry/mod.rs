//! 接続レジストリの実装
//!
//! ## 概要
//!
//! このモジュールは `ConnectionRegistry` trait の具体的な実装を提供します。
//!
//! ## 実装
//!
//! - `inmemory`: Mutex で保護した HashMap を使った実装

pub mod inmemory;

pub use inmemory::InMemoryConnectionRegistry;
