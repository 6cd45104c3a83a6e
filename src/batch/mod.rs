//! 批量上传模块：按服务端单次上限切分并顺序提交。
//!
//! # Chunked Uploads
//!
//! The service accepts at most [`UPLOAD_BATCH_SIZE`] items per upload call.
//! Larger inputs are split into contiguous chunks that are submitted one after
//! another; the per-chunk responses are folded into one aggregate through
//! [`Merge`].
//!
//! ## Semantics
//!
//! - Chunk `N + 1` is not started until chunk `N` has returned.
//! - Item order is preserved within and across chunks.
//! - The first failing chunk aborts the loop and its error is returned as-is.
//!   Chunks that already succeeded stay applied on the server; there is no
//!   rollback.
//!
//! ## Example
//!
//! ```rust
//! use moorcheh_sdk::batch::{chunk_count, UPLOAD_BATCH_SIZE};
//!
//! assert_eq!(UPLOAD_BATCH_SIZE, 100);
//! assert_eq!(chunk_count(250, UPLOAD_BATCH_SIZE), 3);
//! ```

mod executor;

pub use executor::{chunk_count, run_chunked, Merge};

/// Server-side per-call item limit for bulk uploads.
pub const UPLOAD_BATCH_SIZE: usize = 100;
