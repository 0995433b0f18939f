//! `spark-buffer` 提供网络 I/O 暂存用的可增长字节缓冲。
//!
//! # 模块定位（Why）
//! - 编解码层（例如 `spark-ip`）需要同时支持“按绝对下标读写”与“按游标顺序读写”两类访问，
//!   而 `bytes::BytesMut` 只提供单游标的追加/消费语义。
//! - 本 crate 将这两类能力收敛为 [`IndexedBuffer`] 契约，并给出基于 `BytesMut` 的
//!   [`CursorBuffer`] 实现，使编解码逻辑只依赖契约而不绑定具体内存策略。
//!
//! # 设计概要（How）
//! - `indexed` 模块定义能力契约：容量增长、读/写游标、绝对下标 get/set；
//! - `cursor` 模块实现 `CursorBuffer`，以 `BytesMut` 的已初始化长度作为可访问上界；
//! - `config` 模块提供可由 TOML 反序列化的 [`BufferConfig`]，控制初始容量与增长策略。
//!
//! # 契约摘要（What）
//! - 不变式：`0 <= reader_index <= writer_index <= 已初始化长度 <= capacity`；
//! - `get_bytes` 只暴露 `writer_index` 以内的字节，避免读到未写入的区域；
//! - 游标越界属于调用方编程错误，直接 panic，不返回可恢复错误。

mod config;
mod cursor;
mod indexed;

pub use config::{BufferConfig, BufferConfigError, GrowthPolicy};
pub use cursor::CursorBuffer;
pub use indexed::IndexedBuffer;
