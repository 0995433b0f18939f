#![deny(unsafe_code)]
//! `spark-ip`: 带类型的 IP 地址值，以及文本、线上字节与双游标缓冲之间的编解码。
//!
//! # 模块定位（Why）
//! - SIP/SDP/RTCP 等协议既在文本中书写地址，也在二进制报文中嵌入 4/16 字节的裸地址；
//!   两条路径必须对同一个地址得出一致的值；
//! - 传输层只认 [`spark_transport::TransportSocketAddr`]，编解码结果需要能无损地转换为传输端点。
//!
//! # 设计概要（How）
//! - [`Ipv4Value`]/[`Ipv6Value`] 是定长字节持有者，[`IpAddress`] 是二者的带标签联合；
//! - [`text`] 模块负责解析与格式化，IPv6 输出从不做零压缩；
//! - [`IpBufferExt`] 以扩展 trait 的形式为任意 [`spark_buffer::IndexedBuffer`] 提供
//!   `set/get/write/read` 四组地址编解码方法，线上格式统一为大端；
//! - `socket` 模块在地址与 [`spark_transport::HostSocketAddr`] 之间互转。
//!
//! # 契约摘要（What）
//! - 所有可恢复失败统一为 [`IpError`]；下标溢出等编程错误直接 panic；
//! - 库代码只通过 `tracing` 发出事件，从不安装订阅者：
//!   文本解析失败记为 `debug`（target `spark_ip::text`），缓冲字节不足记为 `trace`（target `spark_ip::buffer`）。
//!
//! # Feature
//! - `serde`：三种地址类型以规范文本形式（反）序列化。

mod buffer;
mod error;
mod ip;
mod ipv4;
mod ipv6;
#[cfg(feature = "serde")]
mod serde_impl;
mod socket;
pub mod text;

pub use buffer::IpBufferExt;
pub use error::IpError;
pub use ip::{IpAddress, IpFamily};
pub use ipv4::Ipv4Value;
pub use ipv6::Ipv6Value;
pub use socket::SocketAddrIpExt;
