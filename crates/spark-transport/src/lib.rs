#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![doc = "spark-transport: 传输端点的地址契约。"]
#![doc = ""]
#![doc = "== 使命概述 =="]
#![doc = "- **Why**：地址编解码（`spark-ip`）与具体传输实现之间需要一个不依赖运行时的共同地址类型。"]
#![doc = "- **What**：提供 `TransportSocketAddr`（按地址族打包的 IP + 端口）与 `HostSocketAddr`（附带主机名标签）。"]
#![doc = "- **How**：面向 `no_std + alloc` 环境设计，`std` 特性下额外提供与 `std::net::SocketAddr` 的互转。"]

extern crate alloc;

pub mod addr;

pub use addr::{HostSocketAddr, TransportSocketAddr};
