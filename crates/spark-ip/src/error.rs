//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 集中定义地址解析与缓冲编解码的全部可恢复失败，调用方只需匹配一个枚举；
//! - 三类失败对应三种不同的处置方式：文本非法（回退或上报用户）、字节不足（等待更多数据后重试）、
//!   底层原语报错（记录原因后丢弃）。
//!
//! ## 设计要求（What）
//! - 派生 `thiserror::Error`，与 `std::error::Error` 生态兼容；
//! - 文本解析失败必须携带原始输入，便于排障；
//! - `DecodingFailed` 的 `reason` 按大小写不敏感比较，仅为测试断言提供便利，展示时保持原样。
//!
//! ## 非目标
//! - 下标前置条件违例属于编程错误，以 panic 终止，不进入本枚举。

use thiserror::Error;

/// `spark-ip` 的统一错误类型。
///
/// # 教案式说明
/// - **意图 (Why)**：解析、取值、解码三条路径都以 `Result<_, IpError>` 返回，`?` 可直接串联；
/// - **契约 (What)**：
///   - 所有变体均为不可变值，`Clone + Send + Sync + 'static`；
///   - `MalformedAddress` 的 `input` 保存调用方传入的原始字符串，不做裁剪；
///   - `NotEnoughBytes` 不携带负载，调用方已知道自己请求的下标与长度；
/// - **设计权衡 (Trade-offs)**：`reason` 使用 `Option<String>`，允许底层原语在没有结构化原因时留空。
#[derive(Clone, Debug, Error)]
pub enum IpError {
    /// 文本既不是合法的 IPv4 也不是合法的 IPv6 地址。
    #[error("failed to parse IP address from `{input}`")]
    MalformedAddress { input: String },

    /// 缓冲中从目标下标起的可读字节不足以容纳一个完整地址。
    #[error("not enough readable bytes in buffer")]
    NotEnoughBytes,

    /// 底层原语报告解码失败，但没有更具体的分类。
    #[error("decoding failed{}", reason_suffix(.reason))]
    DecodingFailed { reason: Option<String> },
}

impl IpError {
    pub(crate) fn malformed(input: &str) -> Self {
        Self::MalformedAddress {
            input: input.into(),
        }
    }

    pub(crate) fn decoding_failed(reason: impl Into<String>) -> Self {
        Self::DecodingFailed {
            reason: Some(reason.into()),
        }
    }
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(reason) => format!(": {reason}"),
        None => String::new(),
    }
}

impl PartialEq for IpError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MalformedAddress { input: lhs }, Self::MalformedAddress { input: rhs }) => {
                lhs == rhs
            }
            (Self::NotEnoughBytes, Self::NotEnoughBytes) => true,
            (Self::DecodingFailed { reason: lhs }, Self::DecodingFailed { reason: rhs }) => {
                match (lhs, rhs) {
                    (Some(lhs), Some(rhs)) => lhs.to_lowercase() == rhs.to_lowercase(),
                    (None, None) => true,
                    _ => false,
                }
            }
            _ => false,
        }
    }
}

impl Eq for IpError {}
