//! # text 模块说明
//!
//! ## 角色定位（Why）
//! - 地址的人类可读形式出现在配置、日志与 SDP/SIP 等文本协议中，解析与格式化必须成对稳定；
//! - 解析委派 `core::net` 的数值地址解析器，它与 `inet_pton` 一样只接受严格的数值写法，
//!   不做主机名解析，也不接受 `1.2.3` 之类的简写。
//!
//! ## 契约（What）
//! - IPv4 输出四段十进制，无前导零；
//! - IPv6 输出 8 段小写十六进制，每段不补零，且**从不**做 `::` 零压缩，
//!   保证同一地址在日志与线上比较中只有一种文本；
//! - 解析失败返回 [`IpError::MalformedAddress`]，携带原始输入，并在 `debug` 级别记录一次事件。
//!
//! ## 风险提示（Trade-offs）
//! - 输出不压缩意味着 `format(parse("::1")) != "::1"`，往返等式只对规范的非压缩文本成立。

use core::fmt::{self, Write};
use core::net::{Ipv4Addr, Ipv6Addr};

use crate::{IpAddress, IpError, IpFamily, Ipv4Value, Ipv6Value};

/// 解析点分十进制 IPv4 文本。
pub fn parse_ipv4(input: &str) -> Result<Ipv4Value, IpError> {
    ipv4_from_text(input).ok_or_else(|| rejected(input, Some(IpFamily::V4)))
}

/// 解析冒号十六进制 IPv6 文本，接受 `::` 压缩写法与内嵌 IPv4 尾部。
pub fn parse_ipv6(input: &str) -> Result<Ipv6Value, IpError> {
    ipv6_from_text(input).ok_or_else(|| rejected(input, Some(IpFamily::V6)))
}

/// 解析任意族的地址文本：先按 IPv6 尝试，失败后再按 IPv4 尝试。
pub fn parse_ip(input: &str) -> Result<IpAddress, IpError> {
    if let Some(value) = ipv6_from_text(input) {
        return Ok(IpAddress::V6(value));
    }
    if let Some(value) = ipv4_from_text(input) {
        return Ok(IpAddress::V4(value));
    }
    Err(rejected(input, None))
}

/// 生成 IPv4 的点分十进制文本。
pub fn format_ipv4(value: Ipv4Value) -> String {
    value.to_string()
}

/// 生成 IPv6 的 8 段非压缩文本。
pub fn format_ipv6(value: Ipv6Value) -> String {
    value.to_string()
}

pub(crate) fn write_ipv4<W: Write + ?Sized>(octets: &[u8; 4], out: &mut W) -> fmt::Result {
    let [a, b, c, d] = *octets;
    write!(out, "{a}.{b}.{c}.{d}")
}

pub(crate) fn write_ipv6<W: Write + ?Sized>(segments: &[u16; 8], out: &mut W) -> fmt::Result {
    for (position, segment) in segments.iter().enumerate() {
        if position > 0 {
            out.write_char(':')?;
        }
        write!(out, "{segment:x}")?;
    }
    Ok(())
}

fn ipv4_from_text(input: &str) -> Option<Ipv4Value> {
    input.parse::<Ipv4Addr>().ok().map(Ipv4Value::from)
}

fn ipv6_from_text(input: &str) -> Option<Ipv6Value> {
    input.parse::<Ipv6Addr>().ok().map(Ipv6Value::from)
}

fn rejected(input: &str, family: Option<IpFamily>) -> IpError {
    match family {
        Some(family) => tracing::debug!(
            target: "spark_ip::text",
            input,
            %family,
            "rejected address text"
        ),
        None => tracing::debug!(target: "spark_ip::text", input, "rejected address text"),
    }
    IpError::malformed(input)
}
