use core::{
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    str::FromStr,
};

use crate::{IpError, Ipv4Value, Ipv6Value, text};

/// 地址族标签，决定线上编码宽度。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IpFamily {
    V4,
    V6,
}

impl IpFamily {
    /// 该族地址的线上字节数。
    #[must_use]
    pub const fn wire_len(self) -> usize {
        match self {
            Self::V4 => Ipv4Value::WIRE_LEN,
            Self::V6 => Ipv6Value::WIRE_LEN,
        }
    }
}

impl fmt::Display for IpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::V4 => "IPv4",
            Self::V6 => "IPv6",
        })
    }
}

/// 恰好持有一个 IPv4 或 IPv6 地址的带标签联合。
///
/// # 教案式说明
/// - **意图 (Why)**：协议字段经常"按族二选一"，调用方需要在不知道族的情况下传递、比较与格式化地址；
/// - **契约 (What)**：
///   - 相等性先比较标签再比较负载，`V4` 与 `V6` 永不相等，即便是 `::ffff:a.b.c.d` 形式的映射地址；
///   - 文本解析先尝试 IPv6 再尝试 IPv4，详见 [`text::parse_ip`]；
///   - 从 `&[u8]` 构造时只接受 4 或 16 字节；
/// - **风险提示 (Trade-offs)**：不做族间归一化，映射地址的语义判断留给上层。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IpAddress {
    V4(Ipv4Value),
    V6(Ipv6Value),
}

impl IpAddress {
    /// 返回地址族。
    #[must_use]
    pub const fn family(&self) -> IpFamily {
        match self {
            Self::V4(_) => IpFamily::V4,
            Self::V6(_) => IpFamily::V6,
        }
    }

    #[must_use]
    pub const fn is_ipv4(&self) -> bool {
        matches!(self, Self::V4(_))
    }

    #[must_use]
    pub const fn is_ipv6(&self) -> bool {
        matches!(self, Self::V6(_))
    }

    #[must_use]
    pub const fn as_ipv4(&self) -> Option<Ipv4Value> {
        match self {
            Self::V4(value) => Some(*value),
            Self::V6(_) => None,
        }
    }

    #[must_use]
    pub const fn as_ipv6(&self) -> Option<Ipv6Value> {
        match self {
            Self::V6(value) => Some(*value),
            Self::V4(_) => None,
        }
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(value) => fmt::Display::fmt(value, f),
            Self::V6(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl FromStr for IpAddress {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        text::parse_ip(s)
    }
}

impl From<Ipv4Value> for IpAddress {
    fn from(value: Ipv4Value) -> Self {
        Self::V4(value)
    }
}

impl From<Ipv6Value> for IpAddress {
    fn from(value: Ipv6Value) -> Self {
        Self::V6(value)
    }
}

impl From<[u8; 4]> for IpAddress {
    fn from(octets: [u8; 4]) -> Self {
        Self::V4(Ipv4Value::from_octets(octets))
    }
}

impl From<[u8; 16]> for IpAddress {
    fn from(octets: [u8; 16]) -> Self {
        Self::V6(Ipv6Value::from_octets(octets))
    }
}

impl TryFrom<&[u8]> for IpAddress {
    type Error = IpError;

    /// 按长度判定族：4 字节为 IPv4，16 字节为 IPv6。
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
            return Ok(Self::from(octets));
        }
        if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
            return Ok(Self::from(octets));
        }
        Err(IpError::decoding_failed(format!(
            "expected 4 or 16 address bytes, got {}",
            bytes.len()
        )))
    }
}

impl From<IpAddr> for IpAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => Self::V4(v4.into()),
            IpAddr::V6(v6) => Self::V6(v6.into()),
        }
    }
}

impl From<IpAddress> for IpAddr {
    fn from(address: IpAddress) -> Self {
        match address {
            IpAddress::V4(value) => IpAddr::V4(Ipv4Addr::from(value)),
            IpAddress::V6(value) => IpAddr::V6(Ipv6Addr::from(value)),
        }
    }
}
