use core::{
    fmt,
    hash::{Hash, Hasher},
    net::Ipv6Addr,
    str::FromStr,
};

use crate::{IpError, text};

/// 单个 IPv6 地址的定长二进制持有者。
///
/// ### Why
/// - 与 [`Ipv4Value`](crate::Ipv4Value) 对称，为 16 字节地址提供不绑定套接字结构的值类型。
///
/// ### What
/// - 内部以网络序保存 16 个字节，逻辑上是 8 个 16 bit 分组；
/// - 相等性比较原始字节，哈希基于 8 个分组值；
/// - 文本输出总是完整的 8 个分组，不做 `::` 零压缩。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ipv6Value {
    octets: [u8; 16],
}

impl Ipv6Value {
    /// 线上编码长度（字节）。
    pub const WIRE_LEN: usize = 16;

    /// 由网络序字节构造。
    #[must_use]
    pub const fn from_octets(octets: [u8; 16]) -> Self {
        Self { octets }
    }

    /// 由 8 个主机序分组构造，首个分组位于地址最高位。
    #[must_use]
    pub const fn from_segments(segments: [u16; 8]) -> Self {
        let mut octets = [0u8; 16];
        let mut index = 0;
        while index < 8 {
            let [hi, lo] = segments[index].to_be_bytes();
            octets[index * 2] = hi;
            octets[index * 2 + 1] = lo;
            index += 1;
        }
        Self { octets }
    }

    /// 返回网络序字节。
    #[must_use]
    pub const fn octets(self) -> [u8; 16] {
        self.octets
    }

    /// 返回 8 个主机序分组。
    #[must_use]
    pub const fn segments(self) -> [u16; 8] {
        let mut segments = [0u16; 8];
        let mut index = 0;
        while index < 8 {
            segments[index] = u16::from_be_bytes([self.octets[index * 2], self.octets[index * 2 + 1]]);
            index += 1;
        }
        segments
    }
}

impl Hash for Ipv6Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments().hash(state);
    }
}

impl fmt::Display for Ipv6Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_ipv6(&self.segments(), f)
    }
}

impl fmt::Debug for Ipv6Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ipv6Value({self})")
    }
}

impl FromStr for Ipv6Value {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        text::parse_ipv6(s)
    }
}

impl From<[u8; 16]> for Ipv6Value {
    fn from(octets: [u8; 16]) -> Self {
        Self::from_octets(octets)
    }
}

impl From<[u16; 8]> for Ipv6Value {
    fn from(segments: [u16; 8]) -> Self {
        Self::from_segments(segments)
    }
}

impl From<Ipv6Addr> for Ipv6Value {
    fn from(addr: Ipv6Addr) -> Self {
        Self::from_octets(addr.octets())
    }
}

impl From<Ipv6Value> for Ipv6Addr {
    fn from(value: Ipv6Value) -> Self {
        Ipv6Addr::from(value.octets)
    }
}
