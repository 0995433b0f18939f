use core::{fmt, net::Ipv4Addr, str::FromStr};

use crate::{IpError, text};

/// 单个 IPv4 地址的定长二进制持有者。
///
/// ### Why
/// - 线上字节、文本与标准库类型之间需要一个中立的值类型，承载 4 个网络序字节而不附带任何套接字语义。
///
/// ### What
/// - 内部以网络序（大端）保存 4 个八位组，`octets()` 直接返回线上字节；
/// - 所有 2^32 个取值均合法，不做可路由性或作用域校验；
/// - 相等性与哈希直接基于原始字节。
///
/// ### How
/// - `from_bits`/`to_bits` 在主机序 `u32` 与八位组之间转换，`u32` 的大端字节即线上格式；
/// - 文本互转委派 [`text`](crate::text) 模块。
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ipv4Value {
    octets: [u8; 4],
}

impl Ipv4Value {
    /// 线上编码长度（字节）。
    pub const WIRE_LEN: usize = 4;

    /// 由四个八位组构造，`a` 为最高位。
    #[must_use]
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self {
            octets: [a, b, c, d],
        }
    }

    /// 由网络序字节构造。
    #[must_use]
    pub const fn from_octets(octets: [u8; 4]) -> Self {
        Self { octets }
    }

    /// 由主机序整数构造，`0xC0A8_0001` 对应 `192.168.0.1`。
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            octets: bits.to_be_bytes(),
        }
    }

    /// 返回主机序整数表示。
    #[must_use]
    pub const fn to_bits(self) -> u32 {
        u32::from_be_bytes(self.octets)
    }

    /// 返回网络序字节。
    #[must_use]
    pub const fn octets(self) -> [u8; 4] {
        self.octets
    }
}

impl fmt::Display for Ipv4Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_ipv4(&self.octets, f)
    }
}

impl fmt::Debug for Ipv4Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ipv4Value({self})")
    }
}

impl FromStr for Ipv4Value {
    type Err = IpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        text::parse_ipv4(s)
    }
}

impl From<[u8; 4]> for Ipv4Value {
    fn from(octets: [u8; 4]) -> Self {
        Self::from_octets(octets)
    }
}

impl From<Ipv4Addr> for Ipv4Value {
    fn from(addr: Ipv4Addr) -> Self {
        Self::from_octets(addr.octets())
    }
}

impl From<Ipv4Value> for Ipv4Addr {
    fn from(value: Ipv4Value) -> Self {
        Ipv4Addr::from(value.octets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_and_octets_agree_on_network_order() {
        let value = Ipv4Value::from_bits(0x80ED_BE4F);
        assert_eq!(value.octets(), [128, 237, 190, 79]);
        assert_eq!(value.to_bits(), 0x80ED_BE4F);
        assert_eq!(value, Ipv4Value::new(128, 237, 190, 79));
    }

    #[test]
    fn display_is_most_significant_octet_first() {
        assert_eq!(Ipv4Value::from_bits(0xC0A8_0000).to_string(), "192.168.0.0");
        assert_eq!(format!("{:?}", Ipv4Value::new(10, 0, 0, 1)), "Ipv4Value(10.0.0.1)");
    }

    #[test]
    fn std_conversion_preserves_octets() {
        let std_addr = Ipv4Addr::new(128, 237, 176, 1);
        let value = Ipv4Value::from(std_addr);
        assert_eq!(Ipv4Addr::from(value), std_addr);
    }
}
