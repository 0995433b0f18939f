use alloc::{format, string::String, vec::Vec};
use core::fmt;
#[cfg(feature = "std")]
use core::net::{IpAddr, Ipv6Addr, SocketAddr};

/// `TransportSocketAddr` 在 `no_std` 场景下提供统一的 Socket 地址表达。
///
/// # 设计初衷（Why）
/// - 地址族在类型层面显式区分：`V4` 保存 4 字节网络序地址，`V6` 保存 8 个 16 bit 分组，
///   与 `sockaddr_in`/`sockaddr_in6` 的负载一一对应，上层无需关心 `sin_family` 之类的裸字段。
/// - 避免绑定到 `std::net::SocketAddr`，以便运行在 unikernel、DPDK 等无 `std` 环境。
///
/// # 契约定义（What）
/// - `port` 以主机序 `u16` 保存，序列化为网络序的工作交由具体传输实现完成。
/// - `Display` 输出 `a.b.c.d:port` 或 `[g:g:g:g:g:g:g:g]:port`。
/// - **前置条件**：调用方需确保地址来自可信来源或已进行校验；本类型不做任何合法性检查。
///
/// # 设计取舍与风险（Trade-offs）
/// - 未对 IPv6 进行零压缩，与 `spark-ip` 的文本格式保持一致，日志中同一地址只有一种写法。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransportSocketAddr {
    /// IPv4 地址。
    V4 { addr: [u8; 4], port: u16 },
    /// IPv6 地址。
    V6 { addr: [u16; 8], port: u16 },
}

impl TransportSocketAddr {
    /// 返回端口号。
    pub const fn port(&self) -> u16 {
        match self {
            Self::V4 { port, .. } | Self::V6 { port, .. } => *port,
        }
    }

    /// 转换为标准库的 `SocketAddr`，供 Tokio/socket2 等运行时直接使用。
    #[cfg(feature = "std")]
    pub fn to_std(&self) -> SocketAddr {
        match *self {
            Self::V4 { addr, port } => SocketAddr::new(IpAddr::from(addr), port),
            Self::V6 { addr, port } => SocketAddr::new(IpAddr::from(Ipv6Addr::from(addr)), port),
        }
    }
}

impl fmt::Display for TransportSocketAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportSocketAddr::V4 { addr, port } => {
                write!(
                    f,
                    "{}.{}.{}.{}:{}",
                    addr[0], addr[1], addr[2], addr[3], port
                )
            }
            TransportSocketAddr::V6 { addr, port } => {
                let segments: Vec<String> = addr
                    .iter()
                    .map(|segment| format!("{:x}", segment))
                    .collect();
                write!(f, "[{}]:{}", segments.join(":"), port)
            }
        }
    }
}

#[cfg(feature = "std")]
impl From<SocketAddr> for TransportSocketAddr {
    fn from(addr: SocketAddr) -> Self {
        match addr {
            SocketAddr::V4(v4) => Self::V4 {
                addr: v4.ip().octets(),
                port: v4.port(),
            },
            SocketAddr::V6(v6) => Self::V6 {
                addr: v6.ip().segments(),
                port: v6.port(),
            },
        }
    }
}

/// 携带解析来源主机名的 Socket 地址。
///
/// # 教案式说明
/// - **意图 (Why)**：名称解析得到的地址在日志与重连策略中仍需要原始主机名，
///   将二者绑定在同一个值里，避免调用方各自维护映射表。
/// - **契约 (What)**：`host` 仅作标签使用，不参与任何校验；相等性同时比较地址与主机名。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HostSocketAddr {
    addr: TransportSocketAddr,
    host: String,
}

impl HostSocketAddr {
    /// 以地址与主机名标签构造。
    pub fn new(addr: TransportSocketAddr, host: impl Into<String>) -> Self {
        Self {
            addr,
            host: host.into(),
        }
    }

    /// 返回底层传输地址。
    pub const fn addr(&self) -> TransportSocketAddr {
        self.addr
    }

    /// 返回解析出该地址的主机名。
    pub fn host(&self) -> &str {
        &self.host
    }

    /// 返回端口号。
    pub const fn port(&self) -> u16 {
        self.addr.port()
    }

    /// 丢弃主机名标签，转换为标准库的 `SocketAddr`。
    #[cfg(feature = "std")]
    pub fn to_socket_addr(&self) -> SocketAddr {
        self.addr.to_std()
    }
}

impl fmt::Display for HostSocketAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.host, self.addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_keeps_every_ipv6_segment() {
        let addr = TransportSocketAddr::V6 {
            addr: [0x2001, 0xdb8, 0, 0, 0, 0, 0, 1],
            port: 443,
        };
        assert_eq!(addr.to_string(), "[2001:db8:0:0:0:0:0:1]:443");
    }

    #[test]
    fn host_label_is_part_of_display() {
        let addr = HostSocketAddr::new(
            TransportSocketAddr::V4 {
                addr: [127, 0, 0, 1],
                port: 8080,
            },
            "localhost",
        );
        assert_eq!(addr.port(), 8080);
        assert_eq!(addr.to_string(), "localhost/127.0.0.1:8080");
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_socket_addr_roundtrip() {
        let std_addr: SocketAddr = "[::1]:9000".parse().expect("valid socket addr");
        let addr = TransportSocketAddr::from(std_addr);
        assert_eq!(
            addr,
            TransportSocketAddr::V6 {
                addr: [0, 0, 0, 0, 0, 0, 0, 1],
                port: 9000,
            }
        );
        assert_eq!(addr.to_std(), std_addr);

        let labelled = HostSocketAddr::new(addr, "ip6-localhost");
        assert_eq!(labelled.to_socket_addr(), std_addr);
        assert_eq!(labelled.host(), "ip6-localhost");
    }
}
