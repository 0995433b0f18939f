use spark_transport::{HostSocketAddr, TransportSocketAddr};

use crate::{IpAddress, Ipv4Value, Ipv6Value};

impl IpAddress {
    /// 以端口与主机名标签组装传输端点。
    ///
    /// 纯粹的重新打标签：不校验端口，也不检查主机名与地址是否对应。
    pub fn to_socket_addr(self, port: u16, host: impl Into<String>) -> HostSocketAddr {
        let addr = match self {
            Self::V4(value) => TransportSocketAddr::V4 {
                addr: value.octets(),
                port,
            },
            Self::V6(value) => TransportSocketAddr::V6 {
                addr: value.segments(),
                port,
            },
        };
        HostSocketAddr::new(addr, host)
    }
}

impl Ipv4Value {
    pub fn to_socket_addr(self, port: u16, host: impl Into<String>) -> HostSocketAddr {
        IpAddress::V4(self).to_socket_addr(port, host)
    }
}

impl Ipv6Value {
    pub fn to_socket_addr(self, port: u16, host: impl Into<String>) -> HostSocketAddr {
        IpAddress::V6(self).to_socket_addr(port, host)
    }
}

impl From<TransportSocketAddr> for IpAddress {
    fn from(addr: TransportSocketAddr) -> Self {
        match addr {
            TransportSocketAddr::V4 { addr, .. } => Self::V4(Ipv4Value::from_octets(addr)),
            TransportSocketAddr::V6 { addr, .. } => Self::V6(Ipv6Value::from_segments(addr)),
        }
    }
}

impl From<&HostSocketAddr> for IpAddress {
    fn from(addr: &HostSocketAddr) -> Self {
        Self::from(addr.addr())
    }
}

/// 从传输端点中取回地址部分。
///
/// `HostSocketAddr` 定义在 `spark-transport` 中，地址类型只能以扩展 trait 的方式挂上去。
pub trait SocketAddrIpExt {
    /// 返回端点携带的 IP 地址，丢弃端口与主机名。
    fn ip(&self) -> IpAddress;
}

impl SocketAddrIpExt for TransportSocketAddr {
    fn ip(&self) -> IpAddress {
        IpAddress::from(*self)
    }
}

impl SocketAddrIpExt for HostSocketAddr {
    fn ip(&self) -> IpAddress {
        IpAddress::from(self.addr())
    }
}
