//! # buffer 模块说明
//!
//! ## 角色定位（Why）
//! - 信令与媒体协议会在报文中嵌入裸地址字节（如 STUN `XOR-MAPPED-ADDRESS`、RTCP 扩展），
//!   编解码需要直接在双游标缓冲上按地址族读写；
//! - 以扩展 trait 的形式挂到 [`IndexedBuffer`] 上，任何实现该契约的缓冲都自动获得地址编解码能力。
//!
//! ## 契约（What）
//! - 线上格式：IPv4 为一个大端 `u32`；IPv6 为 8 个依序排列的大端 `u16` 分组；
//! - `set_*`/`get_*` 按绝对下标访问，不移动游标；`write_*`/`read_*` 在游标处访问并推进游标；
//! - `get_*`/`read_*` 要求 `index + size <= writer_index`，否则返回 [`IpError::NotEnoughBytes`]，
//!   且读游标保持不变；
//! - 写路径在容量不足时先扩容，绝不截断，因此总是成功。
//!
//! ## 前置条件
//! - 下标加上地址宽度溢出 `usize` 属于编程错误，写路径直接 panic。

use spark_buffer::IndexedBuffer;

use crate::{IpAddress, IpError, IpFamily, Ipv4Value, Ipv6Value};

/// 为双游标缓冲提供 IP 地址编解码的扩展方法。
///
/// # 教案式说明
/// - **意图 (Why)**：缓冲类型本身不感知地址语义，编解码逻辑集中在此处，避免各协议重复实现字节序处理；
/// - **契约 (What)**：
///   - `set_*`/`write_*` 返回写入字节数（4 或 16）；
///   - `get_*` 返回 `(值, 消耗字节数)`，`read_*` 只返回值并据此推进读游标；
///   - `*_ip` 变体按 [`IpAddress`] 标签或调用方提供的 [`IpFamily`] 分派；
/// - **实现 (How)**：所有方法均为默认实现，并对任意 `IndexedBuffer` 提供 blanket impl。
pub trait IpBufferExt: IndexedBuffer {
    /// 在 `index` 处写入 4 字节大端 IPv4 地址，不移动游标。
    fn set_ipv4(&mut self, value: Ipv4Value, index: usize) -> usize {
        let end = wire_end(index, Ipv4Value::WIRE_LEN);
        if self.capacity() < end {
            self.reserve_capacity(end);
        }
        self.set_bytes(&value.to_bits().to_be_bytes(), index)
    }

    /// 在 `index` 处依次写入 8 个大端分组，不移动游标。
    fn set_ipv6(&mut self, value: Ipv6Value, index: usize) -> usize {
        let end = wire_end(index, Ipv6Value::WIRE_LEN);
        if self.capacity() < end {
            self.reserve_capacity(end);
        }
        let mut written = 0;
        for segment in value.segments() {
            written += self.set_bytes(&segment.to_be_bytes(), index + written);
        }
        written
    }

    /// 按地址标签分派到 [`set_ipv4`](Self::set_ipv4) 或 [`set_ipv6`](Self::set_ipv6)。
    fn set_ip(&mut self, address: IpAddress, index: usize) -> usize {
        match address {
            IpAddress::V4(value) => self.set_ipv4(value, index),
            IpAddress::V6(value) => self.set_ipv6(value, index),
        }
    }

    /// 从 `index` 处解码 IPv4 地址，不移动游标。
    fn get_ipv4(&self, index: usize) -> Result<(Ipv4Value, usize), IpError> {
        let bytes = address_bytes(self, index, Ipv4Value::WIRE_LEN)?;
        let raw = <[u8; 4]>::try_from(bytes)
            .map_err(|_| IpError::decoding_failed("buffer returned a short IPv4 slice"))?;
        Ok((Ipv4Value::from_bits(u32::from_be_bytes(raw)), Ipv4Value::WIRE_LEN))
    }

    /// 从 `index` 处解码 IPv6 地址，不移动游标。
    fn get_ipv6(&self, index: usize) -> Result<(Ipv6Value, usize), IpError> {
        let bytes = address_bytes(self, index, Ipv6Value::WIRE_LEN)?;
        let raw = <[u8; 16]>::try_from(bytes)
            .map_err(|_| IpError::decoding_failed("buffer returned a short IPv6 slice"))?;
        let mut segments = [0u16; 8];
        for (segment, group) in segments.iter_mut().zip(raw.chunks_exact(2)) {
            *segment = u16::from_be_bytes([group[0], group[1]]);
        }
        Ok((Ipv6Value::from_segments(segments), Ipv6Value::WIRE_LEN))
    }

    /// 按调用方给出的地址族从 `index` 处解码。
    fn get_ip(&self, index: usize, family: IpFamily) -> Result<(IpAddress, usize), IpError> {
        match family {
            IpFamily::V4 => self
                .get_ipv4(index)
                .map(|(value, size)| (IpAddress::V4(value), size)),
            IpFamily::V6 => self
                .get_ipv6(index)
                .map(|(value, size)| (IpAddress::V6(value), size)),
        }
    }

    /// 在写游标处写入 IPv4 地址并推进写游标。
    fn write_ipv4(&mut self, value: Ipv4Value) -> usize {
        let written = self.set_ipv4(value, self.writer_index());
        self.move_writer_index(written);
        written
    }

    /// 在写游标处写入 IPv6 地址并推进写游标。
    fn write_ipv6(&mut self, value: Ipv6Value) -> usize {
        let written = self.set_ipv6(value, self.writer_index());
        self.move_writer_index(written);
        written
    }

    /// 在写游标处按标签写入地址并推进写游标。
    fn write_ip(&mut self, address: IpAddress) -> usize {
        let written = self.set_ip(address, self.writer_index());
        self.move_writer_index(written);
        written
    }

    /// 从读游标处读取 IPv4 地址；失败时读游标不动。
    fn read_ipv4(&mut self) -> Result<Ipv4Value, IpError> {
        let (value, size) = self.get_ipv4(self.reader_index())?;
        self.move_reader_index(size);
        Ok(value)
    }

    /// 从读游标处读取 IPv6 地址；失败时读游标不动。
    fn read_ipv6(&mut self) -> Result<Ipv6Value, IpError> {
        let (value, size) = self.get_ipv6(self.reader_index())?;
        self.move_reader_index(size);
        Ok(value)
    }

    /// 按给定地址族从读游标处读取；失败时读游标不动。
    fn read_ip(&mut self, family: IpFamily) -> Result<IpAddress, IpError> {
        let (address, size) = self.get_ip(self.reader_index(), family)?;
        self.move_reader_index(size);
        Ok(address)
    }
}

impl<B: IndexedBuffer + ?Sized> IpBufferExt for B {}

fn wire_end(index: usize, width: usize) -> usize {
    let Some(end) = index.checked_add(width) else {
        panic!("address index {index} + {width} overflows usize");
    };
    end
}

fn address_bytes<B: IndexedBuffer + ?Sized>(
    buffer: &B,
    index: usize,
    required: usize,
) -> Result<&[u8], IpError> {
    buffer.get_bytes(index, required).ok_or_else(|| {
        tracing::trace!(
            target: "spark_ip::buffer",
            index,
            required,
            writer_index = buffer.writer_index(),
            "not enough bytes to decode address"
        );
        IpError::NotEnoughBytes
    })
}
