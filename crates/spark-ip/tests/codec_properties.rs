//! 地址编解码性质验证。
//!
//! # 核心目标 (Why)
//! - 样本表只覆盖少数取值，这里用 Proptest 在全值域上约束四条性质：
//!   1. 文本往返：`parse(format(a)) == a`，且格式化结果是唯一的规范写法；
//!   2. 线上往返：编码恰好 4/16 字节，解码得回原值；
//!   3. 游标纪律：顺序写入任意地址序列后逐个读回，读游标最终追上写游标；
//!   4. 截断输入：任何不足宽度的前缀都返回 `NotEnoughBytes` 且读游标不动。
//!
//! # 合同与边界 (What)
//! - IPv6 的规范写法是 8 段非压缩小写十六进制，与 `std` 的压缩写法不同，两者解析结果必须一致。

use proptest::prelude::*;
use spark_buffer::{CursorBuffer, IndexedBuffer};
use spark_ip::{IpAddress, IpBufferExt, IpError, Ipv4Value, Ipv6Value};

fn any_ipv4() -> impl Strategy<Value = Ipv4Value> {
    any::<u32>().prop_map(Ipv4Value::from_bits)
}

fn any_ipv6() -> impl Strategy<Value = Ipv6Value> {
    any::<[u16; 8]>().prop_map(Ipv6Value::from_segments)
}

fn any_address() -> impl Strategy<Value = IpAddress> {
    prop_oneof![
        any_ipv4().prop_map(IpAddress::V4),
        any_ipv6().prop_map(IpAddress::V6),
    ]
}

proptest! {
    #[test]
    fn prop_text_roundtrip(address in any_address()) {
        let rendered = address.to_string();
        prop_assert_eq!(rendered.parse::<IpAddress>(), Ok(address));
        prop_assert_eq!(rendered.parse::<IpAddress>().map(|a| a.to_string()), Ok(rendered));
    }

    #[test]
    fn prop_ipv6_text_agrees_with_compressed_std_form(value in any_ipv6()) {
        let compressed = std::net::Ipv6Addr::from(value).to_string();
        prop_assert_eq!(compressed.parse::<Ipv6Value>(), Ok(value));
        prop_assert_eq!(value.to_string().split(':').count(), 8);
    }

    #[test]
    fn prop_wire_roundtrip_at_any_offset(address in any_address(), offset in 0usize..64) {
        let mut buffer = CursorBuffer::with_capacity(0);
        let written = buffer.set_ip(address, offset);
        prop_assert_eq!(written, address.family().wire_len());
        buffer.move_writer_index(offset + written);
        prop_assert_eq!(buffer.get_ip(offset, address.family()), Ok((address, written)));
        prop_assert_eq!(
            IpAddress::try_from(buffer.get_bytes(offset, written).unwrap_or_default()),
            Ok(address)
        );
    }

    #[test]
    fn prop_sequential_stream_drains_exactly(addresses in prop::collection::vec(any_address(), 0..32)) {
        let mut buffer = CursorBuffer::default();
        for address in &addresses {
            buffer.write_ip(*address);
        }
        for address in &addresses {
            prop_assert_eq!(buffer.read_ip(address.family()), Ok(*address));
        }
        prop_assert_eq!(buffer.reader_index(), buffer.writer_index());
    }

    #[test]
    fn prop_truncated_input_keeps_cursor(address in any_address(), cut in 0usize..16) {
        let family = address.family();
        let keep = cut % family.wire_len();
        let mut full = CursorBuffer::default();
        full.write_ip(address);
        let mut truncated = CursorBuffer::from(&full.readable_slice()[..keep]);
        prop_assert_eq!(truncated.read_ip(family), Err(IpError::NotEnoughBytes));
        prop_assert_eq!(truncated.reader_index(), 0);
    }
}
