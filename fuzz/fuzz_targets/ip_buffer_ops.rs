#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spark_buffer::{CursorBuffer, IndexedBuffer};
use spark_ip::{IpBufferExt, IpError, IpFamily, Ipv4Value, Ipv6Value};

/// Fuzz 指令：对同一缓冲交错执行地址写入、读取与原始字节追加。
///
/// - **Why**：读路径在字节不足时必须保持读游标不动，交错的原始字节追加最容易打破这一点；
/// - **What**：任何操作序列都不得 panic，失败的读取不得移动读游标，`reader <= writer` 始终成立。
#[derive(Debug, Arbitrary)]
enum BufferOp {
    WriteV4(u32),
    WriteV6([u16; 8]),
    ReadV4,
    ReadV6,
    RawBytes(Vec<u8>),
    Get { index: u8, v6: bool },
}

fuzz_target!(|ops: Vec<BufferOp>| {
    let mut buffer = CursorBuffer::default();
    for op in ops {
        match op {
            BufferOp::WriteV4(bits) => {
                assert_eq!(buffer.write_ipv4(Ipv4Value::from_bits(bits)), 4);
            }
            BufferOp::WriteV6(segments) => {
                assert_eq!(buffer.write_ipv6(Ipv6Value::from_segments(segments)), 16);
            }
            BufferOp::ReadV4 => check_read(&mut buffer, IpFamily::V4),
            BufferOp::ReadV6 => check_read(&mut buffer, IpFamily::V6),
            BufferOp::RawBytes(bytes) => {
                buffer.write_bytes(&bytes);
            }
            BufferOp::Get { index, v6 } => {
                let family = if v6 { IpFamily::V6 } else { IpFamily::V4 };
                let index = usize::from(index);
                let fits = index + family.wire_len() <= buffer.writer_index();
                match buffer.get_ip(index, family) {
                    Ok((address, size)) => {
                        assert!(fits);
                        assert_eq!(address.family(), family);
                        assert_eq!(size, family.wire_len());
                    }
                    Err(err) => {
                        assert!(!fits);
                        assert_eq!(err, IpError::NotEnoughBytes);
                    }
                }
            }
        }
        assert!(buffer.reader_index() <= buffer.writer_index());
    }
});

fn check_read(buffer: &mut CursorBuffer, family: IpFamily) {
    let before = buffer.reader_index();
    match buffer.read_ip(family) {
        Ok(address) => {
            assert_eq!(address.family(), family);
            assert_eq!(buffer.reader_index(), before + family.wire_len());
        }
        Err(err) => {
            assert_eq!(err, IpError::NotEnoughBytes);
            assert_eq!(buffer.reader_index(), before);
            assert!(buffer.readable_bytes() < family.wire_len());
        }
    }
}
