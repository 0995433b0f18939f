use criterion::{Criterion, black_box};
use spark_buffer::CursorBuffer;
use spark_ip::{IpAddress, IpBufferExt, IpFamily, Ipv6Value, text};
use std::{env, time::Duration};

/// 地址编解码的热路径基准。
///
/// # 设计背景（Why）
/// - 信令网关在每条消息上都会解析、格式化并编码若干地址，任何回归都会按消息量放大。
///
/// # 逻辑解析（How）
/// - `text_parse`：交替解析 IPv4 与压缩 IPv6 文本；
/// - `text_format`：格式化非压缩 IPv6；
/// - `buffer_roundtrip`：向同一缓冲写入 64 个混合族地址后全部读回，每轮复用缓冲容量。
fn bench_text(c: &mut Criterion) {
    let inputs = ["128.237.176.1", "2001:db8:85a3::8a2e:370:7334"];
    c.bench_function("text_parse", |b| {
        b.iter(|| {
            for input in inputs {
                black_box(text::parse_ip(black_box(input)).ok());
            }
        });
    });

    let value = Ipv6Value::from_segments([0xa458, 0x2bc9, 0xd20f, 0x48c3, 0x2d85, 0x2c9, 0xe1b3, 0xd52]);
    c.bench_function("text_format", |b| {
        b.iter(|| black_box(text::format_ipv6(black_box(value))));
    });
}

fn bench_buffer_roundtrip(c: &mut Criterion) {
    let addresses: Vec<IpAddress> = (0u32..64)
        .map(|seed| {
            if seed % 2 == 0 {
                IpAddress::from(seed.wrapping_mul(0x9E37_79B9).to_be_bytes())
            } else {
                IpAddress::from([seed as u8; 16])
            }
        })
        .collect();

    let mut buffer = CursorBuffer::with_capacity(64 * 16);
    c.bench_function("buffer_roundtrip", |b| {
        b.iter(|| {
            buffer.clear();
            for address in &addresses {
                buffer.write_ip(*address);
            }
            for (seed, _) in addresses.iter().enumerate() {
                let family = if seed % 2 == 0 { IpFamily::V4 } else { IpFamily::V6 };
                black_box(buffer.read_ip(family).ok());
            }
        });
    });
}

fn main() {
    let mut quick_mode = false;
    for arg in env::args().skip(1) {
        if arg == "--quick" {
            quick_mode = true;
        }
    }

    let mut criterion = Criterion::default();
    if quick_mode {
        criterion = criterion
            .sample_size(10)
            .warm_up_time(Duration::from_millis(100))
            .measurement_time(Duration::from_millis(250));
    }

    bench_text(&mut criterion);
    bench_buffer_roundtrip(&mut criterion);
    criterion.final_summary();
}
