//! `cursor_contract` 集成测试：聚焦 `CursorBuffer` 对 `IndexedBuffer` 契约的遵守。
//!
//! # 测试总览（Why）
//! - 编解码扩展只依赖 `IndexedBuffer`，因此契约中的每一条不变式都必须在具体缓冲上可观察；
//! - 以 Proptest 生成任意的 set/write/read 操作序列，与一个 `Vec<u8>` 影子模型逐步对照。

use proptest::prelude::*;
use spark_buffer::{BufferConfig, CursorBuffer, GrowthPolicy, IndexedBuffer};

#[derive(Clone, Debug)]
enum Op {
    Set { index: usize, bytes: Vec<u8> },
    Write(Vec<u8>),
    Read(usize),
    AdvanceWriter(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..48, prop::collection::vec(any::<u8>(), 0..8))
            .prop_map(|(index, bytes)| Op::Set { index, bytes }),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(Op::Write),
        (0usize..12).prop_map(Op::Read),
        (0usize..8).prop_map(Op::AdvanceWriter),
    ]
}

/// 影子模型：`data.len()` 对应已初始化长度。
#[derive(Default)]
struct Model {
    data: Vec<u8>,
    reader: usize,
    writer: usize,
}

impl Model {
    fn set(&mut self, index: usize, bytes: &[u8]) {
        let end = index + bytes.len();
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[index..end].copy_from_slice(bytes);
    }
}

proptest! {
    #[test]
    fn prop_cursor_buffer_matches_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut buffer = CursorBuffer::with_config(BufferConfig {
            initial_capacity: 0,
            growth: GrowthPolicy::PowerOfTwo,
        });
        let mut model = Model::default();

        for op in ops {
            match op {
                Op::Set { index, bytes } => {
                    prop_assert_eq!(buffer.set_bytes(&bytes, index), bytes.len());
                    model.set(index, &bytes);
                }
                Op::Write(bytes) => {
                    buffer.write_bytes(&bytes);
                    let writer = model.writer;
                    model.set(writer, &bytes);
                    model.writer += bytes.len();
                }
                Op::Read(len) => {
                    let expected = (len <= model.writer - model.reader)
                        .then(|| model.data[model.reader..model.reader + len].to_vec());
                    prop_assert_eq!(buffer.read_slice(len).map(<[u8]>::to_vec), expected.clone());
                    if expected.is_some() {
                        model.reader += len;
                    }
                }
                Op::AdvanceWriter(by) => {
                    if model.writer + by <= model.data.len() {
                        buffer.move_writer_index(by);
                        model.writer += by;
                    }
                }
            }
            prop_assert_eq!(buffer.reader_index(), model.reader);
            prop_assert_eq!(buffer.writer_index(), model.writer);
            prop_assert!(buffer.capacity() >= model.data.len());
            prop_assert_eq!(buffer.readable_slice(), &model.data[model.reader..model.writer]);
        }
    }
}

/// 容量增长发生在写入之前，写入后的内容不会被截断。
#[test]
fn growth_happens_before_the_write_completes() {
    let mut buffer = CursorBuffer::with_capacity(1);
    let payload = [0xAB; 100];
    assert_eq!(buffer.set_bytes(&payload, 28), payload.len());
    assert!(buffer.capacity() >= 128);
    buffer.move_writer_index(128);
    assert_eq!(buffer.get_bytes(28, 100), Some(&payload[..]));
    assert_eq!(buffer.get_bytes(0, 28), Some(&[0u8; 28][..]));
}

/// 配置文件中的增长策略会影响实际分配。
#[test]
fn toml_config_drives_construction() {
    let config = BufferConfig::from_toml_str("initial_capacity = 8\ngrowth = \"exact\"")
        .expect("合法配置");
    let mut buffer = CursorBuffer::with_config(config);
    assert!(buffer.capacity() >= 8);
    buffer.write_bytes(&[1; 9]);
    assert_eq!(buffer.writer_index(), 9);
    assert_eq!(&buffer.freeze()[..], &[1; 9]);
}

#[test]
#[should_panic(expected = "must not pass initialized length")]
fn moving_writer_past_initialized_region_panics() {
    let mut buffer = CursorBuffer::with_capacity(16);
    buffer.move_writer_index(1);
}
