use bytes::{Buf, Bytes, BytesMut};

use crate::{BufferConfig, GrowthPolicy, IndexedBuffer};

/// `CursorBuffer` 是基于 `BytesMut` 的双游标可增长缓冲。
///
/// # 设计动机（Why）
/// - 网络编解码常见“先在固定偏移预留头部、稍后回填”的写法，需要在不移动游标的情况下按绝对下标写入；
/// - 同时读路径要按顺序消费，并在数据不足时保持游标不动，等待更多字节到达后重试。
///
/// # 架构关系（How）
/// - `storage` 的 `len()` 即“已初始化区域”的上界，`set_bytes` 超出时以 0 填充扩展；
/// - `reader_index`/`writer_index` 为独立游标，只在显式 `move_*` 时推进；
/// - 扩容通过 [`GrowthPolicy`] 计算目标容量，再委派 `BytesMut::reserve`。
///
/// # 契约说明（What）
/// - 不变式：`reader_index <= writer_index <= storage.len() <= storage.capacity()`；
/// - `get_bytes` 以 `writer_index` 为上界，写游标之后的字节即便已被 `set_bytes` 写入也不可见；
/// - 游标越界会 panic，属于调用方的编程错误。
#[derive(Debug, Clone)]
pub struct CursorBuffer {
    storage: BytesMut,
    reader_index: usize,
    writer_index: usize,
    growth: GrowthPolicy,
}

impl CursorBuffer {
    /// 以默认增长策略创建至少 `capacity` 字节容量的空缓冲。
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(BufferConfig {
            initial_capacity: capacity,
            ..BufferConfig::default()
        })
    }

    /// 按配置创建空缓冲。
    pub fn with_config(config: BufferConfig) -> Self {
        Self {
            storage: BytesMut::with_capacity(config.initial_capacity),
            reader_index: 0,
            writer_index: 0,
            growth: config.growth,
        }
    }

    /// 返回 `[reader_index, writer_index)` 区间的只读视图。
    pub fn readable_slice(&self) -> &[u8] {
        &self.storage[self.reader_index..self.writer_index]
    }

    /// 清空内容并复位两个游标，保留已分配容量。
    pub fn clear(&mut self) {
        self.storage.clear();
        self.reader_index = 0;
        self.writer_index = 0;
    }

    /// 将可读区间冻结为 `Bytes`，便于交给传输层发送。
    pub fn freeze(self) -> Bytes {
        let mut storage = self.storage;
        storage.truncate(self.writer_index);
        storage.advance(self.reader_index);
        storage.freeze()
    }
}

impl Default for CursorBuffer {
    fn default() -> Self {
        Self::with_config(BufferConfig::default())
    }
}

impl From<BytesMut> for CursorBuffer {
    /// 以既有字节构造缓冲，全部内容视为可读。
    fn from(storage: BytesMut) -> Self {
        let writer_index = storage.len();
        Self {
            storage,
            reader_index: 0,
            writer_index,
            growth: GrowthPolicy::default(),
        }
    }
}

impl From<&[u8]> for CursorBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from(BytesMut::from(bytes))
    }
}

impl IndexedBuffer for CursorBuffer {
    fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    fn reserve_capacity(&mut self, minimum_capacity: usize) {
        let before = self.storage.capacity();
        if minimum_capacity <= before {
            return;
        }
        let target = self.growth.target_capacity(minimum_capacity);
        self.storage.reserve(target - self.storage.len());
        tracing::trace!(
            target: "spark_buffer::cursor",
            before,
            after = self.storage.capacity(),
            "cursor buffer grew"
        );
    }

    fn reader_index(&self) -> usize {
        self.reader_index
    }

    fn writer_index(&self) -> usize {
        self.writer_index
    }

    fn set_bytes(&mut self, src: &[u8], index: usize) -> usize {
        let Some(end) = index.checked_add(src.len()) else {
            panic!("set_bytes: index {index} + {} overflows usize", src.len());
        };
        if end > self.storage.capacity() {
            self.reserve_capacity(end);
        }
        if end > self.storage.len() {
            self.storage.resize(end, 0);
        }
        self.storage[index..end].copy_from_slice(src);
        src.len()
    }

    fn get_bytes(&self, index: usize, length: usize) -> Option<&[u8]> {
        let end = index.checked_add(length)?;
        if end > self.writer_index {
            return None;
        }
        Some(&self.storage[index..end])
    }

    fn move_reader_index(&mut self, forward_by: usize) {
        let target = self.reader_index.checked_add(forward_by);
        let Some(target) = target.filter(|target| *target <= self.writer_index) else {
            panic!(
                "reader index {} + {forward_by} must not pass writer index {}",
                self.reader_index, self.writer_index
            );
        };
        self.reader_index = target;
    }

    fn move_writer_index(&mut self, forward_by: usize) {
        let target = self.writer_index.checked_add(forward_by);
        let Some(target) = target.filter(|target| *target <= self.storage.len()) else {
            panic!(
                "writer index {} + {forward_by} must not pass initialized length {}",
                self.writer_index,
                self.storage.len()
            );
        };
        self.writer_index = target;
    }
}

impl Buf for CursorBuffer {
    fn remaining(&self) -> usize {
        self.readable_bytes()
    }

    fn chunk(&self) -> &[u8] {
        self.readable_slice()
    }

    fn advance(&mut self, cnt: usize) {
        self.move_reader_index(cnt);
    }
}
