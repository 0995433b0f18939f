/// `IndexedBuffer` 描述带独立读写游标的可增长字节缓冲契约。
///
/// # 设计背景（Why）
/// - 对标 Netty `ByteBuf` 的 `readerIndex`/`writerIndex` 双游标模型：绝对下标访问
///   （`get_bytes`/`set_bytes`）不移动游标，顺序访问（`read_slice`/`write_bytes`）在成功后推进游标；
/// - 编解码扩展只需依赖本契约即可在任意缓冲实现上工作，而无需修改缓冲类型本身。
///
/// # 契约说明（What）
/// - **不变式**：`reader_index() <= writer_index() <= capacity()`；
/// - `set_bytes` 在容量不足时必须先扩容再写入，绝不截断；下标超出已初始化区域时，空隙以 0 填充；
/// - `get_bytes` 仅在 `index + length <= writer_index()` 时返回数据；
/// - `move_reader_index`/`move_writer_index` 越界视为调用方编程错误，实现应直接 panic。
///
/// # 设计考量（Trade-offs）
/// - 下标统一使用 `usize`，负下标在类型层面不可表达；
/// - 默认方法均以必需方法组合实现，具体缓冲只需覆盖必要的原语。
pub trait IndexedBuffer {
    /// 当前已分配的总容量。
    fn capacity(&self) -> usize;

    /// 确保容量至少为 `minimum_capacity`，实现可按自身策略多分配。
    fn reserve_capacity(&mut self, minimum_capacity: usize);

    /// 读游标位置。
    fn reader_index(&self) -> usize;

    /// 写游标位置。
    fn writer_index(&self) -> usize;

    /// 在 `index` 处写入 `src`，返回写入字节数；不移动任何游标。
    fn set_bytes(&mut self, src: &[u8], index: usize) -> usize;

    /// 读取 `[index, index + length)` 区间，不移动任何游标。
    fn get_bytes(&self, index: usize, length: usize) -> Option<&[u8]>;

    /// 将读游标前移 `forward_by` 字节。
    fn move_reader_index(&mut self, forward_by: usize);

    /// 将写游标前移 `forward_by` 字节。
    fn move_writer_index(&mut self, forward_by: usize);

    /// 可读字节数，即 `writer_index - reader_index`。
    fn readable_bytes(&self) -> usize {
        self.writer_index() - self.reader_index()
    }

    /// 在写游标处追加 `src` 并推进写游标。
    fn write_bytes(&mut self, src: &[u8]) -> usize {
        let written = self.set_bytes(src, self.writer_index());
        self.move_writer_index(written);
        written
    }

    /// 读取 `length` 字节并推进读游标；可读字节不足时返回 `None` 且游标保持不变。
    fn read_slice(&mut self, length: usize) -> Option<&[u8]> {
        if length > self.readable_bytes() {
            return None;
        }
        let index = self.reader_index();
        self.move_reader_index(length);
        self.get_bytes(index, length)
    }
}
