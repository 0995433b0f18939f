use serde::Deserialize;
use thiserror::Error;

/// 缓冲扩容策略。
///
/// - `Exact`：只分配刚好满足需求的容量，适合长度可预知的一次性编码；
/// - `PowerOfTwo`：向上取整到 2 的幂，摊薄频繁追加时的重新分配次数（默认）。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthPolicy {
    Exact,
    #[default]
    PowerOfTwo,
}

impl GrowthPolicy {
    /// 根据策略计算满足 `minimum` 的目标容量。
    pub fn target_capacity(self, minimum: usize) -> usize {
        match self {
            Self::Exact => minimum,
            Self::PowerOfTwo => minimum.checked_next_power_of_two().unwrap_or(minimum),
        }
    }
}

/// [`CursorBuffer`](crate::CursorBuffer) 的构造配置。
///
/// # 设计目的（Why）
/// - 部署方需要在不改代码的前提下调整暂存缓冲的初始容量与扩容方式，
///   因此配置以 TOML 片段描述，并由 `serde` 反序列化。
///
/// # 契约定义（What）
/// - 缺省字段取 [`Default`] 值：`initial_capacity = 64`、`growth = "power_of_two"`；
/// - 未知字段视为配置错误，防止拼写错误被静默忽略。
///
/// ```toml
/// initial_capacity = 256
/// growth = "exact"
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BufferConfig {
    pub initial_capacity: usize,
    pub growth: GrowthPolicy,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            growth: GrowthPolicy::default(),
        }
    }
}

impl BufferConfig {
    /// 从 TOML 文本解析配置。
    pub fn from_toml_str(raw: &str) -> Result<Self, BufferConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

/// 缓冲配置加载失败。
#[derive(Debug, Error)]
pub enum BufferConfigError {
    /// TOML 语法错误、字段类型不匹配或出现未知字段。
    #[error("缓冲配置解析失败: {0}")]
    Parse(#[from] toml::de::Error),
}
