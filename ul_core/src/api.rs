// ul_core/src/api.rs

/// 桥接函数返回给壳侧的固定问候文本。
///
/// 壳侧（Kotlin/Java）用它验证原生库加载与符号解析是否成功；
/// 内容必须逐字节稳定，任何改动都等于改接口。
pub const GREETING: &str = "Hello from Rust";

/// FFI 接口版本。导出面变化时递增（major：不兼容；minor：新增）。
pub const FFI_VERSION_MAJOR: u32 = 1;
pub const FFI_VERSION_MINOR: u32 = 0;

/// 纯函数：无状态、无副作用，并发调用互不影响。
pub fn greeting() -> &'static str {
    GREETING
}

/**
 * 桥接层自描述信息（Core → 壳）。
 *
 * 壳层诊断页展示用；序列化为 JSON 后跨边界传递。
 */
#[derive(Debug, Clone, serde::Serialize)]
pub struct BridgeInfo {
    pub version: String, // crate 版本，来自 Cargo.toml
    pub ffi_major: u32,
    pub ffi_minor: u32,
}

pub fn bridge_info() -> BridgeInfo {
    BridgeInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        ffi_major: FFI_VERSION_MAJOR,
        ffi_minor: FFI_VERSION_MINOR,
    }
}
