//! JNI 导出面。符号名按 JNI 动态查找规则编码了
//! `tech.userland.userland.MainActivity` 的包路径，改名即断链。

#![allow(non_snake_case)]

use std::panic::{self, AssertUnwindSafe};

use jni::objects::JObject;
use jni::sys::jstring;
use jni::JNIEnv;

use crate::error::throw_bridge_error;

// --- 辅助函数：全自动捕获 Panic 和 Result ---
// Panic 绝不允许越过 JNI 边界（否则是 UB，进程直接崩）。
// 失败路径：抛 java.lang.RuntimeException 并返回 null，由壳侧决定怎么处理。
fn jstring_export(
    env: &mut JNIEnv,
    name: &str,
    body: impl FnOnce(&mut JNIEnv) -> anyhow::Result<jstring>,
) -> jstring {
    let run = panic::catch_unwind(AssertUnwindSafe(|| body(env)));
    match run {
        Ok(Ok(p)) => p,
        Ok(Err(e)) => {
            throw_bridge_error(env, &format!("{name}: {e:#}"));
            std::ptr::null_mut()
        }
        Err(_) => {
            // 在 Android logcat 中通常显示为 stderr
            eprintln!("CRITICAL: Rust panic caught at JNI boundary in {name}");
            throw_bridge_error(env, &format!("{name}: native bridge panicked"));
            std::ptr::null_mut()
        }
    }
}

/// 桥接验证入口：无显式参数，返回固定问候文本。
///
/// 对应壳侧声明 `external fun stringFromJNI(): String`。
/// 无状态、无副作用；并发调用各自独立，无需任何同步。
#[no_mangle]
pub extern "system" fn Java_tech_userland_userland_MainActivity_stringFromJNI(
    mut env: JNIEnv,
    _this: JObject,
) -> jstring {
    jstring_export(&mut env, "stringFromJNI", |env: &mut JNIEnv| {
        let s = env.new_string(ul_core::api::greeting())?;
        Ok(s.into_raw())
    })
}

/// 返回原生库版本号（来自 Cargo.toml），供壳侧诊断页展示。
#[no_mangle]
pub extern "system" fn Java_tech_userland_userland_MainActivity_bridgeVersion(
    mut env: JNIEnv,
    _this: JObject,
) -> jstring {
    jstring_export(&mut env, "bridgeVersion", |env: &mut JNIEnv| {
        let s = env.new_string(ul_core::api::bridge_info().version)?;
        Ok(s.into_raw())
    })
}
