use jni::JNIEnv;

/// 在调用线程上挂起一个 `java.lang.RuntimeException`。
///
/// - 已有 pending 异常时不覆盖，保留最先发生的那个。
/// - 抛出本身失败时静默吞掉：导出函数照常返回 null，由 VM 兜底。
pub(crate) fn throw_bridge_error(env: &mut JNIEnv, msg: &str) {
    if env.exception_check().unwrap_or(false) {
        return;
    }
    let _ = env.throw_new("java/lang/RuntimeException", msg);
}
