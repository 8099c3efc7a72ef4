//! Fixed values shared across the nullref workspace.
//!
//! Single source of truth for the default diagnostic text and reporting
//! limits. Imported by all crates — no duplication permitted.

/// Message carried by a `NullReferenceError` constructed without one.
///
/// Reproduced byte-for-byte, including the embedded newline. Not localized.
/// Spelled `够呆` (U+5446), not the `够呛` (U+545B) other copies of this
/// text carry. Keep it that way.
pub const DEFAULT_MESSAGE: &str = "哇哦！这个笨蛋！怎么就空指针了呢？\n真是够呆啊。连个合法的指针都搞不定~ 简直就是蠢到爆炸了！！赶紧检查下你的代码吧~ 别再犯这种低级错误了~ 哼~";

/// Diagnostic name reported for null-reference errors.
pub const NULL_REFERENCE_TYPE_NAME: &str = "NullReferenceError";

/// Default number of causes rendered below a report headline.
pub const DEFAULT_MAX_CAUSE_DEPTH: usize = 8;

/// Upper bound accepted for `max_cause_depth` in configuration.
pub const MAX_CAUSE_DEPTH_LIMIT: usize = 256;
