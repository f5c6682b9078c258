/// Gas charged for a native contract function call. Native handlers run in
/// bounded time, so a flat base cost is enough; the per-function descriptor
/// still carries its own cost so individual functions can diverge.
pub const GAS_NATIVE_BASE: u64 = 3;
