use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seed for sessions that don't ask for a deterministic one.
pub(super) fn seed_from_clock() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::now() as u64;
        let jitter = (js_sys::Math::random() * u32::MAX as f64) as u64;
        now ^ (jitter << 32)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5eed)
    }
}

pub(super) fn rng_from_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
