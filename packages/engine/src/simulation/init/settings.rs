use crate::core::MazeError;
use crate::domain::MazeConfig;

use super::MazeCore;

/// Replace the session config. The current maze keeps its size until the
/// next `generate`, which clamps against the new bounds.
pub(super) fn load_config_json(core: &mut MazeCore, json: &str) -> Result<(), MazeError> {
    let config = MazeConfig::from_json(json)?;
    console_log!(
        "config loaded: sizes {}..={} (default {}), delay {}ms",
        config.min_size,
        config.max_size,
        config.default_size,
        config.delay_ms
    );
    core.config = config;
    Ok(())
}

pub(super) fn config_json(core: &MazeCore) -> String {
    core.config.to_json()
}

pub(super) fn delay_ms(core: &MazeCore) -> u32 {
    core.config.delay_ms
}
