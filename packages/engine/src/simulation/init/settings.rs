use crate::domain::config::SimulationConfig;
use crate::systems::collision::ResolveParams;

use super::init::build_collider;
use super::perf_stats::PerfStats;
use super::TanksCore;

pub(super) fn set_config(core: &mut TanksCore, config: SimulationConfig) -> Result<(), String> {
    config.validate()?;
    core.resolve = ResolveParams::from(&config);
    core.collider = build_collider(&config);
    core.config = config;
    // Leftover budget was measured in the old dt.
    core.time_accumulator = 0.0;
    Ok(())
}

pub(super) fn set_time_scale(core: &mut TanksCore, scale: f32) {
    if scale.is_finite() {
        core.config.time_scale = scale;
    }
}

pub(super) fn enable_perf_metrics(core: &mut TanksCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &TanksCore) -> PerfStats {
    core.perf_stats.clone()
}
