#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::update::update_state;
use super::{FrameReport, PerfTimer, TanksCore};

/// Fixed-step driver, run once per displayed frame.
///
/// Admits at most `max_frame_time` of (scaled) frame time into the budget,
/// runs whole `dt` ticks while the budget allows, then blends every body at
/// `alpha = budget / dt`. A negative time scale runs the ticks in reverse.
pub(super) fn simulate(core: &mut TanksCore, frame_time: f32) -> FrameReport {
    let perf_on = core.perf_enabled;
    let frame_timer = PerfTimer::start_if(perf_on);

    let frame_time = if frame_time.is_finite() {
        frame_time * core.config.time_scale
    } else {
        0.0
    };
    let cap = core.config.max_frame_time;
    if frame_time.abs() > cap && !core.cap_warned {
        console_warn!(
            "frame time {:.3}s over the {:.3}s cap, simulation will lag behind",
            frame_time,
            cap
        );
        core.cap_warned = true;
    }
    // Leftover budget counts against the cap too.
    core.time_accumulator = (core.time_accumulator + frame_time).clamp(-cap, cap);

    let dt = core.config.dt;
    // Same sign as frame_time whenever the loop runs; also ends the loop
    // for a zero frame_time.
    let direction = core.time_accumulator.signum();

    let mut report = FrameReport::default();
    let mut collision_checks = 0u32;
    let mut update_ms = 0.0;
    let mut advance_ms = 0.0;

    while core.time_accumulator.abs() >= dt {
        let timer = PerfTimer::start_if(perf_on);
        let outcome = update_state(core, dt);
        if let Some(timer) = timer {
            update_ms += timer.elapsed_ms();
        }

        let timer = PerfTimer::start_if(perf_on);
        advance_all(core, dt);
        if let Some(timer) = timer {
            advance_ms += timer.elapsed_ms();
        }

        core.t += direction * dt;
        core.time_accumulator -= direction * dt;
        core.steps_taken += 1;

        report.steps += 1;
        report.bricks_dislodged += outcome.dislodged;
        report.bodies_settled += outcome.settled;
        collision_checks += outcome.collision_checks;
    }

    report.alpha = core.time_accumulator / dt;
    let blend_timer = PerfTimer::start_if(perf_on);
    blend_all(core, report.alpha);
    let blend_ms = blend_timer.map_or(0.0, |t| t.elapsed_ms());

    report.level_cleared = core.all_columns_empty();
    if report.level_cleared && !core.cleared_announced {
        console_log!("level cleared after {} steps", core.steps_taken);
        core.cleared_announced = true;
    }

    if let Some(frame_timer) = frame_timer {
        let brick_count = core.brick_count() as u32;
        let stats = &mut core.perf_stats;
        stats.frame_ms = frame_timer.elapsed_ms();
        stats.update_ms = update_ms;
        stats.advance_ms = advance_ms;
        stats.blend_ms = blend_ms;
        stats.steps = report.steps;
        stats.collision_checks = collision_checks;
        stats.bricks_dislodged = report.bricks_dislodged;
        stats.bodies_settled = report.bodies_settled;
        stats.column_bricks = brick_count;
        stats.free_bodies = core.free_bodies.len() as u32;
        stats.projectiles = core.projectiles.len() as u32;
    }

    report
}

/// Integrate bodies in every collection
pub(super) fn advance_all(core: &mut TanksCore, dt: f32) {
    for body in core
        .columns
        .iter_mut()
        .flatten()
        .chain(core.free_bodies.iter_mut())
        .chain(core.projectiles.iter_mut())
    {
        body.advance(dt);
    }
}

/// Rebuild every drawn transform; bodies are independent here
pub(super) fn blend_all(core: &mut TanksCore, alpha: f32) {
    #[cfg(feature = "parallel")]
    {
        core.columns
            .par_iter_mut()
            .for_each(|column| column.iter_mut().for_each(|b| b.blend_state(alpha)));
        core.free_bodies.par_iter_mut().for_each(|b| b.blend_state(alpha));
        core.projectiles.par_iter_mut().for_each(|b| b.blend_state(alpha));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for body in core
            .columns
            .iter_mut()
            .flatten()
            .chain(core.free_bodies.iter_mut())
            .chain(core.projectiles.iter_mut())
        {
            body.blend_state(alpha);
        }
    }
}
