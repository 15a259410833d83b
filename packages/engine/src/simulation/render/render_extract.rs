use super::TanksCore;

/// Refill the transfer buffers in draw order; returns the body count
pub(super) fn collect_draw_list(core: &mut TanksCore) -> usize {
    let TanksCore {
        columns,
        free_bodies,
        projectiles,
        render,
        ..
    } = core;
    render.transforms.clear();
    render.handles.clear();

    let mut count = 0usize;
    for body in columns.iter().flatten().chain(free_bodies.iter()).chain(projectiles.iter()) {
        render
            .transforms
            .extend_from_slice(&body.drawn_location.to_row_major());
        render.handles.push(body.shape.0);
        render.handles.push(body.material.0);
        count += 1;
    }
    count
}
