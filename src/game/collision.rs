//! Collision resolution
//!
//! The lander is resolved against every pad independently, one axis at a
//! time: the vertical pass runs right after the Y integration step, the
//! horizontal pass after the X step. Each pass snaps the lander flush to
//! the pad edge it hit, zeroes velocity on that axis, and records which
//! side made contact. When several pads overlap at once, the last one in
//! array order keeps the final positional correction; the mission outcome
//! itself is latched by the first terminal contact (see
//! [`Entity::record_outcome`]).

use super::entity::Entity;

/// AABB overlap test between two entities.
///
/// Distances are measured center-to-center minus combined half-extents,
/// so a negative distance on both axes means the boxes interpenetrate.
/// Exactly touching edges do not count as overlap.
pub fn overlaps(a: &Entity, b: &Entity) -> bool {
    let x_distance = (a.position.x - b.position.x).abs() - (a.width + b.width) / 2.0;
    let y_distance = (a.position.y - b.position.y).abs() - (a.height + b.height) / 2.0;
    x_distance < 0.0 && y_distance < 0.0
}

/// Vertical pass: settle the lander onto (or bounce it under) any pad it
/// interpenetrates.
///
/// Settling onto a safe pad while falling is the successful landing;
/// touching the trap from either side fails the run.
pub fn resolve_vertical(player: &mut Entity, pads: &[Entity]) {
    player.contact.top = false;
    player.contact.bottom = false;

    for pad in pads.iter().filter(|pad| pad.active) {
        if !overlaps(player, pad) {
            continue;
        }

        // Captured before the snap zeroes it.
        let falling = player.velocity.y < 0.0;

        if player.position.y > pad.position.y {
            player.position.y = pad.position.y + pad.height / 2.0 + player.height / 2.0;
            player.contact.top = true;
            if let Some(mission) = pad.kind.contact_outcome(falling) {
                player.record_outcome(mission);
            }
        } else {
            player.position.y = pad.position.y - pad.height / 2.0 - player.height / 2.0;
            player.contact.bottom = true;
            if let Some(mission) = pad.kind.contact_outcome(false) {
                player.record_outcome(mission);
            }
        }
        player.velocity.y = 0.0;
    }
}

/// Horizontal pass: push the lander out of any pad it drifted into
/// sideways. Side contact never counts as a landing, but clipping the
/// trap still fails the run.
pub fn resolve_horizontal(player: &mut Entity, pads: &[Entity]) {
    player.contact.left = false;
    player.contact.right = false;

    for pad in pads.iter().filter(|pad| pad.active) {
        if !overlaps(player, pad) {
            continue;
        }

        if player.position.x > pad.position.x {
            player.position.x = pad.position.x + pad.width / 2.0 + player.width / 2.0;
            player.contact.left = true;
        } else {
            player.position.x = pad.position.x - pad.width / 2.0 - player.width / 2.0;
            player.contact.right = true;
        }
        player.velocity.x = 0.0;

        if let Some(mission) = pad.kind.contact_outcome(false) {
            player.record_outcome(mission);
        }
    }
}
