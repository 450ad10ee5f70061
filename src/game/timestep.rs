//! Fixed-timestep accumulator
//!
//! Real frame times are irregular; the simulation only ever advances in
//! whole [`FIXED_TIMESTEP`] slices. Leftover time carries into the next
//! frame, so the number of slices executed depends only on total elapsed
//! time, not on how it was chunked across frames. A frame shorter than
//! one slice runs zero simulation steps but still renders.

/// Simulation slice, in seconds (~60 Hz).
pub const FIXED_TIMESTEP: f32 = 0.016_666_6;

/// Carry-over accumulator that converts frame deltas into whole steps.
#[derive(Debug, Default)]
pub struct FixedTimestep {
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's wall-clock delta; returns how many fixed steps
    /// the caller should simulate.
    pub fn advance(&mut self, frame_delta: f32) -> u32 {
        self.accumulator += frame_delta;
        let mut steps = 0;
        while self.accumulator >= FIXED_TIMESTEP {
            self.accumulator -= FIXED_TIMESTEP;
            steps += 1;
        }
        steps
    }

    /// Time carried into the next frame, always below [`FIXED_TIMESTEP`].
    pub fn remainder(&self) -> f32 {
        self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_frame_carries_everything() {
        let mut timestep = FixedTimestep::new();
        assert_eq!(timestep.advance(0.005), 0);
        assert!((timestep.remainder() - 0.005).abs() < 1e-7);
    }

    #[test]
    fn chunked_deltas_drain_one_step() {
        let mut timestep = FixedTimestep::new();
        let mut steps = 0;
        for delta in [0.005, 0.006, 0.006] {
            steps += timestep.advance(delta);
        }

        // 0.017 total is one slice over, carrying ~0.0003334.
        assert_eq!(steps, 1);
        assert!((timestep.remainder() - 0.000_333_4).abs() < 1e-5);
    }

    #[test]
    fn long_frame_drains_multiple_steps() {
        let mut timestep = FixedTimestep::new();
        let steps = timestep.advance(5.0 * FIXED_TIMESTEP + 0.001);
        assert_eq!(steps, 5);
        assert!((timestep.remainder() - 0.001).abs() < 1e-5);
    }

    #[test]
    fn total_steps_depend_only_on_total_time() {
        // 1.005 s in one frame, four frames, or a hundred frames.
        let chunkings: [&[f32]; 3] = [
            &[1.005],
            &[0.25, 0.25, 0.25, 0.255],
            &[0.010_05; 100],
        ];

        for deltas in chunkings {
            let mut timestep = FixedTimestep::new();
            let steps: u32 = deltas.iter().map(|&delta| timestep.advance(delta)).sum();
            assert_eq!(steps, (1.005 / FIXED_TIMESTEP) as u32);
            assert!(timestep.remainder() < FIXED_TIMESTEP);
        }
    }
}
