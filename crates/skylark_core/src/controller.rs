//! The contract between world state and external decision functions.
//!
//! A controller maps the per-tick sensor vector to a decision scalar in
//! `[0, 1]`; an output strictly above the configured threshold triggers a
//! flap. Controllers are built once per agent at episode start, usually by
//! a [`ControllerFactory`] owned by an external learning framework, and
//! never see any world state beyond the sensor vector.

use crate::sensor::Senses;
use anyhow::Result;

/// A decision function driving one agent.
///
/// Implementations must be side-effect free with respect to the simulation:
/// they receive only the sensor vector and return a scalar. An `Err` return
/// is treated by the world step as a no-flap decision for that tick; it
/// never aborts the episode.
pub trait Controller {
    fn decide(&mut self, senses: &Senses) -> Result<f64>;
}

/// Builds controllers from opaque genomes.
///
/// Models the learning framework's `build_controller(genome, config)`
/// capability: whatever shared configuration the representation needs is
/// captured by the factory itself, keeping the simulation core independent
/// of the genome encoding.
pub trait ControllerFactory {
    type Genome;

    fn build(&self, genome: &Self::Genome) -> Result<Box<dyn Controller>>;
}

/// Always returns the same output. `Constant(0.0)` never flaps.
#[derive(Debug, Clone, Copy)]
pub struct Constant(pub f64);

impl Controller for Constant {
    fn decide(&mut self, _senses: &Senses) -> Result<f64> {
        Ok(self.0)
    }
}

/// Flaps on the first decision and every `period` decisions after it.
///
/// A scripted baseline used by the demo mode and regression tests.
#[derive(Debug, Clone)]
pub struct Periodic {
    period: u64,
    calls: u64,
}

impl Periodic {
    #[must_use]
    pub fn new(period: u64) -> Self {
        Self {
            period: period.max(1),
            calls: 0,
        }
    }
}

impl Controller for Periodic {
    fn decide(&mut self, _senses: &Senses) -> Result<f64> {
        let flap = self.calls % self.period == 0;
        self.calls += 1;
        Ok(if flap { 1.0 } else { 0.0 })
    }
}

/// Rides the lower edge of the nearest gap: flaps whenever the agent sinks
/// to within a fixed margin above the bottom region. Hugging the edge
/// rather than the gap center keeps the flap oscillation inside the gap,
/// so this baseline survives indefinitely on the default tuning; used by
/// the demo mode as a sanity ceiling.
#[derive(Debug, Clone, Copy, Default)]
pub struct GapSeeker;

/// Distance above the bottom region at which [`GapSeeker`] flaps.
const EDGE_MARGIN: f64 = 64.0;

impl Controller for GapSeeker {
    fn decide(&mut self, senses: &Senses) -> Result<f64> {
        Ok(if senses.bottom_offset > -EDGE_MARGIN {
            1.0
        } else {
            0.0
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal genome-built controller: a linear readout of the sensor
    /// vector squashed through a sigmoid, the shape a learning framework
    /// would hand over through the factory capability.
    struct LinearController {
        weights: [f64; 4],
        bias: f64,
    }

    impl Controller for LinearController {
        fn decide(&mut self, senses: &Senses) -> Result<f64> {
            let sum: f64 = senses
                .to_array()
                .iter()
                .zip(self.weights.iter())
                .map(|(input, weight)| input * weight)
                .sum::<f64>()
                + self.bias;
            Ok(1.0 / (1.0 + (-sum).exp()))
        }
    }

    struct LinearFactory;

    impl ControllerFactory for LinearFactory {
        type Genome = [f64; 5];

        fn build(&self, genome: &Self::Genome) -> Result<Box<dyn Controller>> {
            Ok(Box::new(LinearController {
                weights: [genome[0], genome[1], genome[2], genome[3]],
                bias: genome[4],
            }))
        }
    }

    fn senses(altitude: f64, bottom: f64, top: f64) -> Senses {
        Senses {
            altitude,
            bottom_offset: altitude - bottom,
            top_offset: altitude - top,
            horizontal_distance: 100.0,
        }
    }

    #[test]
    fn test_constant_never_changes() {
        let mut controller = Constant(0.3);
        for _ in 0..10 {
            assert_eq!(controller.decide(&senses(330.0, 450.0, 250.0)).unwrap(), 0.3);
        }
    }

    #[test]
    fn test_periodic_flaps_on_schedule() {
        let mut controller = Periodic::new(3);
        let s = senses(330.0, 450.0, 250.0);
        let outputs: Vec<f64> = (0..6).map(|_| controller.decide(&s).unwrap()).collect();
        assert_eq!(outputs, vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_factory_builds_bounded_controllers() {
        let factory = LinearFactory;
        let genomes = [
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [0.01, -0.02, 0.005, -0.001, 0.3],
            [-5.0, 5.0, -5.0, 5.0, -1.0],
        ];
        for genome in &genomes {
            let mut controller = factory.build(genome).unwrap();
            let output = controller.decide(&senses(330.0, 450.0, 250.0)).unwrap();
            assert!((0.0..=1.0).contains(&output), "sigmoid output must stay in [0, 1]");
        }
        // Zero genome sits exactly on the decision boundary and never flaps.
        let mut neutral = factory.build(&genomes[0]).unwrap();
        assert_eq!(neutral.decide(&senses(330.0, 450.0, 250.0)).unwrap(), 0.5);
    }

    #[test]
    fn test_gap_seeker_flaps_near_bottom_edge() {
        let mut controller = GapSeeker;
        // Gap spans [250, 450]; the flap line sits 64 above the bottom.
        assert_eq!(controller.decide(&senses(400.0, 450.0, 250.0)).unwrap(), 1.0);
        assert_eq!(controller.decide(&senses(380.0, 450.0, 250.0)).unwrap(), 0.0);
        assert_eq!(controller.decide(&senses(300.0, 450.0, 250.0)).unwrap(), 0.0);
    }
}
