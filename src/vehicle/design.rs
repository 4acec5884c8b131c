use super::stage::{Stage, StageBuilder, StageError};

// ---------------------------------------------------------------------------
// Design: ordered sequence of stages (assembly order, top stage first)
// ---------------------------------------------------------------------------

/// Total nominal burn time above this is flagged before a qualification
/// flight (advisory only).
pub const QUALIFICATION_WINDOW: f64 = 300.0; // s

/// A candidate vehicle design. Stages are listed in assembly order: the
/// top (last-firing) stage first, boosters last. The simulator reverses
/// this into firing order via [`Design::firing_order`].
#[derive(Debug, Clone)]
pub struct Design {
    pub name: String,
    pub stages: Vec<Stage>,
}

impl Design {
    /// Validate every stage, reporting the first offender by its
    /// assembly-order index.
    pub fn validate(&self) -> Result<(), (usize, StageError)> {
        for (i, s) in self.stages.iter().enumerate() {
            s.validate().map_err(|e| (i, e))?;
        }
        Ok(())
    }

    /// The stages in the order they actually ignite: bottom/first-fired
    /// stage first. This reversal is a contract with callers, who supply
    /// stages top-down; keep it here, named, rather than inlining it.
    pub fn firing_order(&self) -> Vec<Stage> {
        let mut order = self.stages.clone();
        order.reverse();
        order
    }

    /// Sum of nominal full-burn durations across all stages.
    pub fn total_burn_time(&self) -> f64 {
        self.stages.iter().map(|s| s.burn_time).sum()
    }

    /// Whether the flight risks running past the qualification window.
    pub fn exceeds_qualification_window(&self) -> bool {
        self.total_burn_time() > QUALIFICATION_WINDOW
    }

    /// Ideal delta-v if every stage burned to depletion.
    pub fn ideal_delta_v(&self) -> f64 {
        self.stages.iter().map(|s| s.full_delta_v()).sum()
    }
}

// ---------------------------------------------------------------------------
// Design builder
// ---------------------------------------------------------------------------

pub struct DesignBuilder {
    name: String,
    stages: Vec<Stage>,
}

impl DesignBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), stages: vec![] }
    }

    /// Append a stage in assembly order (top stage first).
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn build(self) -> Design {
        Design { name: self.name, stages: self.stages }
    }
}

// ---------------------------------------------------------------------------
// Preset designs
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// 2-stage SOI-qualification candidate: a long-burning upper stage on
    /// top of a short, hard-kicking booster.
    pub fn qualifier() -> Design {
        Design {
            name: "Qualifier".into(),
            stages: vec![
                StageBuilder::new()
                    .start_mass(38_750.0)
                    .end_mass(6_750.0)
                    .thrust(250_000.0)
                    .isp(350.0)
                    .burn_time(7.0 * 60.0 + 20.0)
                    .build(),
                StageBuilder::new()
                    .start_mass(81_400.0)
                    .end_mass(49_400.0)
                    .thrust(2_000_000.0)
                    .isp(280.0)
                    .burn_time(47.0)
                    .build(),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
