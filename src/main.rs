use ascent_sim::score::{score, Weights};
use ascent_sim::sim::{simulate_with, Observer, SimConfig, SimOutcome, VehicleState};
use ascent_sim::types::{Body, Stage};
use ascent_sim::vehicle::design::{presets, QUALIFICATION_WINDOW};

// Qualification-flight payload and price tag for the preset design
const PAYLOAD_MASS: f64 = 1_000.0; // kg
const ROCKET_COST: f64 = 33_000.0; // $

// ---------------------------------------------------------------------------
// Console progress table
// ---------------------------------------------------------------------------

/// Prints a per-stage TIME/ALT/VEL/TWR table, sampled every 10 seconds of
/// burn plus the final substep of each stage.
struct ConsoleObserver {
    substeps_in_stage: usize,
}

impl Observer for ConsoleObserver {
    fn on_ignition(&mut self, stage_idx: usize, stage: &Stage, _state: &VehicleState) {
        let config = SimConfig::default();
        self.substeps_in_stage =
            (stage.burn_time * config.substeps_per_sec as f64).round() as usize;
        println!("------- STAGE {stage_idx} --------");
        println!("TIME      ALT     VEL      TWR");
    }

    fn on_step(
        &mut self,
        _stage_idx: usize,
        substep: usize,
        time_in_stage: f64,
        state: &VehicleState,
        twr: f64,
    ) {
        if substep % 100 == 0 || substep + 1 == self.substeps_in_stage {
            println!(
                "{:05.1}s  {:7.0}  {:7.2}    {:.2}",
                time_in_stage, state.altitude, state.velocity, twr
            );
        }
    }

    fn on_escape(&mut self, _stage_idx: usize, time_in_stage: f64, state: &VehicleState) {
        println!("Reached velocity to coast to SOI exit with burn time {time_in_stage:.1}s");
        println!("Remaining mass = {:.0}kg", state.mass);
    }
}

// ---------------------------------------------------------------------------
// Qualification flight
// ---------------------------------------------------------------------------

fn main() {
    let body = Body::kerbin();
    let design = presets::qualifier();

    println!();
    println!("====================================================================");
    println!("  SOI QUALIFICATION FLIGHT — {}", design.name);
    println!("====================================================================");
    println!();
    println!("Gravity at sea level = {:.2} m/s^2", body.surface_gravity());

    if design.exceeds_qualification_window() {
        println!(
            "WARNING: total nominal burn time {:.0}s exceeds the {:.0}s qualification window",
            design.total_burn_time(),
            QUALIFICATION_WINDOW
        );
    }

    let config = SimConfig::default();
    let mut observer = ConsoleObserver { substeps_in_stage: 0 };

    match simulate_with(&body, &design, &config, &mut observer) {
        Ok(SimOutcome::Escaped { delta_v }) => {
            println!("Remaining delta-v at SOI exit = {delta_v:.0} m/s");
            print_score_card(delta_v);
        }
        Ok(SimOutcome::Exhausted { final_altitude, coast_time }) => {
            println!(
                "Failed to reach velocity to exit SOI. Coasted for {:.2} hrs",
                coast_time / 3600.0
            );
            println!("Height reached: {:.0} km", final_altitude / 1000.0);
        }
        Err(e) => {
            eprintln!("simulation error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_score_card(delta_v: f64) {
    let weights = Weights::default();
    let card = score(delta_v, PAYLOAD_MASS, ROCKET_COST, &weights);

    println!();
    println!("======== SCORING =========");
    println!();
    println!("Total Rocket cost: ${ROCKET_COST:.0}");
    println!(
        "Total payload mass : {:5.1} tons    / 25t   = {:.2} pts",
        PAYLOAD_MASS / 1000.0,
        card.points_absolute_payload
    );
    println!(
        "Available DV       : {:5.0} m/s     / 5K    = {:.2} pts",
        delta_v, card.points_absolute_dv
    );
    println!(
        "Cost / kg          : {:5.2} $       / 20    = {:.2} pts",
        card.cost_per_kilo, card.points_cost_per_kilo
    );
    println!(
        "Cost / unit DV     : {:5.2} $       / 50    = {:.2} pts",
        card.cost_per_unit_dv, card.points_cost_per_unit_dv
    );
    println!();
    println!("WEIGHTINGS");
    println!("   payload_mass     {:4.0}%", weights.absolute_payload * 100.0);
    println!("   absolute_dv      {:4.0}%", weights.absolute_dv * 100.0);
    println!("   cost_per_kilo    {:4.0}%", weights.cost_per_kilo * 100.0);
    println!("   cost_per_unit_dv {:4.0}%", weights.cost_per_unit_dv * 100.0);
    println!();
    println!("FINAL SCORE = {:.2}", card.final_score);
}
