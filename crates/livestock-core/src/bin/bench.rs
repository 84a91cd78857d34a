/// Batch benchmarks for the livestock-core components.
///
/// Each model is run over a herd of randomly generated animals. Timing uses
/// std::time::Instant, herds come from a deterministic LCG, and
/// std::hint::black_box keeps the results alive.
use std::hint::black_box;
use std::time::{Duration, Instant};

use livestock_core::animal::{AnimalCategory, DietInfo, DietType};
use livestock_core::buffalo::compare;
use livestock_core::buffalo::params::{
    BuffaloParams, BuffaloType, CattleParams, Gender, ProductionSystem,
};
use livestock_core::buffalo::run as buffalo_run;
use livestock_core::emissions::params::{
    EmissionsParams, EntericInput, FeedSystem, ManureSystem,
};
use livestock_core::emissions::run as emissions_run;
use livestock_core::energy::params::EnergyParams;
use livestock_core::energy::run as energy_run;
use livestock_core::reproduction::params::{DietBalance, ReproductiveParams, SupplementType};
use livestock_core::reproduction::run as reproduction_run;

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic herd generation.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as f64 / (1u64 << 31) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

fn make_cattle(n: usize, seed: u64) -> Vec<EnergyParams> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|_| {
            let dairy = rng.next_f64() < 0.5;
            let category = if dairy {
                AnimalCategory::Dairy
            } else {
                AnimalCategory::Beef
            };
            let mut p = EnergyParams::new(category, rng.range(300.0, 750.0));
            p.weight_gain = if dairy { 0.0 } else { rng.range(0.2, 1.5) };
            p.milk_production = if dairy { rng.range(5.0, 40.0) } else { 0.0 };
            p.diet = DietInfo::new(rng.range(0.5, 0.8), DietType::Mixed);
            p
        })
        .collect()
}

fn make_buffalo(n: usize, seed: u64) -> Vec<BuffaloParams> {
    let mut rng = Lcg(seed);
    let systems = [
        ProductionSystem::Intensive,
        ProductionSystem::SemiIntensive,
        ProductionSystem::Traditional,
    ];
    (0..n)
        .map(|i| {
            let buffalo_type = if i % 3 == 0 {
                BuffaloType::SwampBuffalo
            } else {
                BuffaloType::WaterBuffalo
            };
            let gender = if rng.next_f64() < 0.7 {
                Gender::Female
            } else {
                Gender::Male
            };
            let mut p = BuffaloParams::new(buffalo_type, gender, rng.range(6.0, 120.0));
            p.production_system = systems[i % systems.len()];
            p.is_lactating = gender == Gender::Female && p.age_months > 48.0;
            p.diet = DietInfo::new(rng.range(0.5, 0.7), DietType::HighForage);
            p
        })
        .collect()
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_energy(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();
    for &n in sizes {
        let herd = make_cattle(n, 42);

        // Warmup
        for p in &herd {
            black_box(energy_run::evaluate(p));
        }

        let dur = median_time(|| {
            for p in &herd {
                black_box(energy_run::evaluate(p));
            }
        });
        results.push(("energy", n, dur));
    }
    results
}

fn bench_reproduction(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();
    for &n in sizes {
        let mut rng = Lcg(7);
        let herd: Vec<ReproductiveParams> = (0..n)
            .map(|_| ReproductiveParams {
                category: AnimalCategory::Water,
                current_calving_rate: rng.range(40.0, 70.0),
                current_time_to_calf: rng.range(13.0, 20.0),
                baseline_diet: DietBalance::new(rng.range(-6.0, 0.0), rng.range(6.0, 10.0)),
                improved_diet: DietBalance::new(rng.range(0.0, 8.0), rng.range(10.0, 16.0)),
                supplement_type: SupplementType::Protein,
            })
            .collect();

        let dur = median_time(|| {
            for p in &herd {
                black_box(reproduction_run::evaluate(p));
            }
        });
        results.push(("reproduction", n, dur));
    }
    results
}

fn bench_emissions(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();
    for &n in sizes {
        let herd: Vec<EmissionsParams> = make_cattle(n, 42)
            .iter()
            .map(|p| {
                EmissionsParams::new(
                    p.animal_type(),
                    EntericInput::from(&energy_run::evaluate(p)),
                    ManureSystem::SolidStorage,
                    p.body_weight,
                    FeedSystem::Mixed,
                )
            })
            .collect();

        let dur = median_time(|| {
            for p in &herd {
                black_box(emissions_run::evaluate(p));
            }
        });
        results.push(("emissions", n, dur));
    }
    results
}

fn bench_buffalo(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();
    for &n in sizes {
        let herd = make_buffalo(n, 42);

        // Warmup
        for p in &herd {
            black_box(buffalo_run::evaluate(p));
        }

        let dur = median_time(|| {
            for p in &herd {
                black_box(buffalo_run::evaluate(p));
            }
        });
        results.push(("buffalo", n, dur));
    }
    results
}

fn bench_compare(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();
    for &n in sizes {
        let pairs: Vec<(BuffaloParams, CattleParams)> = make_buffalo(n, 42)
            .into_iter()
            .map(|b| {
                let c = CattleParams::equivalent_to(&b, 0.5);
                (b, c)
            })
            .collect();

        let dur = median_time(|| {
            for (b, c) in &pairs {
                black_box(compare::evaluate(b, c));
            }
        });
        results.push(("compare", n, dur));
    }
    results
}

fn main() {
    println!("livestock-core benchmarks");
    println!("============================================================");
    println!("{:<18} {:>6}   {:>12}", "Model", "N", "Median (ms)");
    println!("--------------------------------------------");

    let mut all_results: Vec<(&str, usize, Duration)> = Vec::new();

    all_results.extend(bench_energy(&[1_000, 100_000]));
    all_results.extend(bench_reproduction(&[1_000, 100_000]));
    all_results.extend(bench_emissions(&[1_000, 100_000]));
    all_results.extend(bench_buffalo(&[1_000, 10_000]));
    all_results.extend(bench_compare(&[1_000, 10_000]));

    for (model, n, dur) in &all_results {
        let ms = dur.as_secs_f64() * 1000.0;
        println!("{:<18} {:>6}      {:>8.2}", model, n, ms);
    }

    println!("============================================================");
}
