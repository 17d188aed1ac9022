//! Empirical frequencies against configured probabilities, using seeded
//! ChaCha sources so every run draws the same values.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use roulette::{Approx, BiasedCoin, FairDie, LoadedDie, Sampler};

const DRAWS: u32 = 200_000;

// Upper 0.1% points of the chi-squared distribution, indexed by degrees of freedom.
const CRITICAL: [f64; 7] = [0.0, 10.828, 13.816, 16.266, 18.467, 20.515, 22.458];

fn seven() -> Vec<f64> {
    vec![
        1.0 / 8.0,
        1.0 / 5.0,
        1.0 / 10.0,
        1.0 / 4.0,
        1.0 / 10.0,
        1.0 / 10.0,
        1.0 / 8.0,
    ]
}

fn approx(seed: u64) -> Approx<ChaCha8Rng> {
    Approx::builder()
        .sample_size(DRAWS)
        .build(ChaCha8Rng::seed_from_u64(seed))
}

#[test]
fn loaded_die_matches_probabilities() {
    let probabilities = seven();
    let die = LoadedDie::new(7, probabilities.clone()).unwrap();
    let hist = approx(1).eval(&die.into());

    let stat = hist.chi_squared(&probabilities).unwrap();
    assert!(stat < CRITICAL[6], "chi-squared {stat}");
    for (f, p) in hist.frequencies().iter().zip(&probabilities) {
        assert!((f - p).abs() < 0.01, "{f} vs {p}");
    }
}

#[test]
fn loaded_die_without_cache_matches_probabilities() {
    let probabilities = vec![0.1, 0.3, 0.6];
    let die = LoadedDie::new(3, probabilities.clone()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    let mut counts = vec![0u64; 3];
    for _ in 0..20_000 {
        counts[die.generate(&mut rng)] += 1;
    }
    assert!(!die.is_precomputed());

    let hist = roulette::Histogram::new(counts);
    assert!(hist.chi_squared(&probabilities).unwrap() < CRITICAL[2]);
}

#[test]
fn loaded_die_never_rolls_impossible_face() {
    let die = LoadedDie::new(4, vec![0.0, 0.5, 0.0, 0.5]).unwrap();
    let hist = approx(3).eval(&die.into());
    assert_eq!(hist.counts()[0], 0);
    assert_eq!(hist.counts()[2], 0);
}

#[test]
fn fair_die_is_uniform() {
    let hist = approx(4).eval(&FairDie::new(6).unwrap().into());
    let expected = vec![1.0 / 6.0; 6];
    assert!(hist.chi_squared(&expected).unwrap() < CRITICAL[5]);
}

#[test]
fn biased_coin_matches_bias() {
    let sampler = Sampler::from(BiasedCoin::new(0.3).unwrap());
    let hist = approx(5).eval(&sampler);
    // index 0 is tails, index 1 heads
    assert!(hist.chi_squared(&[0.7, 0.3]).unwrap() < CRITICAL[1]);
}

#[test]
fn thread_rng_source() {
    let hist = Approx::default().eval(&Sampler::from(roulette::FairCoin));
    assert_eq!(hist.total(), u64::from(Approx::default().sample_size()));
}
