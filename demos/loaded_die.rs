use rand::thread_rng;
use roulette::{Approx, LoadedDie, Sampler};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn main() -> roulette::Result<()> {
    init_logging();

    let probabilities = vec![0.1, 0.3, 0.6];
    let die = LoadedDie::new(probabilities.len(), probabilities.clone())?;

    let mut rng = thread_rng();
    let rolls: Vec<_> = (0..10).map(|_| die.generate(&mut rng)).collect();
    info!(?rolls, "ten rolls");

    let sampler = Sampler::from(die);
    let hist = Approx::default().eval(&sampler);
    for (face, (freq, p)) in hist.frequencies().iter().zip(&probabilities).enumerate() {
        println!("face {face}: {freq:.4} (expected {p})");
    }
    Ok(())
}
