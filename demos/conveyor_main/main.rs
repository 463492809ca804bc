use conveyor_sim::{ConveyorSimulation, SimulationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    println!("Starting Conveyor Belt Simulation...");

    let config = SimulationConfig::default();
    println!("Configuration:");
    println!(
        "  steps={}, conveyor_len={}, assembly_time={}, workers_per_slot={}",
        config.steps, config.conveyor_len, config.assembly_time, config.workers_per_slot
    );
    println!();

    let mut simulation = ConveyorSimulation::new(config)?;
    let results = simulation.run();

    println!("{}", results);
    Ok(())
}
