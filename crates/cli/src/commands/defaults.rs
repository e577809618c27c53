use outbreak_shared::config::SimulationParams;

pub fn run() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&SimulationParams::default())?);
    Ok(())
}
