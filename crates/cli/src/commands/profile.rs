pub fn run(runs: u32) -> anyhow::Result<()> {
    outbreak_sim::bench::run_profile(runs);
    Ok(())
}
