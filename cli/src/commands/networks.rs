use color_eyre::eyre::Result;
use safe_hashes::NETWORKS;

use crate::output::print_networks;

pub fn run(json: bool) -> Result<()> {
    print_networks(NETWORKS, json);
    Ok(())
}
