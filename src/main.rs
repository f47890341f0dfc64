use anyhow::Result;

use derp_move::{app, cli};

fn main() -> Result<()> {
    let args = cli::parse();
    app::run(args)
}
