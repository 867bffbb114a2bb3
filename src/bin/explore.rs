//! Board Explorer Binary
//!
//! Interactive search queries and random simulations on the London board.

use manhunt::*;

fn main() -> anyhow::Result<()> {
    log();
    cli::Explorer::default().run()
}
