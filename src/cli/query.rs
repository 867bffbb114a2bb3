use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Query {
    #[command(about = "List the routes leaving a location", alias = "r")]
    Routes {
        #[arg(required = true)]
        location: u8,
    },
    #[command(about = "Find the least-cost path between two locations", alias = "c")]
    Cheapest {
        #[arg(required = true)]
        from: u8,
        #[arg(required = true)]
        to: u8,
        #[arg(short, long, default_value = "noblack")]
        tickets: String,
        #[arg(long, help = "Price black tickets as a last resort")]
        avoid_black: bool,
    },
    #[command(about = "Find the fewest-hop path between two locations", alias = "s")]
    Shortest {
        #[arg(required = true)]
        from: u8,
        #[arg(required = true)]
        to: u8,
        #[arg(short, long, default_value = "noblack")]
        tickets: String,
    },
    #[command(about = "Count hops between two locations", alias = "d")]
    Distance {
        #[arg(required = true)]
        from: u8,
        #[arg(required = true)]
        to: u8,
        #[arg(short, long, default_value = "noblack")]
        tickets: String,
    },
    #[command(about = "List locations reachable in exactly N turns", alias = "rx")]
    Reach {
        #[arg(required = true)]
        from: u8,
        #[arg(required = true)]
        turns: usize,
        #[arg(short, long, default_value = "x")]
        tickets: String,
        #[arg(short, long, value_delimiter = ',', help = "Locations blocked on every turn")]
        avoid: Vec<u8>,
        #[arg(short, long, help = "Let stalled pawns wait instead of dropping them")]
        wait: bool,
    },
    #[command(about = "Deduce where a pawn may be from the tickets it spent", alias = "dd")]
    Deduce {
        #[arg(required = true)]
        from: u8,
        #[arg(required = true)]
        tickets: Vec<String>,
    },
    #[command(about = "Check the board for consistency")]
    Verify,
    #[command(about = "Play a random game and print what the detectives saw")]
    Simulate {
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
        #[arg(long, help = "Print events as JSON lines")]
        json: bool,
    },
}
