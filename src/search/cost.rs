use crate::Cost;
use crate::Ledger;
use crate::Transport;

/// Every ticket costs about the same, with a slight preference for
/// taxi, then bus, then underground, then black.
pub fn equal_cost(_: &Ledger, transport: Transport) -> Cost {
    match transport {
        Transport::Taxi => 1.00,
        Transport::Bus => 1.01,
        Transport::Underground => 1.02,
        Transport::Black => 1.03,
    }
}

/// Like [`equal_cost`], but black tickets are a last resort.
pub fn avoid_black(ledger: &Ledger, transport: Transport) -> Cost {
    match transport {
        Transport::Black => 1_000_000.,
        _ => equal_cost(ledger, transport),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn preference_order() {
        let ledger = Ledger::unlimited();
        let costs = Transport::all().map(|t| equal_cost(&ledger, t));
        assert!(costs.windows(2).all(|w| w[0] < w[1]));
        assert!(avoid_black(&ledger, Transport::Black) > 1000.);
        assert_eq!(avoid_black(&ledger, Transport::Bus), 1.01);
    }
}
