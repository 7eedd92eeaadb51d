/// Counters collected over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Stats {
    /// 5-card subsets evaluated
    pub candidates: usize,
    /// back/middle pairs visited
    pub pairs: u64,
    /// pairs sharing a card
    pub overlaps: u64,
    /// pairs cut by the royalty bound
    pub pruned: u64,
    /// distinct residual card sets
    pub residuals: usize,
    /// residual lookups answered from the memo
    pub hits: u64,
    /// pairs with no front that fits under the middle
    pub fouls: u64,
    /// legal arrangements scored
    pub legal: u64,
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<16}{:>12}", "candidates", self.candidates)?;
        writeln!(f, "{:<16}{:>12}", "pairs", self.pairs)?;
        writeln!(f, "{:<16}{:>12}", "overlaps", self.overlaps)?;
        writeln!(f, "{:<16}{:>12}", "pruned", self.pruned)?;
        writeln!(f, "{:<16}{:>12}", "residuals", self.residuals)?;
        writeln!(f, "{:<16}{:>12}", "memo hits", self.hits)?;
        writeln!(f, "{:<16}{:>12}", "fouls", self.fouls)?;
        write!(f, "{:<16}{:>12}", "legal", self.legal)
    }
}
