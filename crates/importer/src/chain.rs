/// Fixed description of the gym chain being imported: its name in
/// `gymchains_master`, the CTE alias used to look its id up, and the file its
/// gyms are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig {
    pub name: &'static str,
    pub cte_alias: &'static str,
    pub input_file: &'static str,
}

impl ChainConfig {
    pub const ANYTIME_FITNESS: Self = Self {
        name: "Anytime Fitness",
        cte_alias: "anytime_chain",
        input_file: "anytime.json",
    };
}
