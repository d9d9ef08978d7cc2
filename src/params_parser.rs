use clap::Parser;
use std::fmt::Debug;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
/// Fixed-payload TCP smoke-test client for a server under test
pub struct ProbeClientConfig {
    #[arg(short, long, action = clap::ArgAction::Count, default_value_t = 2)]
    /// sets the level of verbosity
    pub verbose: u8,
}

impl ProbeClientConfig {
    fn from_args(args: Vec<String>) -> Result<ProbeClientConfig, String> {
        let probe_args = ProbeClientConfig::parse_from(args.iter());
        Ok(probe_args)
    }
}

pub fn parse(args: Vec<String>) -> Result<ProbeClientConfig, String> {
    ProbeClientConfig::from_args(args)
}
