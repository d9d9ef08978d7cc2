use std::env;
extern crate clap;
mod params_parser;

fn main() {
    runner::run(env::args().collect())
}

mod runner {
    use crate::params_parser::ProbeClientConfig;
    use env_logger::Builder;
    use log::info;
    use sockpoke::probe::{ProbeClient, CYCLE_DELAY, FIRST_PAYLOAD, SECOND_PAYLOAD, TARGET_ADDR};
    use std::{io::Write, process};

    use super::params_parser;

    fn get_log_level(verbose: u8) -> log::LevelFilter {
        // Vary the output based on how many times the user passed the
        // "verbose" flag (i.e. 'sockpoke -v -v -v' or 'sockpoke -vvv')
        match verbose {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Warn,
            2 => log::LevelFilter::Info,
            3 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn init_logger(cli_config: &ProbeClientConfig) {
        let mut builder = Builder::new();
        builder.filter_level(get_log_level(cli_config.verbose));
        // Diagnostics belong on standard output, not the env_logger default.
        builder.target(env_logger::Target::Stdout);
        builder.format_module_path(false);
        builder.format_file(false);
        builder.format_source_path(false);
        builder.format_target(false);

        builder.format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "[{}] {style}{:<5}{style:#}: {}",
                buf.timestamp(),
                record.level(),
                record.args()
            )
        });
        builder.init();
    }

    pub fn run(args: Vec<String>) {
        let cli_config = match params_parser::parse(args) {
            Ok(config) => config,
            Err(err) => {
                eprint!("{}", err);
                process::exit(1);
            }
        };

        init_logger(&cli_config);

        info!("Target address: {}", TARGET_ADDR);
        info!(
            "Probe payloads: {:?} then {:?}",
            FIRST_PAYLOAD, SECOND_PAYLOAD
        );
        info!("Cycle delay: {:?}", CYCLE_DELAY);

        let client = ProbeClient::new(CYCLE_DELAY);
        // Dial failures are reported inside the probe; the process exits 0
        // either way.
        let _ = client.run(TARGET_ADDR);
    }

}
