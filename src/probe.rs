use std::io::{self, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::thread;
use std::time::Duration;

use log::{error, info, warn};

/// Dial target of the server under test.
pub const TARGET_ADDR: &str = "127.0.0.1:8080";
/// Payload written on the first cycle.
pub const FIRST_PAYLOAD: [u8; 2] = [2, 3];
/// Payload written on the second cycle.
pub const SECOND_PAYLOAD: [u8; 2] = [3, 3];
/// Pause between the two cycles.
pub const CYCLE_DELAY: Duration = Duration::from_secs(2);

pub struct ProbeClient {
    cycle_delay: Duration,
}

impl ProbeClient {
    pub fn new(cycle_delay: Duration) -> ProbeClient {
        ProbeClient { cycle_delay }
    }

    /// Runs both probe cycles against `addr`, pausing in between.
    ///
    /// A dial failure ends the run right there: the error is handed back,
    /// the remaining cycle is skipped and the delay is not consumed. Close
    /// failures are reported but never end the run. The completion line is
    /// only printed once both cycles went through.
    pub fn run<A: ToSocketAddrs>(&self, addr: A) -> io::Result<()> {
        send_probe(&addr, &FIRST_PAYLOAD)?;
        thread::sleep(self.cycle_delay);
        send_probe(&addr, &SECOND_PAYLOAD)?;
        info!("Connection closed");
        Ok(())
    }
}

/// One cycle: dial, write the payload, close.
fn send_probe<A: ToSocketAddrs>(addr: A, payload: &[u8]) -> io::Result<()> {
    let mut stream = match TcpStream::connect(addr) {
        Ok(stream) => stream,
        Err(err) => {
            error!("Failed to connect: {}", err);
            return Err(err);
        }
    };

    // Fire-and-forget: the write result is not checked.
    let _ = stream.write_all(payload);

    if let Err(err) = stream.shutdown(Shutdown::Both) {
        warn!("Failed to close connection: {}", err);
    }
    Ok(())
}
