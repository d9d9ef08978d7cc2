use std::io::Read;
use std::net::{SocketAddr, TcpListener};
use std::thread;
use std::time::Instant;

/// One accepted connection as seen from the server side.
pub struct ProbeRecord {
    pub payload: Vec<u8>,
    pub accepted_at: Instant,
    pub closed_at: Instant,
}

pub struct RecordingListener {
    addr: SocketAddr,
    handle: thread::JoinHandle<Vec<ProbeRecord>>,
}

impl RecordingListener {
    /// Binds an ephemeral port and accepts `expected_connections` in the
    /// background, reading each connection to EOF.
    pub fn spawn(expected_connections: usize) -> RecordingListener {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let mut records: Vec<ProbeRecord> = Vec::with_capacity(expected_connections);
            for _ in 0..expected_connections {
                let (mut stream, _) = listener.accept().unwrap();
                let accepted_at = Instant::now();
                let mut payload: Vec<u8> = Vec::new();
                stream.read_to_end(&mut payload).unwrap();
                records.push(ProbeRecord {
                    payload,
                    accepted_at,
                    closed_at: Instant::now(),
                });
            }
            records
        });
        RecordingListener { addr, handle }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn join(self) -> Vec<ProbeRecord> {
        self.handle.join().unwrap()
    }
}

/// Returns a loopback address with no listener behind it.
pub fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
