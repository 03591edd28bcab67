//! Communicate with a display over a connection

use std::{
    io::{self, Read, Write},
    net::{TcpStream, ToSocketAddrs},
    time::Duration,
};

use crate::{
    commands::{self, Command},
    proto::Frame,
};

/// Maximal number of reply bytes accepted in a single receive
const MAX_REPLY_LEN: usize = 64;

/// Maximal time the display is given to answer
const RECV_TIMEOUT: Duration = Duration::from_secs(2);

/// A trait representing a valid stream to carry the protocol on
pub trait PDStream: Read + Write {}
impl<T: Read + Write> PDStream for T {}

/// A session with a single display where frames can be sent and raw replies
/// received
///
/// The session owns its stream exclusively; dropping the session closes the
/// connection, on error paths as well as on the normal one.
pub struct PDSession<S: PDStream> {
    stream: S,
}

impl PDSession<TcpStream> {
    /// Connect to a display over TCP
    ///
    /// Resolves `host:port`, connects and applies the receive timeout. The
    /// timeout bounds reads only; writes and the connect handshake block
    /// until the OS gives up on them.
    pub fn new_from_tcp(host: &str, port: u16) -> Result<Self, crate::Error> {
        let addr = (host, port)
            .to_socket_addrs()
            .map_err(crate::Error::AddressResolution)?
            .next()
            .ok_or_else(|| {
                crate::Error::AddressResolution(io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    "host resolved to no addresses",
                ))
            })?;
        let stream = TcpStream::connect(addr).map_err(crate::Error::Connect)?;
        stream
            .set_read_timeout(Some(RECV_TIMEOUT))
            .map_err(crate::Error::SocketCreate)?;
        Ok(Self::new_from_stream(stream))
    }
}

impl<S: PDStream> PDSession<S> {
    /// Initiate a session over an arbitrary stream
    pub fn new_from_stream(stream: S) -> Self {
        Self { stream }
    }

    /// Low level method to send a single frame
    pub fn send_frame(&mut self, frame: Frame) -> Result<(), crate::Error> {
        let bytes = frame.into_bytes();
        tracing::debug!("sending frame {}", hex::encode(&bytes));
        self.stream.write_all(&bytes).map_err(crate::Error::Write)
    }

    /// Low level method to receive one raw reply
    ///
    /// A single read of up to 64 bytes, bounded by the receive timeout. The
    /// reply is returned as-is, without reassembly or validation, even if it
    /// is a truncated frame.
    pub fn recv_reply(&mut self) -> Result<Vec<u8>, crate::Error> {
        let mut buffer = [0_u8; MAX_REPLY_LEN];
        let read_len = self.stream.read(&mut buffer).map_err(crate::Error::Read)?;
        tracing::debug!("received reply {}", hex::encode(&buffer[..read_len]));
        Ok(buffer[..read_len].to_vec())
    }

    /// Execute a command with a parameter value
    ///
    /// Exactly one round trip: the frame is sent, then a single reply is
    /// awaited and returned raw for the caller to inspect.
    pub fn execute(&mut self, command: Command, value: u16) -> Result<Vec<u8>, crate::Error> {
        let spec = command.spec();
        let frame = Frame::new(spec.msg_type, spec.opcode, value);
        self.send_frame(frame)?;
        self.recv_reply()
    }

    /// Switch the display on
    pub fn set_power_on(&mut self) -> Result<Vec<u8>, crate::Error> {
        self.execute(Command::Power, commands::POWER_ON)
    }

    /// Switch the display off
    pub fn set_power_off(&mut self) -> Result<Vec<u8>, crate::Error> {
        self.execute(Command::Power, commands::POWER_OFF)
    }

    /// Set the backlight level as a percentage (0-100)
    pub fn set_backlight(&mut self, percent: u8) -> Result<Vec<u8>, crate::Error> {
        self.execute(Command::Backlight, percent as u16)
    }
}

#[cfg(test)]
mod test {
    use std::io::{self, Read, Write};

    use super::PDSession;

    /// Stream that records every write and serves one canned reply
    struct MockStream {
        written: Vec<u8>,
        reply: Vec<u8>,
        reads: usize,
    }

    impl MockStream {
        fn new(reply: &[u8]) -> Self {
            Self {
                written: Vec::new(),
                reply: reply.to_vec(),
                reads: 0,
            }
        }
    }

    impl Read for MockStream {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.reads += 1;
            let len = self.reply.len().min(buf.len());
            buf[..len].copy_from_slice(&self.reply[..len]);
            self.reply.drain(..len);
            Ok(len)
        }
    }

    impl Write for MockStream {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    const POWER_OFF_FRAME: [u8; 21] = [
        0x01, 0x30, 0x41, 0x30, 0x41, 0x30, 0x43, 0x02, 0x43, 0x32, 0x30,
        0x33, 0x44, 0x36, 0x30, 0x30, 0x30, 0x34, 0x03, 0x76, 0x0D,
    ];

    #[test]
    fn should_round_trip_power_off() {
        let canned = [0x01, 0x30, 0x30, 0x41, 0x42, 0x0D];
        let mut session = PDSession::new_from_stream(MockStream::new(&canned));

        let reply = session.set_power_off().unwrap();

        assert_eq!(session.stream.written, POWER_OFF_FRAME);
        assert_eq!(session.stream.reads, 1);
        assert_eq!(reply, canned);
    }

    #[test]
    fn should_pass_backlight_reply_through_unmodified() {
        let canned = [0xDE, 0xAD, 0xBE, 0xEF];
        let mut session = PDSession::new_from_stream(MockStream::new(&canned));

        let reply = session.set_backlight(50).unwrap();

        assert_eq!(reply, canned);
    }

    #[test]
    fn should_surface_read_failures() {
        struct FailingRead;

        impl Read for FailingRead {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::WouldBlock, "timed out"))
            }
        }

        impl Write for FailingRead {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut session = PDSession::new_from_stream(FailingRead);
        let err = session.set_power_on().unwrap_err();
        assert!(matches!(err, crate::Error::Read(_)));
    }
}
