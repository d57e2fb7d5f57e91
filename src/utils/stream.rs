use std::net::SocketAddr;

use tokio::{
    io::{self, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader},
    net::{
        tcp::{OwnedReadHalf, OwnedWriteHalf},
        TcpStream,
    },
    select,
    sync::Mutex,
};

use crate::dial::Candidate;

/// An established byte-stream connection to one candidate.
///
/// The stream owns its socket: dropping it closes the connection.
pub struct DialStream {
    reader: Mutex<BufReader<OwnedReadHalf>>,
    writer: Mutex<OwnedWriteHalf>,
    pub candidate: Candidate,
    pub peer_addr: SocketAddr,
    pub local_addr: SocketAddr,
}

impl DialStream {
    pub fn new(stream: TcpStream, candidate: Candidate) -> io::Result<Self> {
        let peer_addr = stream.peer_addr()?;
        let local_addr = stream.local_addr()?;
        let (reader, writer) = stream.into_split();
        Ok(Self {
            reader: Mutex::new(BufReader::with_capacity(10240, reader)),
            writer: Mutex::new(writer),
            candidate,
            peer_addr,
            local_addr,
        })
    }

    /// Write all of `data`, returning the number of bytes sent.
    pub async fn send(&self, data: &[u8]) -> io::Result<usize> {
        let mut writer = self.writer.lock().await;
        writer.write_all(data).await?;
        writer.flush().await?;
        Ok(data.len())
    }

    /// Read whatever is available into `buf`. Zero means the peer closed its side.
    pub async fn receive(&self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.lock().await.read(buf).await
    }

    /// Shut down the write side and release the socket.
    pub async fn close(self) -> io::Result<()> {
        // A peer that already reset the connection makes shutdown fail with NotConnected,
        // the socket is released on drop either way.
        match self.writer.lock().await.shutdown().await {
            Err(e) if e.kind() != io::ErrorKind::NotConnected => Err(e),
            _ => Ok(()),
        }
    }

    /// Weld with a local reader/writer pair (start a bidirectional copy).
    /// Returns once the peer stops sending, or as soon as either direction fails.
    pub async fn weld<R, W>(&self, mut input: R, mut output: W) -> io::Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let (mut reader, mut writer) = tokio::join!(self.reader.lock(), self.writer.lock());

        let outbound = async {
            io::copy(&mut input, &mut *writer).await?;
            // Local input is exhausted, let the peer know nothing more is coming.
            writer.shutdown().await
        };
        let inbound = async {
            io::copy(&mut *reader, &mut output).await?;
            output.flush().await
        };
        tokio::pin!(outbound, inbound);

        // The end of local input only half-closes the connection, keep draining the peer.
        select! {
          v = &mut outbound => {
            v?;
            inbound.await
          }
          v = &mut inbound => v,
        }
    }
}

impl std::fmt::Debug for DialStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialStream")
            .field("candidate", &self.candidate)
            .field("peer_addr", &self.peer_addr)
            .field("local_addr", &self.local_addr)
            .finish()
    }
}
