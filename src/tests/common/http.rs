use tokio::io::{ AsyncReadExt, AsyncWriteExt };
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Minimal HTTP/1.1 server on a random local port. Answers one connection per queued
/// response and remembers the request line of each.
#[allow(dead_code)]
pub struct StubServer {
    pub url: String,
    handle: JoinHandle<Vec<String>>,
}

#[allow(dead_code)]
impl StubServer {
    pub async fn start(path: &str, responses: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");

        let handle = tokio::spawn(async move {
            let mut request_lines = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().await.expect("accept connection");

                let mut request = Vec::new();
                let mut chunk = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let read = stream.read(&mut chunk).await.expect("read request");
                    if read == 0 {
                        break;
                    }
                    request.extend_from_slice(&chunk[..read]);
                }
                let request = String::from_utf8_lossy(&request);
                request_lines.push(request.lines().next().unwrap_or_default().to_string());

                let response = format!(
                    "HTTP/1.1 {} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                stream.write_all(response.as_bytes()).await.expect("write response");
                let _ = stream.shutdown().await;
            }
            request_lines
        });

        Self {
            url: format!("http://{}{}", addr, path),
            handle,
        }
    }

    /// Waits until every queued response was served and returns the request lines seen.
    pub async fn request_lines(self) -> Vec<String> {
        self.handle.await.expect("stub server task")
    }
}

/// Address on which nothing is listening.
#[allow(dead_code)]
pub async fn closed_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);
    format!("http://{}{}", addr, path)
}
