use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const HOLD_POLL: Duration = Duration::from_millis(20);

/// How the fixture answers one connection.
#[derive(Debug, Clone)]
pub enum Reply {
    /// `200 text/event-stream`, the chunks written in order. With `hold` the
    /// connection then stays open until the server is dropped, otherwise
    /// the body ends.
    Stream { chunks: Vec<String>, hold: bool },
    /// Bare status line with an empty body.
    Status(u16),
    /// `200` with the wrong content type.
    Plain(String),
}

impl Reply {
    pub fn stream(chunks: &[&str]) -> Self {
        Reply::Stream {
            chunks: chunks.iter().map(|c| c.to_string()).collect(),
            hold: true,
        }
    }

    pub fn stream_then_end(chunks: &[&str]) -> Self {
        Reply::Stream {
            chunks: chunks.iter().map(|c| c.to_string()).collect(),
            hold: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Path and query, e.g. "/feed?service=auth".
    pub target: String,
    /// Header names lowercased.
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
struct State {
    replies: Vec<Reply>,
    requests: Vec<RecordedRequest>,
}

/// Push-stream server on a free localhost port.
///
/// Connection N gets reply N; connections past the script get an empty,
/// held-open stream.
pub struct FeedServer {
    base_url: String,
    state: Arc<Mutex<State>>,
    stop: Arc<AtomicBool>,
}

impl FeedServer {
    pub fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind feed server");
        let port = listener.local_addr().unwrap().port();

        let state = Arc::new(Mutex::new(State {
            replies,
            requests: Vec::new(),
        }));
        let stop = Arc::new(AtomicBool::new(false));

        let (accept_state, accept_stop) = (state.clone(), stop.clone());
        thread::spawn(move || {
            for (n, stream) in listener.incoming().enumerate() {
                if accept_stop.load(Ordering::SeqCst) {
                    break;
                }
                let Ok(stream) = stream else { continue };
                let (state, stop) = (accept_state.clone(), accept_stop.clone());
                thread::spawn(move || serve(n, stream, state, stop));
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            state,
            stop,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }
}

impl Drop for FeedServer {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}

fn serve(n: usize, stream: TcpStream, state: Arc<Mutex<State>>, stop: Arc<AtomicBool>) {
    let Some(request) = read_request(&stream) else {
        return;
    };

    let reply = {
        let mut state = state.lock().unwrap();
        state.requests.push(request);
        state.replies.get(n).cloned().unwrap_or(Reply::Stream {
            chunks: Vec::new(),
            hold: true,
        })
    };

    let mut stream = stream;
    match reply {
        Reply::Status(code) => {
            let _ = write!(
                stream,
                "HTTP/1.1 {code} Fixture\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            );
        }
        Reply::Plain(body) => {
            let _ = write!(
                stream,
                "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
        }
        Reply::Stream { chunks, hold } => {
            let head = "HTTP/1.1 200 OK\r\nContent-Type: text/event-stream\r\nCache-Control: no-cache\r\nConnection: close\r\n\r\n";
            if stream.write_all(head.as_bytes()).is_err() {
                return;
            }
            for chunk in chunks {
                if stream.write_all(chunk.as_bytes()).is_err() {
                    return;
                }
                let _ = stream.flush();
                thread::sleep(Duration::from_millis(5));
            }
            while hold && !stop.load(Ordering::SeqCst) {
                thread::sleep(HOLD_POLL);
            }
        }
    }
}

fn read_request(stream: &TcpStream) -> Option<RecordedRequest> {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line).ok()?;

    let target = line.split_whitespace().nth(1)?.to_string();
    let mut headers = Vec::new();

    loop {
        line.clear();
        reader.read_line(&mut line).ok()?;
        let header = line.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()));
        }
    }

    Some(RecordedRequest { target, headers })
}
