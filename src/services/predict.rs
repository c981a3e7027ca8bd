use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use serde_json::Value;

use crate::domain::constants::{MSG_NO_CONNECTION, UNKNOWN_SERVER_ERROR};
use crate::domain::models::{Classification, Measurements};

/// Upper bound on one exchange. The screen blocks further submits while a
/// request is pending, so a hung request must not hang the form forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(thiserror::Error, Debug)]
pub enum PredictError {
    #[error("server error: {0}")]
    Server(String),
    #[error("could not reach the prediction service")]
    Transport(#[source] reqwest::Error),
}

/// Reads the `prediccion` field as an integer: 0 means abnormal, anything
/// else means normal. Numbers truncate and numeric strings parse, so `0.9`
/// and `"0"` both count as 0; values with no integer reading count as
/// nonzero.
pub fn classify(prediccion: &Value) -> Classification {
    let as_int = match prediccion {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let t = s.trim();
            // NaN would saturate to 0 in the cast; it has no integer reading.
            t.parse::<i64>()
                .ok()
                .or_else(|| t.parse::<f64>().ok().filter(|f| !f.is_nan()).map(|f| f as i64))
        }
        _ => None,
    };
    match as_int {
        Some(0) => Classification::Abnormal,
        _ => Classification::Normal,
    }
}

/// POSTs the measurements and maps the exchange onto a classification.
///
/// The body is decoded before the status is inspected: a body that is not
/// JSON is a transport failure regardless of status, and a failing status
/// with a readable body surfaces the server's `error` detail.
pub fn request_prediction(
    endpoint: &str,
    measurements: &Measurements,
) -> Result<Classification, PredictError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(PredictError::Transport)?;
    let response = client
        .post(endpoint)
        .json(measurements)
        .send()
        .map_err(PredictError::Transport)?;
    let status = response.status();
    let body: Value = response.json().map_err(PredictError::Transport)?;

    if status.is_success() {
        Ok(classify(body.get("prediccion").unwrap_or(&Value::Null)))
    } else {
        let detail = body
            .get("error")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_SERVER_ERROR);
        Err(PredictError::Server(detail.to_string()))
    }
}

pub fn server_error_message(detail: &str) -> String {
    format!("Server error: {detail}")
}

/// Folds every outcome into the one string the result banner displays; no
/// failure escapes as an error.
pub fn submit_message(endpoint: &str, measurements: &Measurements) -> String {
    match request_prediction(endpoint, measurements) {
        Ok(outcome) => outcome.message(),
        Err(PredictError::Server(detail)) => server_error_message(&detail),
        Err(PredictError::Transport(_)) => MSG_NO_CONNECTION.to_string(),
    }
}

/// Runs one submission on its own thread and delivers the display message
/// through `tx`. The receiving side owns the pending-state bookkeeping.
pub fn spawn_submit(endpoint: String, measurements: Measurements, tx: Sender<String>) {
    thread::spawn(move || {
        let message = submit_message(&endpoint, &measurements);
        // The screen may have been closed while the request was in flight.
        let _ = tx.send(message);
    });
}

#[cfg(test)]
pub(crate) mod stub {
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::mpsc::{self, Receiver};
    use std::thread;

    /// Minimal one-connection HTTP responder. Returns the endpoint URL and
    /// a channel carrying the raw request text it saw.
    pub fn spawn(status_line: &'static str, body: &'static str) -> (String, Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let addr = listener.local_addr().expect("stub listener addr");
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let request = read_request(&mut stream);
                let reply = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(reply.as_bytes());
                let _ = tx.send(request);
            }
        });
        (format!("http://{addr}/predict"), rx)
    }

    /// An address that refuses connections: bound, resolved, then dropped.
    pub fn dead_endpoint() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
        let addr = listener.local_addr().expect("probe listener addr");
        drop(listener);
        format!("http://{addr}/predict")
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => n,
            };
            data.extend_from_slice(&buf[..n]);
            if let Some(header_end) = blank_line(&data) {
                let header = String::from_utf8_lossy(&data[..header_end]);
                if data.len() >= header_end + 4 + content_length(&header) {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&data).to_string()
    }

    fn blank_line(data: &[u8]) -> Option<usize> {
        data.windows(4).position(|w| w == b"\r\n\r\n")
    }

    fn content_length(header: &str) -> usize {
        for line in header.lines() {
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    return value.trim().parse().unwrap_or(0);
                }
            }
        }
        0
    }
}
