use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::thread;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub output: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let output = tmp.path().join("model_zoo");
        fs::create_dir_all(&output).expect("create output dir");

        Self {
            _tmp: tmp,
            home,
            output,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("hubscout").expect("binary built");
        cmd.env("HOME", &self.home)
            .env_remove("HF_ENDPOINT")
            .env_remove("HF_TOKEN");
        cmd
    }

    /// Like `cmd`, but pointed at a fixture hub via HF_ENDPOINT.
    pub fn run_json_hub(&self, endpoint: &str, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .env("HF_ENDPOINT", endpoint)
            .arg("--json")
            .arg("--output-dir")
            .arg(self.output.to_str().expect("output path utf8"))
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .arg("--output-dir")
            .arg(self.output.to_str().expect("output path utf8"))
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn ledger_raw(&self) -> String {
        fs::read_to_string(self.output.join("processed_models.json")).expect("ledger file")
    }

    /// Writes a fixture config.json and returns its path.
    pub fn write_config(&self, name: &str, architectures: &[&str]) -> PathBuf {
        let path = self._tmp.path().join(format!("{name}.json"));
        let body = serde_json::json!({
            "architectures": architectures,
            "model_type": "bert",
            "vocab_size": 30522,
        });
        fs::write(&path, body.to_string()).expect("write fixture config");
        path
    }
}

/// Starts a canned-response hub on a local port and returns its
/// endpoint URL. The serving thread lives for the rest of the test
/// process. No mocking crate is involved; the binary talks real HTTP
/// through the HF_ENDPOINT override.
pub fn spawn_fixture_hub() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture hub");
    let addr = listener.local_addr().expect("fixture hub addr");
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { continue };
            handle_request(stream);
        }
    });
    format!("http://{addr}")
}

fn handle_request(stream: TcpStream) {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    // Drain headers; every request we serve is a bodyless GET.
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) if line == "\r\n" => break,
            Ok(_) => {}
            Err(_) => return,
        }
    }
    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let (status, body) = route(target);
    let mut stream = reader.into_inner();
    let _ = write!(
        stream,
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
}

fn route(target: &str) -> (&'static str, String) {
    let not_found = || ("404 Not Found", r#"{"error":"not found"}"#.to_string());
    let (path, query) = target.split_once('?').unwrap_or((target, ""));

    if path == "/api/models" {
        if query.contains("search=nothing") {
            return ("200 OK", "[]".to_string());
        }
        let models = serde_json::json!([
            {"id": "org/bert-en", "tags": ["en", "pytorch"], "downloads": 100},
            {"id": "org/camembert-fr", "tags": ["fr", "pytorch"], "downloads": 90},
            {"id": "org/plain-encoder", "tags": ["pytorch"], "downloads": 10},
        ]);
        return ("200 OK", models.to_string());
    }

    if let Some(id) = path.strip_prefix("/api/models/") {
        if id == "org/missing" {
            return not_found();
        }
        let info = serde_json::json!({
            "id": id, "sha": "rev0", "tags": ["en", "pytorch"], "downloads": 100,
        });
        return ("200 OK", info.to_string());
    }

    if path.ends_with("/config.json") {
        let body = if path.starts_with("/org/bert-en/") {
            serde_json::json!({"architectures": ["BertForMaskedLM"], "model_type": "bert"})
        } else if path.starts_with("/org/plain-encoder/") {
            serde_json::json!({"architectures": ["BertModel"], "model_type": "bert"})
        } else {
            return not_found();
        };
        return ("200 OK", body.to_string());
    }

    not_found()
}
