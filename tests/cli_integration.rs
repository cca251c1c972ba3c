//! CLI integration tests: run the built binary against a live server.
//!
//! Each test spawns its own `taskd serve` child on a free port, so tests
//! never share state and can run in parallel.

use std::net::TcpStream;
use std::process::{Child, Command as StdCommand, Stdio};
use std::time::Duration;

use predicates::prelude::*;

/// Get a command instance for the taskd binary.
fn taskd_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("taskd"))
}

/// Find a free local port by binding to port 0.
fn find_free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// A `taskd serve` child process, killed on drop.
struct Server {
    child: Child,
    port: u16,
}

impl Server {
    fn spawn() -> Self {
        let port = find_free_port();
        let child = StdCommand::new(assert_cmd::cargo::cargo_bin!("taskd"))
            .args(["serve", "--port", &port.to_string(), "--log", "error"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("failed to spawn taskd serve");

        // Wait until the port accepts connections.
        for _ in 0..100 {
            if TcpStream::connect(("127.0.0.1", port)).is_ok() {
                return Self { child, port };
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        panic!("server did not start listening on port {port}");
    }

    fn url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[test]
fn health_command_reports_status() {
    let server = Server::spawn();

    taskd_cmd()
        .args(["--api-url", &server.url(), "health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("healthy"));
}

#[test]
fn create_and_list_users() {
    let server = Server::spawn();

    taskd_cmd()
        .args([
            "--api-url",
            &server.url(),
            "create-user",
            "--name",
            "John",
            "--email",
            "john@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created user: John"));

    taskd_cmd()
        .args(["--api-url", &server.url(), "list-users"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John"))
        .stdout(predicate::str::contains("john@example.com"));
}

#[test]
fn invalid_email_is_rejected() {
    let server = Server::spawn();

    taskd_cmd()
        .args([
            "--api-url",
            &server.url(),
            "create-user",
            "--name",
            "John",
            "--email",
            "not-an-email",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid email"));
}

#[test]
fn delete_missing_user_exits_nonzero_with_not_found() {
    let server = Server::spawn();

    taskd_cmd()
        .args(["--api-url", &server.url(), "delete-user", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::is_match("(?i)not found").unwrap());
}

#[test]
fn task_lifecycle_via_cli() {
    let server = Server::spawn();
    let url = server.url();

    taskd_cmd()
        .args(["--api-url", &url, "create-task", "--title", "write docs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task: write docs"));

    taskd_cmd()
        .args(["--api-url", &url, "list-tasks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("write docs"));

    taskd_cmd()
        .args(["--api-url", &url, "complete-task", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed task"));

    taskd_cmd()
        .args(["--api-url", &url, "list-tasks", "--completed", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));

    taskd_cmd()
        .args(["--api-url", &url, "delete-task", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task"));
}

#[test]
fn summary_shows_completion_rate() {
    let server = Server::spawn();
    let url = server.url();

    taskd_cmd()
        .args([
            "--api-url",
            &url,
            "create-user",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
        ])
        .assert()
        .success();

    taskd_cmd()
        .args([
            "--api-url",
            &url,
            "create-task",
            "--title",
            "one",
            "--owner-id",
            "1",
        ])
        .assert()
        .success();

    taskd_cmd()
        .args(["--api-url", &url, "complete-task", "1"])
        .assert()
        .success();

    taskd_cmd()
        .args(["--api-url", &url, "summary", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task summary for Ada"))
        .stdout(predicate::str::contains("Completion rate: 100.0%"));
}

#[test]
fn unreachable_api_exits_nonzero() {
    // No server on this port.
    let port = find_free_port();
    taskd_cmd()
        .args([
            "--api-url",
            &format!("http://127.0.0.1:{port}"),
            "health",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to connect"));
}
