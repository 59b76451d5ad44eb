use std::io::Write;
use std::process::{Command, Stdio};

// Drives the compiled binary the way the guest harness does: pipe a message
// through stdin and read the bubble back from stdout.

#[test]
fn bubble_round_trips_through_the_binary() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_catsay"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to execute process");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"I'm a teapot!\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], " _______________");
    assert_eq!(lines[1], "< I'm a teapot! >");
    assert_eq!(lines[2], " ---------------");
    assert!(stdout.contains("(owo)"), "missing the cat: {stdout}");
}

#[test]
fn closed_stdin_still_prints_a_frame() {
    let child = Command::new(env!("CARGO_BIN_EXE_catsay"))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to execute process");

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], " __");
    assert_eq!(lines[1], "<  >");
    assert_eq!(lines[2], " --");
}
