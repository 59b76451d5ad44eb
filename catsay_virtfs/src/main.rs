use std::fs::OpenOptions;
use std::io;
use std::io::BufRead;
use std::io::Write;

// Guest-environment demo: greets the host through the virtfs device file
// before doing the usual catsay pass over stdin/stdout. The device path only
// exists inside the guest; a failed open is fatal.

const VIRTFS_STDOUT: &str = "/virtfs/stdout";
const GREETING: &str = "hello from catsay\n";

fn write_greeting<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(GREETING.as_bytes())
}

fn speech_bubble(message: &str) -> String {
    let width = message.len() + 2;
    let mut out = String::new();
    out.push_str(&format!(" {}\n", "_".repeat(width)));
    out.push_str(&format!("< {} >\n", message));
    out.push_str(&format!(" {}\n", "-".repeat(width)));
    out.push_str("  /\\_/\\\n");
    out.push_str(" (owo)\n");
    out.push_str("  >^<\n");
    out
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("writing to {VIRTFS_STDOUT}");
    let mut virtfs = OpenOptions::new()
        .write(true)
        .open(VIRTFS_STDOUT)
        .expect("failed to open /virtfs/stdout");
    let _ = write_greeting(&mut virtfs);

    log::info!("reading from stdin");
    let mut message = String::new();
    let _ = io::stdin().lock().read_line(&mut message);

    log::info!("writing to stdout");
    print!("{}", speech_bubble(message.trim()));
}
