use std::io;
use std::io::BufRead;

// Toy program that reads one line from stdin and echoes it back inside an
// ASCII-art speech bubble. The other catsay variants are built on the same
// frame.

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

    log::info!("reading from stdin");
    let mut message = String::new();
    let _ = io::stdin().lock().read_line(&mut message);

    log::info!("writing to stdout");
    print!("{}", speech_bubble(message.trim()));
}
