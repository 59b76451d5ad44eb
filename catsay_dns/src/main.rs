use std::io;
use std::io::Read;
use std::net::ToSocketAddrs;

use rouille::Response;

// Catsay with a resolver warm-up: looks up a fixed hostname through the
// system resolver before the stdin/stdout pass, then serves the cat page on
// :8080. A failed lookup is reported and execution continues.

const LOOKUP_HOST: &str = "example.com";

const CAT_PAGE: &str = r"
      ____________
     < Hello Web! >
      ------------
          /
  /\_/\  /
 ( o.o )
 \(___)
";

fn speech_bubble(message: &str) -> String {
    let width = message.len() + 2;
    let mut out = String::from("\n");
    out.push_str(&format!("      {}\n", "_".repeat(width)));
    out.push_str(&format!("     < {} >\n", message));
    out.push_str(&format!("      {}\n", "-".repeat(width)));
    out.push_str("          /\n");
    out.push_str("  /\\_/\\  /\n");
    out.push_str(" ( o.o )\n");
    out.push_str(" \\(___)\n");
    out
}

fn lookup_report(host: &str) -> String {
    match (host, 80u16).to_socket_addrs() {
        Ok(addrs) => {
            let mut out = format!("resolved {host}:\n");
            for addr in addrs {
                out.push_str(&format!("  {}\n", addr.ip()));
            }
            out
        }
        Err(err) => format!("lookup {host} failed: {err}\n"),
    }
}

fn cat_page() -> Response {
    Response::from_data("text/plain", CAT_PAGE)
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("catsay is starting");
    print!("{}", lookup_report(LOOKUP_HOST));

    let mut message = String::new();
    let _ = io::stdin().read_to_string(&mut message);
    print!("{}", speech_bubble(message.trim()));

    log::info!("starting cat server at http://localhost:8080");
    rouille::start_server("0.0.0.0:8080", move |_request| cat_page());
}
