use std::io;
use std::io::Read;

use rouille::Request;
use rouille::Response;

// Catsay with a web face: after the usual stdin/stdout pass it keeps serving
// a fixed cat page on :8080 until the process is killed.

const SERVER: &str = concat!("catsay_web/", env!("CARGO_PKG_VERSION"));

const CAT_PAGE: &str = r"
      ____________
     < Hello Web! >
      ------------
          /
  /\_/\  /
 ( o.o )
 \(___)
";

const WORKING_CAT: &str = r"
  /\_/\
 ( o.o )
  > ^ <";

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

fn dump_request(request: &Request) {
    log::info!("--------------------------------");
    log::info!("method: {}", request.method());
    log::info!("url: {}", request.raw_url());
    for (name, value) in request.headers() {
        log::info!("header: {}: {}", name, value);
    }
    if let Some(mut data) = request.data() {
        let mut body = String::new();
        let _ = data.read_to_string(&mut body);
        log::info!("body: {}", body);
    }
    log::info!("--------------------------------");
}

/// Every method and path gets the same plain-text cat.
fn cat_page(request: &Request) -> Response {
    dump_request(request);
    Response::from_data("text/plain", CAT_PAGE).with_additional_header("Server", SERVER)
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("catsay is starting");

    let mut message = String::new();
    let _ = io::stdin().read_to_string(&mut message);
    print!("{}", speech_bubble(message.trim()));

    log::info!("catsay is working");
    eprintln!("{WORKING_CAT}");

    log::info!("starting cat server at http://localhost:8080");
    rouille::start_server("0.0.0.0:8080", move |request| cat_page(request));
}
