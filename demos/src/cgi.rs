extern crate env_logger;
extern crate envprobe;

use envprobe::Diagnostic;

// Run the diagnostic the way a CGI host would:
//   TEST_PROP=abc HTTP_COOKIE='TEST=xyz' TEST=1 cargo run --bin cgi
fn main() {
    env_logger::init();
    let mut ctx = envprobe::cgi::context();
    if let Err(e) = ctx.run(&Diagnostic) {
        eprintln!("diagnostic failed: {}", e);
        std::process::exit(1);
    }
}
