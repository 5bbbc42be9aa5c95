extern crate env_logger;
extern crate envprobe;

use envprobe::server::probe;
use envprobe::Server;

fn main() {
    env_logger::init();
    let _listening = Server::http("0.0.0.0:3000").unwrap().handle(probe);
    println!("Listening on http://127.0.0.1:3000");
    println!("try: curl -b 'TEST=xyz' http://127.0.0.1:3000/");
    loop {
        std::thread::park();
    }
}
