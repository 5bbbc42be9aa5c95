
/// if use mco coroutine runtime
#[cfg(feature = "runtime_mco")]
pub type TcpListener = mco::net::TcpListener;
#[cfg(feature = "runtime_mco")]
pub type TcpStream = mco::net::TcpStream;
#[cfg(feature = "runtime_mco")]
pub type Receiver<T> = mco::std::sync::channel::Receiver<T>;
#[cfg(feature = "runtime_mco")]
pub type Sender<T> = mco::std::sync::channel::Sender<T>;
#[cfg(feature = "runtime_mco")]
pub type JoinHandle<T> = mco::coroutine::JoinHandle<T>;

#[cfg(feature = "runtime_mco")]
pub fn chan<T>() -> (Sender<T>, Receiver<T>) {
    mco::chan!()
}

#[cfg(feature = "runtime_mco")]
pub fn spawn<F>(f: F) -> JoinHandle<()> where F: FnOnce() + std::marker::Send + 'static {
    mco::coroutine::Builder::new().stack_size(2 * 0x1000).spawn(f)
}



/// if not mco
#[cfg(not(feature = "runtime_mco"))]
pub type TcpListener = std::net::TcpListener;
#[cfg(not(feature = "runtime_mco"))]
pub type TcpStream = std::net::TcpStream;
#[cfg(not(feature = "runtime_mco"))]
pub type Receiver<T> = crossbeam::channel::Receiver<T>;
#[cfg(not(feature = "runtime_mco"))]
pub type Sender<T> = crossbeam::channel::Sender<T>;
#[cfg(not(feature = "runtime_mco"))]
pub type JoinHandle<T> = std::thread::JoinHandle<T>;

#[cfg(not(feature = "runtime_mco"))]
pub fn chan<T>() -> (Sender<T>, Receiver<T>) {
    crossbeam::channel::unbounded()
}

#[cfg(not(feature = "runtime_mco"))]
pub fn spawn<F>(f: F) -> JoinHandle<()> where F: FnOnce() + std::marker::Send + 'static {
    std::thread::spawn(f)
}
