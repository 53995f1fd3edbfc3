mod app;
mod config;
mod golang;
mod input;
mod local_logger;
mod prelude;

fn main() {
    let res = crate::app::run();
    if let Err(err) = res {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
