mod app;
mod audio;
mod catalog;
mod config;
mod layout;
mod runtime;
mod ui;

fn main() {
    if let Err(e) = runtime::run() {
        eprintln!("shelf: {e}");
        std::process::exit(1);
    }
}
