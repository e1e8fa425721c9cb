use clap::Parser;
use isoreach::app::IsoreachApp;

fn main() {
    env_logger::init();
    let start = chrono::Local::now();
    log::info!("starting isoreach at {}", start.format("%Y-%m-%d %H:%M:%S"));
    let args = IsoreachApp::parse();
    match args.run() {
        Ok(_) => {
            let elapsed = chrono::Local::now() - start;
            log::info!("finished in {} ms.", elapsed.num_milliseconds());
        }
        Err(e) => {
            log::error!("failed running isoreach: {e}");
            std::process::exit(1);
        }
    }
}
