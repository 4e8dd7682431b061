use env_logger::{Env, Target};
use photo_harvest::{configuration::get_configuration, startup::run};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();

    let configuration = match get_configuration() {
        Ok(configuration) => configuration,
        Err(e) => {
            log::error!("Failed to read configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(configuration).await {
        log::error!("Harvest failed: {:?}", e);
        std::process::exit(1);
    }
}
