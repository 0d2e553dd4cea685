use homeweb::startup::build;
use homeweb::telemetry::{get_subscriber, init_subscriber};
use homeweb::utils::shutdown_signal;
use homeweb::configuration::get_configuration;

#[tokio::main]
async fn main() {
    let subscriber = get_subscriber("homeweb".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration");

    let server = build(configuration);

    server
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
