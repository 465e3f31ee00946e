use micro_http_client::client::Client;
use micro_http_client::protocol::Request;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let uri = std::env::args().nth(1).unwrap_or_else(|| "http://example.com/".to_string());
    let request = match Request::from_uri(&uri) {
        Ok(request) => request,
        Err(e) => {
            error!(cause = %e, uri, "invalid uri");
            return;
        }
    };

    match Client::new().get(&request) {
        Ok(response) => {
            info!(status = response.status(), message = response.status_message(), "received response");
            for (name, value) in response.headers().iter() {
                info!("{name}: {value}");
            }
            println!("{}", response.text());
        }
        Err(e) => error!(kind = ?e.kind(), cause = %e, "request failed"),
    }
}
