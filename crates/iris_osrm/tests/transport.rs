use std::net::TcpListener;

use iris_osrm::{
    ClientConfig, Coordinate, NearestOptions, OsrmBlockingClient, OsrmClient, OsrmError, Profile,
    ProxyConfig, RouteOptions,
};

/// Reserve a local port and release it again, so connecting to it is
/// refused instead of timing out.
fn dead_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn unreachable_config() -> ClientConfig {
    ClientConfig {
        timeout_secs: 2,
        proxy: Some(ProxyConfig {
            host: String::from("127.0.0.1"),
            port: dead_port(),
            username: None,
            password: None,
        }),
    }
}

fn berlin_pair() -> Vec<Coordinate> {
    vec![
        Coordinate::new(52.517037, 13.388860),
        Coordinate::new(52.529407, 13.397634),
    ]
}

#[tokio::test]
async fn test_refused_connection_surfaces_transport_error() {
    let client = OsrmClient::new(unreachable_config());

    let err = client
        .route(Profile::Car, &berlin_pair(), &RouteOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, OsrmError::Transport(_)), "got {err:?}");
}

#[test]
fn test_refused_connection_surfaces_transport_error_blocking() {
    let client = OsrmBlockingClient::new(unreachable_config());

    let err = client
        .nearest(
            Profile::Bike,
            &[Coordinate::new(13.388860, 52.517037)],
            &NearestOptions {
                number: 42,
                ..NearestOptions::default()
            },
        )
        .unwrap_err();

    assert!(matches!(err, OsrmError::Transport(_)), "got {err:?}");
}
