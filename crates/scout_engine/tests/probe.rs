use std::time::Duration;

use scout_engine::{LivenessProber, ProbeSettings, ReqwestProber};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn probe_succeeds_on_status_200() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/100MB.bin"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let prober = ReqwestProber::new(ProbeSettings::default());
    assert!(prober.is_alive(&format!("{}/100MB.bin", server.uri())).await);
}

#[tokio::test]
async fn probe_fails_on_non_200_status() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/gone.bin"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/empty.bin"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let prober = ReqwestProber::new(ProbeSettings::default());
    assert!(!prober.is_alive(&format!("{}/gone.bin", server.uri())).await);
    // Only an exact 200 counts, not just any success-class status.
    assert!(!prober.is_alive(&format!("{}/empty.bin", server.uri())).await);
}

#[tokio::test]
async fn probe_does_not_follow_redirects() {
    // A mirror answering 3xx is dead even if the redirect target is live.
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/moved.bin"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", "/live.bin"),
        )
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/live.bin"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let prober = ReqwestProber::new(ProbeSettings::default());
    assert!(!prober.is_alive(&format!("{}/moved.bin", server.uri())).await);
    assert!(prober.is_alive(&format!("{}/live.bin", server.uri())).await);
}

#[tokio::test]
async fn probe_fails_on_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/slow.bin"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(250)))
        .mount(&server)
        .await;

    let prober = ReqwestProber::new(ProbeSettings {
        timeout: Duration::from_millis(50),
    });
    assert!(!prober.is_alive(&format!("{}/slow.bin", server.uri())).await);
}

#[tokio::test]
async fn probe_fails_on_connection_error() {
    // Bind an ephemeral port, then release it so nothing is listening there.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };

    let prober = ReqwestProber::new(ProbeSettings {
        timeout: Duration::from_millis(500),
    });
    assert!(
        !prober
            .is_alive(&format!("http://127.0.0.1:{port}/100MB.bin"))
            .await
    );
}
