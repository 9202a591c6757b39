//! Drives the form through a real HTTP round trip.

mod support;

use media_uploader::app::{MediaUploader, UPLOAD_FAILED_MESSAGE};
use media_uploader::session::StaticSession;
use media_uploader::upload::HttpUploader;
use std::sync::Arc;
use std::time::{Duration, Instant};
use support::{serve_once, write_clip};

fn form_for(endpoint: String) -> MediaUploader {
    MediaUploader::new(
        Arc::new(StaticSession::new(Some("ada@example.com".to_string()))),
        Arc::new(HttpUploader::new(endpoint)),
    )
}

async fn wait_for_outcome(form: &mut MediaUploader) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while !form.poll() {
        assert!(Instant::now() < deadline, "upload never finished");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn successful_round_trip_reports_video_id() {
    let dir = tempfile::tempdir().unwrap();
    let clip = write_clip(dir.path());
    let (endpoint, server) = serve_once("201 Created", r#"{"id":"abc123"}"#).await;

    let mut form = form_for(endpoint);
    form.select_file(&clip);
    assert_eq!(form.pending().name, "clip");
    form.set_description("Boats at dusk");
    form.submit();
    wait_for_outcome(&mut form).await;

    assert_eq!(form.message(), "Upload successful! Video ID: abc123");
    assert!(form.pending().file.is_none());
    assert!(!form.can_submit());
    server.await.unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_upload_resets_the_form() {
    let dir = tempfile::tempdir().unwrap();
    let clip = write_clip(dir.path());
    let (endpoint, server) = serve_once("413 Payload Too Large", r#"{"error":"too big"}"#).await;

    let mut form = form_for(endpoint);
    form.select_file(&clip);
    form.set_description("Boats at dusk");
    form.submit();
    wait_for_outcome(&mut form).await;

    assert_eq!(form.message(), UPLOAD_FAILED_MESSAGE);
    assert!(form.pending().file.is_none());
    assert!(form.pending().name.is_empty());
    assert!(form.pending().description.is_empty());
    assert!(!form.is_uploading());
    server.await.unwrap();
}
