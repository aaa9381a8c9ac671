use std::time::Duration;
use tickbox::ui::core::EventHandler;

#[test]
fn test_frame_interval_from_config() {
    let handler = EventHandler::new(Duration::from_millis(33));
    assert_eq!(handler.frame_interval(), Duration::from_millis(33));
}

#[tokio::test]
async fn test_take_elapsed_measures_since_last_call() {
    let mut handler = EventHandler::new(Duration::from_millis(16));
    handler.take_elapsed();

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(handler.take_elapsed() >= Duration::from_millis(20));

    // The clock restarts on every call
    assert!(handler.take_elapsed() < Duration::from_millis(20));
}
