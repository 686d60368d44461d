//! End-to-end framing tests for the wedge reader.
//!
//! These tests drive a full reader (source → accumulator → validator →
//! event channel) under tokio's paused clock. With `start_paused`, the
//! runtime auto-advances time whenever every task is blocked on a timer,
//! which makes the idle-flush paths deterministic: awaiting `recv()` lets
//! the reader consume pending key events, arm its idle deadline, and fire
//! it — no real sleeping, no flakiness.

use std::time::Duration;
use wedgescan_core::{ScanError, ScanSource};
use wedgescan_input::{AnyKeySource, KeyEventHub, MockKeyboard, RawKeyEvent};
use wedgescan_reader::{FrameConfig, ScanEvent, ScanReader};

/// Scenario config used throughout: 100ms idle window, 8-50 char frames.
fn scenario_config() -> FrameConfig {
    FrameConfig::builder()
        .idle_timeout(Duration::from_millis(100))
        .min_length(8)
        .max_length(50)
        .build()
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn scanner_burst_with_terminator_emits_exactly_once() {
    // Scenario A: keys 10ms apart, well inside the idle window, then Enter.
    let (keyboard, handle) = MockKeyboard::new();
    let mut reader = ScanReader::attach(scenario_config(), keyboard.into());

    for c in "A1234567".chars() {
        handle.press_char(c).await.unwrap();
        tokio::time::advance(Duration::from_millis(10)).await;
    }
    handle.press_enter().await.unwrap();

    let event = reader.recv().await.unwrap();
    let result = event.as_scan().expect("burst should validate");
    assert_eq!(result.value, "A1234567");
    assert_eq!(result.source, ScanSource::Device);

    // Exactly once: nothing further is pending for this frame. A fresh
    // frame proves the reader is still live.
    handle.type_str("B7654321").await.unwrap();
    handle.press_enter().await.unwrap();
    let event = reader.recv().await.unwrap();
    assert_eq!(event.as_scan().unwrap().value, "B7654321");
}

#[tokio::test(start_paused = true)]
async fn slow_fragment_never_reaches_a_result() {
    // Scenario B: type "AB", pause past the idle window, type "CD", Enter.
    //
    // The pause lets the idle timer flush "AB" — two characters, rejected
    // FrameTooShort. The remainder "CD" is then flushed by the terminator
    // and rejected the same way. Neither fragment text appears anywhere:
    // rejections carry lengths only.
    let (keyboard, handle) = MockKeyboard::new();
    let mut reader = ScanReader::attach(scenario_config(), keyboard.into());

    handle.type_str("AB").await.unwrap();

    // Awaiting recv() parks the test; auto-advance fires the idle flush.
    let first = reader.recv().await.unwrap();
    assert_eq!(
        first.as_rejection(),
        Some(&ScanError::FrameTooShort {
            raw_length: 2,
            min_length: 8
        })
    );

    handle.type_str("CD").await.unwrap();
    handle.press_enter().await.unwrap();

    let second = reader.recv().await.unwrap();
    assert_eq!(
        second.as_rejection(),
        Some(&ScanError::FrameTooShort {
            raw_length: 2,
            min_length: 8
        })
    );

    // No ScanResult was ever produced from either fragment.
    assert!(first.as_scan().is_none());
    assert!(second.as_scan().is_none());
}

#[tokio::test(start_paused = true)]
async fn missing_terminator_flushes_on_idle_timeout() {
    // Scanners configured without a suffix still produce a frame: the idle
    // timer flushes with the same value a terminator would have delivered.
    let (keyboard, handle) = MockKeyboard::new();
    let mut reader = ScanReader::attach(scenario_config(), keyboard.into());

    handle.type_str("00443322").await.unwrap();

    let event = reader.recv().await.unwrap();
    assert_eq!(event.as_scan().unwrap().value, "00443322");
}

#[tokio::test(start_paused = true)]
async fn prefix_suffix_markers_round_trip() {
    let config = FrameConfig::builder()
        .min_length(4)
        .prefix_marker('P')
        .suffix_marker('S')
        .build()
        .unwrap();

    let (keyboard, handle) = MockKeyboard::new();
    let mut reader = ScanReader::attach(config, keyboard.into());

    handle.type_str("P1234S").await.unwrap();
    handle.press_enter().await.unwrap();

    let event = reader.recv().await.unwrap();
    assert_eq!(event.as_scan().unwrap().value, "1234");
}

#[tokio::test(start_paused = true)]
async fn seven_chars_against_min_eight_is_rejected() {
    let (keyboard, handle) = MockKeyboard::new();
    let mut reader = ScanReader::attach(scenario_config(), keyboard.into());

    handle.type_str("1234567").await.unwrap();
    handle.press_enter().await.unwrap();

    match reader.recv().await.unwrap() {
        ScanEvent::Rejected(ScanError::FrameTooShort {
            raw_length: 7,
            min_length: 8,
        }) => {}
        other => panic!("expected FrameTooShort, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn tab_terminates_a_frame() {
    let (keyboard, handle) = MockKeyboard::new();
    let mut reader = ScanReader::attach(scenario_config(), keyboard.into());

    handle.type_str("55667788").await.unwrap();
    handle.press_tab().await.unwrap();

    let event = reader.recv().await.unwrap();
    assert_eq!(event.as_scan().unwrap().value, "55667788");
}

#[tokio::test(start_paused = true)]
async fn modifier_chords_and_editable_targets_are_not_scan_data() {
    let (keyboard, handle) = MockKeyboard::new();
    let mut reader = ScanReader::attach(scenario_config(), keyboard.into());

    // A copy-paste chord and form-field typing, interleaved with a scan.
    handle
        .send_event(RawKeyEvent::char('c').with_modifiers(wedgescan_input::KeyModifiers {
            ctrl: true,
            ..wedgescan_input::KeyModifiers::NONE
        }))
        .await
        .unwrap();
    handle
        .send_event(RawKeyEvent::char('q').with_editable_target(true))
        .await
        .unwrap();
    handle.type_str("11223344").await.unwrap();
    handle.press_enter().await.unwrap();

    let event = reader.recv().await.unwrap();
    assert_eq!(event.as_scan().unwrap().value, "11223344");
}

#[tokio::test(start_paused = true)]
async fn destroy_mid_accumulation_emits_nothing() {
    // Scenario C: destroy with a partial buffer, then keep typing.
    let hub = KeyEventHub::new();
    let publisher = hub.publisher();
    let mut reader = ScanReader::attach(
        scenario_config(),
        AnyKeySource::Hub(hub.subscribe()),
    );

    for c in "ABCD".chars() {
        publisher.publish(RawKeyEvent::char(c));
    }
    // Let the reader consume the partial frame, then tear it down before
    // any flush can occur (the clock is paused; no deadline has fired).
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
    reader.destroy();
    assert!(reader.is_destroyed());

    // No event for the discarded partial buffer.
    assert!(reader.recv().await.is_none());

    // Later keystrokes reach no subscriber once the task is reaped.
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
    assert_eq!(publisher.publish(RawKeyEvent::char('E')), 0);
    assert!(reader.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn two_readers_on_one_hub_both_consume_every_scan() {
    // The documented hazard, not a feature: concurrent timing-based
    // readers each see the whole stream and each emit the frame.
    let hub = KeyEventHub::new();
    let publisher = hub.publisher();

    let config = FrameConfig::builder().min_length(4).build().unwrap();
    let mut rfid_reader = ScanReader::attach(config.clone(), AnyKeySource::Hub(hub.subscribe()));
    let mut barcode_reader = ScanReader::attach(config, AnyKeySource::Hub(hub.subscribe()));

    for c in "7777".chars() {
        publisher.publish(RawKeyEvent::char(c));
    }
    publisher.publish(RawKeyEvent::enter());

    assert_eq!(
        rfid_reader.recv().await.unwrap().as_scan().unwrap().value,
        "7777"
    );
    assert_eq!(
        barcode_reader.recv().await.unwrap().as_scan().unwrap().value,
        "7777"
    );
}

#[tokio::test(start_paused = true)]
async fn back_to_back_frames_stay_separate() {
    // Two bursts separated only by their terminators: each flush clears
    // the buffer before the next accumulation begins.
    let config = FrameConfig::builder().min_length(4).build().unwrap();
    let (keyboard, handle) = MockKeyboard::new();
    let mut reader = ScanReader::attach(config, keyboard.into());

    handle.type_str("1111").await.unwrap();
    handle.press_enter().await.unwrap();
    handle.type_str("2222").await.unwrap();
    handle.press_enter().await.unwrap();

    assert_eq!(reader.recv().await.unwrap().as_scan().unwrap().value, "1111");
    assert_eq!(reader.recv().await.unwrap().as_scan().unwrap().value, "2222");
}
