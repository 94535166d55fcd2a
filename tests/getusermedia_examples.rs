#![cfg(feature = "serde")]

use lazy_static::lazy_static;
use webrtc_media_constraints::{
    AudioTrackConstraints, Constrain, FacingMode, MediaStreamConstraints,
};

lazy_static! {
    static ref HD_VIDEO: MediaStreamConstraints = MediaStreamConstraints::builder()
        .video_with(|video| {
            video
                .width_with(|width| width.ideal(1280))
                .height_with(|height| height.ideal(720))
                .aspect_ratio_with(|aspect_ratio| aspect_ratio.ideal(1.5))
        })
        .build();
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// <https://www.w3.org/TR/mediacapture-streams/#example-1>
#[test]
fn w3c_spec_example_1() {
    init_logger();

    let actual: MediaStreamConstraints = {
        let json = serde_json::json!({
            "video": {
                "width": 1280,
                "height": 720,
                "aspectRatio": 1.5,
            }
        });
        serde_json::from_value(json).unwrap()
    };

    assert_eq!(actual, *HD_VIDEO);
}

// <https://www.w3.org/TR/mediacapture-streams/#example-2>
#[test]
fn w3c_spec_example_2_drops_ranges() {
    init_logger();

    let actual = MediaStreamConstraints::from_json(
        r#"{
            "video": {
                "width": { "min": 640, "ideal": 1280 },
                "height": { "min": 480, "ideal": 720 },
                "aspectRatio": 1.5,
                "frameRate": { "min": 20.0 }
            }
        }"#,
    )
    .unwrap();
    // `min` is not supported, leaving only the ideal values and an empty frame rate.
    let expected = MediaStreamConstraints::builder()
        .video_with(|video| {
            video
                .width_with(|width| width.ideal(1280))
                .height_with(|height| height.ideal(720))
                .aspect_ratio_with(|aspect_ratio| aspect_ratio.ideal(1.5))
                .frame_rate_with(|frame_rate| frame_rate)
        })
        .build();

    assert_eq!(actual, expected);
}

#[test]
fn front_camera_and_microphone() {
    init_logger();

    let built = MediaStreamConstraints::builder()
        .audio(true)
        .video_with(|video| video.facing_mode(FacingMode::User))
        .build();
    let parsed = MediaStreamConstraints::from_json(
        r#"{ "audio": true, "video": { "facingMode": { "exact": "user" } } }"#,
    )
    .unwrap();

    assert_eq!(built, parsed);
    assert_eq!(
        serde_json::to_value(&built).unwrap(),
        serde_json::json!({
            "audio": true,
            "video": { "facingMode": { "exact": "user" } },
        })
    );
}

#[test]
fn specific_microphone_only() {
    init_logger();

    let built = MediaStreamConstraints::builder()
        .audio_with(|audio| {
            audio
                .device_id("3a9c7e")
                .auto_gain_control(false)
                .channel_count_with(|channel_count| channel_count.ideal(2))
        })
        .video(false)
        .build();

    assert_eq!(
        built,
        MediaStreamConstraints {
            audio: Some(AudioTrackConstraints {
                device_id: Some("3a9c7e".to_owned()),
                auto_gain_control: Some(Constrain::exact_only(false)),
                channel_count: Some(Constrain::ideal_only(2)),
                ..Default::default()
            }),
            video: None,
        }
    );

    let json = built.to_json().unwrap();
    assert_eq!(MediaStreamConstraints::from_json(&json).unwrap(), built);
}
