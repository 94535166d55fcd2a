use webrtc_media_constraints::{FacingMode, MediaStreamConstraints, ResizeMode};

fn main() {
    env_logger::init();

    // Build constraints for a back camera at 720p, preferably 30fps, with a microphone:
    let constraints = MediaStreamConstraints::builder()
        .audio_with(|audio| audio.echo_cancellation(true).noise_suppression(true))
        .video_with(|video| {
            video
                .facing_mode(FacingMode::Environment)
                .width(1280)
                .height(720)
                .frame_rate_with(|frame_rate| frame_rate.ideal(30.0))
                .resize_mode_with(|resize_mode| resize_mode.ideal(ResizeMode::None))
        })
        .build();

    // Serialize into the JSON accepted by `navigator.mediaDevices.getUserMedia()`:
    let json = match constraints.to_json() {
        Ok(json) => json,
        Err(err) => {
            eprintln!("failed to serialize constraints: {err}");
            std::process::exit(1);
        }
    };
    println!("{json}");

    // Constraints coming from elsewhere, with bare values meaning "ideal":
    let received = r#"{ "audio": true, "video": { "width": 640, "facingMode": "user" } }"#;
    match MediaStreamConstraints::from_json(received) {
        Ok(parsed) => println!("{parsed:#?}"),
        Err(err) => {
            eprintln!("failed to parse constraints: {err}");
            std::process::exit(1);
        }
    }
}
