use super::constants::{
    CAMERA_Z, INTRO_CAMERA_FROM_Z, INTRO_CAMERA_SEC, INTRO_REVEAL_LEAD_SEC,
    INTRO_REVEAL_OFFSET_PX, INTRO_REVEAL_SEC, INTRO_REVEAL_STAGGER_SEC,
};
use super::scene::SceneValues;
use super::tween::{Channel, Ease, Timeline, Transition};

/// Start delay of intro element `index`, relative to the camera move.
#[inline]
pub fn reveal_delay(index: usize) -> f32 {
    INTRO_REVEAL_LEAD_SEC + INTRO_REVEAL_STAGGER_SEC * index as f32
}

/// Queue the one-shot intro: the camera pulls in from afar while the
/// content elements drop into place one after another.
pub fn play(timeline: &mut Timeline, scene: &mut SceneValues, now: f64) {
    let camera = Transition::default()
        .with_duration(INTRO_CAMERA_SEC)
        .with_ease(Ease::ExpoOut);
    timeline.from_to(
        Channel::CameraZ,
        INTRO_CAMERA_FROM_Z,
        CAMERA_Z,
        camera,
        now,
        scene,
    );

    for index in 0..scene.reveals.len() {
        let reveal = Transition::default()
            .with_duration(INTRO_REVEAL_SEC)
            .with_ease(Ease::ExpoOut)
            .delayed(reveal_delay(index));
        timeline.from_to(
            Channel::RevealOffset(index),
            INTRO_REVEAL_OFFSET_PX,
            0.0,
            reveal,
            now,
            scene,
        );
        timeline.from_to(Channel::RevealAlpha(index), 0.0, 1.0, reveal, now, scene);
    }
}
