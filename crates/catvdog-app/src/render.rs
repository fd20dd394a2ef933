//! Text rendering of the screen.

use catvdog_models::ScreenState;

pub fn render(state: &ScreenState) -> String {
    match state {
        ScreenState::Idle => "No image selected".to_string(),
        ScreenState::ImageSelected { image } => format!("Selected image: {}", image.display()),
        ScreenState::Submitting { image, .. } => format!("Classifying {}...", image.display()),
        ScreenState::Resolved { result, .. } => result.to_string(),
    }
}
