//! Keyframe library
//!
//! Themes opt into animations by name; only declared keyframes are emitted.

const FADE_IN: &str = "@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}";

const SLIDE_UP: &str = "@keyframes slide-up {
  from { opacity: 0; transform: translateY(16px); }
  to { opacity: 1; transform: translateY(0); }
}";

const FLOAT: &str = "@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-6px); }
}";

const PULSE: &str = "@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.6; }
}";

const GLITCH: &str = "@keyframes glitch {
  0% { transform: translate(0); }
  20% { transform: translate(-2px, 2px); }
  40% { transform: translate(-2px, -2px); }
  60% { transform: translate(2px, 2px); }
  80% { transform: translate(2px, -2px); }
  100% { transform: translate(0); }
}";

const BLINK: &str = "@keyframes blink {
  0%, 49% { opacity: 1; }
  50%, 100% { opacity: 0; }
}";

const GRADIENT_SHIFT: &str = "@keyframes gradient-shift {
  0% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
  100% { background-position: 0% 50%; }
}";

/// Names accepted in a theme's `animations` list
pub const NAMES: [&str; 7] = [
    "fade-in",
    "slide-up",
    "float",
    "pulse",
    "glitch",
    "blink",
    "gradient-shift",
];

/// Keyframe definition for a library animation
pub fn keyframes(name: &str) -> Option<&'static str> {
    match name {
        "fade-in" => Some(FADE_IN),
        "slide-up" => Some(SLIDE_UP),
        "float" => Some(FLOAT),
        "pulse" => Some(PULSE),
        "glitch" => Some(GLITCH),
        "blink" => Some(BLINK),
        "gradient-shift" => Some(GRADIENT_SHIFT),
        _ => None,
    }
}
