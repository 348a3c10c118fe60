//! Theme fixtures shared by unit tests

pub(crate) fn complete_theme_toml(id: &str) -> String {
    format!(
        r##"
id = "{id}"
name = "Test"
animations = ["fade-in"]

[fonts]
heading = "'Inter', sans-serif"
body = "'Inter', sans-serif"
mono = "monospace"

[font_sizes]
hero = "4rem"
h1 = "3rem"
h2 = "2rem"
h3 = "1.5rem"
body = "1rem"
small = "0.875rem"

[spacing]
xs = "4px"
sm = "8px"
md = "16px"
lg = "24px"
xl = "32px"
xxl = "48px"

[radius]
sm = "2px"
md = "4px"
lg = "8px"
full = "999px"

[shadows]
sm = "none"
md = "none"
lg = "none"
xl = "none"

[colors.light]
background = "#fff"
surface = "#fafafa"
surface_alt = "#f0f0f0"
border = "#ddd"
border_hover = "#bbb"
[colors.light.text]
primary = "#111"
secondary = "#444"
tertiary = "#777"

[colors.dark]
background = "#000"
surface = "#111"
surface_alt = "#181818"
border = "#333"
border_hover = "#555"
[colors.dark.text]
primary = "#eee"
secondary = "#bbb"
tertiary = "#888"
"##
    )
}
