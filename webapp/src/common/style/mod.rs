use constcat::concat;

mod components;
mod home;
mod variables;

use components::BASE_COMPONENTS;
use home::HOME_STYLES;
use variables::CSS_VARIABLES;

pub const PAGE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    HOME_STYLES
);
