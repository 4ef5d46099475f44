//! tailwind.config.mjs template

use crate::error::ScaffoldError;
use crate::ui::UiLibrary;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File name of the styling config inside the generated project
pub const STYLING_CONFIG_FILE: &str = "tailwind.config.mjs";

/// Content globs scanned by the purge step
pub const CONTENT_GLOBS: [&str; 3] = [
    "./src/pages/**/*.{js,ts,jsx,tsx,mdx}",
    "./src/components/**/*.{js,ts,jsx,tsx,mdx}",
    "./src/app/**/*.{js,ts,jsx,tsx,mdx}",
];

const PLUGIN_SLOT: &str = "%UI_PLUGIN%";

const STYLING_CONFIG_TEMPLATE: &str = r#"
import withPurgeCss from 'next-purgecss';

/** @type {import('tailwindcss').Config} */
export default withPurgeCss({
  purge: {
    content: [
      "./src/pages/**/*.{js,ts,jsx,tsx,mdx}",
      "./src/components/**/*.{js,ts,jsx,tsx,mdx}",
      "./src/app/**/*.{js,ts,jsx,tsx,mdx}",
    ],
  },
  theme: {
    extend: {},
  },
  plugins: [%UI_PLUGIN%],
});
  "#;

/// Render the Tailwind config with the plugin fragment of `ui_library`
pub fn render_styling_config(ui_library: UiLibrary) -> String {
    STYLING_CONFIG_TEMPLATE.replace(PLUGIN_SLOT, ui_library.plugin())
}

/// Overwrite `tailwind.config.mjs` in `project_dir`, returning the written path
pub async fn write_styling_config(
    project_dir: &Path,
    ui_library: UiLibrary,
) -> Result<PathBuf, ScaffoldError> {
    let path = project_dir.join(STYLING_CONFIG_FILE);
    fs::write(&path, render_styling_config(ui_library)).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_list_per_library() {
        assert!(render_styling_config(UiLibrary::Shadcn).contains("plugins: [],"));
        assert!(render_styling_config(UiLibrary::FlowbiteReact).contains("plugins: [],"));
        assert!(render_styling_config(UiLibrary::DaisyUi).contains("plugins: [require('daisyui')],"));
        assert!(render_styling_config(UiLibrary::Flowbite)
            .contains("plugins: [require('flowbite/plugin')],"));
    }

    #[test]
    fn test_content_globs_do_not_depend_on_library() {
        for lib in UiLibrary::ALL {
            let rendered = render_styling_config(lib);
            for glob in CONTENT_GLOBS {
                assert!(rendered.contains(&format!("\"{}\",", glob)), "{} missing {}", lib, glob);
            }
            assert!(!rendered.contains(PLUGIN_SLOT));
            assert!(rendered.contains("import withPurgeCss from 'next-purgecss';"));
        }
    }

    #[tokio::test]
    async fn test_write_styling_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_styling_config(dir.path(), UiLibrary::Flowbite)
            .await
            .unwrap();

        assert_eq!(path, dir.path().join(STYLING_CONFIG_FILE));
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, render_styling_config(UiLibrary::Flowbite));
    }
}
