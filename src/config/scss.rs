//! Stylesheet variables prepended to every SCSS source.

/// Renders the SCSS prelude with the extension flag as a Sass boolean.
pub fn scss_data(is_chrome_extension: bool) -> String {
    format!(
        "\n    // @import \"src/assets/scss/vars\";\n\n    $IS_CHROME_EXTENSION: {};\n",
        if is_chrome_extension { "true" } else { "false" }
    )
}
