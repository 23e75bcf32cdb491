use askama::Template;

use super::views::{OptionView, SectionView};

#[derive(Template)]
#[template(path = "pages/dashboard.html")]
pub struct DashboardTemplate {
    pub version: &'static str,
    pub theme_class: &'static str,
    pub search_text: String,
    pub language_options: Vec<OptionView>,
    pub sort_options: Vec<OptionView>,
    pub sections: Vec<SectionView>,
    /// Full-page reload delay for the refresh script, in milliseconds.
    pub refresh_ms: u128,
    pub refresh_label: String,
}

pub fn render_template<T: Template>(template: T) -> Result<String, askama::Error> {
    template.render()
}
