//! Main page rendering

use crate::catalog::Catalog;
use crate::error::{JewelError, Result};
use crate::prompts::persona::ASSISTANT_NAME;
use minijinja::{context, Environment};

const INDEX_TEMPLATE: &str = "index.html";

/// Renders the HTML pages served by the web server
///
/// Templates are compiled into the binary. The `.html` name enables
/// minijinja's HTML auto-escaping for every interpolated value.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Creates a renderer with the built-in templates
    ///
    /// # Errors
    ///
    /// Returns error if a built-in template fails to compile
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("../../templates/index.html"))
            .map_err(JewelError::from)?;
        Ok(Self { env })
    }

    /// Renders the main page listing tracks and prize categories
    pub fn render_index(&self, catalog: &Catalog) -> Result<String> {
        let template = self
            .env
            .get_template(INDEX_TEMPLATE)
            .map_err(JewelError::from)?;
        let html = template
            .render(context! {
                assistant_name => ASSISTANT_NAME,
                tracks => catalog.tracks(),
                prizes => catalog.prizes(),
            })
            .map_err(JewelError::from)?;
        Ok(html)
    }
}
