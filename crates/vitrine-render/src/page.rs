//! Page shell for shell-first streaming.

/// Head content for the storefront page.
#[derive(Debug, Clone)]
pub struct HeadContent {
    /// Page title.
    pub title: String,
    /// Meta tags as (name, content) pairs.
    pub meta: Vec<(String, String)>,
    /// Inline stylesheet blocks.
    pub styles: Vec<String>,
    /// Inline scripts in head.
    pub scripts: Vec<String>,
}

impl HeadContent {
    /// Create head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            meta: Vec::new(),
            styles: Vec::new(),
            scripts: Vec::new(),
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add an inline stylesheet block.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// Add an inline head script.
    pub fn with_script(mut self, js: &str) -> Self {
        self.scripts.push(js.to_string());
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::new();

        html.push_str(&format!("<title>{}</title>\n", self.title));

        for (name, content) in &self.meta {
            html.push_str(&format!(r#"<meta name="{}" content="{}">"#, name, content));
            html.push('\n');
        }

        for css in &self.styles {
            html.push_str(&format!("<style>{}</style>\n", css));
        }

        for js in &self.scripts {
            html.push_str(&format!("<script>{}</script>\n", js));
        }

        html
    }
}

/// Shell template wrapping the streamed page sections.
#[derive(Debug, Clone)]
pub struct PageShell {
    /// Head content.
    pub head: HeadContent,
    /// HTML before sections (opening body, wrapper elements).
    pub body_start: String,
    /// HTML after sections (closing tags).
    pub body_end: String,
}

impl PageShell {
    /// Create a shell with the default body wrappers.
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render the opening part of the shell (doctype through the body
    /// start, before any section).
    pub fn render_opening(&self) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);

        html
    }

    /// Render the closing part of the shell (after all sections).
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}
