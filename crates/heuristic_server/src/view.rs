//! HTML page assembly.
//!
//! A [`Page`] is built fresh for every request and consumed when rendered.
//! Body content is a list of fragments appended in call order.

use std::fmt;

/// One block of page body content.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Fragment {
    Form {
        action: String,
        method: String,
        body: String,
    },
    Div {
        class: String,
        body: String,
    },
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Form {
                action,
                method,
                body,
            } => write!(
                f,
                r#"<form action="{}" method="{}">{}</form>"#,
                escape(action),
                escape(method),
                body
            ),
            Fragment::Div { class, body } => {
                write!(f, r#"<div class="{}">{}</div>"#, escape(class), body)
            }
        }
    }
}

/// An HTML page under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    title: String,
    style: String,
    body: Vec<Fragment>,
}

impl Page {
    /// Creates an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document title. The text is escaped.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the inline stylesheet.
    pub fn style(mut self, css: impl Into<String>) -> Self {
        self.style = css.into();
        self
    }

    /// Appends a form wrapping `body`, which is inserted as markup.
    pub fn form(
        mut self,
        action: impl Into<String>,
        method: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        self.body.push(Fragment::Form {
            action: action.into(),
            method: method.into(),
            body: body.into(),
        });
        self
    }

    /// Appends a div of class `class` wrapping `body`, inserted as markup.
    pub fn div(mut self, class: impl Into<String>, body: impl Into<String>) -> Self {
        self.body.push(Fragment::Div {
            class: class.into(),
            body: body.into(),
        });
        self
    }

    /// Renders the complete document.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<html>")?;
        writeln!(f, "  <head>")?;
        writeln!(f, "    <title>{}</title>", escape(&self.title))?;
        writeln!(f, "    <style>{}</style>", self.style)?;
        writeln!(f, "  </head>")?;
        writeln!(f, "  <body>")?;
        for fragment in &self.body {
            writeln!(f, "{}", fragment)?;
        }
        writeln!(f, "  </body>")?;
        write!(f, "</html>")
    }
}

/// Escapes text for use in HTML content and quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
