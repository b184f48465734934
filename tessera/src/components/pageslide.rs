use serde::{Deserialize, Serialize};

/// Width preset of the slide-over panel, applied through the
/// `data-pageslide-size` attribute.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PanelSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Full,
}

impl PanelSize {
    pub fn token(&self) -> &'static str {
        match self {
            PanelSize::Sm => "sm",
            PanelSize::Md => "md",
            PanelSize::Lg => "lg",
            PanelSize::Xl => "xl",
            PanelSize::Full => "full",
        }
    }
}

/// Content for one opening of the panel. Unset fields keep whatever the
/// panel currently shows; in particular an absent footer keeps the
/// skeleton's default footer.
#[derive(Debug, Clone, Default)]
pub struct PageslideOptions {
    pub title: Option<String>,
    pub content: Option<String>,
    pub footer: Option<String>,
    pub size: Option<PanelSize>,
}

impl PageslideOptions {
    pub fn new() -> Self {
        PageslideOptions::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn with_size(mut self, size: PanelSize) -> Self {
        self.size = Some(size);
        self
    }
}
