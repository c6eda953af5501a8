use askama::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Template)]
#[template(path = "notice.html")]
pub struct Notice<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub level: NoticeLevel,
}

impl Notice<'_> {
    pub fn color(&self) -> &'static str {
        match self.level {
            NoticeLevel::Info => "blue",
            NoticeLevel::Error => "red",
        }
    }
}
